//! Demo shell hosting a [`BlurSurface`] over a generated scene.
//!
//! Owns the Iced application loop and wires together all background tasks:
//! - Config file watcher (live property reload)
//! - Settings-portal poller (reduced-transparency flag)
//! - Frame timer (scene animation, when enabled)
//! - Keyboard controls (style/intensity/fallback demo plumbing)

use frost_config::{default_path, load as load_config, ConfigWatcher, FrostConfig, SurfaceConfig};
use frost_core::{event::Message as AppMessage, state::AppState};
use frost_effect::{BlurStyle, Color, Pixmap};
use frost_surface::BlurSurface;
use futures::channel::mpsc::Sender;
use iced::widget::{column, container, image, stack, text};
use iced::{Alignment, ContentFit, Element, Length, Subscription, Task};
use std::time::Duration;
use tracing::{info, warn};

/// Scene animation frame interval (milliseconds).
const FRAME_INTERVAL_MS: u64 = 100;

/// Generated backdrop resolution.  The image is stretched to the window, so
/// this stays fixed regardless of window size.
const SCENE_WIDTH: u32 = 640;
const SCENE_HEIGHT: u32 = 400;

/// Glass panel size in logical pixels.
const PANEL_WIDTH: f32 = 420.0;
const PANEL_HEIGHT: f32 = 240.0;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Start the demo shell.  Blocks until the window closes.
pub fn run() -> iced::Result {
    let config = load_config(default_path()).unwrap_or_default();
    let size = iced::Size::new(config.window.width as f32, config.window.height as f32);

    iced::application(Shell::new, Shell::update, Shell::view)
        .title(Shell::title)
        .subscription(Shell::subscription)
        .style(Shell::style)
        .window_size(size)
        .run()
}

// ── Message ───────────────────────────────────────────────────────────────────

/// Top-level application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Propagate a core event-bus message.
    App(AppMessage),
    /// Frame timer tick — advances the scene.
    Tick,
    /// Cycle the blur style by `n` steps (keyboard control).
    CycleStyle(isize),
    /// Nudge the intensity (keyboard control).
    AdjustIntensity(f32),
    /// Toggle the reduced-transparency flag locally (keyboard control).
    ToggleReducedTransparency,
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Shell {
    state:   AppState,
    config:  FrostConfig,
    scene:   Scene,
    surface: BlurSurface,
}

impl Shell {
    fn new() -> (Self, Task<Message>) {
        let config = load_config(default_path()).unwrap_or_default();
        let scene = Scene::new(&config);

        let mut shell = Self {
            state:   AppState::default(),
            config,
            scene,
            surface: BlurSurface::new(),
        };

        let surface_cfg = shell.config.surface.clone();
        shell.apply_surface_config(&surface_cfg);
        shell.recapture();

        (shell, Task::none())
    }

    fn title(&self) -> String {
        self.config.window.title.clone()
    }

    /// Push the `[surface]` config section through the component's setters.
    /// Every field is best-effort; a bad value degrades, never fails.
    fn apply_surface_config(&mut self, cfg: &SurfaceConfig) {
        self.surface.set_style(&cfg.style);
        self.surface.set_intensity(cfg.intensity);
        self.surface.set_fallback_color(&cfg.fallback_color);
    }

    /// Re-capture the scene region behind the glass panel and hand it to the
    /// surface as its backdrop.
    fn recapture(&mut self) {
        let capture = self.capture_behind();
        self.surface.attach(&capture);
    }

    /// Extract the part of the scene the panel sits over, in scene pixels.
    fn capture_behind(&self) -> Pixmap {
        let ww = self.config.window.width.max(1) as f32;
        let wh = self.config.window.height.max(1) as f32;

        let cw = ((PANEL_WIDTH / ww) * SCENE_WIDTH as f32).round() as u32;
        let ch = ((PANEL_HEIGHT / wh) * SCENE_HEIGHT as f32).round() as u32;
        let cw = cw.clamp(1, SCENE_WIDTH);
        let ch = ch.clamp(1, SCENE_HEIGHT);

        let x = (SCENE_WIDTH - cw) / 2;
        let y = (SCENE_HEIGHT - ch) / 2;

        self.scene
            .pixmap()
            .crop(x, y, cw, ch)
            .unwrap_or_else(|| self.scene.pixmap().clone())
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.state.frame += 1;
                if self.config.scene.animate {
                    self.scene.advance(self.state.frame);
                    self.recapture();
                }
                Task::none()
            }
            Message::CycleStyle(step) => {
                let next = cycle_style(self.surface.style(), step);
                self.handle_app(AppMessage::StyleChanged(next.name().to_string()))
            }
            Message::AdjustIntensity(delta) => {
                let next = (self.surface.intensity() + delta).clamp(0.0, 100.0);
                self.handle_app(AppMessage::IntensityChanged(next))
            }
            Message::ToggleReducedTransparency => {
                let flag = !self.state.reduce_transparency;
                self.handle_app(AppMessage::ReduceTransparencyChanged(flag))
            }
            Message::App(msg) => self.handle_app(msg),
        }
    }

    fn handle_app(&mut self, msg: AppMessage) -> Task<Message> {
        match msg {
            AppMessage::StyleChanged(name) => {
                self.surface.set_style(&name);
            }
            AppMessage::IntensityChanged(value) => {
                self.surface.set_intensity(value);
            }
            AppMessage::FallbackColorChanged(hex) => {
                self.surface.set_fallback_color(&hex);
            }
            AppMessage::ReduceTransparencyChanged(flag) => {
                self.state.reduce_transparency = flag;
            }
            AppMessage::ConfigReloaded => {
                match load_config(default_path()) {
                    Ok(cfg) => {
                        info!("Config reloaded");
                        self.apply_surface_config(&cfg.surface);
                        self.scene = Scene::new(&cfg);
                        self.config = cfg;
                        self.recapture();
                    }
                    Err(e) => warn!("Config reload failed: {e}"),
                }
            }
            AppMessage::Tick | AppMessage::Shutdown => {}
        }
        Task::none()
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let backdrop = image(self.scene.handle())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Fill);

        let caption = column![
            text(self.surface.style().name()).size(22),
            text(format!("intensity {:.0}", self.surface.intensity())).size(13),
            text("←/→ style   ↑/↓ intensity   t fallback").size(11),
        ]
        .spacing(4)
        .align_x(Alignment::Center);

        let glass = container(stack![
            self.surface.view::<Message>(self.state.reduce_transparency),
            container(caption).center(Length::Fill),
        ])
        .width(Length::Fixed(PANEL_WIDTH))
        .height(Length::Fixed(PANEL_HEIGHT));

        stack![backdrop, container(glass).center(Length::Fill)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![
            Subscription::run(config_stream),
            Subscription::run(portal_stream),
            keyboard_controls(),
        ];

        if self.config.scene.animate {
            subs.push(
                iced::time::every(Duration::from_millis(FRAME_INTERVAL_MS))
                    .map(|_| Message::Tick),
            );
        }

        Subscription::batch(subs)
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.scene.bottom.to_iced(),
            text_color: Color::WHITE.to_iced(),
        }
    }
}

/// Step through [`BlurStyle::ALL`], wrapping at both ends.
fn cycle_style(current: BlurStyle, step: isize) -> BlurStyle {
    let styles = BlurStyle::ALL;
    let len = styles.len() as isize;
    let index = styles.iter().position(|s| *s == current).unwrap_or(0) as isize;
    styles[((index + step).rem_euclid(len)) as usize]
}

// ── Subscription streams ──────────────────────────────────────────────────────
//
// Each free function acts as both the stream builder AND the unique identity
// key for `Subscription::run(fn_ptr)`.  Iced uses the function pointer address
// to deduplicate subscriptions across redraws.

/// Watches the config file for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::App(AppMessage::ConfigReloaded));
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

/// Polls the settings portal and forwards reduced-transparency changes.
fn portal_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let mut rx = frost_portal::spawn_watcher();

        while let Some(flag) = rx.recv().await {
            let _ = sender.try_send(Message::App(AppMessage::ReduceTransparencyChanged(flag)));
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

/// Arrow keys drive style and intensity; `t` toggles the fallback path.
fn keyboard_controls() -> Subscription<Message> {
    iced::keyboard::listen().filter_map(|event| {
        use iced::keyboard::key::Named;
        use iced::keyboard::{Event, Key};

        let Event::KeyPressed { key, .. } = event else {
            return None;
        };

        match key.as_ref() {
            Key::Named(Named::ArrowRight) => Some(Message::CycleStyle(1)),
            Key::Named(Named::ArrowLeft) => Some(Message::CycleStyle(-1)),
            Key::Named(Named::ArrowUp) => Some(Message::AdjustIntensity(5.0)),
            Key::Named(Named::ArrowDown) => Some(Message::AdjustIntensity(-5.0)),
            Key::Character("t") => Some(Message::ToggleReducedTransparency),
            _ => None,
        }
    })
}

// ── Scene ─────────────────────────────────────────────────────────────────────

/// Generated demo backdrop: a vertical gradient with sliding diagonal
/// highlight bands, so the blur has visible structure to dissolve.
struct Scene {
    top:    Color,
    bottom: Color,
    pixmap: Pixmap,
    handle: image::Handle,
}

impl Scene {
    fn new(config: &FrostConfig) -> Self {
        let cfg = &config.scene;
        let top = Color::from_hex(&cfg.backdrop_top).unwrap_or(Color::rgb(0x89, 0xb4, 0xfa));
        let bottom = Color::from_hex(&cfg.backdrop_bottom).unwrap_or(Color::rgb(0x1e, 0x1e, 0x2e));

        let pixmap = render_scene(top, bottom, 0);
        let handle = to_handle(&pixmap);
        Self {
            top,
            bottom,
            pixmap,
            handle,
        }
    }

    fn advance(&mut self, frame: u64) {
        self.pixmap = render_scene(self.top, self.bottom, frame);
        self.handle = to_handle(&self.pixmap);
    }

    fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    fn handle(&self) -> image::Handle {
        self.handle.clone()
    }
}

fn render_scene(top: Color, bottom: Color, frame: u64) -> Pixmap {
    let phase = (frame % 128) as f32 / 128.0;
    Pixmap::from_fn(SCENE_WIDTH, SCENE_HEIGHT, |x, y| {
        let ty = y as f32 / (SCENE_HEIGHT - 1) as f32;
        let base = top.lerp(bottom, ty);

        let band = ((x + y) as f32 / 24.0 + phase * std::f32::consts::TAU).sin();
        if band > 0.55 {
            base.lerp(Color::WHITE, 0.25)
        } else {
            base
        }
    })
}

fn to_handle(pixmap: &Pixmap) -> image::Handle {
    image::Handle::from_rgba(pixmap.width(), pixmap.height(), pixmap.data().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_style_wraps_forward() {
        let last = *BlurStyle::ALL.last().unwrap();
        assert_eq!(cycle_style(last, 1), BlurStyle::ALL[0]);
    }

    #[test]
    fn cycle_style_wraps_backward() {
        let first = BlurStyle::ALL[0];
        assert_eq!(cycle_style(first, -1), *BlurStyle::ALL.last().unwrap());
    }

    #[test]
    fn scene_matches_declared_resolution() {
        let scene = Scene::new(&FrostConfig::default());
        assert_eq!(scene.pixmap().width(), SCENE_WIDTH);
        assert_eq!(scene.pixmap().height(), SCENE_HEIGHT);
    }

    #[test]
    fn scene_gradient_spans_configured_colors() {
        let p = render_scene(Color::rgb(200, 0, 0), Color::rgb(0, 0, 200), 0);
        // Gradient endpoints dominate the respective rows (bands may lighten).
        assert!(p.pixel(0, 0).r >= 200);
        assert!(p.pixel(0, SCENE_HEIGHT - 1).b >= 200);
    }
}
