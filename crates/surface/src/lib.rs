pub mod layer;

pub use layer::EffectLayer;

use frost_effect::{BlurStyle, Color, EffectDescriptor, Pixmap};
use iced::widget::{container, image, stack, Space};
use iced::{ContentFit, Element, Length};

/// A translucent backdrop surface.
///
/// Three host-settable properties — style name, intensity, fallback color —
/// drive one owned [`EffectLayer`].  Every setter is best-effort: unknown
/// style names and malformed colors degrade to documented defaults, nothing
/// returns an error.  When the desktop's reduced-transparency preference is
/// active, [`BlurSurface::view`] draws the flat fallback color instead of
/// the translucent effect.
#[derive(Debug, Clone)]
pub struct BlurSurface {
    style: BlurStyle,
    intensity: f32,
    fallback_color: Color,
    layer: Option<EffectLayer>,
    needs_redraw: bool,
}

impl Default for BlurSurface {
    fn default() -> Self {
        Self {
            style:          BlurStyle::Regular,
            intensity:      100.0,
            fallback_color: Color::WHITE,
            layer:          None,
            needs_redraw:   false,
        }
    }
}

impl BlurSurface {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Properties ────────────────────────────────────────────────────────────

    /// Set the blur style by name.  Unknown names fall back to `regular`.
    /// Returns the descriptor now in effect.
    pub fn set_style(&mut self, name: &str) -> EffectDescriptor {
        let style = BlurStyle::from_name(name);
        if style.name() != name {
            tracing::warn!("Unknown blur style '{name}'; using '{}'", style.name());
        }
        if style != self.style {
            self.style = style;
            self.refresh_layer();
        }
        self.descriptor()
    }

    /// Store the effect strength.  Any value is accepted and read back
    /// unchanged; normalisation happens inside descriptor derivation.
    pub fn set_intensity(&mut self, value: f32) {
        if value == self.intensity {
            return;
        }
        self.intensity = value;
        self.refresh_layer();
    }

    /// Set the reduced-transparency fallback color from a hex string.
    /// Malformed input degrades to fully transparent.
    pub fn set_fallback_color(&mut self, hex: &str) {
        let color = match Color::from_hex(hex) {
            Some(c) => c,
            None => {
                tracing::warn!("Unparseable fallback color '{hex}'; using transparent");
                Color::TRANSPARENT
            }
        };
        if color != self.fallback_color {
            self.fallback_color = color;
            self.needs_redraw = true;
        }
    }

    pub fn style(&self) -> BlurStyle {
        self.style
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn fallback_color(&self) -> Color {
        self.fallback_color
    }

    /// The descriptor for the current style/intensity pair.
    pub fn descriptor(&self) -> EffectDescriptor {
        EffectDescriptor::resolve(self.style, self.intensity)
    }

    // ── Effect layer lifetime ─────────────────────────────────────────────────

    /// Create the owned effect layer from a backdrop capture.  Replaces any
    /// existing layer.
    pub fn attach(&mut self, backdrop: &Pixmap) {
        match &mut self.layer {
            Some(layer) => layer.set_backdrop(backdrop),
            None => self.layer = Some(EffectLayer::new(backdrop, self.descriptor())),
        }
        self.needs_redraw = true;
    }

    /// Drop the effect layer.  The surface renders tint-only until the next
    /// [`BlurSurface::attach`].
    pub fn detach(&mut self) {
        self.layer = None;
        self.needs_redraw = true;
    }

    pub fn is_attached(&self) -> bool {
        self.layer.is_some()
    }

    pub fn layer(&self) -> Option<&EffectLayer> {
        self.layer.as_ref()
    }

    /// Consume the redraw request raised by the last property change.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn refresh_layer(&mut self) {
        let descriptor = self.descriptor();
        if let Some(layer) = &mut self.layer {
            layer.reconfigure(descriptor);
        }
        self.needs_redraw = true;
    }

    // ── View ──────────────────────────────────────────────────────────────────

    /// Render the surface.
    ///
    /// When `reduce_transparency` is set the translucent path is skipped
    /// entirely and the flat fallback color is drawn instead.  Without an
    /// attached layer the material tint alone is drawn.
    pub fn view<'a, Message: 'a>(&'a self, reduce_transparency: bool) -> Element<'a, Message> {
        if reduce_transparency {
            return fill(self.fallback_color.to_iced());
        }

        let tint = self.descriptor().tint;
        match &self.layer {
            Some(layer) => stack![
                image(layer.handle())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Fill),
                fill(tint.to_iced()),
            ]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            None => fill(tint.to_iced()),
        }
    }
}

/// A flat color filling the available space.
fn fill<'a, Message: 'a>(color: iced::Color) -> Element<'a, Message> {
    container(Space::new().width(Length::Fill).height(Length::Fill))
        .style(move |_theme| container::background(color))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backdrop() -> Pixmap {
        Pixmap::from_fn(16, 16, |x, y| Color::rgb((x * 16) as u8, (y * 16) as u8, 64))
    }

    #[test]
    fn defaults_match_component_contract() {
        let s = BlurSurface::new();
        assert_eq!(s.style(), BlurStyle::Regular);
        assert_eq!(s.intensity(), 100.0);
        assert_eq!(s.fallback_color(), Color::WHITE);
        assert!(!s.is_attached());
    }

    #[test]
    fn set_style_returns_resolved_descriptor() {
        let mut s = BlurSurface::new();
        let d = s.set_style("dark");
        assert_eq!(d, EffectDescriptor::resolve(BlurStyle::Dark, 100.0));
        assert_eq!(s.style(), BlurStyle::Dark);
    }

    #[test]
    fn unknown_style_uses_default() {
        let mut s = BlurSurface::new();
        let d = s.set_style("nonexistent");
        assert_eq!(s.style(), BlurStyle::Regular);
        assert_eq!(d, EffectDescriptor::resolve(BlurStyle::Regular, 100.0));
    }

    #[test]
    fn repeated_set_style_is_a_noop() {
        let mut s = BlurSurface::new();
        s.set_style("dark");
        s.take_redraw();
        s.set_style("dark");
        assert!(!s.take_redraw());
    }

    #[test]
    fn intensity_is_stored_unchanged() {
        let mut s = BlurSurface::new();
        for v in [0.0, 42.5, 100.0, 250.0, -3.0] {
            s.set_intensity(v);
            assert_eq!(s.intensity(), v);
        }
    }

    #[test]
    fn repeated_set_intensity_is_a_noop() {
        let mut s = BlurSurface::new();
        s.set_intensity(30.0);
        s.take_redraw();
        s.set_intensity(30.0);
        assert!(!s.take_redraw());
    }

    #[test]
    fn malformed_fallback_color_degrades_to_transparent() {
        let mut s = BlurSurface::new();
        s.set_fallback_color("not-a-color");
        assert_eq!(s.fallback_color(), Color::TRANSPARENT);
    }

    #[test]
    fn valid_fallback_color_is_parsed() {
        let mut s = BlurSurface::new();
        s.set_fallback_color("#00FF0080");
        assert_eq!(s.fallback_color(), Color::rgba(0, 255, 0, 128));
    }

    #[test]
    fn attach_creates_layer_and_detach_drops_it() {
        let mut s = BlurSurface::new();
        s.attach(&backdrop());
        assert!(s.is_attached());
        s.detach();
        assert!(!s.is_attached());
    }

    #[test]
    fn style_change_reconfigures_attached_layer() {
        let mut s = BlurSurface::new();
        s.attach(&backdrop());
        s.set_style("systemThickMaterial");
        let layer = s.layer().unwrap();
        assert_eq!(
            layer.descriptor(),
            EffectDescriptor::resolve(BlurStyle::ThickMaterial, 100.0)
        );
    }

    #[test]
    fn property_change_requests_redraw() {
        let mut s = BlurSurface::new();
        s.set_intensity(10.0);
        assert!(s.take_redraw());
        assert!(!s.take_redraw());
    }
}
