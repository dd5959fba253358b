use frost_effect::{EffectDescriptor, Pixmap};
use iced::widget::image;

/// Pixel cap for the blur working copy; captures are halved until they fit.
const MAX_SOURCE_PIXELS: u32 = 1024 * 1024;

/// Owned child of a [`BlurSurface`](crate::BlurSurface) that renders the
/// translucency itself.
///
/// Holds the downscaled backdrop capture, the descriptor the current blur
/// was produced with, and the resulting image handle.  Created when the
/// surface attaches to a backdrop, dropped on detach.
#[derive(Debug, Clone)]
pub struct EffectLayer {
    descriptor: EffectDescriptor,
    /// Working copy the blur is recomputed from.
    source: Pixmap,
    /// Scale applied while downscaling; radii are scaled to match.
    scale: f32,
    handle: image::Handle,
}

impl EffectLayer {
    pub fn new(backdrop: &Pixmap, descriptor: EffectDescriptor) -> Self {
        let (source, scale) = backdrop.downscale_to(MAX_SOURCE_PIXELS);
        let handle = render(&source, scale, descriptor);
        Self {
            descriptor,
            source,
            scale,
            handle,
        }
    }

    pub fn descriptor(&self) -> EffectDescriptor {
        self.descriptor
    }

    /// Handle for the blurred backdrop image.
    pub fn handle(&self) -> image::Handle {
        self.handle.clone()
    }

    /// Re-derive the blur for a new descriptor.  Returns whether anything
    /// changed.  The bitmap is only rebuilt when the radius moved; a tint
    /// change alone is applied at composite time.
    pub fn reconfigure(&mut self, descriptor: EffectDescriptor) -> bool {
        if descriptor == self.descriptor {
            return false;
        }
        if descriptor.blur_radius != self.descriptor.blur_radius {
            self.handle = render(&self.source, self.scale, descriptor);
        }
        self.descriptor = descriptor;
        true
    }

    /// Replace the backdrop capture (resize, scene change).
    pub fn set_backdrop(&mut self, backdrop: &Pixmap) {
        let (source, scale) = backdrop.downscale_to(MAX_SOURCE_PIXELS);
        self.source = source;
        self.scale = scale;
        self.handle = render(&self.source, self.scale, self.descriptor);
    }
}

/// Blur the working copy at the descriptor's radius (scaled to the working
/// resolution) and pack it into an image handle.
fn render(source: &Pixmap, scale: f32, descriptor: EffectDescriptor) -> image::Handle {
    let blurred = source.box_blur(descriptor.blur_radius * scale);
    image::Handle::from_rgba(blurred.width(), blurred.height(), blurred.into_rgba())
}

#[cfg(test)]
mod tests {
    use super::*;
    use frost_effect::{BlurStyle, Color};

    fn backdrop() -> Pixmap {
        Pixmap::from_fn(32, 32, |x, y| Color::rgb((x * 8) as u8, (y * 8) as u8, 128))
    }

    #[test]
    fn reconfigure_same_descriptor_is_noop() {
        let d = EffectDescriptor::resolve(BlurStyle::Regular, 100.0);
        let mut layer = EffectLayer::new(&backdrop(), d);
        assert!(!layer.reconfigure(d));
    }

    #[test]
    fn reconfigure_updates_descriptor() {
        let mut layer =
            EffectLayer::new(&backdrop(), EffectDescriptor::resolve(BlurStyle::Regular, 100.0));
        let dark = EffectDescriptor::resolve(BlurStyle::Dark, 100.0);
        assert!(layer.reconfigure(dark));
        assert_eq!(layer.descriptor(), dark);
    }

    #[test]
    fn small_backdrop_is_not_downscaled() {
        let layer =
            EffectLayer::new(&backdrop(), EffectDescriptor::resolve(BlurStyle::Regular, 100.0));
        assert_eq!(layer.scale, 1.0);
        assert_eq!(layer.source.width(), 32);
    }

    #[test]
    fn oversized_backdrop_is_downscaled() {
        let big = Pixmap::filled(2048, 1024, Color::WHITE);
        let layer = EffectLayer::new(&big, EffectDescriptor::resolve(BlurStyle::Light, 100.0));
        assert!(layer.source.width() as u64 * layer.source.height() as u64 <= MAX_SOURCE_PIXELS as u64);
        assert!(layer.scale < 1.0);
    }
}
