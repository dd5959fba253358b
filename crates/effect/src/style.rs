use crate::color::Color;

/// The closed set of blur styles the surface understands.
///
/// The names mirror the material families of the platform effect this
/// component emulates, from the near-clear ultra-thin material up to the
/// heavy chrome material.  Unknown names resolve to [`BlurStyle::Regular`],
/// the component default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurStyle {
    Light,
    ExtraLight,
    Dark,
    #[default]
    Regular,
    Prominent,
    UltraThinMaterial,
    ThinMaterial,
    Material,
    ThickMaterial,
    ChromeMaterial,
}

impl BlurStyle {
    pub const ALL: [BlurStyle; 10] = [
        Self::Light,
        Self::ExtraLight,
        Self::Dark,
        Self::Regular,
        Self::Prominent,
        Self::UltraThinMaterial,
        Self::ThinMaterial,
        Self::Material,
        Self::ThickMaterial,
        Self::ChromeMaterial,
    ];

    /// Look up a style by its configuration name.
    ///
    /// The set is closed and names match verbatim (no case folding).
    /// Unrecognized names fall back to [`BlurStyle::Regular`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "light"                   => Self::Light,
            "extraLight"              => Self::ExtraLight,
            "dark"                    => Self::Dark,
            "regular"                 => Self::Regular,
            "prominent"               => Self::Prominent,
            "systemUltraThinMaterial" => Self::UltraThinMaterial,
            "systemThinMaterial"      => Self::ThinMaterial,
            "systemMaterial"          => Self::Material,
            "systemThickMaterial"     => Self::ThickMaterial,
            "systemChromeMaterial"    => Self::ChromeMaterial,
            _                         => Self::Regular,
        }
    }

    /// The configuration name for this style.  Round-trips with
    /// [`BlurStyle::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Light             => "light",
            Self::ExtraLight        => "extraLight",
            Self::Dark              => "dark",
            Self::Regular           => "regular",
            Self::Prominent         => "prominent",
            Self::UltraThinMaterial => "systemUltraThinMaterial",
            Self::ThinMaterial      => "systemThinMaterial",
            Self::Material          => "systemMaterial",
            Self::ThickMaterial     => "systemThickMaterial",
            Self::ChromeMaterial    => "systemChromeMaterial",
        }
    }

    /// Radius factor, tint RGB, and tint base alpha for this style.
    ///
    /// At full intensity the blur radius is the factor itself and the tint
    /// alpha is the base alpha; both scale linearly down to zero.
    fn parameters(self) -> (f32, [u8; 3], f32) {
        match self {
            Self::Light             => (8.0,  [255, 255, 255], 0.70),
            Self::ExtraLight        => (6.0,  [255, 255, 255], 0.85),
            Self::Dark              => (10.0, [20, 20, 20],    0.70),
            Self::Regular           => (8.0,  [255, 255, 255], 0.40),
            Self::Prominent         => (12.0, [240, 240, 240], 0.50),
            Self::UltraThinMaterial => (4.0,  [250, 250, 250], 0.20),
            Self::ThinMaterial      => (6.0,  [245, 245, 245], 0.35),
            Self::Material          => (8.0,  [240, 240, 240], 0.50),
            Self::ThickMaterial     => (12.0, [235, 235, 235], 0.65),
            Self::ChromeMaterial    => (10.0, [248, 248, 248], 0.80),
        }
    }
}

/// Concrete rendering parameters derived from a style + intensity pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectDescriptor {
    /// Backdrop blur radius in logical pixels.
    pub blur_radius: f32,
    /// Material tint composited over the blurred backdrop.
    pub tint: Color,
}

impl EffectDescriptor {
    /// Radius bounds applied during derivation.  The intensity *property*
    /// is never clamped; only this derived value is.
    pub const MIN_RADIUS: f32 = 0.1;
    pub const MAX_RADIUS: f32 = 25.0;

    /// Derive the rendering parameters for `style` at `intensity`
    /// (nominally 0–100; out-of-range values are normalised here).
    pub fn resolve(style: BlurStyle, intensity: f32) -> Self {
        let t = intensity.clamp(0.0, 100.0) / 100.0;
        let (factor, [r, g, b], base_alpha) = style.parameters();

        let blur_radius = (t * factor).clamp(Self::MIN_RADIUS, Self::MAX_RADIUS);
        let alpha = (base_alpha * t * 255.0).round() as u8;

        Self {
            blur_radius,
            tint: Color::rgba(r, g, b, alpha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_round_trips() {
        for style in BlurStyle::ALL {
            assert_eq!(BlurStyle::from_name(style.name()), style);
        }
    }

    #[test]
    fn unknown_name_falls_back_to_regular() {
        assert_eq!(BlurStyle::from_name("nonexistent"), BlurStyle::Regular);
        assert_eq!(BlurStyle::from_name(""), BlurStyle::Regular);
        // Matching is exact — no case folding.
        assert_eq!(BlurStyle::from_name("Dark"), BlurStyle::Regular);
    }

    #[test]
    fn resolve_is_deterministic() {
        for style in BlurStyle::ALL {
            assert_eq!(
                EffectDescriptor::resolve(style, 65.0),
                EffectDescriptor::resolve(style, 65.0)
            );
        }
    }

    #[test]
    fn dark_at_full_intensity() {
        let d = EffectDescriptor::resolve(BlurStyle::Dark, 100.0);
        assert_eq!(d.blur_radius, 10.0);
        // 0.70 * 255 in f32 lands just under 178.5.
        assert_eq!(d.tint, Color::rgba(20, 20, 20, 178));
    }

    #[test]
    fn regular_at_half_intensity() {
        let d = EffectDescriptor::resolve(BlurStyle::Regular, 50.0);
        assert_eq!(d.blur_radius, 4.0);
        assert_eq!(d.tint.a, 51); // 0.40 * 0.5 * 255
    }

    #[test]
    fn zero_intensity_keeps_minimum_radius() {
        let d = EffectDescriptor::resolve(BlurStyle::Light, 0.0);
        assert_eq!(d.blur_radius, EffectDescriptor::MIN_RADIUS);
        assert_eq!(d.tint.a, 0);
    }

    #[test]
    fn out_of_range_intensity_is_normalised() {
        let over = EffectDescriptor::resolve(BlurStyle::Prominent, 400.0);
        assert_eq!(over, EffectDescriptor::resolve(BlurStyle::Prominent, 100.0));

        let under = EffectDescriptor::resolve(BlurStyle::Prominent, -10.0);
        assert_eq!(under, EffectDescriptor::resolve(BlurStyle::Prominent, 0.0));
    }

    #[test]
    fn radius_never_exceeds_cap() {
        for style in BlurStyle::ALL {
            let d = EffectDescriptor::resolve(style, 100.0);
            assert!(d.blur_radius <= EffectDescriptor::MAX_RADIUS);
            assert!(d.blur_radius >= EffectDescriptor::MIN_RADIUS);
        }
    }
}
