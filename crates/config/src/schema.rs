use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `frost.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FrostConfig {
    /// Demo shell window settings.
    pub window: WindowConfig,
    /// Blur surface properties applied on startup and on live reload.
    pub surface: SurfaceConfig,
    /// Generated backdrop scene settings.
    pub scene: SceneConfig,
}

/// Demo shell window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 600,
            title: "frost".to_string(),
        }
    }
}

/// Blur surface properties.  Mirrors the component's public setters; every
/// field degrades to a documented default rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Blur style name, one of the closed style set (e.g. `"regular"`,
    /// `"dark"`, `"systemThinMaterial"`).  Unknown names resolve to
    /// `"regular"`.
    pub style: String,
    /// Effect strength, nominally 0–100.  Stored as-is; the effect layer
    /// normalises and clamps during parameter derivation.
    pub intensity: f32,
    /// Flat color substituted when reduced transparency is active
    /// (hex, e.g. `"#FFFFFF"` or `"#FFFFFF80"`).
    pub fallback_color: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            style:          "regular".to_string(),
            intensity:      100.0,
            fallback_color: "#FFFFFF".to_string(),
        }
    }
}

/// Generated backdrop scene settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Gradient start color at the top of the backdrop (hex).
    pub backdrop_top: String,
    /// Gradient end color at the bottom of the backdrop (hex).
    pub backdrop_bottom: String,
    /// Animate the backdrop so the blur has moving structure behind it.
    pub animate: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            backdrop_top:    "#89b4fa".to_string(), // Catppuccin Mocha — blue
            backdrop_bottom: "#1e1e2e".to_string(), // Catppuccin Mocha — base
            animate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: FrostConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.surface.style, "regular");
        assert_eq!(cfg.surface.intensity, 100.0);
        assert_eq!(cfg.surface.fallback_color, "#FFFFFF");
        assert_eq!(cfg.window.width, 960);
    }

    #[test]
    fn surface_section_parses() {
        let cfg: FrostConfig = toml::from_str(
            r##"
            [surface]
            style = "dark"
            intensity = 42.5
            fallback_color = "#1e1e2e"
            "##,
        )
        .unwrap();
        assert_eq!(cfg.surface.style, "dark");
        assert_eq!(cfg.surface.intensity, 42.5);
        assert_eq!(cfg.surface.fallback_color, "#1e1e2e");
    }

    #[test]
    fn partial_surface_section_keeps_defaults() {
        let cfg: FrostConfig = toml::from_str("[surface]\nstyle = \"prominent\"\n").unwrap();
        assert_eq!(cfg.surface.style, "prominent");
        assert_eq!(cfg.surface.intensity, 100.0);
    }

    #[test]
    fn non_numeric_intensity_is_rejected() {
        let result: Result<FrostConfig, _> = toml::from_str("[surface]\nintensity = \"high\"\n");
        assert!(result.is_err());
    }
}
