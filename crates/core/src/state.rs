/// Central application state — the view path reads from this snapshot.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Whether the desktop's reduced-transparency preference is active.
    /// While set, surfaces substitute their flat fallback color for the
    /// translucent effect.
    pub reduce_transparency: bool,
    /// Frame counter driving the demo scene animation.
    pub frame: u64,
}
