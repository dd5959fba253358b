/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Host property updates → `StyleChanged`, `IntensityChanged`, `FallbackColorChanged`
/// - Config watcher task   → `ConfigReloaded`
/// - Settings portal task  → `ReduceTransparencyChanged`
/// - Timer subscription    → `Tick`
#[derive(Debug, Clone)]
pub enum Message {
    // ── Host property updates ─────────────────────────────────────────────────
    /// Blur style selected by name (unknown names resolve to the default).
    StyleChanged(String),
    /// Effect strength changed. Stored as-is; never validated here.
    IntensityChanged(f32),
    /// Reduced-transparency fallback color changed (hex string).
    FallbackColorChanged(String),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,

    // ── Accessibility ─────────────────────────────────────────────────────────
    /// The desktop's reduced-transparency preference flipped.
    ReduceTransparencyChanged(bool),

    // ── Internal ──────────────────────────────────────────────────────────────
    /// Frame timer tick — advances the demo scene.
    Tick,
    /// Graceful shutdown requested.
    Shutdown,
}
