//! Minimal example — launches the demo shell with all defaults.
//!
//! ```
//! cargo run --example minimal
//! ```

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    frost_shell::run().map_err(Into::into)
}
