//! Reduced-transparency preference observation.
//!
//! Linux desktops expose accessibility preferences through the XDG settings
//! portal (`org.freedesktop.portal.Settings`).  There is no dedicated
//! reduced-transparency key across desktops, so this reads the GNOME
//! interface namespace and treats disabled animations as the signal; the
//! `FROST_REDUCE_TRANSPARENCY` environment variable overrides both for
//! sessions without a portal.
//!
//! A missing portal is not an error — the flag simply stays `false` and the
//! surface keeps its translucent path.

use frost_core::{FrostError, Result};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Environment override: `1`/`true`/`yes` forces the fallback path,
/// `0`/`false`/`no` forces it off.
pub const ENV_OVERRIDE: &str = "FROST_REDUCE_TRANSPARENCY";

/// Portal poll interval in seconds.
const POLL_INTERVAL_SECS: u64 = 5;

/// Read the current reduced-transparency preference once.
pub async fn reduce_transparency() -> bool {
    if let Some(forced) = env_override() {
        return forced;
    }
    match read_portal().await {
        Ok(flag) => flag,
        Err(e) => {
            debug!("Settings portal unavailable: {e}");
            false
        }
    }
}

/// Spawn a poller that sends the initial preference immediately and every
/// change afterwards.
pub fn spawn_watcher() -> mpsc::Receiver<bool> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(watch_loop(tx));
    rx
}

/// Parse the environment override.  `None` when unset or unrecognised.
pub fn env_override() -> Option<bool> {
    parse_override(&std::env::var(ENV_OVERRIDE).ok()?)
}

fn parse_override(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

async fn watch_loop(tx: mpsc::Sender<bool>) {
    let mut current = reduce_transparency().await;
    if tx.send(current).await.is_err() {
        return;
    }

    loop {
        tokio::time::sleep(Duration::from_secs(POLL_INTERVAL_SECS)).await;
        let next = reduce_transparency().await;
        if next != current {
            info!("Reduced-transparency preference changed: {next}");
            current = next;
            if tx.send(next).await.is_err() {
                break; // receiver dropped
            }
        }
    }
}

async fn read_portal() -> Result<bool> {
    use zbus::zvariant::OwnedValue;

    let conn = zbus::Connection::session()
        .await
        .map_err(|e| FrostError::Portal(e.to_string()))?;

    let proxy = zbus::Proxy::new(
        &conn,
        "org.freedesktop.portal.Desktop",
        "/org/freedesktop/portal/desktop",
        "org.freedesktop.portal.Settings",
    )
    .await
    .map_err(|e| FrostError::Portal(e.to_string()))?;

    let value: OwnedValue = proxy
        .call("ReadOne", &("org.gnome.desktop.interface", "enable-animations"))
        .await
        .map_err(|e| FrostError::Portal(e.to_string()))?;

    // Animations disabled → prefer the flat fallback over translucency.
    let animations_enabled = bool::try_from(value).unwrap_or(true);
    Ok(!animations_enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_accepts_truthy_forms() {
        assert_eq!(parse_override("1"), Some(true));
        assert_eq!(parse_override("true"), Some(true));
        assert_eq!(parse_override(" yes "), Some(true));
    }

    #[test]
    fn override_accepts_falsy_forms() {
        assert_eq!(parse_override("0"), Some(false));
        assert_eq!(parse_override("false"), Some(false));
        assert_eq!(parse_override("no"), Some(false));
    }

    #[test]
    fn override_rejects_garbage() {
        assert_eq!(parse_override(""), None);
        assert_eq!(parse_override("maybe"), None);
    }
}
