use thiserror::Error;

/// Top-level error type used across the entire application.
///
/// Surface property updates never produce one of these — bad style names and
/// malformed colors degrade to defaults instead. The variants cover the
/// fallible edges around the component: config file I/O and the D-Bus
/// settings portal.
#[derive(Debug, Error)]
pub enum FrostError {
    #[error("config error: {0}")]
    Config(String),

    #[error("settings portal error: {0}")]
    Portal(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = FrostError> = std::result::Result<T, E>;
