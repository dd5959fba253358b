pub mod error;
pub mod event;
pub mod state;

pub use error::{FrostError, Result};
pub use event::Message;
pub use state::AppState;
