//! Pure conversion core for the blur surface.
//!
//! Everything in this crate is synchronous and infallible: style names map
//! to effect descriptors, hex strings map to colors, pixel buffers map to
//! blurred pixel buffers.  No I/O, no logging.

pub mod blur;
pub mod color;
pub mod style;

pub use blur::Pixmap;
pub use color::Color;
pub use style::{BlurStyle, EffectDescriptor};
