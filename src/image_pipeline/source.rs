//! Source image module
//!
//! Describes the frame handed over by the buffer-mapping layer: its pixel format
//! code and geometry. Only the color layout is consulted by the descriptor.

mod color;
pub mod types;


pub use color::SourceColor;
pub use types::{FourCc, SourceImage, MAX_PLANES};
