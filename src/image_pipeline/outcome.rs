//! Transformation outcome module
//!
//! Per-frame record of the stages that actually ran, consumed when mapping
//! model-space coordinates back onto the source frame.

mod transform_outcome;

#[cfg(test)]
mod tests;

pub use transform_outcome::TransformOutcome;
