//! Model-proc configuration module
//!
//! Builds a [`TransformDescriptor`](crate::image_pipeline::TransformDescriptor) from
//! the `input_preproc` section of a model-proc JSON file.

mod file;
pub mod params;


pub use file::{InputPreproc, ModelProc};
pub use params::{PaddingParams, PreprocParams};
