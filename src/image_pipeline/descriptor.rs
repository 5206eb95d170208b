//! Input layer descriptor module
//!
//! Declares how a source frame is resized, cropped, color converted, normalized
//! and padded before it reaches a model's input layer.

mod layer_desc;
mod normalization;
pub mod types;


pub use layer_desc::{TransformDescriptor, TransformDescriptorBuilder};
pub use normalization::{
    DistribNormalization, Padding, RangeNormalization, DEFAULT_FILL_VALUE, DEFAULT_RANGE,
    IMAGENET_MEAN, IMAGENET_STD,
};
pub use types::{ColorSpace, Crop, Resize};
