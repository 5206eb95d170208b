//! Image pre-processing contract
//!
//! This module describes how a source frame must be transformed before it is fed
//! to an inference engine, and records what was actually done so detections can
//! be mapped back onto the source frame. No pixels are touched here.

pub mod common;
pub mod descriptor;
pub mod model_proc;
pub mod outcome;
pub mod source;

pub use common::{
    PreprocError,
    Result,
};

pub use descriptor::{
    ColorSpace,
    Crop,
    DistribNormalization,
    Padding,
    RangeNormalization,
    Resize,
    TransformDescriptor,
    TransformDescriptorBuilder,
};

pub use model_proc::{
    ModelProc,
    PreprocParams,
};

pub use outcome::TransformOutcome;

pub use source::{
    FourCc,
    SourceColor,
    SourceImage,
};
