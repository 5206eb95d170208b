use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::descriptor::TransformDescriptor;
use crate::image_pipeline::model_proc::params::PreprocParams;

/// Model-proc document. Only the pre-processing section is read; anything else
/// (`output_postproc`, vendor keys) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelProc {
    pub json_schema_version: Option<String>,
    #[serde(default)]
    pub input_preproc: Vec<InputPreproc>,
}

/// One entry of `input_preproc`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputPreproc {
    pub layer_name: Option<String>,
    /// Input kind, `image` when absent
    pub format: Option<String>,
    #[serde(default)]
    pub params: PreprocParams,
}

impl InputPreproc {
    pub fn is_image(&self) -> bool {
        self.format
            .as_deref()
            .is_none_or(|format| format.eq_ignore_ascii_case("image"))
    }
}

impl ModelProc {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[instrument]
    pub fn from_file<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let model_proc = Self::from_json_str(&data)?;

        info!(
            version = model_proc.json_schema_version.as_deref().unwrap_or("unknown"),
            inputs = model_proc.input_preproc.len(),
            "Loaded model-proc"
        );
        Ok(model_proc)
    }

    /// First image input entry, if any.
    pub fn image_input(&self) -> Option<&InputPreproc> {
        self.input_preproc.iter().find(|input| input.is_image())
    }

    /// Descriptor for the image input. Without an image entry the descriptor is
    /// left undefined and frames pass through untouched.
    pub fn image_descriptor(&self) -> Result<TransformDescriptor> {
        let Some(input) = self.image_input() else {
            debug!("No image input in model-proc, using empty descriptor");
            return Ok(TransformDescriptor::default());
        };

        let desc = input.params.to_descriptor()?;
        debug!(
            layer = input.layer_name.as_deref().unwrap_or("<unnamed>"),
            resize = %desc.resize(),
            crop = %desc.crop(),
            color_space = %desc.target_color_space(),
            "Resolved input pre-processing"
        );
        Ok(desc)
    }
}
