//! `params` object of an `input_preproc` entry

use serde::Deserialize;

use crate::image_pipeline::common::error::{PreprocError, Result};
use crate::image_pipeline::descriptor::{
    ColorSpace, Crop, DistribNormalization, Padding, Resize, TransformDescriptor, DEFAULT_FILL_VALUE,
    IMAGENET_MEAN, IMAGENET_STD,
};

/// Pre-processing parameters as written in model-proc
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreprocParams {
    /// `no`, `no-aspect-ratio` or `aspect-ratio`
    pub resize: Option<String>,
    /// `central`, `top_left`, `top_right`, `bottom_left` or `bottom_right`
    pub crop: Option<String>,
    pub color_space: Option<String>,
    /// `[min, max]`
    pub range: Option<Vec<f64>>,
    pub mean: Option<Vec<f64>>,
    pub std: Option<Vec<f64>>,
    pub padding: Option<PaddingParams>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaddingParams {
    /// Applies to both axes unless `stride_x`/`stride_y` are given
    pub stride: Option<usize>,
    pub stride_x: Option<usize>,
    pub stride_y: Option<usize>,
    pub fill_value: Option<Vec<f64>>,
}

fn exact<const N: usize>(field: &'static str, values: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(values).map_err(|_| PreprocError::InvalidValueCount {
        field,
        expected: N,
        found: values.len(),
    })
}

impl PaddingParams {
    pub fn to_padding(&self) -> Result<Padding> {
        let fill = match &self.fill_value {
            Some(values) => exact::<3>("fill_value", values)?,
            None => DEFAULT_FILL_VALUE,
        };
        let stride_x = self.stride_x.or(self.stride).unwrap_or(0);
        let stride_y = self.stride_y.or(self.stride).unwrap_or(0);

        Ok(Padding::with_strides(stride_x, stride_y).with_fill(fill))
    }
}

impl PreprocParams {
    pub fn to_descriptor(&self) -> Result<TransformDescriptor> {
        let mut builder = TransformDescriptor::builder();

        if let Some(resize) = &self.resize {
            builder = builder.resize(resize.parse::<Resize>()?);
        }
        if let Some(crop) = &self.crop {
            builder = builder.crop(crop.parse::<Crop>()?);
        }
        if let Some(color_space) = &self.color_space {
            builder = builder.color_space(color_space.parse::<ColorSpace>()?);
        }
        if let Some(range) = &self.range {
            let [min, max] = exact::<2>("range", range)?;
            builder = builder.range(min, max);
        }
        // A lone mean or std keeps the ImageNet value for the other half.
        if self.mean.is_some() || self.std.is_some() {
            let mean = match &self.mean {
                Some(values) => exact::<3>("mean", values)?,
                None => IMAGENET_MEAN,
            };
            let std = match &self.std {
                Some(values) => exact::<3>("std", values)?,
                None => IMAGENET_STD,
            };
            builder = builder.distrib_normalization(DistribNormalization::new(mean, std));
        }
        if let Some(padding) = &self.padding {
            builder = builder.padding(padding.to_padding()?);
        }

        Ok(builder.build())
    }
}
