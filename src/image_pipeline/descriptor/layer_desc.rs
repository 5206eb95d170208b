use tracing::debug;

use crate::image_pipeline::descriptor::normalization::{DistribNormalization, Padding, RangeNormalization};
use crate::image_pipeline::descriptor::types::{ColorSpace, Crop, Resize};
use crate::image_pipeline::source::SourceColor;

/// How a source frame must be transformed to fit a model's input layer.
///
/// Built once per model input through [`TransformDescriptorBuilder`] and read-only
/// afterwards, so it can be shared freely between frame-processing threads.
/// Every query is a pure function of the descriptor (and the source color, for
/// [`needs_color_conversion`](Self::needs_color_conversion)).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformDescriptor {
    resize: Resize,
    crop: Crop,
    color_space: ColorSpace,
    range_norm: Option<RangeNormalization>,
    distrib_norm: Option<DistribNormalization>,
    padding: Option<Padding>,
}

impl TransformDescriptor {
    pub fn builder() -> TransformDescriptorBuilder {
        TransformDescriptorBuilder::default()
    }

    /// Geometry and color only, no normalization or padding.
    pub fn new(resize: Resize, crop: Crop, color_space: ColorSpace) -> Self {
        Self::builder()
            .resize(resize)
            .crop(crop)
            .color_space(color_space)
            .build()
    }

    /// True if the layer size is reached through a resize or a crop.
    pub fn is_geometry_transform_defined(&self) -> bool {
        self.resize != Resize::None || self.crop != Crop::None
    }

    /// True if any geometry, color or normalization transform is configured.
    ///
    /// Padding alone does not count.
    pub fn is_defined(&self) -> bool {
        self.is_geometry_transform_defined()
            || self.color_space != ColorSpace::None
            || self.range_norm.is_some()
            || self.distrib_norm.is_some()
    }

    pub fn needs_resize(&self) -> bool {
        self.resize != Resize::None
    }

    pub fn resize(&self) -> Resize {
        self.resize
    }

    /// A stretching resize already maps the whole frame onto the layer, so any
    /// configured crop is skipped.
    pub fn needs_crop(&self) -> bool {
        self.crop != Crop::None && self.resize != Resize::StretchNoAspectRatio
    }

    pub fn crop(&self) -> Crop {
        self.crop
    }

    /// Whether the source must go through the color conversion kernel.
    ///
    /// Accepts a [`ColorSpace`], a [`FourCc`](crate::image_pipeline::FourCc), a
    /// [`SourceImage`](crate::image_pipeline::SourceImage) reference, or a
    /// [`SourceColor`] built from a raw format code. Always false without a target.
    pub fn needs_color_conversion(&self, source: impl Into<SourceColor>) -> bool {
        self.color_space != ColorSpace::None && !source.into().matches(self.color_space)
    }

    pub fn target_color_space(&self) -> ColorSpace {
        self.color_space
    }

    pub fn needs_range_normalization(&self) -> bool {
        self.range_norm.is_some()
    }

    /// The configured range, or the `[0, 1]` default when none was supplied.
    pub fn range_normalization(&self) -> RangeNormalization {
        self.range_norm.unwrap_or_default()
    }

    pub fn needs_distrib_normalization(&self) -> bool {
        self.distrib_norm.is_some()
    }

    /// The configured statistics, or the ImageNet defaults when none were supplied.
    pub fn distrib_normalization(&self) -> DistribNormalization {
        self.distrib_norm.unwrap_or_default()
    }

    pub fn needs_padding(&self) -> bool {
        self.padding.is_some()
    }

    /// The configured padding, or zero strides with black fill when none was supplied.
    pub fn padding(&self) -> Padding {
        self.padding.unwrap_or_default()
    }
}

/// Builder for TransformDescriptor
#[derive(Debug, Default)]
pub struct TransformDescriptorBuilder {
    resize: Option<Resize>,
    crop: Option<Crop>,
    color_space: Option<ColorSpace>,
    range_norm: Option<RangeNormalization>,
    distrib_norm: Option<DistribNormalization>,
    padding: Option<Padding>,
}

impl TransformDescriptorBuilder {
    pub fn resize(mut self, resize: Resize) -> Self {
        self.resize = Some(resize);
        self
    }

    pub fn crop(mut self, crop: Crop) -> Self {
        self.crop = Some(crop);
        self
    }

    pub fn color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = Some(color_space);
        self
    }

    pub fn range_normalization(mut self, norm: RangeNormalization) -> Self {
        self.range_norm = Some(norm);
        self
    }

    pub fn range(self, min: f64, max: f64) -> Self {
        self.range_normalization(RangeNormalization::new(min, max))
    }

    pub fn distrib_normalization(mut self, norm: DistribNormalization) -> Self {
        self.distrib_norm = Some(norm);
        self
    }

    pub fn mean_std(self, mean: [f64; 3], std: [f64; 3]) -> Self {
        self.distrib_normalization(DistribNormalization::new(mean, std))
    }

    /// Enables distribution normalization with ImageNet statistics.
    pub fn imagenet_normalization(self) -> Self {
        self.distrib_normalization(DistribNormalization::imagenet())
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Finalizes the descriptor.
    ///
    /// When any transform is requested but neither resize nor crop was chosen,
    /// the frame is stretched to the layer size.
    pub fn build(self) -> TransformDescriptor {
        let mut desc = TransformDescriptor {
            resize: self.resize.unwrap_or_default(),
            crop: self.crop.unwrap_or_default(),
            color_space: self.color_space.unwrap_or_default(),
            range_norm: self.range_norm,
            distrib_norm: self.distrib_norm,
            padding: self.padding.filter(Padding::has_stride),
        };

        if self.padding.is_some() && desc.padding.is_none() {
            debug!("Ignoring padding with zero stride");
        }

        if desc.is_defined() && !desc.is_geometry_transform_defined() {
            debug!(
                color_space = %desc.color_space,
                "No resize or crop requested, defaulting to {}",
                Resize::StretchNoAspectRatio
            );
            desc.resize = Resize::StretchNoAspectRatio;
        }

        desc
    }
}
