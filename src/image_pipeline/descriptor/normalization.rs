//! Normalization and padding sub-policies
//!
//! Each value type is always constructible with well-defined defaults. Whether a
//! policy is active is decided by the descriptor holding it, not by its values.

/// Default output range for range normalization.
pub const DEFAULT_RANGE: (f64, f64) = (0.0, 1.0);

/// Per-channel mean of the ImageNet training set.
pub const IMAGENET_MEAN: [f64; 3] = [0.485, 0.456, 0.406];

/// Per-channel standard deviation of the ImageNet training set.
pub const IMAGENET_STD: [f64; 3] = [0.229, 0.224, 0.225];

/// Default color of padded pixels (black).
pub const DEFAULT_FILL_VALUE: [f64; 3] = [0.0, 0.0, 0.0];

/// Linear remapping of pixel values into `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeNormalization {
    pub min: f64,
    pub max: f64,
}

impl RangeNormalization {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for RangeNormalization {
    fn default() -> Self {
        Self {
            min: DEFAULT_RANGE.0,
            max: DEFAULT_RANGE.1,
        }
    }
}

/// Per-channel `(value - mean) / std` remapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistribNormalization {
    pub mean: [f64; 3],
    pub std: [f64; 3],
}

impl DistribNormalization {
    pub fn new(mean: [f64; 3], std: [f64; 3]) -> Self {
        Self { mean, std }
    }

    /// Statistics for models pretrained on ImageNet.
    pub fn imagenet() -> Self {
        Self::new(IMAGENET_MEAN, IMAGENET_STD)
    }
}

impl Default for DistribNormalization {
    fn default() -> Self {
        Self::imagenet()
    }
}

/// Enlarges output dimensions to the next stride multiple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub stride_x: usize,
    pub stride_y: usize,
    pub fill_value: [f64; 3],
}

impl Padding {
    /// Same stride on both axes.
    pub fn new(stride: usize) -> Self {
        Self::with_strides(stride, stride)
    }

    pub fn with_strides(stride_x: usize, stride_y: usize) -> Self {
        Self {
            stride_x,
            stride_y,
            fill_value: DEFAULT_FILL_VALUE,
        }
    }

    pub fn with_fill(mut self, fill_value: [f64; 3]) -> Self {
        self.fill_value = fill_value;
        self
    }

    /// A zero stride on both axes pads nothing.
    pub fn has_stride(&self) -> bool {
        self.stride_x != 0 || self.stride_y != 0
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::with_strides(0, 0)
    }
}
