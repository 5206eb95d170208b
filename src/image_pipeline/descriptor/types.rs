//! Transformation mode enums

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::PreprocError;

/// Geometry resize policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Resize {
    /// Keep source geometry
    #[default]
    None,
    /// Scale each axis independently to the layer size
    StretchNoAspectRatio,
    /// Scale uniformly and letterbox the remainder
    PreserveAspectRatio,
}

/// Anchor of the crop window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Crop {
    #[default]
    None,
    Central,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Target pixel layout of the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    #[default]
    None,
    Rgb,
    Bgr,
    Yuv,
    Grayscale,
}

// Model-proc files mix '-' and '_' and casing freely.
fn normalize_key(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('_', "-")
}

impl FromStr for Resize {
    type Err = PreprocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "no" | "none" => Ok(Resize::None),
            "no-aspect-ratio" | "stretch" => Ok(Resize::StretchNoAspectRatio),
            "aspect-ratio" => Ok(Resize::PreserveAspectRatio),
            _ => Err(PreprocError::UnknownResize(s.to_string())),
        }
    }
}

impl FromStr for Crop {
    type Err = PreprocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "no" | "none" => Ok(Crop::None),
            "central" | "center" => Ok(Crop::Central),
            "top-left" => Ok(Crop::TopLeft),
            "top-right" => Ok(Crop::TopRight),
            "bottom-left" => Ok(Crop::BottomLeft),
            "bottom-right" => Ok(Crop::BottomRight),
            _ => Err(PreprocError::UnknownCrop(s.to_string())),
        }
    }
}

impl FromStr for ColorSpace {
    type Err = PreprocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "no" | "none" => Ok(ColorSpace::None),
            "rgb" => Ok(ColorSpace::Rgb),
            "bgr" => Ok(ColorSpace::Bgr),
            "yuv" => Ok(ColorSpace::Yuv),
            "grayscale" | "gray" => Ok(ColorSpace::Grayscale),
            _ => Err(PreprocError::UnknownColorSpace(s.to_string())),
        }
    }
}

impl fmt::Display for Resize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resize::None => "no",
            Resize::StretchNoAspectRatio => "no-aspect-ratio",
            Resize::PreserveAspectRatio => "aspect-ratio",
        })
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Crop::None => "no",
            Crop::Central => "central",
            Crop::TopLeft => "top_left",
            Crop::TopRight => "top_right",
            Crop::BottomLeft => "bottom_left",
            Crop::BottomRight => "bottom_right",
        })
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorSpace::None => "no",
            ColorSpace::Rgb => "RGB",
            ColorSpace::Bgr => "BGR",
            ColorSpace::Yuv => "YUV",
            ColorSpace::Grayscale => "GRAYSCALE",
        })
    }
}
