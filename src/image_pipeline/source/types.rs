//! Source image types

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::PreprocError;
use crate::image_pipeline::descriptor::types::ColorSpace;

/// Maximum number of planes a mapped frame can carry.
pub const MAX_PLANES: usize = 4;

const fn fourcc(a: u8, b: u8, c: u8, d: u8) -> u32 {
    (a as u32) | ((b as u32) << 8) | ((c as u32) << 16) | ((d as u32) << 24)
}

/// Pixel formats reported by the buffer-mapping layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FourCc {
    Nv12,
    I420,
    Bgra,
    Bgrx,
    /// Planar BGR
    Bgrp,
    Bgr,
    Rgba,
    Rgbx,
    /// Planar RGB
    Rgbp,
    Rgb,
    Yuv,
}

impl FourCc {
    pub const ALL: [FourCc; 11] = [
        FourCc::Nv12,
        FourCc::I420,
        FourCc::Bgra,
        FourCc::Bgrx,
        FourCc::Bgrp,
        FourCc::Bgr,
        FourCc::Rgba,
        FourCc::Rgbx,
        FourCc::Rgbp,
        FourCc::Rgb,
        FourCc::Yuv,
    ];

    /// Little-endian four character code, e.g. `NV12` is `0x3231564E`.
    ///
    /// `Yuv` has no registered fourcc; `'Y','U','V',0` is a local choice and
    /// may differ from what a given mapping layer reports for packed YUV.
    pub const fn code(self) -> u32 {
        match self {
            FourCc::Nv12 => fourcc(b'N', b'V', b'1', b'2'),
            FourCc::I420 => fourcc(b'I', b'4', b'2', b'0'),
            FourCc::Bgra => fourcc(b'B', b'G', b'R', b'A'),
            FourCc::Bgrx => fourcc(b'B', b'G', b'R', b'X'),
            FourCc::Bgrp => fourcc(b'B', b'G', b'R', b'P'),
            FourCc::Bgr => fourcc(b'B', b'G', b'R', 0),
            FourCc::Rgba => fourcc(b'R', b'G', b'B', b'A'),
            FourCc::Rgbx => fourcc(b'R', b'G', b'B', b'X'),
            FourCc::Rgbp => fourcc(b'R', b'G', b'B', b'P'),
            FourCc::Rgb => fourcc(b'R', b'G', b'B', 0),
            FourCc::Yuv => fourcc(b'Y', b'U', b'V', 0),
        }
    }

    pub fn from_code(code: u32) -> Option<FourCc> {
        FourCc::ALL.iter().copied().find(|f| f.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            FourCc::Nv12 => "NV12",
            FourCc::I420 => "I420",
            FourCc::Bgra => "BGRA",
            FourCc::Bgrx => "BGRX",
            FourCc::Bgrp => "BGRP",
            FourCc::Bgr => "BGR",
            FourCc::Rgba => "RGBA",
            FourCc::Rgbx => "RGBX",
            FourCc::Rgbp => "RGBP",
            FourCc::Rgb => "RGB",
            FourCc::Yuv => "YUV",
        }
    }

    /// Color space this format already is, if it matches a conversion target exactly.
    ///
    /// Only the packed three-channel formats qualify; alpha/padded and planar
    /// variants still go through the conversion kernel.
    pub fn color_space(self) -> Option<ColorSpace> {
        match self {
            FourCc::Bgr => Some(ColorSpace::Bgr),
            FourCc::Rgb => Some(ColorSpace::Rgb),
            FourCc::Yuv => Some(ColorSpace::Yuv),
            _ => None,
        }
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FourCc {
    type Err = PreprocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        FourCc::ALL
            .iter()
            .copied()
            .find(|f| f.name() == upper)
            .ok_or_else(|| PreprocError::UnknownFourCc(s.to_string()))
    }
}

/// Geometry and format of a mapped source frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceImage {
    fourcc: u32,
    width: usize,
    height: usize,
    strides: [usize; MAX_PLANES],
}

impl SourceImage {
    /// Creates a description from a raw format code, as the mapping layer reports it.
    pub fn new(fourcc: u32, width: usize, height: usize) -> Self {
        Self {
            fourcc,
            width,
            height,
            strides: [0; MAX_PLANES],
        }
    }

    pub fn with_format(format: FourCc, width: usize, height: usize) -> Self {
        Self::new(format.code(), width, height)
    }

    pub fn with_strides(mut self, strides: [usize; MAX_PLANES]) -> Self {
        self.strides = strides;
        self
    }

    pub fn fourcc(&self) -> u32 {
        self.fourcc
    }

    /// `None` when the code is not one of the known formats.
    pub fn format(&self) -> Option<FourCc> {
        FourCc::from_code(self.fourcc)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn strides(&self) -> &[usize; MAX_PLANES] {
        &self.strides
    }

    /// Stride of `plane`, zero for planes the format does not use.
    pub fn stride(&self, plane: usize) -> usize {
        self.strides.get(plane).copied().unwrap_or(0)
    }
}
