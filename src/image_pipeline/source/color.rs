use crate::image_pipeline::descriptor::types::ColorSpace;
use crate::image_pipeline::source::types::{FourCc, SourceImage};

/// Color layout of a source frame, normalized from whichever form the caller holds.
///
/// `None` inside means the layout does not match any conversion target, so a
/// conversion is needed for every defined target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceColor(Option<ColorSpace>);

impl SourceColor {
    /// Normalizes a raw pixel-format code. Unknown codes never match a target.
    pub fn from_code(code: u32) -> Self {
        SourceColor(FourCc::from_code(code).and_then(FourCc::color_space))
    }

    pub fn color_space(&self) -> Option<ColorSpace> {
        self.0
    }

    pub fn matches(&self, target: ColorSpace) -> bool {
        self.0 == Some(target)
    }
}

impl From<ColorSpace> for SourceColor {
    fn from(space: ColorSpace) -> Self {
        SourceColor(Some(space))
    }
}

impl From<FourCc> for SourceColor {
    fn from(format: FourCc) -> Self {
        SourceColor(format.color_space())
    }
}

impl From<&SourceImage> for SourceColor {
    fn from(image: &SourceImage) -> Self {
        SourceColor::from_code(image.fourcc())
    }
}
