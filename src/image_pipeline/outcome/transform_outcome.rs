use tracing::trace;

/// What the pixel-transform stages did to one frame.
///
/// Create one per frame and drop it once detections are remapped. Padding sizes
/// are summed and scale factors multiplied across records, so a resize followed
/// by a separate padding pass (or a staged resize) keeps every contribution.
///
/// Values are not range checked; passing consistent geometry is up to the
/// executor recording them.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutcome {
    did_crop: bool,
    did_aspect_resize: bool,
    did_pad: bool,
    /// 0 for left/top anchored crops, `(src - dst) / 2` for a central crop.
    crop_offset_x: usize,
    crop_offset_y: usize,
    pad_size_x: usize,
    pad_size_y: usize,
    resize_scale_x: f64,
    resize_scale_y: f64,
}

impl Default for TransformOutcome {
    fn default() -> Self {
        Self {
            did_crop: false,
            did_aspect_resize: false,
            did_pad: false,
            crop_offset_x: 0,
            crop_offset_y: 0,
            pad_size_x: 0,
            pad_size_y: 0,
            resize_scale_x: 1.0,
            resize_scale_y: 1.0,
        }
    }
}

impl TransformOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the crop window origin. A frame is cropped at most once, so the
    /// offsets replace any earlier value.
    pub fn record_crop(&mut self, offset_x: usize, offset_y: usize) {
        trace!(offset_x, offset_y, "crop recorded");
        self.did_crop = true;
        self.crop_offset_x = offset_x;
        self.crop_offset_y = offset_y;
    }

    /// Records an aspect-ratio preserving resize and the letterbox it added.
    pub fn record_aspect_resize(&mut self, pad_x: usize, pad_y: usize, scale_x: f64, scale_y: f64) {
        debug_assert!(scale_x.is_finite() && scale_x > 0.0, "invalid scale_x {scale_x}");
        debug_assert!(scale_y.is_finite() && scale_y > 0.0, "invalid scale_y {scale_y}");
        trace!(pad_x, pad_y, scale_x, scale_y, "aspect ratio resize recorded");

        self.did_aspect_resize = true;
        self.pad_size_x += pad_x;
        self.pad_size_y += pad_y;
        self.resize_scale_x *= scale_x;
        self.resize_scale_y *= scale_y;
    }

    /// Records stride padding. Shares the padding totals with the resize letterbox.
    pub fn record_padding(&mut self, pad_x: usize, pad_y: usize) {
        trace!(pad_x, pad_y, "padding recorded");
        self.did_pad = true;
        self.pad_size_x += pad_x;
        self.pad_size_y += pad_y;
    }

    /// True if coordinates need remapping. Padding alone does not move the origin.
    pub fn was_transformed(&self) -> bool {
        self.did_aspect_resize || self.did_crop
    }

    pub fn did_crop(&self) -> bool {
        self.did_crop
    }

    pub fn did_aspect_resize(&self) -> bool {
        self.did_aspect_resize
    }

    pub fn did_pad(&self) -> bool {
        self.did_pad
    }

    pub fn crop_offset_x(&self) -> usize {
        self.crop_offset_x
    }

    pub fn crop_offset_y(&self) -> usize {
        self.crop_offset_y
    }

    pub fn pad_size_x(&self) -> usize {
        self.pad_size_x
    }

    pub fn pad_size_y(&self) -> usize {
        self.pad_size_y
    }

    pub fn resize_scale_x(&self) -> f64 {
        self.resize_scale_x
    }

    pub fn resize_scale_y(&self) -> f64 {
        self.resize_scale_y
    }
}
