use anyhow::Context;
use inference_preproc_rs::image_pipeline::{
    Crop, FourCc, ModelProc, Resize, SourceImage, TransformDescriptor, TransformOutcome,
};
use inference_preproc_rs::logger::{self, debug, info, warn};

/// Input layer size used for the simulated frame.
const LAYER_SIZE: (usize, usize) = (640, 640);

const BUILTIN_MODEL_PROC: &str = r#"{
    "json_schema_version": "2.2.0",
    "input_preproc": [
        {
            "format": "image",
            "params": {
                "resize": "aspect-ratio",
                "color_space": "BGR",
                "padding": { "stride": 32 }
            }
        }
    ]
}"#;

fn main() -> anyhow::Result<()> {
    logger::init();

    let model_proc = match std::env::args().nth(1) {
        Some(path) => ModelProc::from_file(&path)
            .with_context(|| format!("loading model-proc {path}"))?,
        None => {
            warn!("No model-proc given, using built-in example");
            ModelProc::from_json_str(BUILTIN_MODEL_PROC)?
        }
    };
    let desc = model_proc.image_descriptor()?;

    info!(
        defined = desc.is_defined(),
        resize = %desc.resize(),
        crop = %desc.crop(),
        needs_crop = desc.needs_crop(),
        color_space = %desc.target_color_space(),
        range = desc.needs_range_normalization(),
        distribution = desc.needs_distrib_normalization(),
        padding = desc.needs_padding(),
        "Input pre-processing plan"
    );

    for format in [FourCc::Nv12, FourCc::I420, FourCc::Bgrx, FourCc::Bgr, FourCc::Rgb] {
        info!(
            source = %format,
            convert = desc.needs_color_conversion(format),
            "Color conversion"
        );
    }

    let frame = SourceImage::with_format(FourCc::Nv12, 1920, 1080);
    let outcome = simulate_frame(&desc, &frame, LAYER_SIZE);

    info!(
        transformed = outcome.was_transformed(),
        pad_x = outcome.pad_size_x(),
        pad_y = outcome.pad_size_y(),
        scale_x = outcome.resize_scale_x(),
        scale_y = outcome.resize_scale_y(),
        "Simulated frame outcome"
    );

    Ok(())
}

/// Pixels removed before the crop window for `crop` when cutting `dst` out of `src`.
fn crop_offsets(crop: Crop, src: (usize, usize), dst: (usize, usize)) -> (usize, usize) {
    let excess_x = src.0.saturating_sub(dst.0);
    let excess_y = src.1.saturating_sub(dst.1);
    match crop {
        Crop::None | Crop::TopLeft => (0, 0),
        Crop::Central => (excess_x / 2, excess_y / 2),
        Crop::TopRight => (excess_x, 0),
        Crop::BottomLeft => (0, excess_y),
        Crop::BottomRight => (excess_x, excess_y),
    }
}

fn pad_to_stride(len: usize, stride: usize) -> usize {
    if stride == 0 {
        return 0;
    }
    (stride - len % stride) % stride
}

/// Fills an outcome the way a pixel executor would after running the plan on `frame`.
fn simulate_frame(
    desc: &TransformDescriptor,
    frame: &SourceImage,
    layer: (usize, usize),
) -> TransformOutcome {
    let src = (frame.width().max(1), frame.height().max(1));
    let scale_x = layer.0 as f64 / src.0 as f64;
    let scale_y = layer.1 as f64 / src.1 as f64;
    let mut outcome = TransformOutcome::new();
    let mut current = src;

    match desc.resize() {
        Resize::PreserveAspectRatio => {
            // With a crop the frame covers the layer and the overflow is cut,
            // otherwise it fits inside and the remainder is letterboxed.
            let scale = if desc.needs_crop() {
                scale_x.max(scale_y)
            } else {
                scale_x.min(scale_y)
            };
            let scaled = (
                (src.0 as f64 * scale).round() as usize,
                (src.1 as f64 * scale).round() as usize,
            );
            let pad_x = layer.0.saturating_sub(scaled.0);
            let pad_y = layer.1.saturating_sub(scaled.1);
            outcome.record_aspect_resize(pad_x, pad_y, scale, scale);
            current = (scaled.0 + pad_x, scaled.1 + pad_y);
        }
        Resize::StretchNoAspectRatio => {
            // Not an aspect resize: no letterbox, nothing to record.
            debug!(scale_x, scale_y, "Stretched to layer size");
            current = layer;
        }
        Resize::None => {}
    }

    if desc.needs_crop() {
        let (offset_x, offset_y) = crop_offsets(desc.crop(), current, layer);
        outcome.record_crop(offset_x, offset_y);
        current = (current.0.min(layer.0), current.1.min(layer.1));
    }

    if desc.needs_padding() {
        let padding = desc.padding();
        outcome.record_padding(
            pad_to_stride(current.0, padding.stride_x),
            pad_to_stride(current.1, padding.stride_y),
        );
    }

    outcome
}
