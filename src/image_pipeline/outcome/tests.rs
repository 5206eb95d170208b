use crate::image_pipeline::descriptor::{ColorSpace, Crop, Resize, TransformDescriptor};
use crate::image_pipeline::outcome::TransformOutcome;

#[test]
fn test_fresh_outcome() {
    let outcome = TransformOutcome::new();

    assert!(!outcome.was_transformed());
    assert!(!outcome.did_crop());
    assert!(!outcome.did_aspect_resize());
    assert!(!outcome.did_pad());
    assert_eq!(outcome.crop_offset_x(), 0);
    assert_eq!(outcome.pad_size_y(), 0);
    assert_eq!(outcome.resize_scale_x(), 1.0);
    assert_eq!(outcome.resize_scale_y(), 1.0);
}

#[test]
fn test_aspect_resize_accumulates() {
    let mut outcome = TransformOutcome::new();
    outcome.record_aspect_resize(2, 3, 0.5, 0.5);
    outcome.record_aspect_resize(2, 3, 0.5, 0.5);

    assert_eq!(outcome.pad_size_x(), 4);
    assert_eq!(outcome.pad_size_y(), 6);
    assert_eq!(outcome.resize_scale_x(), 0.25);
    assert_eq!(outcome.resize_scale_y(), 0.25);
    assert!(outcome.did_aspect_resize());
}

#[test]
fn test_padding_only_is_not_transformation() {
    let mut outcome = TransformOutcome::new();
    outcome.record_padding(16, 8);

    assert!(outcome.did_pad());
    assert!(!outcome.was_transformed());
    assert_eq!(outcome.pad_size_x(), 16);
    assert_eq!(outcome.pad_size_y(), 8);
    assert_eq!(outcome.resize_scale_x(), 1.0);
}

#[test]
fn test_crop_is_transformation() {
    let mut outcome = TransformOutcome::new();
    outcome.record_crop(0, 0);

    assert!(outcome.did_crop());
    assert!(outcome.was_transformed());
}

#[test]
fn test_crop_offsets_overwrite() {
    let mut outcome = TransformOutcome::new();
    outcome.record_crop(10, 20);
    outcome.record_crop(3, 4);

    assert_eq!(outcome.crop_offset_x(), 3);
    assert_eq!(outcome.crop_offset_y(), 4);
}

#[test]
fn test_resize_then_padding_sums_padding() {
    let mut outcome = TransformOutcome::new();
    outcome.record_aspect_resize(0, 40, 0.5, 0.5);
    outcome.record_padding(12, 2);

    assert_eq!(outcome.pad_size_x(), 12);
    assert_eq!(outcome.pad_size_y(), 42);
    assert_eq!(outcome.resize_scale_x(), 0.5);
    assert!(outcome.did_pad());
    assert!(outcome.was_transformed());
}

#[test]
fn test_aspect_resize_then_central_crop() {
    let desc = TransformDescriptor::builder()
        .resize(Resize::PreserveAspectRatio)
        .crop(Crop::Central)
        .color_space(ColorSpace::Rgb)
        .build();
    assert!(desc.needs_resize());
    assert!(desc.needs_crop());

    let mut outcome = TransformOutcome::new();
    outcome.record_aspect_resize(0, 10, 0.8, 0.8);
    outcome.record_crop(5, 0);

    assert_eq!(outcome.crop_offset_x(), 5);
    assert_eq!(outcome.crop_offset_y(), 0);
    assert_eq!(outcome.pad_size_y(), 10);
    assert_eq!(outcome.resize_scale_x(), 0.8);
    assert!(outcome.was_transformed());
}

#[test]
fn test_outcomes_are_independent_per_frame() {
    let frames: Vec<TransformOutcome> = (1..=3)
        .map(|i| {
            let mut outcome = TransformOutcome::new();
            outcome.record_padding(i, i);
            outcome
        })
        .collect();

    assert_eq!(frames[0].pad_size_x(), 1);
    assert_eq!(frames[2].pad_size_x(), 3);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "invalid scale_x")]
fn test_zero_scale_rejected_in_debug() {
    let mut outcome = TransformOutcome::new();
    outcome.record_aspect_resize(0, 0, 0.0, 1.0);
}
