use std::io::Cursor;

use super::*;

use crate::capture::source::{SourceFrame, StillSource};
use crate::foundation::core::CellFormat;

fn small_format() -> StripFormat {
    StripFormat::new(CellFormat::new(4, 4).unwrap(), 2).unwrap()
}

fn overlay_for(format: StripFormat) -> OverlayAsset {
    let img = image::RgbaImage::from_pixel(format.width(), format.height(), image::Rgba([0; 4]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    OverlayAsset::decode(&buf, format).unwrap()
}

fn booth() -> Photobooth {
    let format = small_format();
    Photobooth::with_format(
        format,
        overlay_for(format),
        ToneParams::default(),
        GrainParams {
            opacity: 0.0,
            ..GrainParams::default()
        },
    )
    .unwrap()
}

fn gray_source() -> StillSource {
    StillSource::new(SourceFrame::new(8, 8, vec![128; 8 * 8 * 4]).unwrap())
}

#[test]
fn start_announces_the_opening_countdown_step() {
    let mut booth = booth();
    let src = gray_source();
    let (_, events) = booth.start(&src).unwrap();
    assert!(matches!(
        events.as_slice(),
        [BoothEvent::CountdownTick { remaining: 3 }]
    ));
}

#[test]
fn full_run_ends_with_a_render_complete_print() {
    let mut booth = booth();
    let mut src = gray_source();
    let (token, _) = booth.start(&src).unwrap();

    let mut print = None;
    let mut completed = false;
    for _ in 0..16 {
        for ev in booth.tick(token, &mut src).unwrap() {
            match ev {
                BoothEvent::SequenceComplete => completed = true,
                BoothEvent::RenderComplete(strip) => print = Some(strip),
                _ => {}
            }
        }
        if print.is_some() {
            break;
        }
    }

    assert!(completed);
    let strip = print.expect("booth must deliver a print");
    assert_eq!(strip.width(), small_format().width());
    assert_eq!(strip.height(), small_format().height());
    assert!(!booth.is_active());
}

#[test]
fn mismatched_overlay_is_rejected_up_front() {
    let other = StripFormat::new(CellFormat::new(2, 2).unwrap(), 2).unwrap();
    let res = Photobooth::with_format(
        small_format(),
        overlay_for(other),
        ToneParams::default(),
        GrainParams::default(),
    );
    assert!(matches!(res, Err(BoothError::Validation(_))));
}

#[test]
fn dead_source_start_surfaces_source_unavailable() {
    let mut booth = booth();
    let mut src = gray_source();
    src.set_live(false);
    assert!(matches!(
        booth.start(&src),
        Err(BoothError::SourceUnavailable(_))
    ));
    assert!(!booth.is_active());
}

#[test]
fn retake_resets_and_a_second_run_prints_again() {
    let mut booth = booth();
    let mut src = gray_source();

    let (token, _) = booth.start(&src).unwrap();
    booth.tick(token, &mut src).unwrap();
    booth.reset();
    assert!(!booth.is_active());

    // Stale timer from the abandoned run does nothing.
    assert!(booth.tick(token, &mut src).unwrap().is_empty());

    let (token, _) = booth.start(&src).unwrap();
    let mut printed = false;
    for _ in 0..16 {
        if booth
            .tick(token, &mut src)
            .unwrap()
            .iter()
            .any(|ev| matches!(ev, BoothEvent::RenderComplete(_)))
        {
            printed = true;
            break;
        }
    }
    assert!(printed);
}

#[test]
fn invalid_params_are_rejected_at_construction() {
    let format = small_format();
    assert!(
        Photobooth::with_format(
            format,
            overlay_for(format),
            ToneParams {
                contrast: -1.0,
                ..ToneParams::default()
            },
            GrainParams::default(),
        )
        .is_err()
    );
}
