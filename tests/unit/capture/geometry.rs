use super::*;

fn print_cell() -> CellFormat {
    CellFormat::new(383, 512).unwrap()
}

#[test]
fn wider_source_crops_horizontally_centered() {
    let source = SourceDims::new(1920, 1080).unwrap();
    let cell = print_cell();
    let r = crop_rect(source, cell);

    assert_eq!(r.height(), 1080.0);
    assert!((r.width() - 1080.0 * cell.aspect()).abs() < 1e-9);
    assert!((r.x0 - (1920.0 - r.width()) / 2.0).abs() < 1e-9);
    assert_eq!(r.y0, 0.0);
}

#[test]
fn taller_source_crops_vertically_centered() {
    let source = SourceDims::new(1280, 1920).unwrap();
    let cell = print_cell();
    let r = crop_rect(source, cell);

    assert_eq!(r.width(), 1280.0);
    assert!((r.height() - 1280.0 / cell.aspect()).abs() < 1e-9);
    assert!((r.y0 - (1920.0 - r.height()) / 2.0).abs() < 1e-9);
    assert_eq!(r.x0, 0.0);
}

#[test]
fn matching_aspect_uses_full_source() {
    let cell = CellFormat::new(4, 4).unwrap();
    let r = crop_rect(SourceDims::new(8, 8).unwrap(), cell);
    assert_eq!((r.x0, r.y0, r.width(), r.height()), (0.0, 0.0, 8.0, 8.0));
}

#[test]
fn capture_fills_the_cell_exactly() {
    let frame = SourceFrame::new(1280, 1920, vec![200; 1280 * 1920 * 4]).unwrap();
    let cell = print_cell();
    let raw = capture_cell(&frame, cell).unwrap();
    assert_eq!(raw.cell(), cell);
    assert_eq!(raw.rgba8().len(), cell.byte_len());
}

#[test]
fn capture_mirrors_exactly_once() {
    // Left half red, right half blue, source dims equal to the cell so the
    // crop is the identity. After the selfie mirror the red marker must sit
    // on the right, once, not zero or two times.
    let cell = CellFormat::new(4, 4).unwrap();
    let mut rgba8 = Vec::with_capacity(64);
    for _y in 0..4 {
        for x in 0..4 {
            if x < 2 {
                rgba8.extend_from_slice(&[255, 0, 0, 255]);
            } else {
                rgba8.extend_from_slice(&[0, 0, 255, 255]);
            }
        }
    }
    let frame = SourceFrame::new(4, 4, rgba8).unwrap();
    let raw = capture_cell(&frame, cell).unwrap();

    let px = |x: usize, y: usize| {
        let i = (y * 4 + x) * 4;
        (raw.rgba8()[i], raw.rgba8()[i + 2])
    };
    let (r_left, b_left) = px(0, 1);
    let (r_right, b_right) = px(3, 1);
    assert!(b_left > r_left, "left edge should now be blue");
    assert!(r_right > b_right, "right edge should now be red");
}
