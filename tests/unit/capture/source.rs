use super::*;

#[test]
fn source_frame_checks_buffer_length() {
    assert!(SourceFrame::new(2, 2, vec![0; 16]).is_ok());
    assert!(SourceFrame::new(2, 2, vec![0; 15]).is_err());
    assert!(SourceFrame::new(0, 2, vec![]).is_err());
}

#[test]
fn still_source_reports_dims_and_samples() {
    let frame = SourceFrame::new(3, 2, vec![7; 24]).unwrap();
    let mut src = StillSource::new(frame);

    assert!(src.is_live());
    assert_eq!(src.dimensions(), SourceDims::new(3, 2).unwrap());

    let a = src.sample().unwrap();
    let b = src.sample().unwrap();
    assert_eq!(a.rgba8, b.rgba8);
}

#[test]
fn dead_still_source_fails_sample() {
    let frame = SourceFrame::new(1, 1, vec![0; 4]).unwrap();
    let mut src = StillSource::new(frame);
    src.set_live(false);

    assert!(!src.is_live());
    assert!(matches!(
        src.sample(),
        Err(BoothError::SourceUnavailable(_))
    ));
}
