use super::*;

fn cell() -> CellFormat {
    CellFormat::new(2, 2).unwrap()
}

fn frame(byte: u8) -> RawFrame {
    RawFrame::new(cell(), vec![byte; 16]).unwrap()
}

#[test]
fn raw_frame_checks_buffer_length() {
    assert!(RawFrame::new(cell(), vec![0; 16]).is_ok());
    assert!(RawFrame::new(cell(), vec![0; 12]).is_err());
}

#[test]
fn session_is_append_only_and_bounded() {
    let mut s = CaptureSession::new(SessionId(1), 2).unwrap();
    assert!(s.is_empty());
    assert!(!s.is_complete());

    s.push(frame(1)).unwrap();
    s.push(frame(2)).unwrap();
    assert_eq!(s.len(), 2);
    assert!(s.is_complete());

    // The bound is exact: a fifth wheel is rejected, order is preserved.
    assert!(s.push(frame(3)).is_err());
    assert_eq!(s.frames()[0].rgba8()[0], 1);
    assert_eq!(s.frames()[1].rgba8()[0], 2);
}

#[test]
fn clear_empties_the_session() {
    let mut s = CaptureSession::new(SessionId(1), 2).unwrap();
    s.push(frame(1)).unwrap();
    s.clear();
    assert!(s.is_empty());
    assert_eq!(s.id(), SessionId(1));
}

#[test]
fn zero_capacity_is_rejected() {
    assert!(CaptureSession::new(SessionId(0), 0).is_err());
}
