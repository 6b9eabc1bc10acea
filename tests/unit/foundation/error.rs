use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BoothError::source_unavailable("x")
            .to_string()
            .contains("source unavailable:")
    );
    assert!(BoothError::decode("x").to_string().contains("decode error:"));
    assert!(
        BoothError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BoothError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BoothError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
