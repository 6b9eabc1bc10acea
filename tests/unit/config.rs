use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg: BoothConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, BoothConfig::default());
    cfg.validate().unwrap();
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let cfg: BoothConfig =
        serde_json::from_str(r#"{ "grain": { "step": 2, "opacity": 0.05, "min_gray": 30, "max_gray": 230, "seed": 7 } }"#)
            .unwrap();
    assert_eq!(cfg.grain.seed, 7);
    assert_eq!(cfg.tone, ToneParams::default());
}

#[test]
fn read_config_json_validates_parameters() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("booth.json");

    std::fs::write(&path, r#"{ "tone": { "contrast": 99.0, "brightness": 1.0, "sepia": 0.1 } }"#)
        .unwrap();
    assert!(read_config_json(&path).is_err());

    std::fs::write(&path, "{}").unwrap();
    assert_eq!(read_config_json(&path).unwrap(), BoothConfig::default());
}

#[test]
fn missing_file_errors_with_path() {
    let err = read_config_json(std::path::Path::new("no/such/booth.json")).unwrap_err();
    assert!(err.to_string().contains("booth.json"));
}

#[test]
fn config_round_trips_through_json() {
    let cfg = BoothConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let back: BoothConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, back);
}
