use folio_motion::MotionError;
use folio_motion::api::{DEFAULT_PROGRESS_PROPERTY, MotionConfig};

#[test]
fn defaults_match_documented_constants() {
    let config = MotionConfig::default();
    assert_eq!(config.progress.smoothing_factor, 0.12);
    assert_eq!(config.progress.epsilon, 0.001);
    assert_eq!(config.progress.anchor_ratio, 0.5);
    assert_eq!(config.progress.property, DEFAULT_PROGRESS_PROPERTY);
    assert_eq!(config.smooth_scroll.duration_ms, 700.0);
    assert_eq!(config.section_tracker.marker_offset_px, 120.0);
    assert_eq!(config.back_to_top.visible_after_px, 300.0);
    assert_eq!(config.carousel.interval_ms, 5000.0);
    assert_eq!(config.section_tracker.reveal_intersection_threshold, 0.7);
    assert_eq!(config.timeline_rows.leave_duration_ms, 620.0);
    assert_eq!(config.dot_nav.pivot_ratio, 0.28);
    assert_eq!(config.dot_nav.activation_lead_px, 140.0);
    assert_eq!(config.form_validation.email_pattern, r"^\S+@\S+\.\S+$");
    let icon = config.progress.icon.as_ref().expect("icon on by default");
    assert_eq!(icon.travel_px, 100.0);
    assert_eq!(icon.min_scale, 0.5);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = MotionConfig::from_json_str(
        r#"{ "progress": { "smoothing_factor": 0.2 }, "carousel": { "wrap": false } }"#,
    )
    .expect("config");
    assert_eq!(config.progress.smoothing_factor, 0.2);
    assert_eq!(config.progress.epsilon, 0.001);
    assert!(!config.carousel.wrap);
    assert_eq!(config.carousel.interval_ms, 5000.0);
}

#[test]
fn json_round_trip_preserves_builder_changes() {
    let config = MotionConfig::default()
        .with_progress_smoothing(0.3, 0.0005)
        .with_progress_property("--story-progress")
        .with_smooth_scroll_duration_ms(450.0)
        .with_carousel(8000.0, false)
        .without_progress_icon();
    let raw = config.to_json_string().expect("json");
    let restored = MotionConfig::from_json_str(&raw).expect("restore");
    assert_eq!(restored, config);
}

#[test]
fn invalid_values_are_reported_as_config_errors() {
    let err = MotionConfig::from_json_str(r#"{ "progress": { "epsilon": -1.0 } }"#)
        .expect_err("negative epsilon");
    assert!(matches!(err, MotionError::InvalidConfig(_)));

    let err = MotionConfig::from_json_str(r#"{ "banner": { "visibility_threshold": 2.0 } }"#)
        .expect_err("threshold above one");
    assert!(matches!(err, MotionError::InvalidConfig(_)));

    let err = MotionConfig::from_json_str(r#"{ "form_validation": { "email_pattern": "[" } }"#)
        .expect_err("broken email pattern");
    assert!(matches!(err, MotionError::InvalidConfig(_)));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = MotionConfig::from_json_str("{ progress: ").expect_err("malformed");
    assert!(matches!(err, MotionError::Serialization(_)));
}
