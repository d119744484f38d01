use std::time::Duration;

use spoiler::{ConfigError, Spoiler, SpoilerConfig, StyleSlot};

// ============================================================================
// Defaults and validation
// ============================================================================

#[test]
fn test_defaults() {
    let config = SpoilerConfig::new("more", "less");

    assert_eq!(config.max_height, 100.0);
    assert!(!config.initial_state);
    assert_eq!(config.transition_duration, Duration::from_millis(200));
    assert!(config.attrs.is_empty());
    assert!(!config.styles.unstyled);
}

#[test]
fn test_default_uses_default_labels() {
    let config: SpoilerConfig = SpoilerConfig::default();

    assert_eq!(config, SpoilerConfig::new(String::new(), String::new()));
    assert_eq!(config.max_height, 100.0);
    assert_eq!(config.transition_duration, Duration::from_millis(200));
}

#[test]
fn test_validate_rejects_non_positive_max_height() {
    assert!(SpoilerConfig::new("more", "less").validate().is_ok());
    assert_eq!(
        SpoilerConfig::new("more", "less").max_height(0.0).validate(),
        Err(ConfigError::NonPositiveMaxHeight(0.0))
    );
    assert!(SpoilerConfig::new("more", "less")
        .max_height(-5.0)
        .validate()
        .is_err());
    assert!(SpoilerConfig::new("more", "less")
        .max_height(f32::NAN)
        .validate()
        .is_err());
}

#[test]
fn test_config_error_message() {
    let err = ConfigError::NonPositiveMaxHeight(-1.0);
    assert_eq!(err.to_string(), "max_height must be a positive number, got -1");
}

// ============================================================================
// Serde
// ============================================================================

#[test]
fn test_deserialize_fills_defaults() {
    let config: SpoilerConfig =
        serde_json::from_str(r#"{ "show_label": "Show more", "hide_label": "Hide" }"#).unwrap();

    assert_eq!(config.show_label, "Show more");
    assert_eq!(config.hide_label, "Hide");
    assert_eq!(config.max_height, 100.0);
    assert_eq!(config.transition_duration, Duration::from_millis(200));
}

#[test]
fn test_deserialize_duration_in_millis() {
    let config: SpoilerConfig = serde_json::from_str(
        r#"{
            "show_label": "more",
            "hide_label": "less",
            "max_height": 40,
            "initial_state": true,
            "transition_duration": 0
        }"#,
    )
    .unwrap();

    assert_eq!(config.max_height, 40.0);
    assert!(config.initial_state);
    assert!(config.transition_duration.is_zero());
}

#[test]
fn test_labels_are_required() {
    let result: Result<SpoilerConfig, _> = serde_json::from_str(r#"{ "show_label": "more" }"#);
    assert!(result.is_err());
}

#[test]
fn test_serialize_duration_as_millis() {
    let config = SpoilerConfig::new("more", "less").transition_duration(Duration::from_millis(350));
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["transition_duration"], 350);
    assert_eq!(json["max_height"], 100.0);
}

// ============================================================================
// Style overrides and pass-through attributes
// ============================================================================

#[test]
fn test_overrides_reach_the_view() {
    let config = SpoilerConfig::new("more", "less")
        .class_name("article")
        .slot_class(StyleSlot::Root, "spoiler-root")
        .slot_class(StyleSlot::Content, "spoiler-body")
        .slot_class(StyleSlot::Control, "spoiler-toggle")
        .slot_style(StyleSlot::Root, "padding", "1")
        .slot_style(StyleSlot::Content, "color", "gray")
        .slot_style(StyleSlot::Control, "font-weight", "bold")
        .slot_style(StyleSlot::Control, "color", "blue")
        .unstyled()
        .attr("data-testid", "story")
        .initial_state(true);
    let view = Spoiler::new(config).render();
    let control = view.control.as_ref().unwrap();

    assert_eq!(view.root.style.get("padding").map(String::as_str), Some("1"));
    assert_eq!(view.content.style.get("color").map(String::as_str), Some("gray"));
    assert_eq!(control.style.len(), 2);
    assert_eq!(control.style.get("font-weight").map(String::as_str), Some("bold"));
    assert_eq!(control.style.get("color").map(String::as_str), Some("blue"));

    assert_eq!(view.root.class_names, vec!["spoiler-root", "article"]);
    assert_eq!(view.class_names(StyleSlot::Content), ["spoiler-body"]);
    assert_eq!(view.class_names(StyleSlot::Control), ["spoiler-toggle"]);
    assert!(view.root.unstyled);
    assert_eq!(view.root.attrs.get("data-testid").map(String::as_str), Some("story"));
}

#[test]
fn test_control_slot_empty_without_control() {
    let config = SpoilerConfig::new("more", "less").slot_class(StyleSlot::Control, "toggle");
    let view = Spoiler::new(config).render();

    assert!(view.class_names(StyleSlot::Control).is_empty());
}

#[test]
fn test_slots_without_inline_styles_are_empty() {
    let view = Spoiler::new(SpoilerConfig::new("more", "less")).render();

    assert!(view.root.style.is_empty());
    assert!(view.content.style.is_empty());
}
