use super::*;

#[test]
fn empty_object_yields_production_defaults() {
    let cfg = SiteConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.whatsapp.recipient, DEFAULT_WHATSAPP_RECIPIENT);
    assert_eq!(cfg.initially_visible_cars, 3);
    assert_eq!(cfg.scroll_debounce(), Duration::from_millis(100));
    assert_eq!(cfg.log_level().unwrap(), log::Level::Info);
}

#[test]
fn partial_override_keeps_remaining_defaults() {
    let raw = serde_json::json!({
        "whatsapp": { "recipient": "628111" },
        "initially_visible_cars": 6,
        "strings": { "required_field": "This field is required" }
    })
    .to_string();

    let cfg = SiteConfig::from_json(&raw).unwrap();
    assert_eq!(cfg.whatsapp.recipient, "628111");
    assert_eq!(cfg.whatsapp.base_url, DEFAULT_WHATSAPP_BASE_URL);
    assert_eq!(cfg.initially_visible_cars, 6);
    assert_eq!(cfg.strings.required_field, "This field is required");
    assert_eq!(cfg.strings.name_label, "Nama");
    assert_eq!(cfg.contact_section, DEFAULT_CONTACT_SECTION);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn buffer_ratio_out_of_range_is_rejected() {
    let err = SiteConfig::from_json(r#"{"scroll_buffer_ratio": 1.5}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("scroll_buffer_ratio")));
}

#[test]
fn recipient_must_be_digits() {
    let err = SiteConfig::from_json(r#"{"whatsapp": {"recipient": "+62 823"}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("recipient")));

    let err = SiteConfig::from_json(r#"{"whatsapp": {"recipient": ""}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = SiteConfig::from_json(r#"{"log_level": "chatty"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("log_level")));

    let cfg = SiteConfig::from_json(r#"{"log_level": "debug"}"#).unwrap();
    assert_eq!(cfg.log_level().unwrap(), log::Level::Debug);
}

#[test]
fn blank_section_ids_are_rejected() {
    let err = SiteConfig::from_json(r#"{"home_section": "  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}
