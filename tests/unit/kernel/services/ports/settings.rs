use super::*;

#[test]
fn settings_defaults_enable_every_feature() {
    let settings = Settings::default();
    assert!(settings.completion.keywords);
    assert!(settings.completion.environment_variables);
    assert!(settings.completion.document_variables);
    assert!(settings.quick_info.split_path);
    assert!(settings.quick_info.show_expanded);
    assert!(settings.type_through.enabled);
    assert_eq!(settings.log_filter, None);
}

#[test]
fn settings_serde_roundtrip_preserves_values() {
    let mut original = Settings::default();
    original.completion.document_variables = false;
    original.quick_info.show_expanded = false;
    original.log_filter = Some("cmdlang=debug".to_string());

    let json = serde_json::to_string(&original).expect("serialize Settings");
    let decoded: Settings = serde_json::from_str(&json).expect("deserialize Settings");
    assert_eq!(decoded, original);
}

#[test]
fn settings_empty_object_is_default() {
    let decoded: Settings = serde_json::from_str("{}").expect("deserialize Settings");
    assert_eq!(decoded, Settings::default());

    let json = serde_json::to_value(Settings::default()).expect("serialize Settings");
    assert!(json.get("log_filter").is_none());
}
