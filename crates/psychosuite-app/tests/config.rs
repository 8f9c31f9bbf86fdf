use psychosuite_app::config::{AppConfig, DEFAULT_MODEL_ID, DEFAULT_REGION, migrate};

#[test]
fn pre_versioned_config_is_migrated() {
    // The prototype stored only a generative-API key.
    let legacy = serde_json::json!({ "gemini_api_key": "secret" });

    let migrated = migrate(legacy, 0).unwrap();
    let config: AppConfig = serde_json::from_value(migrated).unwrap();

    assert_eq!(config.config_version, 1);
    assert_eq!(config.region, DEFAULT_REGION);
    assert_eq!(config.model_id, DEFAULT_MODEL_ID);
}

#[test]
fn migration_drops_the_stored_api_key() {
    let legacy = serde_json::json!({ "api_key": "secret" });
    let migrated = migrate(legacy, 0).unwrap();
    assert!(migrated.get("api_key").is_none());
    assert!(migrated.get("gemini_api_key").is_none());
}

#[test]
fn current_config_passes_through_unchanged() {
    let current = serde_json::to_value(AppConfig {
        config_version: 1,
        region: "eu-west-1".to_string(),
        model_id: "my-model".to_string(),
    })
    .unwrap();

    let migrated = migrate(current, 1).unwrap();
    let config: AppConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(config.region, "eu-west-1");
    assert_eq!(config.model_id, "my-model");
}

#[test]
fn future_config_version_is_rejected() {
    let future = serde_json::json!({
        "config_version": 99,
        "region": "eu-west-1",
        "model_id": "my-model",
    });

    let err = migrate(future, 99).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}
