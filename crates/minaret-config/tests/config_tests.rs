// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Minaret configuration system.

use minaret_config::{load_and_validate_str, load_config_from_str, ConfigError};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_minaret_config() {
    let toml = r#"
[engine]
default_method = 1
cache_ttl_hours = 12
language = "ar"

[location]
latitude = 24.8607
longitude = 67.0011
timezone = "Asia/Karachi"

[aladhan]
base_url = "https://api.aladhan.com/v1"
timeout_secs = 10

[fcm]
server_key = "AAAA-server-key"

[expo]
access_token = "expo-secret"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.engine.default_method, 1);
    assert_eq!(config.engine.cache_ttl_hours, 12);
    assert_eq!(config.engine.language, "ar");
    assert_eq!(config.location.latitude, 24.8607);
    assert_eq!(config.location.timezone.as_deref(), Some("Asia/Karachi"));
    assert_eq!(config.aladhan.timeout_secs, 10);
    assert_eq!(config.fcm.server_key.as_deref(), Some("AAAA-server-key"));
    assert_eq!(config.expo.access_token.as_deref(), Some("expo-secret"));
}

/// An empty config is fully usable: every section has compiled defaults.
#[test]
fn empty_config_gets_defaults() {
    let config = load_and_validate_str("").expect("defaults should be valid");
    assert_eq!(config.engine.default_method, 2);
    assert_eq!(config.engine.cache_ttl_hours, 24);
    assert_eq!(config.engine.language, "en");
    // Mecca fallback.
    assert_eq!(config.location.latitude, 21.4225);
    assert_eq!(config.location.longitude, 39.8262);
    assert!(config.fcm.server_key.is_none());
    assert!(config.expo.access_token.is_none());
}

/// Unknown fields are rejected rather than silently ignored.
#[test]
fn unknown_field_is_rejected() {
    let toml = r#"
[engine]
default_methd = 2
"#;
    assert!(load_config_from_str(toml).is_err());
}

/// Validation collects every problem instead of failing fast.
#[test]
fn validation_collects_all_errors() {
    let toml = r#"
[engine]
cache_ttl_hours = 0
language = "fr"

[location]
latitude = 123.0
longitude = -500.0
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert_eq!(errors.len(), 4, "got: {errors:?}");

    let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert!(rendered.iter().any(|e| e.contains("latitude")));
    assert!(rendered.iter().any(|e| e.contains("longitude")));
    assert!(rendered.iter().any(|e| e.contains("cache_ttl_hours")));
    assert!(rendered.iter().any(|e| e.contains("language")));
}

/// A parse failure surfaces as a single Parse error.
#[test]
fn malformed_toml_surfaces_as_parse_error() {
    let errors = load_and_validate_str("[engine\n").expect_err("should fail to parse");
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ConfigError::Parse(_)));
}

/// Urdu is an accepted language even though templates fall back to English.
#[test]
fn urdu_language_passes_validation() {
    let config = load_and_validate_str("[engine]\nlanguage = \"ur\"\n").expect("ur is valid");
    assert_eq!(config.engine.language, "ur");
}
