// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: coordinate ranges, positive durations, known languages.

use std::str::FromStr;

use minaret_core::types::Language;
use thiserror::Error;

use crate::model::MinaretConfig;

/// A single configuration problem.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config deserialized but a value is semantically invalid.
    #[error("{message}")]
    Validation { message: String },

    /// The config failed to deserialize at all.
    #[error("{0}")]
    Parse(#[from] figment::Error),
}

/// Render collected configuration errors to stderr.
pub fn render_errors(errors: &[ConfigError]) {
    eprintln!("minaret: configuration errors:");
    for error in errors {
        eprintln!("  - {error}");
    }
}

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &MinaretConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let latitude = config.location.latitude;
    if !(-90.0..=90.0).contains(&latitude) {
        errors.push(ConfigError::Validation {
            message: format!("location.latitude must be within [-90, 90], got {latitude}"),
        });
    }

    let longitude = config.location.longitude;
    if !(-180.0..=180.0).contains(&longitude) {
        errors.push(ConfigError::Validation {
            message: format!("location.longitude must be within [-180, 180], got {longitude}"),
        });
    }

    if config.engine.cache_ttl_hours == 0 {
        errors.push(ConfigError::Validation {
            message: "engine.cache_ttl_hours must be positive".to_string(),
        });
    }

    if config.aladhan.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "aladhan.timeout_secs must be positive".to_string(),
        });
    }

    if Language::from_str(&config.engine.language).is_err() {
        errors.push(ConfigError::Validation {
            message: format!(
                "engine.language `{}` is not supported (expected en, ar, or ur)",
                config.engine.language
            ),
        });
    }

    if config.aladhan.base_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "aladhan.base_url must not be empty".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
