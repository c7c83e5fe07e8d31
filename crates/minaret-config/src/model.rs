// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Minaret notification engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Minaret configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MinaretConfig {
    /// Engine behavior: calculation method, cache lifetime, language.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Default mosque location.
    #[serde(default)]
    pub location: LocationConfig,

    /// AlAdhan API settings.
    #[serde(default)]
    pub aladhan: AladhanConfig,

    /// FCM push channel settings.
    #[serde(default)]
    pub fcm: FcmConfig,

    /// Expo push channel settings.
    #[serde(default)]
    pub expo: ExpoConfig,
}

/// Engine behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// AlAdhan calculation method code. Defaults to ISNA.
    #[serde(default = "default_method")]
    pub default_method: u8,

    /// Lifetime of time-bound cache entries, in hours.
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: u64,

    /// Notification language (`en`, `ar`, `ur`).
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_method: default_method(),
            cache_ttl_hours: default_cache_ttl_hours(),
            language: default_language(),
        }
    }
}

/// Default mosque coordinates. Falls back to Mecca so a bare install
/// still produces sensible Hijri dates and Qibla output.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// IANA timezone passed through to AlAdhan when set.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            timezone: None,
        }
    }
}

/// AlAdhan API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AladhanConfig {
    /// Base URL of the AlAdhan API.
    #[serde(default = "default_aladhan_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AladhanConfig {
    fn default() -> Self {
        Self {
            base_url: default_aladhan_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// FCM push channel configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FcmConfig {
    /// FCM server key. `None` leaves the channel unconfigured.
    #[serde(default)]
    pub server_key: Option<String>,
}

/// Expo push channel configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExpoConfig {
    /// Expo access token. Optional; the channel works without it.
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_method() -> u8 {
    2
}

fn default_cache_ttl_hours() -> u64 {
    24
}

fn default_language() -> String {
    "en".to_string()
}

fn default_latitude() -> f64 {
    21.4225
}

fn default_longitude() -> f64 {
    39.8262
}

fn default_aladhan_base_url() -> String {
    "https://api.aladhan.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}
