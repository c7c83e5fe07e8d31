// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./minaret.toml` > `~/.config/minaret/minaret.toml`
//! > `/etc/minaret/minaret.toml` with environment variable overrides via
//! the `MINARET_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::MinaretConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/minaret/minaret.toml` (system-wide)
/// 3. `~/.config/minaret/minaret.toml` (user XDG config)
/// 4. `./minaret.toml` (local directory)
/// 5. `MINARET_*` environment variables
pub fn load_config() -> Result<MinaretConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MinaretConfig::default()))
        .merge(Toml::file("/etc/minaret/minaret.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("minaret/minaret.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("minaret.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<MinaretConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MinaretConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MinaretConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MinaretConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `MINARET_FCM_SERVER_KEY` must map to
/// `fcm.server_key`, not `fcm.server.key`.
fn env_provider() -> Env {
    Env::prefixed("MINARET_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("engine_", "engine.", 1)
            .replacen("location_", "location.", 1)
            .replacen("aladhan_", "aladhan.", 1)
            .replacen("fcm_", "fcm.", 1)
            .replacen("expo_", "expo.", 1);
        mapped.into()
    })
}
