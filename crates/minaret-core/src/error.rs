// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Minaret notification engine.

use thiserror::Error;

/// The primary error type used across all Minaret components.
#[derive(Debug, Error)]
pub enum MinaretError {
    /// Configuration errors (invalid TOML, missing required fields, out-of-range values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Prayer-time provider errors (AlAdhan unreachable, request timeout,
    /// non-success envelope).
    ///
    /// Always propagated to the caller: without timing data there is no
    /// message body to compose.
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Push channel errors (transport failure, rejected token).
    ///
    /// Channel adapters capture these into [`DispatchOutcome`] records
    /// instead of returning them; this variant exists for construction
    /// paths (e.g. building an HTTP client from bad credentials).
    ///
    /// [`DispatchOutcome`]: crate::types::DispatchOutcome
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl MinaretError {
    /// Shorthand for a provider error without an underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }
}
