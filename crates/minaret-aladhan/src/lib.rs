// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AlAdhan API client and cached prayer-time provider for Minaret.
//!
//! [`AladhanClient`] is the thin HTTP layer: request construction, fixed
//! timeout, envelope status checks, no retries. [`PrayerTimeProvider`]
//! layers the TTL caches on top and normalizes raw records into domain
//! types. The calculation-method catalog is a pure lookup table with no
//! network dependency.

pub mod client;
pub mod methods;
pub mod provider;
pub mod types;

pub use client::{AladhanClient, API_BASE_URL, REQUEST_TIMEOUT};
pub use methods::{method_name, CALCULATION_METHODS, DEFAULT_METHOD};
pub use provider::{PrayerTimeProvider, REFERENCE_COORDINATES};
