// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure prayer-window evaluation for the Minaret notification engine.
//!
//! Given one day's [`PrayerSet`] and an injected "now" expressed as minutes
//! since midnight, this crate answers two questions with no I/O and no
//! system-clock access:
//!
//! - which prayer is next, and how long until it ([`next_prayer`])
//! - does "now" fall inside a user's alert window ([`alert_window_match`])
//!
//! [`PrayerSet`]: minaret_core::types::PrayerSet

pub mod time;
pub mod window;

pub use time::{minutes_of_day, minutes_since_midnight, Remaining};
pub use window::{alert_window_match, next_prayer, AlertMatch, NextPrayer};
