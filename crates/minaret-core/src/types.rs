// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Minaret workspace.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Canonical prayer names, including the Friday congregational prayer.
///
/// `Jumma` is never computed independently; providers derive it from
/// `Dhuhr`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    Jumma,
}

/// The five prayers scanned, in order, by next-prayer and alert-window
/// evaluation. Sunrise and Jumma are display-only.
pub const ALERT_SEQUENCE: [PrayerName; 5] = [
    PrayerName::Fajr,
    PrayerName::Dhuhr,
    PrayerName::Asr,
    PrayerName::Maghrib,
    PrayerName::Isha,
];

/// Notification languages. Template tables exist for `En` and `Ar`;
/// everything else falls back to `En` at composition time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
    Ur,
}

/// The two push delivery channels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Fcm,
    Expo,
}

/// Calendar context for one day's prayer times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerDate {
    /// Human-readable date, e.g. `"08 Aug 2026"`.
    pub readable: String,
    /// Gregorian date as `DD-MM-YYYY`.
    pub gregorian: String,
    /// Hijri date as `DD-MM-YYYY`.
    pub hijri: String,
}

/// Normalized times-of-day for one calendar day, all `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimes {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    /// Always mirrors `dhuhr`.
    pub jumma: String,
}

impl PrayerTimes {
    /// Returns the time string for a prayer by name.
    pub fn time_of(&self, prayer: PrayerName) -> &str {
        match prayer {
            PrayerName::Fajr => &self.fajr,
            PrayerName::Sunrise => &self.sunrise,
            PrayerName::Dhuhr => &self.dhuhr,
            PrayerName::Asr => &self.asr,
            PrayerName::Maghrib => &self.maghrib,
            PrayerName::Isha => &self.isha,
            PrayerName::Jumma => &self.jumma,
        }
    }
}

/// One day's prayer times with calendar context, as produced by the
/// provider. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerSet {
    pub date: PrayerDate,
    pub times: PrayerTimes,
    /// Provider-supplied metadata (calculation method, timezone, offsets),
    /// kept verbatim.
    pub meta: serde_json::Value,
}

/// Qibla bearing for a coordinate pair. Constant for a fixed location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QiblaInfo {
    /// Compass bearing in degrees from true north.
    pub direction: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Hijri/Gregorian date pair for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslamicDate {
    pub hijri: String,
    pub gregorian: String,
}

/// Per-prayer alert preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerAlert {
    pub enabled: bool,
    /// Width of the alert window in minutes around the prayer time.
    pub alert_minutes: u32,
}

/// Device tokens per channel. `None` or an empty string means the channel
/// is not configured for this user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTokens {
    #[serde(default)]
    pub fcm: Option<String>,
    #[serde(default)]
    pub expo: Option<String>,
}

impl DeviceTokens {
    /// Returns the non-empty token for a channel, if any.
    pub fn token_for(&self, kind: ChannelKind) -> Option<&str> {
        let token = match kind {
            ChannelKind::Fcm => self.fcm.as_deref(),
            ChannelKind::Expo => self.expo.as_deref(),
        };
        token.map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Read-only projection of one user's notification preferences, supplied
/// by the external preference store. The engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub user_id: String,
    #[serde(default)]
    pub per_prayer: HashMap<PrayerName, PrayerAlert>,
    #[serde(default)]
    pub events_enabled: bool,
    /// Category opt-ins; a category absent from the map counts as opted-out.
    #[serde(default)]
    pub event_categories: HashMap<String, bool>,
    #[serde(default)]
    pub device_tokens: DeviceTokens,
    #[serde(default)]
    pub language: Language,
}

/// A community event to announce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// What a composed message announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Prayer,
    Event,
    Test,
}

/// A fully composed push payload, single-use per dispatch call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposedMessage {
    pub title: String,
    pub body: String,
    pub kind: MessageKind,
    #[serde(default)]
    pub prayer: Option<PrayerName>,
    #[serde(default)]
    pub event_id: Option<String>,
    pub sound: String,
    /// Android notification channel / grouping identifier.
    pub channel_group: String,
    /// Identifier the app uses to route the notification tap.
    pub tap_action: String,
}

/// Result of one send attempt on one channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchOutcome {
    pub channel: ChannelKind,
    pub success: bool,
    #[serde(default)]
    pub provider_message_id: Option<String>,
    #[serde(default)]
    pub error_detail: Option<String>,
}

impl DispatchOutcome {
    /// A successful delivery with the provider's message identifier.
    pub fn delivered(channel: ChannelKind, message_id: impl Into<String>) -> Self {
        Self {
            channel,
            success: true,
            provider_message_id: Some(message_id.into()),
            error_detail: None,
        }
    }

    /// A failed attempt with a human-readable detail string.
    pub fn failed(channel: ChannelKind, detail: impl Into<String>) -> Self {
        Self {
            channel,
            success: false,
            provider_message_id: None,
            error_detail: Some(detail.into()),
        }
    }
}

/// Aggregated result of one dispatch call for one user.
///
/// An eligibility no-op carries `success: false`, an explanatory `message`,
/// and an empty `outcomes` list — distinguishable from a transmission
/// failure, which records one outcome per channel attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub outcomes: Vec<DispatchOutcome>,
}

impl DispatchResult {
    /// An eligibility no-op: nothing was attempted.
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(reason.into()),
            outcomes: Vec::new(),
        }
    }

    /// Aggregates channel outcomes; overall success means at least one
    /// channel delivered.
    pub fn from_outcomes(outcomes: Vec<DispatchOutcome>) -> Self {
        Self {
            success: outcomes.iter().any(|o| o.success),
            message: None,
            outcomes,
        }
    }
}

/// One user's slot in a bulk dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDispatch {
    pub user_id: String,
    pub result: DispatchResult,
}

/// Aggregated result of a bulk event dispatch. `per_user` preserves input
/// order and contains every recipient, failed or not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkDispatchResult {
    pub total_sent: usize,
    pub total_failed: usize,
    pub per_user: Vec<UserDispatch>,
}
