// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Minaret prayer notification engine.
//!
//! This crate provides the foundational trait definitions, error type, and
//! domain types used throughout the Minaret workspace. Channel adapters and
//! the prayer-time provider implement or consume the traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::MinaretError;
pub use traits::{Clock, PushChannel, SystemClock};
pub use types::{
    BulkDispatchResult, ChannelKind, CommunityEvent, ComposedMessage, DispatchOutcome,
    DispatchResult, IslamicDate, Language, MessageKind, NotificationPreferences, PrayerAlert,
    PrayerName, PrayerSet, QiblaInfo, ALERT_SEQUENCE,
};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::types::*;

    #[test]
    fn prayer_name_round_trips_through_lowercase() {
        for name in [
            PrayerName::Fajr,
            PrayerName::Sunrise,
            PrayerName::Dhuhr,
            PrayerName::Asr,
            PrayerName::Maghrib,
            PrayerName::Isha,
            PrayerName::Jumma,
        ] {
            let s = name.to_string();
            assert_eq!(s, s.to_lowercase());
            assert_eq!(PrayerName::from_str(&s).expect("should parse back"), name);
        }
        assert!(PrayerName::from_str("brunch").is_err());
    }

    #[test]
    fn alert_sequence_is_the_five_alertable_prayers_in_order() {
        assert_eq!(
            ALERT_SEQUENCE,
            [
                PrayerName::Fajr,
                PrayerName::Dhuhr,
                PrayerName::Asr,
                PrayerName::Maghrib,
                PrayerName::Isha,
            ]
        );
    }

    #[test]
    fn device_tokens_ignore_empty_and_whitespace() {
        let tokens = DeviceTokens {
            fcm: Some("  ".into()),
            expo: Some("ExponentPushToken[abc]".into()),
        };
        assert_eq!(tokens.token_for(ChannelKind::Fcm), None);
        assert_eq!(
            tokens.token_for(ChannelKind::Expo),
            Some("ExponentPushToken[abc]")
        );
        assert_eq!(DeviceTokens::default().token_for(ChannelKind::Fcm), None);
    }

    #[test]
    fn dispatch_result_aggregation() {
        let all_failed = DispatchResult::from_outcomes(vec![
            DispatchOutcome::failed(ChannelKind::Fcm, "boom"),
            DispatchOutcome::failed(ChannelKind::Expo, "boom"),
        ]);
        assert!(!all_failed.success);
        assert_eq!(all_failed.outcomes.len(), 2);

        let one_delivered = DispatchResult::from_outcomes(vec![
            DispatchOutcome::failed(ChannelKind::Fcm, "boom"),
            DispatchOutcome::delivered(ChannelKind::Expo, "ticket-1"),
        ]);
        assert!(one_delivered.success);
    }

    #[test]
    fn skipped_result_has_no_outcomes() {
        let skipped = DispatchResult::skipped("fajr alerts disabled");
        assert!(!skipped.success);
        assert!(skipped.outcomes.is_empty());
        assert_eq!(skipped.message.as_deref(), Some("fajr alerts disabled"));
    }

    #[test]
    fn prayer_times_lookup_by_name() {
        let times = PrayerTimes {
            fajr: "05:00".into(),
            sunrise: "06:15".into(),
            dhuhr: "12:30".into(),
            asr: "15:45".into(),
            maghrib: "18:20".into(),
            isha: "20:00".into(),
            jumma: "12:30".into(),
        };
        assert_eq!(times.time_of(PrayerName::Asr), "15:45");
        assert_eq!(times.time_of(PrayerName::Jumma), times.time_of(PrayerName::Dhuhr));
    }

    #[test]
    fn preferences_deserialize_with_defaults() {
        let prefs: NotificationPreferences =
            serde_json::from_str(r#"{"user_id": "u-1"}"#).expect("minimal prefs should parse");
        assert_eq!(prefs.user_id, "u-1");
        assert!(!prefs.events_enabled);
        assert!(prefs.per_prayer.is_empty());
        assert_eq!(prefs.language, Language::En);
    }
}
