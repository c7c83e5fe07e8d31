// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Next-prayer and alert-window evaluation over one day's prayer times.
//!
//! Pure and synchronous; "now" is always injected as minutes since
//! midnight, never read from the system clock.

use minaret_core::types::{PrayerName, PrayerSet, ALERT_SEQUENCE};

use crate::time::{minutes_of_day, Remaining};

/// The next upcoming prayer relative to an injected "now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPrayer {
    pub prayer: PrayerName,
    /// The prayer's time of day, `HH:MM`.
    pub time: String,
    pub remaining: Remaining,
}

/// A prayer whose alert window contains "now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMatch {
    pub prayer: PrayerName,
    pub time: String,
    /// Signed minutes from now to the prayer; negative once it has passed.
    pub minutes_until: i64,
}

/// Returns the first prayer in [`ALERT_SEQUENCE`] whose time strictly
/// exceeds `now_minutes`, or tomorrow's Fajr when the day's prayers are
/// all behind us.
///
/// Entries whose time string fails to parse are skipped.
pub fn next_prayer(set: &PrayerSet, now_minutes: u32) -> NextPrayer {
    for prayer in ALERT_SEQUENCE {
        let time = set.times.time_of(prayer);
        let Some(prayer_minutes) = minutes_of_day(time) else {
            continue;
        };
        if prayer_minutes > now_minutes {
            return NextPrayer {
                prayer,
                time: time.to_string(),
                remaining: Remaining::Until(prayer_minutes - now_minutes),
            };
        }
    }

    NextPrayer {
        prayer: PrayerName::Fajr,
        time: set.times.fajr.clone(),
        remaining: Remaining::NextDay,
    }
}

/// Returns the first prayer in [`ALERT_SEQUENCE`] whose absolute distance
/// from `now_minutes` is at most `alert_minutes`; ties resolve by sequence
/// order (Fajr first).
///
/// Distance is computed on the plain minutes-of-day axis with no
/// cross-midnight wraparound: a window straddling midnight does not match
/// the adjacent day's prayer.
pub fn alert_window_match(
    set: &PrayerSet,
    now_minutes: u32,
    alert_minutes: u32,
) -> Option<AlertMatch> {
    for prayer in ALERT_SEQUENCE {
        let time = set.times.time_of(prayer);
        let Some(prayer_minutes) = minutes_of_day(time) else {
            continue;
        };
        let minutes_until = i64::from(prayer_minutes) - i64::from(now_minutes);
        if minutes_until.unsigned_abs() <= u64::from(alert_minutes) {
            return Some(AlertMatch {
                prayer,
                time: time.to_string(),
                minutes_until,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use minaret_core::types::{PrayerDate, PrayerTimes};

    fn day() -> PrayerSet {
        PrayerSet {
            date: PrayerDate {
                readable: "08 Aug 2026".into(),
                gregorian: "08-08-2026".into(),
                hijri: "24-02-1448".into(),
            },
            times: PrayerTimes {
                fajr: "05:00".into(),
                sunrise: "06:15".into(),
                dhuhr: "12:30".into(),
                asr: "15:45".into(),
                maghrib: "18:20".into(),
                isha: "20:00".into(),
                jumma: "12:30".into(),
            },
            meta: serde_json::Value::Null,
        }
    }

    #[test]
    fn next_prayer_mid_afternoon_is_asr() {
        let next = next_prayer(&day(), 13 * 60);
        assert_eq!(next.prayer, PrayerName::Asr);
        assert_eq!(next.time, "15:45");
        assert_eq!(next.remaining, Remaining::Until(165));
        assert_eq!(next.remaining.to_string(), "2h 45m");
    }

    #[test]
    fn next_prayer_after_isha_rolls_to_fajr_next_day() {
        let next = next_prayer(&day(), 21 * 60);
        assert_eq!(next.prayer, PrayerName::Fajr);
        assert_eq!(next.time, "05:00");
        assert_eq!(next.remaining, Remaining::NextDay);
    }

    #[test]
    fn next_prayer_at_exact_prayer_time_moves_on() {
        // 12:30 is not strictly after 12:30, so Asr is next.
        let next = next_prayer(&day(), 12 * 60 + 30);
        assert_eq!(next.prayer, PrayerName::Asr);
    }

    #[test]
    fn next_prayer_before_dawn_is_fajr_today() {
        let next = next_prayer(&day(), 4 * 60);
        assert_eq!(next.prayer, PrayerName::Fajr);
        assert_eq!(next.remaining, Remaining::Until(60));
    }

    #[test]
    fn window_matches_dhuhr_five_minutes_before() {
        let matched = alert_window_match(&day(), 12 * 60 + 25, 10).expect("should match");
        assert_eq!(matched.prayer, PrayerName::Dhuhr);
        assert_eq!(matched.time, "12:30");
        assert_eq!(matched.minutes_until, 5);
    }

    #[test]
    fn window_misses_at_twenty_minutes_distance() {
        assert_eq!(alert_window_match(&day(), 12 * 60 + 50, 10), None);
    }

    #[test]
    fn window_matches_after_the_prayer_with_negative_minutes() {
        let matched = alert_window_match(&day(), 12 * 60 + 35, 10).expect("should match");
        assert_eq!(matched.prayer, PrayerName::Dhuhr);
        assert_eq!(matched.minutes_until, -5);
    }

    #[test]
    fn window_ties_resolve_in_sequence_order() {
        // A window wide enough to cover both Fajr (05:00) and Dhuhr (12:30)
        // from 09:00 reports Fajr, the earlier entry in the sequence.
        let matched = alert_window_match(&day(), 9 * 60, 300).expect("should match");
        assert_eq!(matched.prayer, PrayerName::Fajr);
    }

    #[test]
    fn window_does_not_wrap_across_midnight() {
        // 23:55 is 5 minutes from midnight; Fajr at 05:00 is 18h away on
        // the plain axis and must not match through the wrap.
        assert_eq!(alert_window_match(&day(), 23 * 60 + 55, 10), None);
    }

    #[test]
    fn unparseable_entries_are_skipped() {
        let mut set = day();
        set.times.fajr = "--:--".into();
        let next = next_prayer(&set, 4 * 60);
        assert_eq!(next.prayer, PrayerName::Dhuhr);
        assert_eq!(alert_window_match(&set, 5 * 60, 10), None);
    }
}
