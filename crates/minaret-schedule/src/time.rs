// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minutes-of-day arithmetic and remaining-duration formatting.

use std::fmt;

use chrono::{NaiveTime, Timelike};

/// Parses `"HH:MM"` into minutes since midnight. Returns `None` for
/// anything that is not a valid 24-hour time.
pub fn minutes_of_day(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Minutes since midnight for a wall-clock time.
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Time left until an upcoming prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    /// Minutes until the prayer, later today.
    Until(u32),
    /// No prayer remains today; the next one is tomorrow's Fajr.
    NextDay,
}

impl fmt::Display for Remaining {
    /// Renders `0m`-`59m` as minutes only and an hour or more as `{h}h {m}m`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Remaining::Until(minutes) if *minutes < 60 => write!(f, "{minutes}m"),
            Remaining::Until(minutes) => write!(f, "{}h {}m", minutes / 60, minutes % 60),
            Remaining::NextDay => write!(f, "next day"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_valid_times() {
        assert_eq!(minutes_of_day("00:00"), Some(0));
        assert_eq!(minutes_of_day("05:00"), Some(300));
        assert_eq!(minutes_of_day("12:30"), Some(750));
        assert_eq!(minutes_of_day("23:59"), Some(1439));
    }

    #[test]
    fn rejects_malformed_times() {
        assert_eq!(minutes_of_day("24:00"), None);
        assert_eq!(minutes_of_day("12:60"), None);
        assert_eq!(minutes_of_day("noon"), None);
        assert_eq!(minutes_of_day("1230"), None);
        assert_eq!(minutes_of_day(""), None);
    }

    #[test]
    fn remaining_formats_minutes_and_hours() {
        assert_eq!(Remaining::Until(0).to_string(), "0m");
        assert_eq!(Remaining::Until(59).to_string(), "59m");
        assert_eq!(Remaining::Until(60).to_string(), "1h 0m");
        assert_eq!(Remaining::Until(165).to_string(), "2h 45m");
        assert_eq!(Remaining::NextDay.to_string(), "next day");
    }

    proptest! {
        #[test]
        fn every_minute_of_day_round_trips(minute in 0u32..1440) {
            let rendered = format!("{:02}:{:02}", minute / 60, minute % 60);
            prop_assert_eq!(minutes_of_day(&rendered), Some(minute));
        }

        #[test]
        fn formatting_splits_hours_consistently(minutes in 60u32..6000) {
            let rendered = Remaining::Until(minutes).to_string();
            let (h, rest) = rendered.split_once("h ").unwrap();
            let m = rest.strip_suffix('m').unwrap();
            let h: u32 = h.parse().unwrap();
            let m: u32 = m.parse().unwrap();
            prop_assert_eq!(h * 60 + m, minutes);
            prop_assert!(m < 60);
        }
    }
}
