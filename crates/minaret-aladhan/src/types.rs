// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw AlAdhan API response shapes and their normalization into domain types.
//!
//! The API owns these formats; we adapt whatever it returns and never send
//! a format of our own. Timing strings arrive with a trailing timezone
//! annotation (`"05:01 (PKT)"`) which normalization strips.

use minaret_core::types::{PrayerDate, PrayerSet, PrayerTimes, QiblaInfo};
use serde::Deserialize;

/// Response envelope common to every AlAdhan endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

/// One day's record from `/timings/{date}` or one element of `/calendar`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDay {
    pub timings: RawTimings,
    pub date: RawDate,
    #[serde(default)]
    pub meta: serde_json::Value,
}

/// Named timing strings for one day. The API returns more entries
/// (Sunset, Imsak, Midnight); only the ones the engine uses are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTimings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Sunrise")]
    pub sunrise: String,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
}

/// Calendar block carrying both Gregorian and Hijri dates.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDate {
    pub readable: String,
    pub gregorian: RawCalendarDate,
    pub hijri: RawCalendarDate,
}

/// One calendar system's date, `DD-MM-YYYY`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCalendarDate {
    pub date: String,
}

/// Payload of `/qibla/{latitude}/{longitude}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQibla {
    pub latitude: f64,
    pub longitude: f64,
    pub direction: f64,
}

/// Strips the trailing timezone annotation from a raw timing string,
/// keeping the first whitespace-delimited token: `"15:45 (GMT)"` → `"15:45"`.
pub fn normalize_time(raw: &str) -> String {
    raw.split_whitespace().next().unwrap_or("").to_string()
}

impl RawDay {
    /// Normalizes this record into an immutable [`PrayerSet`], deriving
    /// `jumma` from `dhuhr`.
    pub fn into_prayer_set(self) -> PrayerSet {
        let dhuhr = normalize_time(&self.timings.dhuhr);
        PrayerSet {
            date: PrayerDate {
                readable: self.date.readable,
                gregorian: self.date.gregorian.date,
                hijri: self.date.hijri.date,
            },
            times: PrayerTimes {
                fajr: normalize_time(&self.timings.fajr),
                sunrise: normalize_time(&self.timings.sunrise),
                jumma: dhuhr.clone(),
                dhuhr,
                asr: normalize_time(&self.timings.asr),
                maghrib: normalize_time(&self.timings.maghrib),
                isha: normalize_time(&self.timings.isha),
            },
            meta: self.meta,
        }
    }
}

impl From<RawQibla> for QiblaInfo {
    fn from(raw: RawQibla) -> Self {
        Self {
            direction: raw.direction,
            latitude: raw.latitude,
            longitude: raw.longitude,
        }
    }
}
