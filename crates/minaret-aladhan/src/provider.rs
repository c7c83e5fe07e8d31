// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cache-backed prayer-time provider.
//!
//! Composes the [`AladhanClient`] with one [`TtlCache`] per data family.
//! Cache keys include every parameter that affects the value, so two
//! logically different requests never collide and identical requests
//! always hit the same entry. Qibla bearings are constant for a coordinate
//! pair and are stored without expiry.

use std::sync::Arc;
use std::time::Duration;

use chrono::Datelike;
use minaret_cache::TtlCache;
use minaret_core::types::{IslamicDate, PrayerSet, QiblaInfo};
use minaret_core::{Clock, MinaretError};
use tracing::debug;

use crate::client::AladhanClient;
use crate::methods::DEFAULT_METHOD;

/// Reference coordinates (Mecca) used for location-agnostic Hijri date
/// display when the caller has no position available.
pub const REFERENCE_COORDINATES: (f64, f64) = (21.4225, 39.8262);

/// Fetches and caches daily/monthly prayer times, Qibla bearings, and the
/// Hijri date.
pub struct PrayerTimeProvider {
    client: AladhanClient,
    clock: Arc<dyn Clock>,
    default_method: u8,
    daily: TtlCache<PrayerSet>,
    monthly: TtlCache<Vec<PrayerSet>>,
    qibla: TtlCache<QiblaInfo>,
    islamic_date: TtlCache<IslamicDate>,
}

impl PrayerTimeProvider {
    /// Creates a provider whose time-bound cache entries live for
    /// `cache_ttl`.
    pub fn new(
        client: AladhanClient,
        clock: Arc<dyn Clock>,
        cache_ttl: Duration,
        default_method: u8,
    ) -> Self {
        Self {
            client,
            default_method,
            daily: TtlCache::new(cache_ttl, clock.clone()),
            monthly: TtlCache::new(cache_ttl, clock.clone()),
            qibla: TtlCache::new(cache_ttl, clock.clone()),
            islamic_date: TtlCache::new(cache_ttl, clock.clone()),
            clock,
        }
    }

    /// Creates a provider with the ISNA default method.
    pub fn with_defaults(client: AladhanClient, clock: Arc<dyn Clock>, cache_ttl: Duration) -> Self {
        Self::new(client, clock, cache_ttl, DEFAULT_METHOD)
    }

    /// One day's prayer times. `date` defaults to the clock's current date
    /// (`DD-MM-YYYY`), `method` to the configured default.
    pub async fn daily_times(
        &self,
        latitude: f64,
        longitude: f64,
        date: Option<&str>,
        method: Option<u8>,
        timezone: Option<&str>,
    ) -> Result<PrayerSet, MinaretError> {
        let date = date.map(str::to_string).unwrap_or_else(|| self.today());
        let method = method.unwrap_or(self.default_method);
        let key = daily_key(latitude, longitude, &date, method, timezone);

        if let Some(set) = self.daily.get(&key) {
            debug!(key, "daily timings served from cache");
            return Ok(set);
        }

        let day = self
            .client
            .timings(latitude, longitude, &date, method, timezone)
            .await?;
        let set = day.into_prayer_set();
        self.daily.set(key, set.clone());
        Ok(set)
    }

    /// A whole month of prayer times. `year` and `month` default to the
    /// clock's current ones.
    pub async fn monthly_times(
        &self,
        latitude: f64,
        longitude: f64,
        year: Option<i32>,
        month: Option<u32>,
        method: Option<u8>,
    ) -> Result<Vec<PrayerSet>, MinaretError> {
        let now = self.clock.now();
        let year = year.unwrap_or_else(|| now.year());
        let month = month.unwrap_or_else(|| now.month());
        let method = method.unwrap_or(self.default_method);
        let key = monthly_key(latitude, longitude, year, month, method);

        if let Some(days) = self.monthly.get(&key) {
            debug!(key, "monthly timings served from cache");
            return Ok(days);
        }

        let raw = self
            .client
            .calendar(latitude, longitude, year, month, method)
            .await?;
        let days: Vec<PrayerSet> = raw.into_iter().map(|d| d.into_prayer_set()).collect();
        self.monthly.set(key, days.clone());
        Ok(days)
    }

    /// Qibla bearing for a coordinate pair. The bearing never changes for
    /// a fixed location, so the entry is stored without expiry.
    pub async fn qibla(&self, latitude: f64, longitude: f64) -> Result<QiblaInfo, MinaretError> {
        let key = qibla_key(latitude, longitude);

        if let Some(info) = self.qibla.get(&key) {
            return Ok(info);
        }

        let raw = self.client.qibla(latitude, longitude).await?;
        let info: QiblaInfo = raw.into();
        self.qibla.set_with_ttl(key, info, None);
        Ok(info)
    }

    /// Today's Hijri/Gregorian date pair, cached per calendar day.
    /// Coordinates default to [`REFERENCE_COORDINATES`] for generic,
    /// location-agnostic display.
    pub async fn islamic_date(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<IslamicDate, MinaretError> {
        let latitude = latitude.unwrap_or(REFERENCE_COORDINATES.0);
        let longitude = longitude.unwrap_or(REFERENCE_COORDINATES.1);
        let date = self.today();
        let key = hijri_key(latitude, longitude, &date);

        if let Some(islamic) = self.islamic_date.get(&key) {
            return Ok(islamic);
        }

        let day = self
            .client
            .timings(latitude, longitude, &date, self.default_method, None)
            .await?;
        let islamic = IslamicDate {
            hijri: day.date.hijri.date,
            gregorian: day.date.gregorian.date,
        };
        self.islamic_date.set(key, islamic.clone());
        Ok(islamic)
    }

    fn today(&self) -> String {
        self.clock.now().format("%d-%m-%Y").to_string()
    }
}

fn daily_key(lat: f64, lon: f64, date: &str, method: u8, timezone: Option<&str>) -> String {
    format!("daily:{lat}:{lon}:{date}:{method}:{}", timezone.unwrap_or("-"))
}

fn monthly_key(lat: f64, lon: f64, year: i32, month: u32, method: u8) -> String {
    format!("monthly:{lat}:{lon}:{year}-{month:02}:{method}")
}

fn qibla_key(lat: f64, lon: f64) -> String {
    format!("qibla:{lat}:{lon}")
}

fn hijri_key(lat: f64, lon: f64, date: &str) -> String {
    format!("hijri:{lat}:{lon}:{date}")
}
