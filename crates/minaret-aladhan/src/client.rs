// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the AlAdhan prayer-times API.
//!
//! Provides [`AladhanClient`] which handles request construction, the
//! fixed per-request timeout, and envelope status checking. The client
//! performs no retries; callers decide whether a failed fetch is worth
//! repeating.

use std::time::Duration;

use minaret_core::MinaretError;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{Envelope, RawDay, RawQibla};

/// Base URL for the AlAdhan API.
pub const API_BASE_URL: &str = "https://api.aladhan.com/v1";

/// Default per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for AlAdhan endpoints.
#[derive(Debug, Clone)]
pub struct AladhanClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl AladhanClient {
    /// Creates a client against the given base URL with the default
    /// timeout (tests point the URL at a wiremock server; production uses
    /// [`API_BASE_URL`]).
    pub fn new(base_url: impl Into<String>) -> Result<Self, MinaretError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Creates a client with an explicit per-request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, MinaretError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MinaretError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    /// Fetches one day's timings. `date` is `DD-MM-YYYY`.
    pub async fn timings(
        &self,
        latitude: f64,
        longitude: f64,
        date: &str,
        method: u8,
        timezone: Option<&str>,
    ) -> Result<RawDay, MinaretError> {
        let url = format!("{}/timings/{date}", self.base_url);
        let mut query = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("method", method.to_string()),
        ];
        if let Some(tz) = timezone {
            query.push(("timezonestring", tz.to_string()));
        }

        let envelope: Envelope<RawDay> = self.get_json(&url, &query).await?;
        Ok(envelope.data)
    }

    /// Fetches a whole month of timings.
    pub async fn calendar(
        &self,
        latitude: f64,
        longitude: f64,
        year: i32,
        month: u32,
        method: u8,
    ) -> Result<Vec<RawDay>, MinaretError> {
        let url = format!("{}/calendar", self.base_url);
        let query = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("month", month.to_string()),
            ("year", year.to_string()),
            ("method", method.to_string()),
        ];

        let envelope: Envelope<Vec<RawDay>> = self.get_json(&url, &query).await?;
        Ok(envelope.data)
    }

    /// Fetches the Qibla bearing for a coordinate pair.
    pub async fn qibla(&self, latitude: f64, longitude: f64) -> Result<RawQibla, MinaretError> {
        let url = format!("{}/qibla/{latitude}/{longitude}", self.base_url);
        let envelope: Envelope<RawQibla> = self.get_json(&url, &[]).await?;
        Ok(envelope.data)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Envelope<T>, MinaretError> {
        debug!(url, "requesting AlAdhan endpoint");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    format!("request timed out after {:?}: {e}", self.timeout)
                } else {
                    format!("HTTP request failed: {e}")
                };
                MinaretError::Provider {
                    message,
                    source: Some(Box::new(e)),
                }
            })?;

        let status = response.status();
        debug!(status = %status, url, "AlAdhan response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MinaretError::provider(format!(
                "AlAdhan returned {status}: {body}"
            )));
        }

        let envelope: Envelope<T> =
            response.json().await.map_err(|e| MinaretError::Provider {
                message: format!("failed to parse AlAdhan response: {e}"),
                source: Some(Box::new(e)),
            })?;

        if envelope.code != 200 {
            return Err(MinaretError::provider(format!(
                "AlAdhan reported {} ({})",
                envelope.code, envelope.status
            )));
        }

        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_day() -> serde_json::Value {
        serde_json::json!({
            "timings": {
                "Fajr": "05:00 (PKT)",
                "Sunrise": "06:15 (PKT)",
                "Dhuhr": "12:30 (PKT)",
                "Asr": "15:45 (PKT)",
                "Maghrib": "18:20 (PKT)",
                "Isha": "20:00 (PKT)"
            },
            "date": {
                "readable": "08 Aug 2026",
                "gregorian": { "date": "08-08-2026" },
                "hijri": { "date": "24-02-1448" }
            },
            "meta": { "timezone": "Asia/Karachi" }
        })
    }

    #[tokio::test]
    async fn timings_success() {
        let server = MockServer::start().await;
        let body = serde_json::json!({ "code": 200, "status": "OK", "data": sample_day() });

        Mock::given(method("GET"))
            .and(path("/timings/08-08-2026"))
            .and(query_param("latitude", "24.8607"))
            .and(query_param("longitude", "67.0011"))
            .and(query_param("method", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = AladhanClient::new(server.uri()).unwrap();
        let day = client
            .timings(24.8607, 67.0011, "08-08-2026", 2, None)
            .await
            .unwrap();

        assert_eq!(day.timings.fajr, "05:00 (PKT)");
        assert_eq!(day.date.gregorian.date, "08-08-2026");
    }

    #[tokio::test]
    async fn timings_passes_timezone_when_given() {
        let server = MockServer::start().await;
        let body = serde_json::json!({ "code": 200, "status": "OK", "data": sample_day() });

        Mock::given(method("GET"))
            .and(path("/timings/08-08-2026"))
            .and(query_param("timezonestring", "Asia/Karachi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let client = AladhanClient::new(server.uri()).unwrap();
        client
            .timings(24.8607, 67.0011, "08-08-2026", 2, Some("Asia/Karachi"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn timings_fails_on_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/timings/08-08-2026"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let client = AladhanClient::new(server.uri()).unwrap();
        let err = client
            .timings(24.8607, 67.0011, "08-08-2026", 2, None)
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("500"), "got: {msg}");
    }

    #[tokio::test]
    async fn timings_fails_on_non_success_envelope() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "code": 404,
            "status": "Please specify a valid date",
            "data": sample_day()
        });

        Mock::given(method("GET"))
            .and(path("/timings/99-99-2026"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = AladhanClient::new(server.uri()).unwrap();
        let err = client
            .timings(24.8607, 67.0011, "99-99-2026", 2, None)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("404"), "got: {err}");
    }

    #[tokio::test]
    async fn calendar_returns_every_day() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "code": 200,
            "status": "OK",
            "data": [sample_day(), sample_day(), sample_day()]
        });

        Mock::given(method("GET"))
            .and(path("/calendar"))
            .and(query_param("month", "8"))
            .and(query_param("year", "2026"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = AladhanClient::new(server.uri()).unwrap();
        let days = client.calendar(24.8607, 67.0011, 2026, 8, 2).await.unwrap();
        assert_eq!(days.len(), 3);
    }

    #[tokio::test]
    async fn qibla_success() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "code": 200,
            "status": "OK",
            "data": { "latitude": 24.8607, "longitude": 67.0011, "direction": 267.04 }
        });

        Mock::given(method("GET"))
            .and(path("/qibla/24.8607/67.0011"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = AladhanClient::new(server.uri()).unwrap();
        let qibla = client.qibla(24.8607, 67.0011).await.unwrap();
        assert_eq!(qibla.direction, 267.04);
    }

    #[tokio::test]
    async fn connection_refused_surfaces_as_provider_error() {
        // Nothing is listening on this port.
        let client = AladhanClient::new("http://127.0.0.1:9").unwrap();
        let err = client
            .timings(24.8607, 67.0011, "08-08-2026", 2, None)
            .await
            .unwrap_err();
        assert!(matches!(err, MinaretError::Provider { .. }));
    }
}
