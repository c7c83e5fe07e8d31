// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! FCM push channel adapter for the Minaret notification engine.
//!
//! Implements [`PushChannel`] over the FCM HTTP send endpoint. Every
//! failure mode — missing server key, transport error, non-success
//! response, rejected token — is captured into the returned
//! [`DispatchOutcome`]; this adapter never raises.

use std::time::Duration;

use async_trait::async_trait;
use minaret_core::types::{ChannelKind, ComposedMessage, DispatchOutcome};
use minaret_core::{MinaretError, PushChannel};
use serde::Deserialize;
use tracing::{debug, warn};

/// Production send endpoint.
pub const FCM_SEND_URL: &str = "https://fcm.googleapis.com/fcm/send";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-token result inside an FCM send response.
#[derive(Debug, Deserialize)]
struct FcmResult {
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// FCM send response: counts plus one result per addressed token.
#[derive(Debug, Deserialize)]
struct FcmResponse {
    #[serde(default)]
    success: u32,
    #[serde(default)]
    failure: u32,
    #[serde(default)]
    results: Vec<FcmResult>,
}

/// FCM delivery channel (channel A).
///
/// Constructed with an optional server key; without one the channel is
/// unconfigured and every send reports failure without touching the
/// network.
pub struct FcmChannel {
    client: reqwest::Client,
    server_key: Option<String>,
    send_url: String,
}

impl FcmChannel {
    /// Creates the adapter. `server_key = None` leaves the channel
    /// unconfigured but constructible, so dispatch accounting still
    /// records its outcomes.
    pub fn new(server_key: Option<String>) -> Result<Self, MinaretError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MinaretError::Channel {
                message: format!("failed to build FCM HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            server_key: server_key.filter(|k| !k.trim().is_empty()),
            send_url: FCM_SEND_URL.to_string(),
        })
    }

    /// Overrides the send endpoint (for testing with wiremock).
    pub fn with_send_url(mut self, url: impl Into<String>) -> Self {
        self.send_url = url.into();
        self
    }
}

#[async_trait]
impl PushChannel for FcmChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Fcm
    }

    fn name(&self) -> &str {
        "fcm"
    }

    async fn send_push(&self, token: &str, message: &ComposedMessage) -> DispatchOutcome {
        let Some(server_key) = self.server_key.as_deref() else {
            return DispatchOutcome::failed(ChannelKind::Fcm, "fcm channel not configured");
        };

        let payload = serde_json::json!({
            "to": token,
            "notification": {
                "title": message.title,
                "body": message.body,
                "sound": message.sound,
                "android_channel_id": message.channel_group,
            },
            "data": {
                "kind": message.kind,
                "prayer": message.prayer,
                "event_id": message.event_id,
                "tap_action": message.tap_action,
            },
        });

        let response = match self
            .client
            .post(&self.send_url)
            .header("Authorization", format!("key={server_key}"))
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "FCM request failed");
                return DispatchOutcome::failed(
                    ChannelKind::Fcm,
                    format!("HTTP request failed: {e}"),
                );
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "FCM rejected the request");
            return DispatchOutcome::failed(
                ChannelKind::Fcm,
                format!("FCM returned {status}: {body}"),
            );
        }

        let parsed: FcmResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                return DispatchOutcome::failed(
                    ChannelKind::Fcm,
                    format!("failed to parse FCM response: {e}"),
                );
            }
        };

        debug!(
            success = parsed.success,
            failure = parsed.failure,
            "FCM send accounted"
        );

        if parsed.success >= 1 {
            let message_id = parsed
                .results
                .first()
                .and_then(|r| r.message_id.clone())
                .unwrap_or_else(|| "unknown".to_string());
            DispatchOutcome::delivered(ChannelKind::Fcm, message_id)
        } else {
            let detail = parsed
                .results
                .first()
                .and_then(|r| r.error.clone())
                .unwrap_or_else(|| "FCM reported delivery failure".to_string());
            DispatchOutcome::failed(ChannelKind::Fcm, detail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minaret_core::types::{MessageKind, PrayerName};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message() -> ComposedMessage {
        ComposedMessage {
            title: "Asr Prayer".into(),
            body: "Asr prayer time is at 15:45".into(),
            kind: MessageKind::Prayer,
            prayer: Some(PrayerName::Asr),
            event_id: None,
            sound: "adhan.mp3".into(),
            channel_group: "prayer-alerts".into(),
            tap_action: "open-prayer-times".into(),
        }
    }

    async fn channel_against(server: &MockServer) -> FcmChannel {
        FcmChannel::new(Some("server-key-1".into()))
            .unwrap()
            .with_send_url(format!("{}/fcm/send", server.uri()))
    }

    #[tokio::test]
    async fn successful_send_reports_message_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/fcm/send"))
            .and(header("Authorization", "key=server-key-1"))
            .and(body_partial_json(serde_json::json!({
                "to": "device-token-1",
                "notification": { "title": "Asr Prayer" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "multicast_id": 1,
                "success": 1,
                "failure": 0,
                "results": [{ "message_id": "0:165432" }]
            })))
            .mount(&server)
            .await;

        let channel = channel_against(&server).await;
        let outcome = channel.send_push("device-token-1", &message()).await;

        assert!(outcome.success);
        assert_eq!(outcome.channel, ChannelKind::Fcm);
        assert_eq!(outcome.provider_message_id.as_deref(), Some("0:165432"));
    }

    #[tokio::test]
    async fn rejected_token_is_captured_not_raised() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/fcm/send"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": 0,
                "failure": 1,
                "results": [{ "error": "NotRegistered" }]
            })))
            .mount(&server)
            .await;

        let channel = channel_against(&server).await;
        let outcome = channel.send_push("stale-token", &message()).await;

        assert!(!outcome.success);
        assert_eq!(outcome.error_detail.as_deref(), Some("NotRegistered"));
    }

    #[tokio::test]
    async fn http_error_is_captured_not_raised() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/fcm/send"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .mount(&server)
            .await;

        let channel = channel_against(&server).await;
        let outcome = channel.send_push("device-token-1", &message()).await;

        assert!(!outcome.success);
        let detail = outcome.error_detail.unwrap();
        assert!(detail.contains("401"), "got: {detail}");
    }

    #[tokio::test]
    async fn unconfigured_channel_fails_without_network_call() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let channel = FcmChannel::new(None)
            .unwrap()
            .with_send_url(format!("{}/fcm/send", server.uri()));
        let outcome = channel.send_push("device-token-1", &message()).await;

        assert!(!outcome.success);
        assert_eq!(
            outcome.error_detail.as_deref(),
            Some("fcm channel not configured")
        );
    }

    #[tokio::test]
    async fn blank_server_key_counts_as_unconfigured() {
        let channel = FcmChannel::new(Some("   ".into())).unwrap();
        let outcome = channel.send_push("device-token-1", &message()).await;
        assert!(!outcome.success);
    }
}
