// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Expo push channel adapter for the Minaret notification engine.
//!
//! Implements [`PushChannel`] over the Expo push API (channel B). Expo
//! accepts a batch of messages and answers with one ticket per recipient,
//! so a multi-recipient send can partially fail; the engine addresses
//! exactly one token per call, which collapses the ticket accounting to
//! that single ticket's ok/error. Failures are captured into the returned
//! [`DispatchOutcome`]; this adapter never raises.

use std::time::Duration;

use async_trait::async_trait;
use minaret_core::types::{ChannelKind, ComposedMessage, DispatchOutcome};
use minaret_core::{MinaretError, PushChannel};
use serde::Deserialize;
use tracing::{debug, warn};

/// Production push endpoint.
pub const EXPO_PUSH_URL: &str = "https://exp.host/--/api/v2/push/send";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One delivery ticket from the Expo push API.
#[derive(Debug, Clone, Deserialize)]
struct ExpoTicket {
    status: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExpoResponse {
    #[serde(default)]
    data: Vec<ExpoTicket>,
}

/// Expo delivery channel (channel B).
pub struct ExpoChannel {
    client: reqwest::Client,
    access_token: Option<String>,
    push_url: String,
}

impl ExpoChannel {
    /// Creates the adapter. The access token is optional; Expo accepts
    /// unauthenticated sends for tokens of unrestricted projects.
    pub fn new(access_token: Option<String>) -> Result<Self, MinaretError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MinaretError::Channel {
                message: format!("failed to build Expo HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            access_token: access_token.filter(|t| !t.trim().is_empty()),
            push_url: EXPO_PUSH_URL.to_string(),
        })
    }

    /// Overrides the push endpoint (for testing with wiremock).
    pub fn with_push_url(mut self, url: impl Into<String>) -> Self {
        self.push_url = url.into();
        self
    }
}

/// Collapses a ticket batch into one outcome. With several tickets a
/// partial failure is reported as counts; the engine's single-token sends
/// reduce this to the lone ticket's status.
fn outcome_from_tickets(tickets: &[ExpoTicket]) -> DispatchOutcome {
    let ok = tickets.iter().filter(|t| t.status == "ok").count();
    let failed = tickets.len() - ok;

    if tickets.is_empty() {
        return DispatchOutcome::failed(ChannelKind::Expo, "Expo returned no delivery tickets");
    }

    if failed == 0 {
        let id = tickets[0]
            .id
            .clone()
            .unwrap_or_else(|| "unknown".to_string());
        return DispatchOutcome::delivered(ChannelKind::Expo, id);
    }

    let detail = if tickets.len() == 1 {
        tickets[0]
            .message
            .clone()
            .unwrap_or_else(|| "Expo reported delivery failure".to_string())
    } else {
        format!("{failed}/{} recipients failed", tickets.len())
    };
    DispatchOutcome::failed(ChannelKind::Expo, detail)
}

#[async_trait]
impl PushChannel for ExpoChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Expo
    }

    fn name(&self) -> &str {
        "expo"
    }

    async fn send_push(&self, token: &str, message: &ComposedMessage) -> DispatchOutcome {
        let payload = serde_json::json!([{
            "to": token,
            "title": message.title,
            "body": message.body,
            "sound": message.sound,
            "channelId": message.channel_group,
            "data": {
                "kind": message.kind,
                "prayer": message.prayer,
                "event_id": message.event_id,
                "tap_action": message.tap_action,
            },
        }]);

        let mut request = self.client.post(&self.push_url).json(&payload);
        if let Some(access_token) = self.access_token.as_deref() {
            request = request.header("Authorization", format!("Bearer {access_token}"));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Expo request failed");
                return DispatchOutcome::failed(
                    ChannelKind::Expo,
                    format!("HTTP request failed: {e}"),
                );
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Expo rejected the request");
            return DispatchOutcome::failed(
                ChannelKind::Expo,
                format!("Expo returned {status}: {body}"),
            );
        }

        let parsed: ExpoResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                return DispatchOutcome::failed(
                    ChannelKind::Expo,
                    format!("failed to parse Expo response: {e}"),
                );
            }
        };

        debug!(tickets = parsed.data.len(), "Expo send accounted");
        outcome_from_tickets(&parsed.data)
    }
}
