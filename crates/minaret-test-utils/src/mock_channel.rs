// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock push channel for deterministic dispatch testing.
//!
//! `MockPushChannel` implements `PushChannel` with captured outbound sends
//! and a scriptable failure mode for exercising per-channel error paths.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use minaret_core::types::{ChannelKind, ComposedMessage, DispatchOutcome};
use minaret_core::PushChannel;

/// A captured send: the device token and the message that went with it.
#[derive(Debug, Clone)]
pub struct CapturedSend {
    pub token: String,
    pub message: ComposedMessage,
}

/// A mock delivery channel for testing.
///
/// Every `send_push` is captured and retrievable via [`sent`]. By default
/// sends succeed with a generated message id; [`fail_with`] switches the
/// channel into a failure mode where every send reports the given detail.
///
/// [`sent`]: MockPushChannel::sent
/// [`fail_with`]: MockPushChannel::fail_with
pub struct MockPushChannel {
    kind: ChannelKind,
    sent: Mutex<Vec<CapturedSend>>,
    failure: Mutex<Option<String>>,
    token_failures: Mutex<HashMap<String, String>>,
}

impl MockPushChannel {
    /// Creates a succeeding mock channel of the given kind.
    pub fn new(kind: ChannelKind) -> Self {
        Self {
            kind,
            sent: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
            token_failures: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a mock channel whose every send fails with `detail`.
    pub fn failing(kind: ChannelKind, detail: impl Into<String>) -> Self {
        let channel = Self::new(kind);
        channel.fail_with(Some(detail.into()));
        channel
    }

    /// Scripts the failure mode: `Some(detail)` makes every subsequent send
    /// fail, `None` restores success.
    pub fn fail_with(&self, detail: Option<String>) {
        *self.failure.lock().expect("mock channel lock") = detail;
    }

    /// Scripts a failure for one specific device token; sends to other
    /// tokens keep succeeding.
    pub fn fail_for_token(&self, token: impl Into<String>, detail: impl Into<String>) {
        self.token_failures
            .lock()
            .expect("mock channel lock")
            .insert(token.into(), detail.into());
    }

    /// All sends captured so far, in order.
    pub fn sent(&self) -> Vec<CapturedSend> {
        self.sent.lock().expect("mock channel lock").clone()
    }

    /// Count of captured sends.
    pub fn sent_count(&self) -> usize {
        self.sent.lock().expect("mock channel lock").len()
    }

    /// Drops all captured sends.
    pub fn clear_sent(&self) {
        self.sent.lock().expect("mock channel lock").clear();
    }
}

#[async_trait]
impl PushChannel for MockPushChannel {
    fn kind(&self) -> ChannelKind {
        self.kind
    }

    fn name(&self) -> &str {
        match self.kind {
            ChannelKind::Fcm => "mock-fcm",
            ChannelKind::Expo => "mock-expo",
        }
    }

    async fn send_push(&self, token: &str, message: &ComposedMessage) -> DispatchOutcome {
        self.sent.lock().expect("mock channel lock").push(CapturedSend {
            token: token.to_string(),
            message: message.clone(),
        });

        if let Some(detail) = self
            .token_failures
            .lock()
            .expect("mock channel lock")
            .get(token)
        {
            return DispatchOutcome::failed(self.kind, detail.clone());
        }

        let failure = self.failure.lock().expect("mock channel lock").clone();
        match failure {
            Some(detail) => DispatchOutcome::failed(self.kind, detail),
            None => {
                DispatchOutcome::delivered(self.kind, format!("mock-msg-{}", uuid::Uuid::new_v4()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minaret_core::types::MessageKind;

    fn message() -> ComposedMessage {
        ComposedMessage {
            title: "title".into(),
            body: "body".into(),
            kind: MessageKind::Test,
            prayer: None,
            event_id: None,
            sound: "default".into(),
            channel_group: "test".into(),
            tap_action: "test".into(),
        }
    }

    #[tokio::test]
    async fn send_captures_token_and_message() {
        let channel = MockPushChannel::new(ChannelKind::Fcm);
        let outcome = channel.send_push("device-1", &message()).await;

        assert!(outcome.success);
        assert!(outcome
            .provider_message_id
            .as_deref()
            .unwrap()
            .starts_with("mock-msg-"));

        let sent = channel.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].token, "device-1");
        assert_eq!(sent[0].message.title, "title");
    }

    #[tokio::test]
    async fn failing_channel_still_captures_the_attempt() {
        let channel = MockPushChannel::failing(ChannelKind::Expo, "device not registered");
        let outcome = channel.send_push("device-2", &message()).await;

        assert!(!outcome.success);
        assert_eq!(outcome.error_detail.as_deref(), Some("device not registered"));
        assert_eq!(channel.sent_count(), 1);
    }

    #[tokio::test]
    async fn per_token_failure_only_affects_that_token() {
        let channel = MockPushChannel::new(ChannelKind::Expo);
        channel.fail_for_token("bad-token", "DeviceNotRegistered");

        assert!(!channel.send_push("bad-token", &message()).await.success);
        assert!(channel.send_push("good-token", &message()).await.success);
    }

    #[tokio::test]
    async fn failure_mode_is_reversible() {
        let channel = MockPushChannel::new(ChannelKind::Fcm);
        channel.fail_with(Some("quota exceeded".into()));
        assert!(!channel.send_push("t", &message()).await.success);

        channel.fail_with(None);
        assert!(channel.send_push("t", &message()).await.success);
        assert_eq!(channel.sent_count(), 2);
    }
}
