// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Push channel adapter trait for device delivery integrations (FCM, Expo).

use async_trait::async_trait;

use crate::types::{ChannelKind, ComposedMessage, DispatchOutcome};

/// Adapter for a single push delivery channel.
///
/// `send_push` is infallible by contract: every failure mode — transport
/// error, non-success response, rejected token, missing credentials — is
/// captured into the returned [`DispatchOutcome`] so one channel's failure
/// can never abort the attempt on another.
#[async_trait]
pub trait PushChannel: Send + Sync {
    /// Which delivery channel this adapter serves.
    fn kind(&self) -> ChannelKind;

    /// Short adapter name for logging.
    fn name(&self) -> &str;

    /// Sends one composed message to one device token.
    async fn send_push(&self, token: &str, message: &ComposedMessage) -> DispatchOutcome;
}
