// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multi-channel dispatch with per-channel outcome accounting.

use std::sync::Arc;

use minaret_core::types::{ComposedMessage, DeviceTokens, DispatchOutcome};
use minaret_core::PushChannel;
use tracing::{debug, warn};

/// Sends one composed message across an ordered set of channels.
///
/// Channel order is fixed at construction (FCM before Expo in production)
/// and every channel with a configured token is attempted, even after an
/// earlier one fails, so a user with both tokens always gets both
/// attempts recorded.
pub struct Dispatcher {
    channels: Vec<Arc<dyn PushChannel>>,
}

impl Dispatcher {
    /// Creates a dispatcher over channels in their attempt order.
    pub fn new(channels: Vec<Arc<dyn PushChannel>>) -> Self {
        Self { channels }
    }

    /// Dispatches `message` to every channel the user has a token for.
    /// Returns one outcome per attempted channel, in channel order.
    pub async fn dispatch(
        &self,
        tokens: &DeviceTokens,
        message: &ComposedMessage,
    ) -> Vec<DispatchOutcome> {
        let mut outcomes = Vec::new();

        for channel in &self.channels {
            let Some(token) = tokens.token_for(channel.kind()) else {
                debug!(channel = channel.name(), "no device token, channel skipped");
                continue;
            };

            let outcome = channel.send_push(token, message).await;
            if !outcome.success {
                warn!(
                    channel = channel.name(),
                    detail = outcome.error_detail.as_deref().unwrap_or("unknown"),
                    "push delivery failed"
                );
            }
            outcomes.push(outcome);
        }

        outcomes
    }
}
