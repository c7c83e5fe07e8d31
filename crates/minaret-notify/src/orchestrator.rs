// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification orchestration: eligibility gates, composition, dispatch,
//! and aggregated accounting.
//!
//! A disabled toggle or unrecognized prayer name is a deliberate no-op,
//! not an error: the result carries `success: false`, an explanatory
//! message, and zero outcomes, which distinguishes it from a transmission
//! failure.

use std::str::FromStr;

use minaret_core::types::{
    BulkDispatchResult, CommunityEvent, DispatchResult, NotificationPreferences, PrayerName,
    UserDispatch,
};
use tracing::{debug, info};

use crate::compose;
use crate::dispatch::Dispatcher;

/// Ties composer and dispatcher together for single and bulk sends.
pub struct NotificationOrchestrator {
    dispatcher: Dispatcher,
}

impl NotificationOrchestrator {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Sends a prayer alert if the user has that prayer's alerts enabled.
    ///
    /// `prayer_name` arrives as a string from the trigger; an unparseable
    /// name is treated as disabled, so composition only ever sees known
    /// prayers.
    pub async fn dispatch_prayer_alert(
        &self,
        prefs: &NotificationPreferences,
        prayer_name: &str,
        prayer_time: &str,
    ) -> DispatchResult {
        let Ok(prayer) = PrayerName::from_str(prayer_name) else {
            debug!(user = %prefs.user_id, prayer_name, "unknown prayer name, alert skipped");
            return DispatchResult::skipped(format!("unknown prayer name: {prayer_name}"));
        };

        let enabled = prefs
            .per_prayer
            .get(&prayer)
            .map(|p| p.enabled)
            .unwrap_or(false);
        if !enabled {
            debug!(user = %prefs.user_id, %prayer, "prayer alerts disabled, alert skipped");
            return DispatchResult::skipped(format!("{prayer} alerts disabled"));
        }

        let message = compose::prayer_message(prayer, prayer_time, prefs.language);
        let outcomes = self.dispatcher.dispatch(&prefs.device_tokens, &message).await;
        let result = DispatchResult::from_outcomes(outcomes);
        info!(
            user = %prefs.user_id,
            %prayer,
            success = result.success,
            channels = result.outcomes.len(),
            "prayer alert dispatched"
        );
        result
    }

    /// Sends an event announcement if the user has event alerts enabled
    /// and is subscribed to the event's category (an uncategorized event
    /// passes only the global gate).
    pub async fn dispatch_event_alert(
        &self,
        prefs: &NotificationPreferences,
        event: &CommunityEvent,
    ) -> DispatchResult {
        if !prefs.events_enabled {
            debug!(user = %prefs.user_id, event = %event.id, "event alerts disabled, alert skipped");
            return DispatchResult::skipped("event alerts disabled");
        }

        if let Some(category) = event.category.as_deref() {
            let subscribed = prefs
                .event_categories
                .get(category)
                .copied()
                .unwrap_or(false);
            if !subscribed {
                debug!(user = %prefs.user_id, category, "category not subscribed, alert skipped");
                return DispatchResult::skipped(format!("category not subscribed: {category}"));
            }
        }

        let message = compose::event_message(event, prefs.language);
        let outcomes = self.dispatcher.dispatch(&prefs.device_tokens, &message).await;
        let result = DispatchResult::from_outcomes(outcomes);
        info!(
            user = %prefs.user_id,
            event = %event.id,
            success = result.success,
            "event alert dispatched"
        );
        result
    }

    /// Sends a test notification to every configured token, ignoring all
    /// preference toggles.
    pub async fn dispatch_test(
        &self,
        prefs: &NotificationPreferences,
        prayer: Option<PrayerName>,
    ) -> DispatchResult {
        let message = compose::test_message(prayer);
        let outcomes = self.dispatcher.dispatch(&prefs.device_tokens, &message).await;
        DispatchResult::from_outcomes(outcomes)
    }

    /// Announces an event to a batch of users, strictly one at a time in
    /// list order. One user's failure never aborts the batch; every user
    /// gets a slot in the per-user breakdown.
    pub async fn dispatch_bulk_event(
        &self,
        prefs_list: &[NotificationPreferences],
        event: &CommunityEvent,
    ) -> BulkDispatchResult {
        let mut bulk = BulkDispatchResult::default();

        for prefs in prefs_list {
            let result = self.dispatch_event_alert(prefs, event).await;
            if result.success {
                bulk.total_sent += 1;
            } else {
                bulk.total_failed += 1;
            }
            bulk.per_user.push(UserDispatch {
                user_id: prefs.user_id.clone(),
                result,
            });
        }

        info!(
            event = %event.id,
            total_sent = bulk.total_sent,
            total_failed = bulk.total_failed,
            "bulk event dispatch completed"
        );
        bulk
    }
}
