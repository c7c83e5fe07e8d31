// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message composition, channel dispatch, and notification orchestration.
//!
//! The flow per trigger: the [`NotificationOrchestrator`] checks the
//! user's toggles, [`compose`] builds a localized payload, and the
//! [`Dispatcher`] sends it across the ordered channel list with one
//! [`DispatchOutcome`] recorded per attempt.
//!
//! [`DispatchOutcome`]: minaret_core::types::DispatchOutcome

pub mod compose;
pub mod dispatch;
pub mod orchestrator;

pub use dispatch::Dispatcher;
pub use orchestrator::NotificationOrchestrator;
