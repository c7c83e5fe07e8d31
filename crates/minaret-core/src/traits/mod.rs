// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for injectable collaborators.
//!
//! All adapters use `#[async_trait]` where needed for dynamic dispatch
//! compatibility; components receive them as `Arc<dyn ...>` so tests can
//! substitute deterministic implementations.

pub mod channel;
pub mod clock;

pub use channel::PushChannel;
pub use clock::{Clock, SystemClock};
