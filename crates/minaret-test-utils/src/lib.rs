// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Minaret integration tests.
//!
//! Provides mock adapters for fast, deterministic, CI-runnable tests
//! without push providers or real wall-clock time.
//!
//! # Components
//!
//! - [`MockPushChannel`] - Push channel with captured sends and scriptable failures
//! - [`MockClock`] - Pinned, manually advanceable clock

pub mod mock_channel;
pub mod mock_clock;

pub use mock_channel::MockPushChannel;
pub use mock_clock::MockClock;
