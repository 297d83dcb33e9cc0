// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Batch execution engine: normalize, execute, classify, report.

pub mod classify;
pub mod executor;
pub mod log_resolver;
pub mod normalize;
pub mod runner;

pub use classify::{has_logfile, TrackedCommand};
pub use executor::{ConcurrentExecutor, Dispatch};
pub use log_resolver::{LogError, LogResolver};
pub use normalize::{scrub, NormalizeError, Normalized, Normalizer};
pub use runner::BatchRunner;
