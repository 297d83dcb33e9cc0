// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for the outside world: processes, host environment, and the
//! artifact catalog.

pub mod artifact;
pub mod environment;
pub mod process;

pub use artifact::{ArtifactLookup, CommandLookup, LookupError};
pub use environment::{EnvironmentAdapter, HostEnvironment};
pub use process::{ProcessAdapter, ProcessError, ShellProcessAdapter};

#[cfg(any(test, feature = "test-support"))]
pub use artifact::FakeArtifactLookup;
#[cfg(any(test, feature = "test-support"))]
pub use environment::FakeEnvironment;
#[cfg(any(test, feature = "test-support"))]
pub use process::FakeProcessAdapter;
