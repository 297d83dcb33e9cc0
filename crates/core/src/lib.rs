// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bulkrun-core: data model for the bulkrun batch job runner

pub mod macros;

pub mod command;
pub mod descriptor;
pub mod layout;
pub mod report;
pub mod results;
pub mod status;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use command::{is_valid_line, CanonicalCommand};
pub use descriptor::{DescriptorRef, JobKind};
pub use layout::Layout;
pub use report::{BatchReport, FailedJob, LineResult, LogLocation, SkippedJob, StatusCounts};
pub use results::ResultsMap;
pub use status::{Outcome, ResultStatus};
