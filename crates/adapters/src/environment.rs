// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host and caller identity.
//!
//! Two independent questions drive behavior:
//!
//! ```text
//! production host   CS_PROD=P            → production log layout
//! production user   $USER is a service   → request id required,
//!                   account                publish configs read from
//!                                          the production jobs tree
//! ```

use std::path::PathBuf;

/// Adapter answering environment questions for the current process.
pub trait EnvironmentAdapter: Clone + Send + Sync + 'static {
    /// Whether this machine is a production server.
    fn is_production_host(&self) -> bool;

    /// Whether the caller is a production-acting (service) account.
    fn is_production_user(&self) -> bool;

    /// Personal jobs tree used by non-production callers (`WORKING_JOBS_DIR`).
    fn working_jobs_dir(&self) -> Option<PathBuf>;
}

/// Reads the live process environment on every call.
#[derive(Clone, Debug, Default)]
pub struct HostEnvironment {
    service_accounts: Vec<String>,
}

impl HostEnvironment {
    pub fn new(service_accounts: Vec<String>) -> Self {
        Self { service_accounts }
    }

    fn current_user() -> Option<String> {
        std::env::var("USER")
            .or_else(|_| std::env::var("LOGNAME"))
            .ok()
            .filter(|s| !s.is_empty())
    }
}

impl EnvironmentAdapter for HostEnvironment {
    fn is_production_host(&self) -> bool {
        std::env::var("CS_PROD").is_ok_and(|v| v == "P")
    }

    fn is_production_user(&self) -> bool {
        match Self::current_user() {
            Some(user) => self.service_accounts.iter().any(|a| *a == user),
            None => false,
        }
    }

    fn working_jobs_dir(&self) -> Option<PathBuf> {
        std::env::var("WORKING_JOBS_DIR").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::EnvironmentAdapter;
    use std::path::PathBuf;

    /// Fixed environment answers for tests.
    #[derive(Clone, Debug, Default)]
    pub struct FakeEnvironment {
        pub production_host: bool,
        pub production_user: bool,
        pub working_jobs_dir: Option<PathBuf>,
    }

    impl FakeEnvironment {
        pub fn new() -> Self {
            Self::default()
        }

        bulkrun_core::setters! {
            set { production_host: bool, production_user: bool }
            option { working_jobs_dir: PathBuf }
        }
    }

    impl EnvironmentAdapter for FakeEnvironment {
        fn is_production_host(&self) -> bool {
            self.production_host
        }

        fn is_production_user(&self) -> bool {
            self.production_user
        }

        fn working_jobs_dir(&self) -> Option<PathBuf> {
            self.working_jobs_dir.clone()
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeEnvironment;

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
