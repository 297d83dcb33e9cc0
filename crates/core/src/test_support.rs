// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for batch input lines.
pub mod strategies {
    use proptest::prelude::*;

    /// Four-character job codes, the short input form.
    pub fn arb_job_code() -> impl Strategy<Value = String> {
        "[a-z0-9]{4}"
    }

    /// Lines a user might put in a batch file: job codes, descriptor names
    /// with and without `./` and extension, and free-form shell commands.
    pub fn arb_raw_line() -> impl Strategy<Value = String> {
        prop_oneof![
            arb_job_code(),
            arb_job_code().prop_map(|c| format!("praa{c}")),
            arb_job_code().prop_map(|c| format!("./praa{c}.ctl")),
            arb_job_code().prop_map(|c| format!("/NAS/mis/esp/scripts/praa{c}.ctl")),
            "(\\./){0,3}[a-z0-9 ./_-]{0,16}",
            "runjob [a-z]{2,4}_[a-z]{2,6} [a-z0-9]{4}",
        ]
    }
}
