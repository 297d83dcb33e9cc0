// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job descriptor references and job taxonomy.

use crate::layout::Layout;
use serde::{Deserialize, Serialize};

/// Taxonomy of a descriptor-backed job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// Has a static descriptor file on disk
    Standard,
    /// No descriptor file exists; the run command comes from the artifact catalog
    Secondary,
}

crate::simple_display! {
    JobKind {
        Standard => "standard",
        Secondary => "secondary",
    }
}

/// A canonical descriptor path broken into its job code and kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorRef {
    pub code: String,
    pub kind: JobKind,
}

impl DescriptorRef {
    /// Parse an absolute descriptor path such as
    /// `/NAS/mis/esp/scripts/praa1234.ctl`.
    ///
    /// Returns `None` for anything that is not a descriptor path, including
    /// codes with characters outside `[A-Za-z0-9]`.
    pub fn parse(command: &str, layout: &Layout) -> Option<Self> {
        let rest = command.strip_prefix(&layout.descriptor_path_prefix())?;
        let code = rest.strip_suffix(&layout.ext_suffix())?;
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        let kind = if code.chars().nth(1) == Some(layout.secondary_marker) {
            JobKind::Secondary
        } else {
            JobKind::Standard
        };
        Some(Self { code: code.to_string(), kind })
    }

    /// Catalog job name for this code, e.g. `mis_ai01_00_c`.
    pub fn job_name(&self) -> String {
        format!("mis_{}_00_c", self.code)
    }

    pub fn is_secondary(&self) -> bool {
        self.kind == JobKind::Secondary
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
