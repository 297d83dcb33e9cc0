// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem layout of job descriptors and job logs.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where descriptor files live and where jobs write their logs.
///
/// Defaults match the shared NAS layout; every field can be overridden from
/// the `[layout]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Directory holding job descriptor files
    pub scripts_dir: String,
    /// File name prefix shared by every descriptor (`praa`)
    pub descriptor_prefix: String,
    /// Descriptor file extension, without the dot
    pub descriptor_ext: String,
    /// Character at offset 1 of a job code that marks a secondary job
    pub secondary_marker: char,
    /// Root for production job and log directories
    pub prod_root: PathBuf,
    /// Root for non-production log directories
    pub nonprod_root: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            scripts_dir: "/NAS/mis/esp/scripts".to_string(),
            descriptor_prefix: "praa".to_string(),
            descriptor_ext: "ctl".to_string(),
            secondary_marker: 'i',
            prod_root: PathBuf::from("/NAS/mis"),
            nonprod_root: PathBuf::from("/NAS/mis/tmp"),
        }
    }
}

impl Layout {
    /// `.ctl`
    pub fn ext_suffix(&self) -> String {
        format!(".{}", self.descriptor_ext)
    }

    /// Bare descriptor file name for a job code, e.g. `praa1234.ctl`.
    pub fn descriptor_file(&self, code: &str) -> String {
        format!("{}{}{}", self.descriptor_prefix, code, self.ext_suffix())
    }

    /// Absolute descriptor path for a bare descriptor name, adding the
    /// extension when missing.
    pub fn descriptor_path(&self, name: &str) -> String {
        let suffix = self.ext_suffix();
        let ext = if name.ends_with(&suffix) { "" } else { suffix.as_str() };
        format!("{}/{}{}", self.scripts_dir.trim_end_matches('/'), name, ext)
    }

    /// Prefix every absolute descriptor path starts with.
    pub fn descriptor_path_prefix(&self) -> String {
        format!("{}/{}", self.scripts_dir.trim_end_matches('/'), self.descriptor_prefix)
    }

    /// Production job tree (`/NAS/mis/jobs`).
    pub fn prod_jobs_dir(&self) -> PathBuf {
        self.prod_root.join("jobs")
    }

    /// Production secondary job tree (`/NAS/mis/srg`).
    pub fn prod_srg_dir(&self) -> PathBuf {
        self.prod_root.join("srg")
    }

    /// Non-production log directory for standard jobs of a group.
    pub fn nonprod_jobs_dir(&self, group: &str) -> PathBuf {
        self.nonprod_root.join("_jobs").join(group)
    }

    /// Non-production log directory for secondary jobs.
    pub fn nonprod_srg_dir(&self) -> PathBuf {
        self.nonprod_root.join("_srg")
    }

    /// Publish configuration directory under a jobs tree.
    pub fn publish_dir(jobs_dir: &Path) -> PathBuf {
        jobs_dir.join("all").join("publish").join("scpt")
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
