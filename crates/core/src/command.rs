// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical command strings and input line filtering.

use serde::{Deserialize, Serialize};

/// A command in its final, directly executable form.
///
/// Produced once per input line by normalization and never modified
/// afterwards. It is the key for deduplication and result reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalCommand(String);

impl CanonicalCommand {
    pub fn new(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CanonicalCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CanonicalCommand {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CanonicalCommand {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for CanonicalCommand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CanonicalCommand {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalCommand {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::borrow::Borrow<str> for CanonicalCommand {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for CanonicalCommand {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

/// Whether an input line holds a command.
///
/// Blank lines and lines starting with `#` or `//` are ignored.
pub fn is_valid_line(line: &str) -> bool {
    let trimmed = line.trim();
    !(trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//"))
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
