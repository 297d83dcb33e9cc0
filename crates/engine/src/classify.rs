// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Which commands produce a discoverable log file.

/// Command names whose jobs write a log file.
pub const LOGGED_COMMANDS: [&str; 2] = ["runjob", "publish"];

/// Whether a command is a trackable job with a log file.
pub fn has_logfile(command: &str) -> bool {
    LOGGED_COMMANDS.iter().any(|name| command.contains(name))
}

/// The parts of a trackable command needed to locate its log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackedCommand {
    /// `runjob <group> <identifier> ...`
    RunJob { group: String, identifier: String },
    /// `publish <NAME>-<ID>`, names lowercased
    Publish { name: String, id: String },
}

impl TrackedCommand {
    /// Parse a trackable command. Returns `None` when the command does not
    /// have the expected shape.
    pub fn parse(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace();
        if command.starts_with("publish") {
            words.next()?;
            let target = words.next()?.to_lowercase();
            let (name, id) = target.split_once('-')?;
            if name.is_empty() || id.is_empty() || id.contains('-') {
                return None;
            }
            return Some(TrackedCommand::Publish { name: name.to_string(), id: id.to_string() });
        }

        words.next()?;
        let group = words.next()?;
        let identifier = words.next()?;
        Some(TrackedCommand::RunJob { group: group.to_string(), identifier: identifier.to_string() })
    }

    /// Secondary jobs run under the `srg` group.
    pub fn is_secondary(&self) -> bool {
        matches!(self, TrackedCommand::RunJob { group, .. } if group == "srg")
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
