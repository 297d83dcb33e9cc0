// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for CLI specs.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Output;

/// Variables that would leak the developer's setup into a spec.
const SCRUBBED_ENV: &[&str] = &[
    "BULKRUN_CONFIG",
    "BULKRUN_CONCURRENCY",
    "BULKRUN_DEADLINE_SECS",
    "BULKRUN_LOOKUP_CMD",
    "BULKRUN_SERVICE_ACCOUNTS",
    "BULKRUN_LOG",
    "CS_PROD",
    "WORKING_JOBS_DIR",
    "WORKING_JIRA_ID",
    "COLOR",
];

/// A scratch directory with its own layout config.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Empty project whose layout roots point inside the temp dir.
    pub fn empty() -> Self {
        let project = Self { dir: tempfile::tempdir().unwrap() };
        let root = project.path().display().to_string();
        project.file(
            "bulkrun.toml",
            &format!(
                "[layout]\n\
                 scripts_dir = \"{root}/scripts\"\n\
                 prod_root = \"{root}/prod\"\n\
                 nonprod_root = \"{root}/tmp\"\n"
            ),
        );
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parents.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write an executable shell script.
    pub fn script(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.file(rel, &format!("#!/bin/sh\n{body}\n"));
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Append extra sections to the project config.
    pub fn config(&self, extra: &str) {
        let path = self.path().join("bulkrun.toml");
        let mut text = std::fs::read_to_string(&path).unwrap();
        text.push_str(extra);
        std::fs::write(&path, text).unwrap();
    }

    /// `bulkrun` with a clean environment and this project's config.
    pub fn bulkrun(&self) -> Cli {
        let mut cmd = assert_cmd::Command::cargo_bin("bulkrun").unwrap();
        for var in SCRUBBED_ENV {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env("XDG_CONFIG_HOME", self.path().join("xdg"))
            .env("USER", "spec_user")
            .arg("--config")
            .arg(self.path().join("bulkrun.toml"));
        Cli { cmd }
    }
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require exit status 0.
    pub fn passes(mut self) -> Run {
        let run = Run(self.cmd.output().unwrap());
        assert!(run.0.status.success(), "expected success:\n{}", run.describe());
        run
    }

    /// Run and require a non-zero exit status.
    pub fn fails(mut self) -> Run {
        let run = Run(self.cmd.output().unwrap());
        assert!(!run.0.status.success(), "expected failure:\n{}", run.describe());
        run
    }
}

pub struct Run(Output);

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.0.stderr).into_owned()
    }

    pub fn code(&self) -> Option<i32> {
        self.0.status.code()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout().contains(needle), "stdout lacks {needle:?}:\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr().contains(needle), "stderr lacks {needle:?}:\n{}", self.describe());
        self
    }

    fn describe(&self) -> String {
        format!("status: {}\n--- stdout\n{}\n--- stderr\n{}", self.0.status, self.stdout(), self.stderr())
    }
}
