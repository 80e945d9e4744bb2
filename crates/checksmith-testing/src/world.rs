//! TestWorld pattern for declarative integration test setup.
//!
//! Provides an isolated checks directory and template registry in a temp
//! dir, plus a pre-wired `checksmith` command pointing at them through
//! environment variables.

use crate::fixtures;
use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestWorld {
    temp_dir: TempDir,
    checks_dir: PathBuf,
    templates_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create an isolated environment with an empty checks directory and
    /// a valid two-template registry.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let checks_dir = temp_dir.path().join("checks");
        let templates_dir = temp_dir.path().join("templates");

        std::fs::create_dir_all(&checks_dir).expect("Failed to create checks dir");
        std::fs::create_dir_all(&templates_dir).expect("Failed to create templates dir");

        std::fs::write(templates_dir.join("registry.json"), fixtures::REGISTRY_JSON)
            .expect("Failed to write registry");
        std::fs::write(
            templates_dir.join("bash-default.sh.tmpl"),
            fixtures::BASH_TEMPLATE,
        )
        .expect("Failed to write bash template");
        std::fs::write(
            templates_dir.join("powershell-default.ps1.tmpl"),
            fixtures::POWERSHELL_TEMPLATE,
        )
        .expect("Failed to write powershell template");

        Self {
            temp_dir,
            checks_dir,
            templates_dir,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn checks_dir(&self) -> &Path {
        &self.checks_dir
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    pub fn registry_path(&self) -> PathBuf {
        self.templates_dir.join("registry.json")
    }

    /// Write a check file under the checks directory; intermediate
    /// directories are created so tests can exercise nested discovery.
    pub fn add_check(&self, relative: &str, body: &str) -> Result<PathBuf> {
        let path = self.checks_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, body)?;
        Ok(path)
    }

    /// Shell check that prints the given protocol lines and exits 0.
    pub fn add_shell_check(&self, relative: &str, lines: &[&str]) -> Result<PathBuf> {
        let mut body = String::from("#!/usr/bin/env bash\n");
        for line in lines {
            body.push_str(&format!("echo '{}'\n", line));
        }
        self.add_check(relative, &body)
    }

    /// A `checksmith` command wired to this world's checks and registry.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("checksmith").expect("checksmith binary");
        cmd.current_dir(self.temp_dir.path())
            .env("CHECKSMITH_CHECKS_DIR", &self.checks_dir)
            .env("CHECKSMITH_REGISTRY", self.registry_path());
        cmd
    }
}
