//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("journal");
        fs::create_dir_all(&root).expect("Failed to create journal dir");

        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A command scoped to this fixture's journal. The working directory
    /// is the journal root so default export paths land inside it.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("worklog").expect("Failed to find worklog binary");
        cmd.current_dir(&self.root);
        cmd.env_remove("WORKLOG_DIR");
        cmd.arg("--dir").arg(&self.root);
        cmd
    }

    pub fn init(&self) {
        let output = self
            .command()
            .arg("init")
            .output()
            .expect("Failed to run init");
        assert!(
            output.status.success(),
            "init failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    pub fn set_project(&self, name: &str) {
        let output = self
            .command()
            .args(["project", "set", name])
            .output()
            .expect("Failed to run project set");
        assert!(
            output.status.success(),
            "project set failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Run `worklog add` with the given flags and return the new entry id,
    /// parsed from the confirmation line.
    pub fn add(&self, args: &[&str]) -> i64 {
        let output = self
            .command()
            .arg("add")
            .args(args)
            .output()
            .expect("Failed to run add");
        assert!(
            output.status.success(),
            "add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .find_map(|line| line.strip_prefix("Recorded entry "))
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|id| id.parse::<i64>().ok())
            .unwrap_or_else(|| panic!("No entry id in add output: {}", stdout))
    }

    /// Run a command expecting success, returning stdout.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run command");
        assert!(
            output.status.success(),
            "command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Run a command with `--format json` appended and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .args(["--format", "json"])
            .output()
            .expect("Failed to run command");
        assert!(
            output.status.success(),
            "command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
            panic!(
                "command {:?} did not print JSON ({}): {}",
                args,
                e,
                String::from_utf8_lossy(&output.stdout)
            )
        })
    }

    /// Write a file under the journal root, creating parent directories.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }
}
