//! Integration test helpers

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Recursively copy `from` into `to`
pub fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).expect("Failed to create target dir");
    for entry in fs::read_dir(from).expect("Failed to read fixture dir") {
        let entry = entry.expect("Failed to read dir entry");
        let target = to.join(entry.file_name());
        if entry.path().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).expect("Failed to copy fixture file");
        }
    }
}

/// A temporary HOME with a copy of the fixture workspace at `<home>/lang`.
pub struct TestEnv {
    pub home: TempDir,
    pub workspace: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let home = TempDir::new().expect("Failed to create temp dir");
        let workspace = home.path().join("lang");
        copy_dir(&fixtures_dir().join("lang"), &workspace);
        Self { home, workspace }
    }

    /// Write `~/.config/mclang/config.toml`
    pub fn write_config(&self, contents: &str) {
        let dir = self.home.path().join(".config").join("mclang");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        fs::write(dir.join("config.toml"), contents).expect("Failed to write config");
    }

    /// The mclang binary with HOME isolated and colors disabled.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mclang").expect("binary builds");
        cmd.env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("MCLANG_LOG")
            .env_remove("MCLANG_CONFIG")
            .env_remove("EDITOR");
        cmd
    }

    /// The mclang binary pointed at the fixture workspace.
    pub fn cmd_in_workspace(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--workspace").arg(&self.workspace);
        cmd
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.workspace.join(relative)).expect("Failed to read workspace file")
    }
}
