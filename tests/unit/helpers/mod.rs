//! Test helper utilities

#![allow(dead_code)]

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

/// Create a temporary copy of the fixture language workspace.
///
/// Returns the temp dir (keep it alive) and the workspace root.
pub fn temp_workspace() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().join("lang");
    copy_dir(&fixtures_dir().join("lang"), &root);
    (temp_dir, root)
}

/// Read a JSON dictionary from the workspace
pub fn read_json(root: &Path, category: &str, language: &str) -> serde_json::Value {
    let path = root.join(category).join(format!("{}.json", language));
    let contents = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read {}", path.display()));
    serde_json::from_str(&contents).expect("Invalid JSON written")
}
