//! Shared fixture helpers for the pipeline integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Write a fixture file and return its path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write fixture file");
    path
}
