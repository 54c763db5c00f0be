//! Structured run reports produced by the pipelines.
//!
//! Every pipeline returns one of these instead of printing as it goes,
//! so callers (and tests) can inspect counts and warnings directly.

use serde::Serialize;

/// Result of one yudex build run.
#[derive(Serialize, Default, Clone, Debug)]
pub struct BuildReport {
    /// Entries written to the index.
    pub entries: u32,
    /// Files skipped because the filename has no 4-digit prefix.
    pub skipped_bad_name: u32,
    /// Files skipped because they could not be read or parsed.
    pub skipped_unreadable: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Result of one renumbering run.
#[derive(Serialize, Default, Clone, Debug)]
pub struct RenumberReport {
    /// Elements that received a fresh id.
    pub renumbered: u32,
    /// Elements left untouched (non-objects or no id field).
    pub skipped: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Result of one move-list split run.
#[derive(Serialize, Default, Clone, Debug)]
pub struct SplitReport {
    /// Distinct types encountered.
    pub types: u32,
    /// Per-type files successfully written.
    pub files_written: u32,
    /// Moves skipped for a missing or empty `type`.
    pub missing_type: u32,
    /// Moves skipped for a missing or empty `name`.
    pub missing_name: u32,
    /// List elements that were not objects at all.
    pub skipped_non_object: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}
