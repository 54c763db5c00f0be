//! Shared JSON file plumbing for the pipelines.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::PipelineError;

/// Read a file expected to hold a top-level JSON array.
pub fn read_json_array(path: &Path) -> Result<Vec<Value>, PipelineError> {
    let text = fs::read_to_string(path).map_err(|source| PipelineError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value =
        serde_json::from_str(&text).map_err(|source| PipelineError::ParseInput {
            path: path.to_path_buf(),
            source,
        })?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(PipelineError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Write a value as pretty-printed JSON. Non-ASCII text is written
/// literally; serde_json never escapes it to \u sequences.
pub fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PipelineError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| {
        PipelineError::EncodeOutput {
            path: path.to_path_buf(),
            source,
        }
    })?;
    fs::write(path, json).map_err(|source| PipelineError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
