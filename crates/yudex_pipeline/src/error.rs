//! Fatal error conditions shared by the three pipelines.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A condition that aborts the run. Per-item problems never surface here;
/// they are collected as warnings in the pipeline's report instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to list source directory {}: {}", path.display(), source)]
    ListDir { path: PathBuf, source: io::Error },

    #[error("failed to read {}: {}", path.display(), source)]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("failed to parse JSON in {}: {}", path.display(), source)]
    ParseInput {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("expected a JSON array at the top level of {}", path.display())]
    NotAnArray { path: PathBuf },

    #[error("failed to create output directory {}: {}", path.display(), source)]
    CreateOutputDir { path: PathBuf, source: io::Error },

    #[error("failed to encode JSON for {}: {}", path.display(), source)]
    EncodeOutput {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {}: {}", path.display(), source)]
    WriteOutput { path: PathBuf, source: io::Error },
}
