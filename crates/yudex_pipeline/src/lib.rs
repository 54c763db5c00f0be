//! Batch data pipelines for the Yudu MUD pokédex files.
//!
//! Three independent one-shot pipelines over the project's JSON data:
//! building the yudex index from per-Pokémon files, renumbering the
//! index's ids into a fresh sequence, and splitting the move list into
//! one text file per type.
//!
//! Each pipeline is a pure function taking explicit paths and returning
//! a report of what it did; recoverable per-item problems accumulate as
//! warnings in the report, fatal ones come back as [`PipelineError`].

pub mod build;
pub mod error;
pub mod ids;
pub mod models;
pub mod renumber;
pub mod report;
pub mod split;

mod util;

pub use build::build_dex;
pub use error::PipelineError;
pub use renumber::renumber;
pub use split::split_moves;
