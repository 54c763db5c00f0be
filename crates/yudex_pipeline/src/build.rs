//! Yudex index aggregation.
//!
//! Scans a directory of per-Pokémon JSON files and condenses them into a
//! single sorted index array.

use std::fs;
use std::path::Path;

use crate::error::PipelineError;
use crate::ids::{id_from_filename, WORLD_GEN};
use crate::models::{EntityRecord, PokedexEntry};
use crate::report::BuildReport;
use crate::util::write_pretty_json;

/// Build the yudex index from every `.json` file in `source_dir` and write
/// it to `output_file`.
///
/// A file contributes one entry when its name starts with four decimal
/// digits and its contents parse as a JSON object; anything else is skipped
/// with a warning. Entries are sorted ascending by id before writing.
pub fn build_dex(source_dir: &Path, output_file: &Path) -> Result<BuildReport, PipelineError> {
    let dir = fs::read_dir(source_dir).map_err(|source| PipelineError::ListDir {
        path: source_dir.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<PokedexEntry> = Vec::new();
    let mut report = BuildReport::default();

    for dir_entry in dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(err) => {
                report.skipped_unreadable += 1;
                report
                    .warnings
                    .push(format!("failed to read a directory entry: {}", err));
                continue;
            }
        };

        let path = dir_entry.path();
        if path.extension().map(|ext| ext != "json").unwrap_or(true) {
            continue;
        }

        let file_name = dir_entry.file_name().to_string_lossy().into_owned();
        let yudex_id = match id_from_filename(&file_name) {
            Some(id) => id,
            None => {
                report.skipped_bad_name += 1;
                report.warnings.push(format!(
                    "skipping file with unexpected name format: {}",
                    file_name
                ));
                continue;
            }
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                report.skipped_unreadable += 1;
                report
                    .warnings
                    .push(format!("failed to read {}: {}", path.display(), err));
                continue;
            }
        };

        let value: serde_json::Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                report.skipped_unreadable += 1;
                report
                    .warnings
                    .push(format!("failed to parse {}: {}", path.display(), err));
                continue;
            }
        };
        if !value.is_object() {
            report.skipped_unreadable += 1;
            report.warnings.push(format!(
                "expected a JSON object in {}",
                path.display()
            ));
            continue;
        }
        let record: EntityRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(err) => {
                report.skipped_unreadable += 1;
                report
                    .warnings
                    .push(format!("failed to parse {}: {}", path.display(), err));
                continue;
            }
        };

        entries.push(PokedexEntry {
            yudex_id,
            name: record.name,
            name_en: record.name_en,
            name_jp: record.name_jp,
            world_gen: WORLD_GEN.to_string(),
        });
    }

    // Fixed-width zero padding makes lexicographic order numeric
    entries.sort_by(|a, b| a.yudex_id.cmp(&b.yudex_id));

    write_pretty_json(output_file, &entries)?;
    report.entries = entries.len() as u32;
    Ok(report)
}
