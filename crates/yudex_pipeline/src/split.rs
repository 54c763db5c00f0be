//! Move-list splitting into one text file per type.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use crate::error::PipelineError;
use crate::ids::sanitize_type_name;
use crate::report::SplitReport;
use crate::util::read_json_array;

/// Move names grouped by type, iterated in first-insertion order.
#[derive(Default)]
struct TypeBuckets {
    order: Vec<String>,
    names: HashMap<String, Vec<String>>,
}

impl TypeBuckets {
    fn push(&mut self, move_type: &str, name: &str) {
        if !self.names.contains_key(move_type) {
            self.order.push(move_type.to_string());
        }
        self.names
            .entry(move_type.to_string())
            .or_default()
            .push(name.to_string());
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .map(|ty| (ty.as_str(), self.names[ty].as_slice()))
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

/// Group the move names in `move_list_file` by their `type` field and write
/// one `<sanitized type>.txt` per type into `output_dir`, one name per line.
///
/// Moves missing a usable `type` or `name` are counted and skipped; a
/// single file failing to write does not stop the remaining types. Files
/// already present in `output_dir` are left alone, so stale outputs from an
/// earlier run survive.
pub fn split_moves(move_list_file: &Path, output_dir: &Path) -> Result<SplitReport, PipelineError> {
    fs::create_dir_all(output_dir).map_err(|source| PipelineError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let moves = read_json_array(move_list_file)?;

    let mut buckets = TypeBuckets::default();
    let mut report = SplitReport::default();

    for value in &moves {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => {
                report.skipped_non_object += 1;
                report
                    .warnings
                    .push(format!("skipping non-object item in move list: {}", value));
                continue;
            }
        };

        let move_type = obj.get("type").and_then(Value::as_str).unwrap_or("");
        if move_type.is_empty() {
            report.missing_type += 1;
            continue;
        }

        let name = obj.get("name").and_then(Value::as_str).unwrap_or("");
        if name.is_empty() {
            report.missing_name += 1;
            continue;
        }

        buckets.push(move_type, name);
    }

    if report.missing_type > 0 {
        report.warnings.push(format!(
            "skipped {} moves with a missing type field",
            report.missing_type
        ));
    }
    if report.missing_name > 0 {
        report.warnings.push(format!(
            "skipped {} moves with a missing name field",
            report.missing_name
        ));
    }

    for (move_type, names) in buckets.iter() {
        let file_name = format!("{}.txt", sanitize_type_name(move_type));
        let path = output_dir.join(&file_name);
        match write_lines(&path, names) {
            Ok(()) => report.files_written += 1,
            Err(err) => {
                report
                    .warnings
                    .push(format!("failed to write {}: {}", path.display(), err));
            }
        }
    }

    report.types = buckets.len() as u32;
    Ok(report)
}

/// Write one name per line, each line newline-terminated.
fn write_lines(path: &Path, names: &[String]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for name in names {
        writeln!(file, "{}", name)?;
    }
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_keep_insertion_order() {
        let mut buckets = TypeBuckets::default();
        buckets.push("Normal", "Tackle");
        buckets.push("Fire", "Ember");
        buckets.push("Normal", "Scratch");

        let collected: Vec<(&str, &[String])> = buckets.iter().collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].0, "Normal");
        assert_eq!(collected[0].1, ["Tackle".to_string(), "Scratch".to_string()]);
        assert_eq!(collected[1].0, "Fire");
        assert_eq!(collected[1].1, ["Ember".to_string()]);
    }
}
