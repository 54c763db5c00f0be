//! In-place renumbering of an existing yudex index.

use std::path::Path;

use serde_json::Value;

use crate::error::PipelineError;
use crate::ids::format_yudex_id;
use crate::report::RenumberReport;
use crate::util::{read_json_array, write_pretty_json};

/// Field rewritten on every qualifying index element.
const ID_FIELD: &str = "yudex_id";

/// Rewrite the `yudex_id` of every object in `index_file` to a fresh
/// `Y0001..` sequence, in the array's existing order, and save the file
/// back in place.
///
/// Elements that are not objects, or that carry no id field, stay exactly
/// as they were and do not consume a sequence number. The array is never
/// re-sorted, so running this twice is a no-op the second time.
pub fn renumber(index_file: &Path) -> Result<RenumberReport, PipelineError> {
    let mut entries = read_json_array(index_file)?;
    let mut report = RenumberReport::default();
    let mut next = 1u32;

    for value in entries.iter_mut() {
        let qualifies = value
            .as_object()
            .map(|obj| obj.contains_key(ID_FIELD))
            .unwrap_or(false);
        if !qualifies {
            report.skipped += 1;
            report.warnings.push(format!(
                "skipping element without a {} field: {}",
                ID_FIELD, value
            ));
            continue;
        }

        if let Some(obj) = value.as_object_mut() {
            obj.insert(ID_FIELD.to_string(), Value::String(format_yudex_id(next)));
        }
        next += 1;
        report.renumbered += 1;
    }

    write_pretty_json(index_file, &entries)?;
    Ok(report)
}
