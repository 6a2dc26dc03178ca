//! CSV and JSON export of the task collection
//!
//! The string renderers define the wire formats; the file writers are a
//! convenience for callers that hand the result to a download or save path.

use anyhow::{Context, Result};
use std::path::Path;

use crate::ledger::Task;

/// Render tasks as CSV, one line per task:
/// `sequenceNumber,description,durationMinutes,priority,category`.
///
/// No header row and no quoting, so a description containing a comma
/// corrupts its row. Kept as-is for compatibility with the existing
/// download format.
pub fn to_csv(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|task| {
            format!(
                "{},{},{},{},{}",
                task.sequence_number,
                task.description,
                task.duration_minutes,
                task.priority,
                task.category
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render tasks as a pretty-printed JSON array.
pub fn to_json(tasks: &[Task]) -> Result<String> {
    serde_json::to_string_pretty(tasks).context("Failed to serialize tasks to JSON")
}

/// Write the CSV rendering to a file.
pub fn write_csv_file(path: &Path, tasks: &[Task]) -> Result<()> {
    std::fs::write(path, to_csv(tasks))
        .with_context(|| format!("Failed to write CSV to {:?}", path))?;
    Ok(())
}

/// Write the JSON rendering to a file.
pub fn write_json_file(path: &Path, tasks: &[Task]) -> Result<()> {
    let content = to_json(tasks)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write JSON to {:?}", path))?;
    Ok(())
}
