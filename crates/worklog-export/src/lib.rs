// Pure export formatting: entry rows in, bytes/text out
// No filesystem probing here; existence checks belong to the views

mod error;

pub use error::{Error, Result};

use std::collections::BTreeMap;
use worklog_types::EntryRow;

/// CSV column order. Notes are deliberately excluded so the file stays
/// one line per entry.
const CSV_HEADER: [&str; 8] = [
    "id",
    "ts",
    "title",
    "project",
    "work_type",
    "tags",
    "path",
    "duration_hours",
];

/// Render entries as CSV (without notes).
///
/// Zero entries produce a header-only document, never zero bytes, so the
/// output is always self-describing.
pub fn to_csv(rows: &[EntryRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for row in rows {
        writer.write_record([
            row.id.to_string().as_str(),
            row.ts.as_str(),
            row.title.as_str(),
            row.project.as_str(),
            row.work_type.as_str(),
            row.tags.as_str(),
            row.path.as_str(),
            row.duration_hours
                .map(|d| d.to_string())
                .as_deref()
                .unwrap_or(""),
        ])?;
    }

    writer.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Render entries as a markdown journal grouped by calendar date.
///
/// Dates appear in ascending order with entries ascending by timestamp
/// within each day. Notes are emitted verbatim; they are trusted
/// markdown, not re-escaped.
pub fn to_markdown_journal(rows: &[EntryRow]) -> String {
    if rows.is_empty() {
        return "# Worklog\n\n_No entries in the selected range._\n".to_string();
    }

    let mut by_day: BTreeMap<&str, Vec<&EntryRow>> = BTreeMap::new();
    for row in rows {
        by_day.entry(row.date()).or_default().push(row);
    }

    let mut lines: Vec<String> = vec!["# Worklog Export\n".to_string()];
    for (date, mut day_rows) in by_day {
        lines.push(format!("\n## {}\n", date));
        day_rows.sort_by(|a, b| a.ts.cmp(&b.ts));

        for row in day_rows {
            lines.push(format!("### {}\n", row.title));
            lines.push(format!("- **Time:** {}\n", row.ts));
            if !row.project.is_empty() {
                lines.push(format!("- **Project:** {}\n", row.project));
            }
            if !row.work_type.as_str().is_empty() {
                lines.push(format!("- **Type:** {}\n", row.work_type));
            }
            if !row.tags.is_empty() {
                lines.push(format!("- **Tags:** {}\n", row.tags));
            }
            if !row.path.is_empty() {
                lines.push(format!("- **Path:** [{}](file://{})\n", row.path, row.path));
            }
            if let Some(duration) = row.duration_hours {
                lines.push(format!("- **Duration:** {} h\n", duration));
            }
            if !row.notes_md.is_empty() {
                lines.push(format!("\n{}\n", row.notes_md));
            }
        }
    }

    lines.join("\n")
}
