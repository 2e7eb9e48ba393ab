// Plain-format rendering. Each view wraps borrowed rows and implements
// Display; existence markers are computed here, at display time.

use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use worklog_types::{Attachment, EntryRow};

pub struct EntryListView<'a> {
    entries: &'a [EntryRow],
}

impl<'a> EntryListView<'a> {
    pub fn new(entries: &'a [EntryRow]) -> Self {
        Self { entries }
    }
}

impl fmt::Display for EntryListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No entries match.");
        }

        let noun = if self.entries.len() == 1 {
            "entry"
        } else {
            "entries"
        };
        writeln!(f, "{} {}", self.entries.len(), noun)?;

        for entry in self.entries {
            let id = format!("{:>5}", entry.id);
            let title = format!("{:<40}", truncate(&entry.title, 40));
            let project = format!("{:<14}", truncate(&entry.project, 14));
            let kind = format!("{:<10}", truncate(&entry.work_type.to_string(), 10));

            let mut row = format!(
                "{}  {}  {}  {}  {}",
                id.yellow(),
                short_ts(&entry.ts).bright_black(),
                title,
                project.blue(),
                kind
            );
            if let Some(d) = entry.duration_hours {
                row.push_str(&format!("  {} h", d));
            }
            if !entry.tags.is_empty() {
                let tags = format!("[{}]", entry.tags);
                row.push_str(&format!("  {}", tags.bright_black()));
            }
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}

pub struct EntryDetailView<'a> {
    root: &'a Path,
    entry: &'a EntryRow,
    attachments: &'a [Attachment],
}

impl<'a> EntryDetailView<'a> {
    pub fn new(root: &'a Path, entry: &'a EntryRow, attachments: &'a [Attachment]) -> Self {
        Self {
            root,
            entry,
            attachments,
        }
    }
}

impl fmt::Display for EntryDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.entry.title.bold())?;
        field(f, "id", &self.entry.id.to_string())?;
        field(f, "time", &short_ts(&self.entry.ts))?;

        if !self.entry.project.is_empty() {
            field(f, "project", &format!("{}", self.entry.project.blue()))?;
        }
        let kind = self.entry.work_type.to_string();
        if !kind.is_empty() {
            field(f, "type", &kind)?;
        }
        if !self.entry.tags.is_empty() {
            field(f, "tags", &self.entry.tags)?;
        }
        if !self.entry.path.is_empty() {
            let marker = existence_marker(&crate::commands::expand_tilde(&self.entry.path));
            field(f, "path", &format!("{}{}", self.entry.path, marker))?;
        }
        if let Some(d) = self.entry.duration_hours {
            field(f, "duration", &format!("{} h", d))?;
        }

        if !self.entry.notes_md.is_empty() {
            writeln!(f)?;
            for line in self.entry.notes_md.lines() {
                writeln!(f, "  {}", line)?;
            }
        }

        if !self.attachments.is_empty() {
            writeln!(f)?;
            writeln!(f, "  attachments ({}):", self.attachments.len())?;
            for attachment in self.attachments {
                let marker = existence_marker(&self.root.join(&attachment.rel_path));
                writeln!(
                    f,
                    "    {:<24} {}{}",
                    attachment.filename, attachment.rel_path, marker
                )?;
            }
        }
        Ok(())
    }
}

pub struct AttachmentListView<'a> {
    root: &'a Path,
    attachments: &'a [Attachment],
}

impl<'a> AttachmentListView<'a> {
    pub fn new(root: &'a Path, attachments: &'a [Attachment]) -> Self {
        Self { root, attachments }
    }
}

impl fmt::Display for AttachmentListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attachments.is_empty() {
            return writeln!(f, "No attachments.");
        }

        for attachment in self.attachments {
            let id = format!("{:>5}", attachment.id);
            let marker = existence_marker(&self.root.join(&attachment.rel_path));
            writeln!(
                f,
                "{}  {:<24} {}{}",
                id.yellow(),
                attachment.filename,
                attachment.rel_path,
                marker
            )?;
        }
        Ok(())
    }
}

/// A project plus its entry count, shaped for both table and JSON output.
#[derive(Serialize)]
pub struct ProjectRow {
    pub id: i64,
    pub name: String,
    pub base_path: Option<String>,
    pub created_at: String,
    pub entries: usize,
}

pub struct ProjectListView<'a> {
    rows: &'a [ProjectRow],
}

impl<'a> ProjectListView<'a> {
    pub fn new(rows: &'a [ProjectRow]) -> Self {
        Self { rows }
    }
}

impl fmt::Display for ProjectListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No projects yet. Create one: worklog project set <NAME>");
        }

        writeln!(
            f,
            "{:<20} {:>7}  {:<17} BASE_PATH",
            "PROJECT", "ENTRIES", "CREATED"
        )?;
        writeln!(f, "{}", "-".repeat(72))?;
        for row in self.rows {
            writeln!(
                f,
                "{:<20} {:>7}  {:<17} {}",
                truncate(&row.name, 20),
                row.entries,
                short_ts(&row.created_at),
                row.base_path.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }
}

pub struct PathsView<'a> {
    paths: &'a [String],
}

impl<'a> PathsView<'a> {
    pub fn new(paths: &'a [String]) -> Self {
        Self { paths }
    }
}

impl fmt::Display for PathsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.paths.is_empty() {
            return writeln!(f, "No paths recorded yet.");
        }

        for path in self.paths {
            let marker = existence_marker(&crate::commands::expand_tilde(path));
            writeln!(f, "{}{}", path, marker)?;
        }
        Ok(())
    }
}

fn field(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    let label = format!("{:<9}", label);
    writeln!(f, "  {} {}", label.bright_black(), value)
}

fn existence_marker(path: &Path) -> String {
    if path.exists() {
        String::new()
    } else {
        format!(" {}", "(missing)".red())
    }
}

/// Drop `T` and cut to minute precision: `2024-03-09T15:30:00` becomes
/// `2024-03-09 15:30`. Works for both entry and creation timestamps.
fn short_ts(ts: &str) -> String {
    let spaced = ts.replacen('T', " ", 1);
    match spaced.get(..16) {
        Some(cut) => cut.to_string(),
        None => spaced,
    }
}

fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
