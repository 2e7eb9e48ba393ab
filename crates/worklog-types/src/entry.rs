use crate::ids::{EntryId, ProjectId};
use crate::work_type::WorkType;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A new entry to be inserted.
///
/// Field semantics follow the storage schema: `project_id` is optional,
/// `duration_hours` distinguishes "not recorded" (`None`) from an explicit
/// zero, and blank text fields are stored as empty strings.
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// When the work happened (local time, second precision).
    pub ts: NaiveDateTime,
    /// Short title describing the work.
    pub title: String,
    /// Project this entry belongs to, if any.
    pub project_id: Option<ProjectId>,
    /// Category of the work.
    pub work_type: WorkType,
    /// Free-form comma-separated tags.
    pub tags: String,
    /// Filesystem path or URL the work touched.
    pub path: String,
    /// Time spent, in hours. `None` when not recorded.
    pub duration_hours: Option<f64>,
    /// Markdown notes body.
    pub notes_md: String,
}

/// One row of the entry query projection.
///
/// This is what filtering, listing, and both exporters consume: the entry
/// joined with its project name (empty string when the entry has no
/// project or the project was deleted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRow {
    /// Row identifier.
    pub id: EntryId,
    /// Event timestamp (ISO 8601, local).
    pub ts: String,
    /// Short title describing the work.
    pub title: String,
    /// Resolved project name, or empty when unset.
    pub project: String,
    /// Category of the work.
    pub work_type: WorkType,
    /// Free-form comma-separated tags.
    pub tags: String,
    /// Filesystem path or URL the work touched.
    pub path: String,
    /// Time spent, in hours. `None` when not recorded.
    pub duration_hours: Option<f64>,
    /// Markdown notes body.
    pub notes_md: String,
}

impl EntryRow {
    /// Calendar-date portion of the event timestamp.
    pub fn date(&self) -> &str {
        crate::time::date_of_ts(&self.ts)
    }
}
