use crate::ids::{AttachmentId, EntryId};
use serde::Serialize;

/// Attachment record from the database.
///
/// The file itself lives at `rel_path` relative to the workspace root; the
/// row only records where it was put.
#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    /// Row identifier.
    pub id: AttachmentId,
    /// Entry this file belongs to.
    pub entry_id: EntryId,
    /// Original filename, without any directory component.
    pub filename: String,
    /// Storage location relative to the workspace root.
    pub rel_path: String,
    /// When the attachment was recorded (ISO 8601, UTC).
    pub created_at: String,
}
