use crate::ids::ProjectId;
use serde::Serialize;

/// Project record from the database.
///
/// Projects group entries and carry an optional default filesystem path.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    /// Row identifier.
    pub id: ProjectId,
    /// Unique project name (natural key for upserts).
    pub name: String,
    /// Default filesystem path for work in this project, if set.
    pub base_path: Option<String>,
    /// When the project row was first created (ISO 8601, UTC).
    pub created_at: String,
}
