use rusqlite::{Connection, OptionalExtension, params};
use worklog_types::{Project, ProjectId, time};

use crate::{Error, Result};

pub fn list(conn: &Connection) -> Result<Vec<Project>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, name, base_path, created_at
        FROM projects
        ORDER BY name ASC
        "#,
    )?;

    let projects = stmt
        .query_map([], |row| {
            Ok(Project {
                id: ProjectId::new(row.get(0)?),
                name: row.get(1)?,
                base_path: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(projects)
}

pub fn find_id_by_name(conn: &Connection, name: &str) -> Result<Option<ProjectId>> {
    let result = conn
        .query_row("SELECT id FROM projects WHERE name = ?1", [name], |row| {
            row.get::<_, i64>(0)
        })
        .optional()?;

    Ok(result.map(ProjectId::new))
}

/// Insert a project or update its base path in place. The base path is
/// overwritten unconditionally (last write wins, including None);
/// `created_at` is only set on first insert.
pub fn upsert(conn: &Connection, name: &str, base_path: Option<&str>) -> Result<ProjectId> {
    conn.execute(
        r#"
        INSERT INTO projects (name, base_path, created_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(name) DO UPDATE SET
            base_path = ?2
        "#,
        params![name, base_path, time::now_utc()],
    )?;

    // last_insert_rowid is stale after DO UPDATE, so resolve the id by name
    match find_id_by_name(conn, name)? {
        Some(id) => Ok(id),
        None => Err(Error::Query(format!(
            "project '{}' missing after upsert",
            name
        ))),
    }
}

pub fn count_entries(conn: &Connection, id: ProjectId) -> Result<usize> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM entries WHERE project_id = ?1",
        [id.get()],
        |row| row.get(0),
    )?;

    Ok(count as usize)
}

pub fn delete(conn: &Connection, id: ProjectId) -> Result<()> {
    conn.execute("DELETE FROM projects WHERE id = ?1", [id.get()])?;
    Ok(())
}
