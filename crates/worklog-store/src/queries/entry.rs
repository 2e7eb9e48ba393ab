use rusqlite::{Connection, OptionalExtension, params};
use worklog_types::{EntryFilter, EntryId, EntryRow, NewEntry, WorkType, time};

use crate::Result;

const ENTRY_PROJECTION: &str = r#"
    SELECT e.id, e.ts, e.title, IFNULL(p.name, '') AS project, e.work_type,
           e.tags, e.path, e.duration_hours, e.notes_md
    FROM entries e
    LEFT JOIN projects p ON e.project_id = p.id
"#;

pub fn insert(conn: &Connection, entry: &NewEntry) -> Result<EntryId> {
    conn.execute(
        r#"
        INSERT INTO entries (ts, title, project_id, work_type, tags, path,
                             duration_hours, notes_md, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
        params![
            time::format_event_ts(&entry.ts),
            &entry.title,
            entry.project_id.map(|id| id.get()),
            entry.work_type.as_str(),
            &entry.tags,
            &entry.path,
            &entry.duration_hours,
            &entry.notes_md,
            time::now_utc(),
        ],
    )?;

    Ok(EntryId::new(conn.last_insert_rowid()))
}

/// Run the entry query with all set filter conditions AND-combined.
///
/// `project_ids` follows SQL IN semantics: an explicitly empty list
/// matches nothing (SQLite rejects a literal `IN ()`, so that case
/// becomes a never-true clause).
pub fn query(conn: &Connection, filter: &EntryFilter) -> Result<Vec<EntryRow>> {
    let mut where_clauses: Vec<String> = Vec::new();
    let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if let Some(start) = filter.start_date {
        where_clauses.push("DATE(e.ts) >= DATE(?)".to_string());
        params.push(Box::new(start.format("%Y-%m-%d").to_string()));
    }

    if let Some(end) = filter.end_date {
        where_clauses.push("DATE(e.ts) <= DATE(?)".to_string());
        params.push(Box::new(end.format("%Y-%m-%d").to_string()));
    }

    match &filter.project_ids {
        None => {}
        Some(ids) if ids.is_empty() => {
            where_clauses.push("1 = 0".to_string());
        }
        Some(ids) => {
            let placeholders = vec!["?"; ids.len()].join(", ");
            where_clauses.push(format!("e.project_id IN ({})", placeholders));
            for id in ids {
                params.push(Box::new(id.get()));
            }
        }
    }

    if let Some(text) = filter.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        where_clauses.push("(e.title LIKE ? OR e.notes_md LIKE ? OR e.path LIKE ?)".to_string());
        let pattern = format!("%{}%", text);
        params.push(Box::new(pattern.clone()));
        params.push(Box::new(pattern.clone()));
        params.push(Box::new(pattern));
    }

    if let Some(tag) = filter
        .tags_contains
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        where_clauses.push("e.tags LIKE ?".to_string());
        params.push(Box::new(format!("%{}%", tag)));
    }

    let where_clause = if where_clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", where_clauses.join(" AND "))
    };

    let query = format!(
        "{}\n    {}\n    ORDER BY e.ts DESC",
        ENTRY_PROJECTION, where_clause
    );

    let mut stmt = conn.prepare(&query)?;
    let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();
    let entries = stmt
        .query_map(param_refs.as_slice(), map_entry_row)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(entries)
}

pub fn get(conn: &Connection, id: EntryId) -> Result<Option<EntryRow>> {
    let query = format!("{}\n    WHERE e.id = ?1", ENTRY_PROJECTION);
    let result = conn
        .query_row(&query, [id.get()], map_entry_row)
        .optional()?;

    Ok(result)
}

/// Distinct non-blank paths, most recently logged first.
pub fn recent_paths(conn: &Connection, limit: usize) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT path
        FROM entries
        WHERE path IS NOT NULL AND TRIM(path) != ''
        GROUP BY path
        ORDER BY MAX(id) DESC
        LIMIT ?1
        "#,
    )?;

    let paths = stmt
        .query_map([limit as i64], |row| row.get(0))?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(paths)
}

pub fn delete(conn: &Connection, id: EntryId) -> Result<()> {
    conn.execute("DELETE FROM entries WHERE id = ?1", [id.get()])?;
    Ok(())
}

fn map_entry_row(row: &rusqlite::Row<'_>) -> std::result::Result<EntryRow, rusqlite::Error> {
    Ok(EntryRow {
        id: EntryId::new(row.get(0)?),
        ts: row.get(1)?,
        title: row.get(2)?,
        project: row.get(3)?,
        work_type: WorkType::from(row.get::<_, Option<String>>(4)?.unwrap_or_default()),
        tags: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        path: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        duration_hours: row.get(7)?,
        notes_md: row.get::<_, Option<String>>(8)?.unwrap_or_default(),
    })
}
