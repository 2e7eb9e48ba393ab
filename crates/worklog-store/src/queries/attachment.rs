use rusqlite::{Connection, params};
use worklog_types::{Attachment, AttachmentId, EntryId};

use crate::Result;

pub fn insert(
    conn: &Connection,
    entry_id: EntryId,
    filename: &str,
    rel_path: &str,
    created_at: &str,
) -> Result<AttachmentId> {
    conn.execute(
        r#"
        INSERT INTO attachments (entry_id, filename, rel_path, created_at)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![entry_id.get(), filename, rel_path, created_at],
    )?;

    Ok(AttachmentId::new(conn.last_insert_rowid()))
}

pub fn list_for_entry(conn: &Connection, entry_id: EntryId) -> Result<Vec<Attachment>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, entry_id, filename, rel_path, created_at
        FROM attachments
        WHERE entry_id = ?1
        ORDER BY id ASC
        "#,
    )?;

    let attachments = stmt
        .query_map([entry_id.get()], |row| {
            Ok(Attachment {
                id: AttachmentId::new(row.get(0)?),
                entry_id: EntryId::new(row.get(1)?),
                filename: row.get(2)?,
                rel_path: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(attachments)
}
