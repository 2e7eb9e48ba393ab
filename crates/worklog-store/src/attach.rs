use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use worklog_types::{Attachment, EntryId, time};

use crate::{Database, Error, Result, queries};

/// Store an attachment file and its metadata row as one logical operation.
///
/// The bytes are written to a temp file in the destination directory,
/// synced, and renamed into place before the row is inserted; if the
/// insert fails the renamed file is removed again. A re-upload with the
/// same filename overwrites the previous file.
///
/// `filename` is reduced to its final path component, so callers can pass
/// user-supplied paths without escaping the attachment tree.
pub fn store_attachment(
    db: &Database,
    root: &Path,
    attachments_dir: &str,
    entry_id: EntryId,
    filename: &str,
    contents: &[u8],
) -> Result<Attachment> {
    let safe_name = match Path::new(filename).file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => {
            return Err(Error::Query(format!(
                "invalid attachment filename: '{}'",
                filename
            )));
        }
    };

    let entry_dir = root.join(attachments_dir).join(format!("entry_{}", entry_id));
    fs::create_dir_all(&entry_dir)?;

    let mut tmp = NamedTempFile::new_in(&entry_dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;

    let dest = entry_dir.join(&safe_name);
    tmp.persist(&dest).map_err(|e| Error::Io(e.error))?;

    let rel_path = format!("{}/entry_{}/{}", attachments_dir, entry_id, safe_name);
    let created_at = time::now_utc();

    let insert =
        queries::attachment::insert(&db.conn, entry_id, &safe_name, &rel_path, &created_at);
    let id = match insert {
        Ok(id) => id,
        Err(err) => {
            let _ = fs::remove_file(&dest);
            return Err(err);
        }
    };

    Ok(Attachment {
        id,
        entry_id,
        filename: safe_name,
        rel_path,
        created_at,
    })
}
