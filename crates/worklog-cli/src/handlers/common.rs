use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::path::PathBuf;
use worklog_store::{Database, store_attachment};
use worklog_types::{Attachment, EntryFilter, EntryId, time};

/// Translate CLI filter flags into an `EntryFilter`, resolving project
/// names to ids. Unknown names are rejected here so storage never sees
/// them.
pub fn build_entry_filter(db: &Database, args: &FilterArgs) -> Result<EntryFilter> {
    let mut filter = EntryFilter::new();

    if let Some(raw) = args.since.as_deref() {
        let date =
            time::parse_filter_date(raw).map_err(|e| anyhow!("Invalid --since value: {}", e))?;
        filter = filter.start_date(date);
    }

    if let Some(raw) = args.until.as_deref() {
        let date =
            time::parse_filter_date(raw).map_err(|e| anyhow!("Invalid --until value: {}", e))?;
        filter = filter.end_date(date);
    }

    if !args.projects.is_empty() {
        let mut ids = Vec::with_capacity(args.projects.len());
        for name in &args.projects {
            let name = name.trim();
            match db.find_project_id_by_name(name)? {
                Some(id) => ids.push(id),
                None => bail!("Unknown project '{}'. See: worklog project list", name),
            }
        }
        filter = filter.projects(ids);
    }

    if let Some(text) = args.text.as_deref() {
        filter = filter.text(text);
    }

    if let Some(tag) = args.tag.as_deref() {
        filter = filter.tags_contains(tag);
    }

    Ok(filter)
}

/// Read each file and store it against the entry. Stops at the first
/// failure; files stored before that point stay stored.
pub fn attach_files(
    ctx: &ExecutionContext,
    entry_id: EntryId,
    files: &[PathBuf],
) -> Result<Vec<Attachment>> {
    let db = ctx.db()?;
    let config = ctx.config()?;

    let mut stored = Vec::with_capacity(files.len());
    for file in files {
        let contents = fs::read(file)
            .with_context(|| format!("Failed to read attachment {}", file.display()))?;
        let filename = file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow!("Attachment has no usable file name: {}", file.display()))?;

        let attachment = store_attachment(
            db,
            ctx.root(),
            &config.attachments_dir,
            entry_id,
            filename,
            &contents,
        )?;
        stored.push(attachment);
    }
    Ok(stored)
}
