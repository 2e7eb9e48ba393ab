use crate::context::ExecutionContext;
use crate::handlers::attach_files;
use crate::types::OutputFormat;
use crate::views::AttachmentListView;
use anyhow::{Result, bail};
use std::path::PathBuf;
use worklog_types::EntryId;

pub fn handle_add(ctx: &ExecutionContext, entry_id: i64, files: &[PathBuf]) -> Result<()> {
    let db = ctx.db()?;
    let entry_id = EntryId::new(entry_id);
    if db.get_entry(entry_id)?.is_none() {
        bail!("No entry with id {}", entry_id);
    }

    for attachment in attach_files(ctx, entry_id, files)? {
        println!("Attached {} to entry {}", attachment.rel_path, entry_id);
    }
    Ok(())
}

pub fn handle_list(ctx: &ExecutionContext, entry_id: i64, format: OutputFormat) -> Result<()> {
    let db = ctx.db()?;
    let entry_id = EntryId::new(entry_id);
    if db.get_entry(entry_id)?.is_none() {
        bail!("No entry with id {}", entry_id);
    }

    let attachments = db.list_attachments(entry_id)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&attachments)?),
        OutputFormat::Plain => print!("{}", AttachmentListView::new(ctx.root(), &attachments)),
    }
    Ok(())
}
