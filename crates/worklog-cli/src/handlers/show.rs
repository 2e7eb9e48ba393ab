use crate::context::ExecutionContext;
use crate::types::OutputFormat;
use crate::views::EntryDetailView;
use anyhow::{Result, bail};
use worklog_types::EntryId;

pub fn handle(ctx: &ExecutionContext, id: i64, format: OutputFormat) -> Result<()> {
    let db = ctx.db()?;
    let entry_id = EntryId::new(id);

    let Some(entry) = db.get_entry(entry_id)? else {
        bail!("No entry with id {}", id);
    };
    let attachments = db.list_attachments(entry_id)?;

    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "entry": entry,
                "attachments": attachments,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Plain => {
            print!("{}", EntryDetailView::new(ctx.root(), &entry, &attachments));
        }
    }
    Ok(())
}
