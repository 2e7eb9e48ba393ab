use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::handlers::build_entry_filter;
use crate::types::OutputFormat;
use crate::views::EntryListView;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, filter: &FilterArgs, format: OutputFormat) -> Result<()> {
    let db = ctx.db()?;
    let entry_filter = build_entry_filter(db, filter)?;
    let entries = db.query_entries(&entry_filter)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Plain => print!("{}", EntryListView::new(&entries)),
    }
    Ok(())
}
