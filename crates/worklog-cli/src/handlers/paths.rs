use crate::context::ExecutionContext;
use crate::types::OutputFormat;
use crate::views::PathsView;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let db = ctx.db()?;
    let limit = ctx.config()?.recent_paths_limit;
    let paths = db.recent_paths(limit)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&paths)?),
        OutputFormat::Plain => print!("{}", PathsView::new(&paths)),
    }
    Ok(())
}
