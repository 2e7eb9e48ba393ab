use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::handlers::build_entry_filter;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn handle_csv(
    ctx: &ExecutionContext,
    output: Option<PathBuf>,
    filter: &FilterArgs,
) -> Result<()> {
    let db = ctx.db()?;
    let entry_filter = build_entry_filter(db, filter)?;
    let entries = db.query_entries(&entry_filter)?;

    let bytes = worklog_export::to_csv(&entries)?;
    let dest = output.unwrap_or_else(|| PathBuf::from("worklog.csv"));
    fs::write(&dest, bytes).with_context(|| format!("Failed to write {}", dest.display()))?;

    println!("Exported {} entries to {}", entries.len(), dest.display());
    Ok(())
}

pub fn handle_markdown(
    ctx: &ExecutionContext,
    output: Option<PathBuf>,
    filter: &FilterArgs,
) -> Result<()> {
    let db = ctx.db()?;
    let entry_filter = build_entry_filter(db, filter)?;
    let entries = db.query_entries(&entry_filter)?;

    let journal = worklog_export::to_markdown_journal(&entries);
    let dest = output.unwrap_or_else(|| PathBuf::from("worklog.md"));
    fs::write(&dest, journal).with_context(|| format!("Failed to write {}", dest.display()))?;

    println!("Exported {} entries to {}", entries.len(), dest.display());
    Ok(())
}
