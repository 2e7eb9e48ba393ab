use crate::args::AddArgs;
use crate::context::ExecutionContext;
use crate::handlers::attach_files;
use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use worklog_types::{NewEntry, WorkType, time};

/// Fallback work type when neither `--kind` nor the config names one.
const DEFAULT_KIND: &str = "Experiment";

pub fn handle(ctx: &ExecutionContext, args: AddArgs) -> Result<()> {
    let title = args.title.trim();
    if title.is_empty() {
        bail!("Entry title must not be empty");
    }

    if let Some(d) = args.duration
        && d < 0.0
    {
        bail!("Duration must be zero or more hours, got {}", d);
    }

    let ts = match args.at.as_deref() {
        Some(raw) => time::parse_event_ts(raw).map_err(|e| anyhow!("Invalid --at value: {}", e))?,
        None => chrono::Local::now().naive_local(),
    };

    let db = ctx.db()?;

    let project_id = match args.project.as_deref() {
        Some(name) => {
            let name = name.trim();
            match db.find_project_id_by_name(name)? {
                Some(id) => Some(id),
                None => bail!(
                    "Unknown project '{}'. Create it first: worklog project set \"{}\"",
                    name,
                    name
                ),
            }
        }
        None => None,
    };

    let config = ctx.config()?;
    let kind_raw = args
        .kind
        .or_else(|| config.default_kind.clone())
        .unwrap_or_else(|| DEFAULT_KIND.to_string());

    let notes_md = match (args.notes, args.notes_file) {
        (Some(notes), _) => notes,
        (None, Some(file)) => fs::read_to_string(&file)
            .with_context(|| format!("Failed to read notes file {}", file.display()))?,
        (None, None) => String::new(),
    };

    let entry = NewEntry {
        ts,
        title: title.to_string(),
        project_id,
        work_type: WorkType::from(kind_raw),
        tags: args.tags.as_deref().unwrap_or_default().trim().to_string(),
        path: args.path.as_deref().unwrap_or_default().trim().to_string(),
        duration_hours: args.duration,
        notes_md,
    };

    let id = db.insert_entry(&entry)?;
    println!("Recorded entry {} ({})", id, time::format_event_ts(&entry.ts));

    for attachment in attach_files(ctx, id, &args.attach)? {
        println!("  attached {}", attachment.rel_path);
    }

    if args.open {
        if entry.path.is_empty() {
            eprintln!("Warning: nothing to open, no --path was given");
        } else {
            crate::handlers::open::reveal(&crate::commands::expand_tilde(&entry.path));
        }
    }

    Ok(())
}
