use crate::context::ExecutionContext;
use crate::types::OutputFormat;
use crate::views::{ProjectListView, ProjectRow};
use anyhow::{Result, bail};

pub fn handle_list(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let db = ctx.db()?;
    let projects = db.list_projects()?;

    let mut rows = Vec::with_capacity(projects.len());
    for project in projects {
        let entries = db.count_entries_for_project(project.id)?;
        rows.push(ProjectRow {
            id: project.id.get(),
            name: project.name,
            base_path: project.base_path,
            created_at: project.created_at,
            entries,
        });
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Plain => print!("{}", ProjectListView::new(&rows)),
    }
    Ok(())
}

pub fn handle_set(ctx: &ExecutionContext, name: &str, base_path: Option<&str>) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Project name must not be empty");
    }

    let db = ctx.db()?;
    let id = db.upsert_project(name, base_path)?;

    match base_path {
        Some(path) => println!("Project '{}' saved (id {}, base path {})", name, id, path),
        None => println!("Project '{}' saved (id {})", name, id),
    }
    Ok(())
}
