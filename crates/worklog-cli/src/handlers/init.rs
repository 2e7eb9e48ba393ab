use crate::config::Config;
use crate::context::ExecutionContext;
use anyhow::{Context, Result};
use std::fs;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    println!("Initializing worklog in {}\n", ctx.root().display());

    fs::create_dir_all(ctx.root())
        .with_context(|| format!("Failed to create {}", ctx.root().display()))?;

    let config_path = ctx.config_path();
    if config_path.exists() {
        println!("Config already present: {}", config_path.display());
    } else {
        Config::default().save_to(&config_path)?;
        println!("Wrote default config: {}", config_path.display());
    }

    let db_path = ctx.db_path();
    let fresh = !db_path.exists();
    ctx.db()?;
    if fresh {
        println!("Created database: {}", db_path.display());
    } else {
        println!("Database already present: {}", db_path.display());
    }

    let attachments_root = ctx.attachments_root()?;
    fs::create_dir_all(&attachments_root)
        .with_context(|| format!("Failed to create {}", attachments_root.display()))?;
    println!("Attachments directory: {}", attachments_root.display());

    println!("\nRecord your first entry:");
    println!("  worklog add --title \"What you worked on\"");

    Ok(())
}
