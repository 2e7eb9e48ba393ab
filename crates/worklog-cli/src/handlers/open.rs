use crate::commands::expand_tilde;
use crate::context::ExecutionContext;
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use std::process::Command;
use worklog_types::EntryId;

pub fn handle(ctx: &ExecutionContext, path: Option<&str>, entry: Option<i64>) -> Result<()> {
    // --entry conflicts with the positional at the parser level
    let target: PathBuf = match (path, entry) {
        (Some(raw), _) => expand_tilde(raw),
        (None, Some(id)) => {
            let db = ctx.db()?;
            let Some(row) = db.get_entry(EntryId::new(id))? else {
                bail!("No entry with id {}", id);
            };
            if row.path.trim().is_empty() {
                bail!("Entry {} has no recorded path", id);
            }
            expand_tilde(row.path.trim())
        }
        (None, None) => ctx.root().to_path_buf(),
    };

    if !target.exists() {
        eprintln!("Warning: {} does not exist", target.display());
    }

    println!("Opening {}", target.display());
    reveal(&target);
    Ok(())
}

/// Hand the path to the platform file manager. Failures are reported as
/// warnings; recording work must never fail because a viewer is missing.
pub fn reveal(path: &Path) {
    match Command::new(OPENER).arg(path).status() {
        Ok(status) if status.success() => {}
        Ok(status) => eprintln!("Warning: {} exited with {}", OPENER, status),
        Err(e) => eprintln!("Warning: could not launch {}: {}", OPENER, e),
    }
}

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(target_os = "windows")]
const OPENER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: &str = "xdg-open";
