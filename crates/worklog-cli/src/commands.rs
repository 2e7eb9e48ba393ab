use super::args::{AttachCommand, Cli, Commands, ExportCommand, ProjectCommand};
use super::handlers;
use crate::context::{CONFIG_FILE_NAME, DB_FILE_NAME, ExecutionContext};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    let root = resolve_root(cli.dir.as_deref())?;
    let ctx = ExecutionContext::new(root);

    let Some(command) = cli.command else {
        show_guidance(&ctx);
        return Ok(());
    };

    match command {
        Commands::Init => handlers::init::handle(&ctx),

        Commands::Project { command } => match command {
            ProjectCommand::List => handlers::project::handle_list(&ctx, cli.format),
            ProjectCommand::Set { name, base_path } => {
                handlers::project::handle_set(&ctx, &name, base_path.as_deref())
            }
        },

        Commands::Add(args) => handlers::add::handle(&ctx, args),

        Commands::List { filter } => handlers::list::handle(&ctx, &filter, cli.format),

        Commands::Show { id } => handlers::show::handle(&ctx, id, cli.format),

        Commands::Export { command } => match command {
            ExportCommand::Csv { output, filter } => {
                handlers::export::handle_csv(&ctx, output, &filter)
            }
            ExportCommand::Markdown { output, filter } => {
                handlers::export::handle_markdown(&ctx, output, &filter)
            }
        },

        Commands::Attach { command } => match command {
            AttachCommand::Add { entry_id, files } => {
                handlers::attach::handle_add(&ctx, entry_id, &files)
            }
            AttachCommand::List { entry_id } => {
                handlers::attach::handle_list(&ctx, entry_id, cli.format)
            }
        },

        Commands::Paths => handlers::paths::handle(&ctx, cli.format),

        Commands::Open { path, entry } => handlers::open::handle(&ctx, path.as_deref(), entry),
    }
}

/// Resolve the journal root: `--dir` flag, then `WORKLOG_DIR`, then the
/// current directory.
fn resolve_root(flag: Option<&str>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(expand_tilde(dir));
    }

    if let Ok(dir) = std::env::var("WORKLOG_DIR")
        && !dir.trim().is_empty()
    {
        return Ok(expand_tilde(dir.trim()));
    }

    std::env::current_dir().context("Failed to resolve the current directory")
}

/// Expand a leading tilde (~) to the user's home directory.
pub(crate) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn show_guidance(ctx: &ExecutionContext) {
    let db_exists = ctx.db_path().exists();

    println!("worklog - Terminal work journal\n");

    if !db_exists {
        println!("Get started:");
        println!("  worklog init\n");
        println!("The init command will:");
        println!("  1. Create the journal database ({})", DB_FILE_NAME);
        println!("  2. Write a default config ({})", CONFIG_FILE_NAME);
        println!("  3. Create the attachments directory\n");
    } else {
        println!("Quick commands:");
        println!("  worklog add --title \"...\"            # Record what you just did");
        println!("  worklog list --since 2024-01-01       # Review recent entries");
        println!("  worklog show <ID>                     # One entry, with attachments");
        println!("  worklog export markdown               # Day-grouped journal file\n");
    }

    println!("For more commands:");
    println!("  worklog --help");
}
