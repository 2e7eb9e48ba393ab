use crate::types::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "worklog")]
#[command(about = "Record what you worked on, straight from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true)]
    pub dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Init,

    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },

    Add(AddArgs),

    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    Show {
        id: i64,
    },

    Export {
        #[command(subcommand)]
        command: ExportCommand,
    },

    Attach {
        #[command(subcommand)]
        command: AttachCommand,
    },

    Paths,

    Open {
        path: Option<String>,

        #[arg(long, conflicts_with = "path")]
        entry: Option<i64>,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    List,

    Set {
        name: String,

        #[arg(long)]
        base_path: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ExportCommand {
    Csv {
        #[arg(long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    Markdown {
        #[arg(long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Subcommand)]
pub enum AttachCommand {
    Add {
        entry_id: i64,

        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    List {
        entry_id: i64,
    },
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub at: Option<String>,

    #[arg(long)]
    pub project: Option<String>,

    #[arg(long)]
    pub kind: Option<String>,

    #[arg(long)]
    pub tags: Option<String>,

    #[arg(long)]
    pub path: Option<String>,

    #[arg(long)]
    pub duration: Option<f64>,

    #[arg(long, conflicts_with = "notes_file")]
    pub notes: Option<String>,

    #[arg(long)]
    pub notes_file: Option<PathBuf>,

    #[arg(long)]
    pub attach: Vec<PathBuf>,

    #[arg(long)]
    pub open: bool,
}

#[derive(Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub since: Option<String>,

    #[arg(long)]
    pub until: Option<String>,

    #[arg(long = "project")]
    pub projects: Vec<String>,

    #[arg(long)]
    pub text: Option<String>,

    #[arg(long)]
    pub tag: Option<String>,
}
