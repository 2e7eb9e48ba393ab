use crate::config::Config;
use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use worklog_store::Database;

pub const DB_FILE_NAME: &str = ".worklog.db";
pub const CONFIG_FILE_NAME: &str = ".worklog.toml";

/// Per-invocation state: the resolved journal root plus lazily opened
/// database and config. Nothing touches the filesystem until a handler
/// actually asks for it.
pub struct ExecutionContext {
    root: PathBuf,
    db: OnceCell<Database>,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            db: OnceCell::new(),
            config: OnceCell::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.join(DB_FILE_NAME)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    pub fn db(&self) -> Result<&Database> {
        self.db.get_or_try_init(|| {
            let db_path = self.db_path();
            Database::open(&db_path).map_err(Into::into)
        })
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
    }

    /// Absolute directory attachment files are stored under.
    pub fn attachments_root(&self) -> Result<PathBuf> {
        Ok(self.root.join(&self.config()?.attachments_dir))
    }
}
