mod common;

pub mod add;
pub mod attach;
pub mod export;
pub mod init;
pub mod list;
pub mod open;
pub mod paths;
pub mod project;
pub mod show;

pub(crate) use common::{attach_files, build_entry_filter};
