pub mod attachment;
pub mod entry;
pub mod project;
