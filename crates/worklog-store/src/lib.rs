// Embedded SQLite store for the worklog
// Owns the schema and all SQL; callers speak in domain types

mod attach;
mod db;
mod error;
mod queries;
mod schema;

// Public API
pub use attach::store_attachment;
pub use db::Database;
pub use error::{Error, Result};
pub use schema::SCHEMA_VERSION;
