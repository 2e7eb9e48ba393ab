// NOTE: worklog Architecture Rationale
//
// Why one database per journal root (not a global one under ~/.worklog)?
// - A journal belongs next to the work it describes; copying the directory
//   copies the whole history, attachments included
// - --dir / WORKLOG_DIR scope unrelated jobs cleanly (client work vs. lab
//   notebooks never mix)
// - Trade-off: no cross-journal queries, which nobody has asked for
//
// Why attachments as plain files (not BLOBs in SQLite)?
// - Files open in whatever tool already handles them; no "extract" step
// - The database stays small enough to back up casually
// - Trade-off: a file can vanish behind the row's back, so the views check
//   existence at display time instead of trusting the index
//
// Why TEXT timestamps in the schema (not epoch integers)?
// - ISO-8601 strings sort lexicographically, so the ts index works as-is
// - DATE(ts) gives day grouping for free in both filters and exports
// - Trade-off: slightly larger rows; irrelevant at personal-journal scale

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod types;
mod views;

pub use args::{AddArgs, AttachCommand, Cli, Commands, ExportCommand, FilterArgs, ProjectCommand};
pub use commands::run;
