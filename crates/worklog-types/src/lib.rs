pub mod attachment;
pub mod entry;
pub mod error;
pub mod filter;
pub mod ids;
pub mod project;
pub mod time;
pub mod work_type;

pub use attachment::*;
pub use entry::*;
pub use error::{Error, Result};
pub use filter::*;
pub use ids::*;
pub use project::*;
pub use time::*;
pub use work_type::*;
