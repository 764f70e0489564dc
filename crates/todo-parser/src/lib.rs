//! Daily todo file handling.
//!
//! - [`parse`]: markdown checklist text to categorized tasks and completion stats
//! - [`source`]: where daily files live (filesystem by default)
//! - [`aggregate`]: completion summaries across every stored day

pub mod aggregate;
pub mod parse;
pub mod source;

pub use aggregate::{build_completion_map, load_day};
pub use parse::{parse_categorized, ParsedDay};
pub use source::{FsTodoStore, TodoSource};
