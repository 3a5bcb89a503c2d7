//! Data module - survey record model and CSV loading

mod loader;
mod record;

pub use loader::{load_records, parse_records, LoaderError, BANNED_SUBSTRINGS};
pub use record::{parse_acres, LandCategory, Record, COLUMN_COUNT};
