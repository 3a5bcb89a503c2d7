//! CSV Data Loader Module
//! Reads the survey file, applies the row exclusion rules, and parses
//! surviving lines into Records.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use super::record::{Record, COLUMN_COUNT};

/// Raw lines containing any of these substrings are dropped before
/// parsing. These are literal business rules from the survey's analysis
/// instructions, kept as data so they stay auditable.
pub const BANNED_SUBSTRINGS: [&str; 4] =
    ["AK and HI", "48 States", "U.S. total", "District of Columbia"];

#[derive(Error, Debug)]
pub enum LoaderError {
    /// Any I/O failure reading the source file, wrong path included.
    /// Deliberately a single kind: callers only need to know the file
    /// was inaccessible, not why.
    #[error("failed to read survey file: {0}")]
    FileAccess(#[from] std::io::Error),
    #[error("line {line}: expected 20 columns, found {found}")]
    ColumnCount { line: usize, found: usize },
}

/// Load and filter the survey file.
///
/// Returns the surviving Records in original file order. The whole
/// collection is materialized up front; the dataset is a few hundred
/// rows and every query consumes it in full.
pub fn load_records(path: &Path) -> Result<Vec<Record>, LoaderError> {
    let content = fs::read_to_string(path)?;
    let records = parse_records(&content)?;
    info!(path = %path.display(), rows = records.len(), "loaded survey records");
    Ok(records)
}

/// Parse already-read file content. Split out of [`load_records`] so the
/// line pipeline can be exercised without touching the filesystem.
///
/// Pipeline, in order:
/// 1. skip the header line
/// 2. drop lines containing a banned substring (checked against the raw
///    line, so both the region and state columns are covered)
/// 3. split on `,` into exactly 20 fields; the dataset is quote-free, so
///    no quoting or escaping is handled
/// 4. parse positionally into a Record
/// 5. drop Records whose state-or-region field contains y/Y (this also
///    removes some otherwise-valid states; the literal rule is the
///    contract)
pub fn parse_records(content: &str) -> Result<Vec<Record>, LoaderError> {
    let mut records = Vec::new();

    for (index, line) in content.lines().enumerate().skip(1) {
        if BANNED_SUBSTRINGS.iter().any(|banned| line.contains(banned)) {
            debug!(line = index + 1, "dropped excluded row");
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != COLUMN_COUNT {
            return Err(LoaderError::ColumnCount {
                line: index + 1,
                found: fields.len(),
            });
        }

        let record = Record::from_fields(&fields);
        if record.region_or_state.contains(['y', 'Y']) {
            continue;
        }
        records.push(record);
    }

    Ok(records)
}
