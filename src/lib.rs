//! USDA Major Land Use survey (1945-2012) analysis.
//!
//! Loads the fixed 20-column survey CSV, drops the rows the analysis
//! excludes, and answers five fixed questions over the remaining
//! records. The dataset is small enough to hold in memory whole; every
//! query is a pure function over the loaded collection.

pub mod analysis;
pub mod data;
