//! Query Functions Module
//! The five fixed analytical questions, each a pure function over the
//! loaded record collection.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use super::delta::{RegionShift, BASELINE_YEAR, COMPARISON_YEAR};
use crate::data::Record;

/// Question 2 threshold: acres of urban land a state must reach.
pub const URBAN_LAND_THRESHOLD: i64 = 2000;
/// Question 2 cutoff: survey years strictly before this one qualify.
pub const URBAN_LAND_CUTOFF_YEAR: i64 = 1987;

/// Question 4 allow-list: modern-day equivalents of the original 13
/// colonies. Maryland, New York, and Pennsylvania are already gone from
/// the data (the loader's y-filter removes them), and West Virginia
/// stands in for colonial Virginia's extent. A literal business rule,
/// kept as data.
pub const COLONY_STATES: [&str; 10] = [
    "Delaware",
    "Georgia",
    "Connecticut",
    "Massachusetts",
    "South Carolina",
    "New Hampshire",
    "Virginia",
    "West Virginia",
    "North Carolina",
    "Rhode Island",
];

#[derive(Error, Debug)]
pub enum QueryError {
    /// A query that needs at least one matching record found none.
    #[error("no records matched: {0}")]
    NoMatch(&'static str),
    /// An average was requested over an empty selection. Surfaced as an
    /// error rather than NaN so the report never prints a non-answer.
    #[error("average over empty selection: {0}")]
    EmptyAverage(&'static str),
}

/// Question 1: which region had the most grassland pasture and range in
/// 1974? Considers regional aggregate rows only.
pub fn max_grassland_region_1974(records: &[Record]) -> Result<String, QueryError> {
    records
        .iter()
        .filter(|r| r.year == "1974" && r.is_regional_aggregate())
        .max_by_key(|r| r.grassland_pasture_and_range)
        .map(|r| r.region.clone())
        .ok_or(QueryError::NoMatch("no regional aggregate rows for 1974"))
}

/// Question 2: how many states had at least 2,000 acres of urban land in
/// any year before 1987? Distinct state count; zero when nothing
/// matches.
pub fn count_urban_states_before_1987(records: &[Record]) -> usize {
    count_urban_states_over(records, URBAN_LAND_THRESHOLD)
}

/// Threshold-parameterized body of Question 2. Lowering the threshold
/// can only admit more states, which makes the count monotonic; the
/// fixed question pins the threshold at [`URBAN_LAND_THRESHOLD`].
pub fn count_urban_states_over(records: &[Record], min_acres: i64) -> usize {
    let states: HashSet<&str> = records
        .iter()
        .filter(|r| {
            r.urban_land >= min_acres
                && !r.is_regional_aggregate()
                && r.year
                    .parse::<i64>()
                    .is_ok_and(|year| year < URBAN_LAND_CUTOFF_YEAR)
        })
        .map(|r| r.region_or_state.as_str())
        .collect();
    states.len()
}

/// Question 3: average cropland used for pasture across the Pacific and
/// Mountain region rows for 1964.
pub fn average_cropland_pasture_1964(records: &[Record]) -> Result<f64, QueryError> {
    let selected: Vec<i64> = records
        .iter()
        .filter(|r| (r.region == "Pacific" || r.region == "Mountain") && r.year == "1964")
        .map(|r| r.cropland_used_for_pasture)
        .collect();

    if selected.is_empty() {
        return Err(QueryError::EmptyAverage(
            "no Pacific or Mountain rows for 1964",
        ));
    }
    Ok(selected.iter().sum::<i64>() as f64 / selected.len() as f64)
}

/// Question 4: among the 13-colony states still present in the data,
/// which had the most forest-use land in 2012? The state with the
/// maximum is by definition the largest contributor to its region's
/// total, so no per-region grouping is needed.
pub fn max_forest_use_colony_state_2012(records: &[Record]) -> Result<String, QueryError> {
    records
        .iter()
        .filter(|r| r.year == "2012" && COLONY_STATES.contains(&r.region_or_state.as_str()))
        .max_by_key(|r| r.forest_use_land)
        .map(|r| r.region_or_state.clone())
        .ok_or(QueryError::NoMatch("no colony-state rows for 2012"))
}

/// Question 5: which region had the largest shift in any land-use
/// category between 1945 and 2012?
///
/// Two-stage reduction: group the regional aggregate rows by region and
/// pair each region's 1945 and 2012 snapshots, reduce each pair to its
/// largest-absolute category delta, then reduce across regions to the
/// largest-absolute shift overall. Comparison is sign-agnostic at both
/// stages; a -700 shift beats a +500 one. Regions missing either
/// snapshot year are skipped.
pub fn largest_regional_shift(records: &[Record]) -> Result<RegionShift, QueryError> {
    let mut snapshots: BTreeMap<&str, (Option<&Record>, Option<&Record>)> = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_regional_aggregate()) {
        match record.year.as_str() {
            BASELINE_YEAR => snapshots.entry(&record.region).or_default().0 = Some(record),
            COMPARISON_YEAR => snapshots.entry(&record.region).or_default().1 = Some(record),
            _ => {}
        }
    }

    let mut winner: Option<RegionShift> = None;
    for (region, (baseline, comparison)) in snapshots {
        let (Some(baseline), Some(comparison)) = (baseline, comparison) else {
            continue;
        };
        let shift = RegionShift::between(region, baseline, comparison);
        let beats_current = winner
            .as_ref()
            .is_none_or(|best| shift.delta.abs() > best.delta.abs());
        if beats_current {
            winner = Some(shift);
        }
    }

    winner.ok_or(QueryError::NoMatch(
        "no region has both 1945 and 2012 aggregate rows",
    ))
}
