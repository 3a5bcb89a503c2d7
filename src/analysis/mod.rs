//! Analysis module - the five fixed survey questions

mod delta;
mod queries;

pub use delta::{RegionShift, ShiftDirection, BASELINE_YEAR, COMPARISON_YEAR};
pub use queries::{
    average_cropland_pasture_1964, count_urban_states_before_1987, count_urban_states_over,
    largest_regional_shift, max_forest_use_colony_state_2012, max_grassland_region_1974,
    QueryError, COLONY_STATES, URBAN_LAND_CUTOFF_YEAR, URBAN_LAND_THRESHOLD,
};
