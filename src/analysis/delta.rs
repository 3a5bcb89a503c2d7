//! Region Shift Module
//! Value type for the largest land-use change of one region between the
//! two snapshot years.

use std::fmt;

use crate::data::{LandCategory, Record};

/// The two survey years compared by the shift query.
pub const BASELINE_YEAR: &str = "1945";
pub const COMPARISON_YEAR: &str = "2012";

/// Sign of a shift, derived from the delta.
///
/// A delta of exactly zero is neither an increase nor a decrease; the
/// source analysis left that case unspecified, so it gets its own
/// variant rather than being folded into either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    Increased,
    Decreased,
    Unchanged,
}

impl ShiftDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftDirection::Increased => "increased",
            ShiftDirection::Decreased => "decreased",
            ShiftDirection::Unchanged => "unchanged",
        }
    }
}

/// The single largest land-use-category change for one region between
/// 1945 and 2012. Built transiently while answering the shift query;
/// only the global maximum survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionShift {
    pub region: String,
    pub category: LandCategory,
    /// Signed change in acres, 2012 minus 1945. Positive is an increase.
    pub delta: i64,
}

impl RegionShift {
    /// Largest-absolute-delta category for one region, given its two
    /// snapshot rows. Ties keep the earlier category in enumeration
    /// order.
    pub fn between(region: &str, baseline: &Record, comparison: &Record) -> Self {
        let mut category = LandCategory::ALL[0];
        let mut delta = category.acres(comparison) - category.acres(baseline);

        for candidate in &LandCategory::ALL[1..] {
            let candidate_delta = candidate.acres(comparison) - candidate.acres(baseline);
            if candidate_delta.abs() > delta.abs() {
                category = *candidate;
                delta = candidate_delta;
            }
        }

        Self {
            region: region.to_string(),
            category,
            delta,
        }
    }

    pub fn direction(&self) -> ShiftDirection {
        match self.delta.signum() {
            1 => ShiftDirection::Increased,
            -1 => ShiftDirection::Decreased,
            _ => ShiftDirection::Unchanged,
        }
    }
}

impl fmt::Display for RegionShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The region in which land use changed the most between {} and {} is {}: {} {} by {} acres.",
            BASELINE_YEAR,
            COMPARISON_YEAR,
            self.region,
            self.category,
            self.direction().as_str(),
            self.delta.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;

    fn aggregate(region: &str, year: &str, categories: [i64; 12]) -> Record {
        let [crops, pasture, idled, grassland, grazed, not_grazed, transport, parks, defense, farmsteads, urban, other] =
            categories;
        Record {
            sort_order: 0,
            region: region.to_string(),
            region_or_state: region.trim_end_matches(" total").to_string(),
            year: year.to_string(),
            total_land: 0,
            total_cropland: crops + pasture + idled,
            cropland_used_for_crops: crops,
            cropland_used_for_pasture: pasture,
            cropland_idled: idled,
            grassland_pasture_and_range: grassland,
            forest_use_land: grazed + not_grazed,
            forest_use_land_grazed: grazed,
            forest_use_land_not_grazed: not_grazed,
            all_special_uses_of_land: transport + parks + defense + farmsteads,
            rural_transportation: transport,
            rural_parks_and_wildlife: parks,
            defense_and_industrial: defense,
            farmsteads_roads_misc: farmsteads,
            urban_land: urban,
            other_land: other,
        }
    }

    #[test]
    fn picks_largest_absolute_category_delta() {
        let baseline = aggregate(
            "Mountain total",
            "1945",
            [100, 100, 100, 5000, 100, 100, 100, 100, 100, 100, 100, 100],
        );
        let comparison = aggregate(
            "Mountain total",
            "2012",
            [300, 100, 100, 2000, 100, 100, 100, 100, 100, 100, 100, 100],
        );
        let shift = RegionShift::between("Mountain total", &baseline, &comparison);
        assert_eq!(shift.category, LandCategory::GrasslandPastureAndRange);
        assert_eq!(shift.delta, -3000);
        assert_eq!(shift.direction(), ShiftDirection::Decreased);
    }

    #[test]
    fn category_ties_keep_enumeration_order() {
        let baseline = aggregate("Pacific total", "1945", [0; 12]);
        // Cropland Used for Crops (+400) ties Other Land (-400) in
        // magnitude; the earlier category wins.
        let comparison = aggregate(
            "Pacific total",
            "2012",
            [400, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -400],
        );
        let shift = RegionShift::between("Pacific total", &baseline, &comparison);
        assert_eq!(shift.category, LandCategory::CroplandForCrops);
        assert_eq!(shift.delta, 400);
    }

    #[test]
    fn zero_delta_is_unchanged() {
        let row = aggregate("Northeast total", "1945", [1; 12]);
        let mut same = row.clone();
        same.year = "2012".to_string();
        let shift = RegionShift::between("Northeast total", &row, &same);
        assert_eq!(shift.delta, 0);
        assert_eq!(shift.direction(), ShiftDirection::Unchanged);
    }

    #[test]
    fn report_sentence_names_region_category_and_direction() {
        let shift = RegionShift {
            region: "Pacific total".to_string(),
            category: LandCategory::ForestUseLandNotGrazed,
            delta: -28720,
        };
        let text = shift.to_string();
        assert!(text.contains("Pacific total"));
        assert!(text.contains("Forest-Use Land Not Grazed"));
        assert!(text.contains("decreased by 28720 acres"));
    }
}
