//! Survey Record Module
//! The parsed row type, the land-use category enumeration, and the
//! numeric parse policy shared by both.

use std::fmt;

/// Number of columns in the source CSV.
pub const COLUMN_COUNT: usize = 20;

/// Parse an acreage token from the source file.
///
/// The dataset marks unavailable values as "N.A."; those (and any other
/// non-numeric token) become 0. This is a lossy but intentional
/// convention inherited from the dataset's published analyses: a 0 from
/// "N.A." is indistinguishable from a true zero, and downstream
/// averages depend on it staying that way.
pub fn parse_acres(token: &str) -> i64 {
    token.parse().unwrap_or(0)
}

/// One row of the USDA Major Land Use survey, post-filtering.
/// All acreage fields are in thousands of acres, as published.
/// Immutable after construction; queries only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Source ordering key. Unique per row within one file.
    pub sort_order: i64,
    /// Geographic region. Regional aggregate rows contain "total".
    pub region: String,
    /// State name, or a region label on aggregate rows.
    pub region_or_state: String,
    /// Four-digit survey year, kept textual. It is only ever compared
    /// or parsed on demand, never manipulated arithmetically.
    pub year: String,
    pub total_land: i64,
    pub total_cropland: i64,
    pub cropland_used_for_crops: i64,
    pub cropland_used_for_pasture: i64,
    pub cropland_idled: i64,
    pub grassland_pasture_and_range: i64,
    pub forest_use_land: i64,
    pub forest_use_land_grazed: i64,
    pub forest_use_land_not_grazed: i64,
    pub all_special_uses_of_land: i64,
    pub rural_transportation: i64,
    pub rural_parks_and_wildlife: i64,
    pub defense_and_industrial: i64,
    pub farmsteads_roads_misc: i64,
    pub urban_land: i64,
    pub other_land: i64,
}

impl Record {
    /// Build a Record from the 20 raw fields of one CSV line, in file
    /// column order. Fields 0 and 4-19 are numeric with the "N.A." -> 0
    /// fallback; fields 1-3 stay textual.
    pub fn from_fields(fields: &[&str]) -> Self {
        debug_assert_eq!(fields.len(), COLUMN_COUNT);
        Self {
            sort_order: parse_acres(fields[0]),
            region: fields[1].to_string(),
            region_or_state: fields[2].to_string(),
            year: fields[3].to_string(),
            total_land: parse_acres(fields[4]),
            total_cropland: parse_acres(fields[5]),
            cropland_used_for_crops: parse_acres(fields[6]),
            cropland_used_for_pasture: parse_acres(fields[7]),
            cropland_idled: parse_acres(fields[8]),
            grassland_pasture_and_range: parse_acres(fields[9]),
            forest_use_land: parse_acres(fields[10]),
            forest_use_land_grazed: parse_acres(fields[11]),
            forest_use_land_not_grazed: parse_acres(fields[12]),
            all_special_uses_of_land: parse_acres(fields[13]),
            rural_transportation: parse_acres(fields[14]),
            rural_parks_and_wildlife: parse_acres(fields[15]),
            defense_and_industrial: parse_acres(fields[16]),
            farmsteads_roads_misc: parse_acres(fields[17]),
            urban_land: parse_acres(fields[18]),
            other_land: parse_acres(fields[19]),
        }
    }

    /// Whether this row is a region-level sum rather than a single state.
    pub fn is_regional_aggregate(&self) -> bool {
        self.region.contains("total")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sort Order: {}", self.sort_order)?;
        writeln!(f, "Region: {}", self.region)?;
        writeln!(f, "Region or State: {}", self.region_or_state)?;
        writeln!(f, "Year: {}", self.year)?;
        writeln!(f, "Total Land: {}", self.total_land)?;
        writeln!(f, "Total Cropland: {}", self.total_cropland)?;
        writeln!(f, "Cropland Used for Crops: {}", self.cropland_used_for_crops)?;
        writeln!(f, "Cropland Used for Pasture: {}", self.cropland_used_for_pasture)?;
        writeln!(f, "Cropland Idled: {}", self.cropland_idled)?;
        writeln!(f, "Grassland Pasture and Range: {}", self.grassland_pasture_and_range)?;
        writeln!(f, "Forest-Use Land: {}", self.forest_use_land)?;
        writeln!(f, "Forest-Use Land Grazed: {}", self.forest_use_land_grazed)?;
        writeln!(f, "Forest-Use Land Not Grazed: {}", self.forest_use_land_not_grazed)?;
        writeln!(f, "All Special Uses of Land: {}", self.all_special_uses_of_land)?;
        writeln!(f, "Land in Rural Transportation Facilities: {}", self.rural_transportation)?;
        writeln!(f, "Land in Rural Parks and Wildlife Areas: {}", self.rural_parks_and_wildlife)?;
        writeln!(f, "Land in Defense and Industrial Areas: {}", self.defense_and_industrial)?;
        writeln!(f, "Farmsteads, Roads, and Miscellaneous Farmland: {}", self.farmsteads_roads_misc)?;
        writeln!(f, "Land in Urban Areas: {}", self.urban_land)?;
        writeln!(f, "Other Land: {}", self.other_land)
    }
}

/// The 12 leaf land-use categories tracked per record.
///
/// The four subtotal columns (total land, total cropland, forest-use
/// land, all special uses) are not categories and are never deltaed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandCategory {
    CroplandForCrops,
    CroplandForPasture,
    CroplandIdled,
    GrasslandPastureAndRange,
    ForestUseLandGrazed,
    ForestUseLandNotGrazed,
    RuralTransportation,
    RuralParksAndWildlife,
    DefenseAndIndustrial,
    FarmsteadsRoadsMisc,
    UrbanAreas,
    OtherLand,
}

impl LandCategory {
    /// Fixed enumeration order. Ties in the shift computation are broken
    /// by position in this array, so the order is part of the contract.
    pub const ALL: [LandCategory; 12] = [
        LandCategory::CroplandForCrops,
        LandCategory::CroplandForPasture,
        LandCategory::CroplandIdled,
        LandCategory::GrasslandPastureAndRange,
        LandCategory::ForestUseLandGrazed,
        LandCategory::ForestUseLandNotGrazed,
        LandCategory::RuralTransportation,
        LandCategory::RuralParksAndWildlife,
        LandCategory::DefenseAndIndustrial,
        LandCategory::FarmsteadsRoadsMisc,
        LandCategory::UrbanAreas,
        LandCategory::OtherLand,
    ];

    /// Column label as published in the survey.
    pub fn label(self) -> &'static str {
        match self {
            LandCategory::CroplandForCrops => "Cropland Used for Crops",
            LandCategory::CroplandForPasture => "Cropland Used for Pasture",
            LandCategory::CroplandIdled => "Cropland Idled",
            LandCategory::GrasslandPastureAndRange => "Grassland Pasture and Range",
            LandCategory::ForestUseLandGrazed => "Forest-Use Land Grazed",
            LandCategory::ForestUseLandNotGrazed => "Forest-Use Land Not Grazed",
            LandCategory::RuralTransportation => "Land in Rural Transportation Facilities",
            LandCategory::RuralParksAndWildlife => "Land in Rural Parks and Wildlife Areas",
            LandCategory::DefenseAndIndustrial => "Land in Defense and Industrial Areas",
            LandCategory::FarmsteadsRoadsMisc => "Farmsteads, Roads, and Miscellaneous Farmland",
            LandCategory::UrbanAreas => "Land in Urban Areas",
            LandCategory::OtherLand => "Other Land",
        }
    }

    /// Acreage of this category in the given record.
    pub fn acres(self, record: &Record) -> i64 {
        match self {
            LandCategory::CroplandForCrops => record.cropland_used_for_crops,
            LandCategory::CroplandForPasture => record.cropland_used_for_pasture,
            LandCategory::CroplandIdled => record.cropland_idled,
            LandCategory::GrasslandPastureAndRange => record.grassland_pasture_and_range,
            LandCategory::ForestUseLandGrazed => record.forest_use_land_grazed,
            LandCategory::ForestUseLandNotGrazed => record.forest_use_land_not_grazed,
            LandCategory::RuralTransportation => record.rural_transportation,
            LandCategory::RuralParksAndWildlife => record.rural_parks_and_wildlife,
            LandCategory::DefenseAndIndustrial => record.defense_and_industrial,
            LandCategory::FarmsteadsRoadsMisc => record.farmsteads_roads_misc,
            LandCategory::UrbanAreas => record.urban_land,
            LandCategory::OtherLand => record.other_land,
        }
    }
}

impl fmt::Display for LandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
