use std::path::Path;

use landuse_report::analysis::{
    average_cropland_pasture_1964, count_urban_states_before_1987, count_urban_states_over,
    largest_regional_shift, max_forest_use_colony_state_2012, max_grassland_region_1974,
    QueryError, ShiftDirection,
};
use landuse_report::data::{load_records, parse_records, LandCategory, Record};

fn load_fixture() -> Vec<Record> {
    let path = Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/landuse_sample.csv"
    ));
    load_records(path).expect("fixture should load")
}

#[test]
fn question_1_max_grassland_region() {
    let records = load_fixture();
    let region = max_grassland_region_1974(&records).expect("1974 aggregates exist");
    assert_eq!(region, "Mountain total");
}

#[test]
fn question_1_fails_without_aggregate_rows() {
    let records: Vec<Record> = load_fixture()
        .into_iter()
        .filter(|r| !r.is_regional_aggregate())
        .collect();
    assert!(matches!(
        max_grassland_region_1974(&records),
        Err(QueryError::NoMatch(_))
    ));
}

#[test]
fn question_2_distinct_urban_states() {
    let records = load_fixture();
    // California (1974 and 1982, counted once) and Massachusetts (1978).
    // Aggregate rows and years from 1987 on never count.
    assert_eq!(count_urban_states_before_1987(&records), 2);
}

#[test]
fn question_2_count_is_monotonic_in_threshold() {
    let records = load_fixture();
    let mut previous = 0;
    for threshold in [4000, 3000, 2500, 2100, 2000, 800, 0] {
        let count = count_urban_states_over(&records, threshold);
        assert!(
            count >= previous,
            "lowering the threshold to {threshold} shrank the count"
        );
        previous = count;
    }
    assert_eq!(count_urban_states_over(&records, 0), 6);
}

#[test]
fn question_3_average_cropland_pasture() {
    let records = load_fixture();
    let average = average_cropland_pasture_1964(&records).expect("1964 rows exist");
    // California 900, Oregon 700, Montana 731.
    assert!((average - 777.0).abs() < 0.5, "got {average}");
}

#[test]
fn question_3_empty_selection_is_an_error() {
    let records: Vec<Record> = load_fixture()
        .into_iter()
        .filter(|r| r.year != "1964")
        .collect();
    assert!(matches!(
        average_cropland_pasture_1964(&records),
        Err(QueryError::EmptyAverage(_))
    ));
}

#[test]
fn question_4_max_forest_use_colony_state() {
    let records = load_fixture();
    let state = max_forest_use_colony_state_2012(&records).expect("2012 colony rows exist");
    assert_eq!(state, "Georgia");
}

#[test]
fn question_5_largest_regional_shift() {
    let records = load_fixture();
    let shift = largest_regional_shift(&records).expect("both snapshot years exist");
    assert_eq!(shift.region, "Pacific total");
    assert_eq!(shift.category, LandCategory::ForestUseLandNotGrazed);
    assert_eq!(shift.delta, -20000);
    assert_eq!(shift.direction(), ShiftDirection::Decreased);
}

#[test]
fn question_5_compares_absolute_values_across_regions() {
    // Region A gains +500 in one category, region B loses -700 in
    // another; the sign-agnostic comparison must pick B.
    let content = "\
header,,,,,,,,,,,,,,,,,,,
1,Alpha total,Alpha,1945,0,0,1000,0,0,0,0,0,0,0,0,0,0,0,0,0
2,Beta total,Beta,1945,0,0,0,0,0,900,0,0,0,0,0,0,0,0,0,0
3,Alpha total,Alpha,2012,0,0,1500,0,0,0,0,0,0,0,0,0,0,0,0,0
4,Beta total,Beta,2012,0,0,0,0,0,200,0,0,0,0,0,0,0,0,0,0";
    let records = parse_records(content).expect("synthetic rows parse");
    let shift = largest_regional_shift(&records).expect("both regions qualify");
    assert_eq!(shift.region, "Beta total");
    assert_eq!(shift.category, LandCategory::GrasslandPastureAndRange);
    assert_eq!(shift.delta, -700);
}

#[test]
fn question_5_skips_regions_missing_a_snapshot_year() {
    // Gamma has no 2012 row; with no complete region pair the query
    // reports that nothing qualified.
    let content = "\
header,,,,,,,,,,,,,,,,,,,
1,Gamma total,Gamma,1945,0,0,1000,0,0,0,0,0,0,0,0,0,0,0,0,0";
    let records = parse_records(content).expect("synthetic rows parse");
    assert!(matches!(
        largest_regional_shift(&records),
        Err(QueryError::NoMatch(_))
    ));
}
