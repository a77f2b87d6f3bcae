use crate::prelude::*;
use std::str::FromStr;

fn test_resource() -> String {
    env!("CARGO_MANIFEST_DIR").to_owned() + "/test_resources/NAV/V3/MINI00USA_R_20240010000_01D_GN.rnx"
}

fn sv(descriptor: &str) -> SV {
    SV::from_str(descriptor).unwrap()
}

#[test]
fn v3_mini_gps_nav() {
    let data = NavigationData::from_file(test_resource());
    assert!(data.is_ok(), "failed to parse: {:?}", data.err());
    let data = data.unwrap();

    // vehicle inventory: G07 survived with an empty sequence
    // (its only record group is incomplete)
    let vehicles: Vec<_> = data.sv().collect();
    assert_eq!(vehicles, vec![sv("G01"), sv("G05"), sv("G07")]);

    assert_eq!(data.ephemerides(sv("G01")).unwrap().len(), 2);
    assert_eq!(data.ephemerides(sv("G05")).unwrap().len(), 1);
    assert_eq!(data.ephemerides(sv("G07")).unwrap().len(), 0);

    // appearance order survives: the blank group in between
    // did not shift the cursor
    let g01 = data.ephemerides(sv("G01")).unwrap();
    assert_eq!(g01[0].iode, 61.0);
    assert_eq!(g01[0].toe, 86_400.0);
    assert_eq!(g01[1].iode, 62.0);
    assert_eq!(g01[1].toe, 93_600.0);
    assert_eq!(g01[1].toc.hour, 2);
}

#[test]
fn v3_mini_coverage_span() {
    let data = NavigationData::from_file(test_resource()).unwrap();

    let (start, end) = data.time_range(sv("G01")).unwrap();
    assert_eq!(start, 86_400.0);
    assert!((end - 93_600.0).abs() < 1E-4, "bad coverage end: {}", end);

    // single record: degenerate (but valid) span
    let (start, end) = data.time_range(sv("G05")).unwrap();
    assert_eq!(start, end);

    assert!(matches!(
        data.time_range(sv("G07")),
        Err(Error::NoEphemeris(_))
    ));
}

#[test]
fn v3_mini_record_selection() {
    let data = NavigationData::from_file(test_resource()).unwrap();

    // first publication governs the start of the span
    let selected = data.select(sv("G01"), 86_400.0).unwrap();
    assert_eq!(selected.iode, 61.0);

    // midway: 00:00 wins by the float residue of the 02:00 conversion
    let selected = data.select(sv("G01"), 90_000.0).unwrap();
    assert_eq!(selected.iode, 61.0);

    // second publication governs the end of the span
    let selected = data.select(sv("G01"), 93_600.0).unwrap();
    assert_eq!(selected.iode, 62.0);
}

#[test]
fn v3_mini_trajectory() {
    let data = NavigationData::from_file(test_resource()).unwrap();
    let model = EarthModel::default();

    let samples = data.positions(sv("G01"), &model).unwrap();
    assert_eq!(samples.len(), 241, "2 h span, 30 s sampling, both bounds");

    // references computed independently with the LNAV orbit model
    let first = samples.first().unwrap();
    assert_eq!(first.epoch, 86_400.0);
    assert!((first.x_m - 14_009_986.100_285_93).abs() < 1E-4);
    assert!((first.y_m - -4_301_904.933_373_95).abs() < 1E-4);
    assert!((first.z_m - 21_809_958.342_847_012).abs() < 1E-4);

    let last = samples.last().unwrap();
    assert_eq!(last.epoch, 93_600.0);
    assert!((last.x_m - 19_805_548.806_045_14).abs() < 1E-4);
    assert!((last.y_m - 12_408_815.249_376_86).abs() < 1E-4);
    assert!((last.z_m - 12_624_901.311_656_045).abs() < 1E-4);

    let samples = data.positions(sv("G05"), &model).unwrap();
    assert_eq!(samples.len(), 1);
    let solo = &samples[0];
    assert!((solo.x_m - -14_263_962.288_036_542).abs() < 1E-4);
    assert!((solo.y_m - -7_546_911.206_546_688).abs() < 1E-4);
    assert!((solo.z_m - -21_232_912.918_733_62).abs() < 1E-4);
}

#[test]
fn v3_mini_batch_isolation() {
    let data = NavigationData::from_file(test_resource()).unwrap();
    let model = EarthModel::default();

    // the empty G07 must not abort its siblings
    let solutions = data.all_positions(&model);
    assert_eq!(solutions.len(), 2);
    assert!(solutions.contains_key(&sv("G01")));
    assert!(solutions.contains_key(&sv("G05")));
    assert!(!solutions.contains_key(&sv("G07")));
}

#[test]
fn attributable_failures() {
    let data = NavigationData::from_file(test_resource()).unwrap();
    let model = EarthModel::default();

    // absent vehicle: surfaced, attributed, never a crash
    let error = data.positions(sv("G32"), &model).unwrap_err();
    assert!(matches!(error, Error::UnknownSatellite(_)));
    assert!(error.to_string().contains("G32"));

    // covered vehicle without any surviving record
    let error = data.positions(sv("G07"), &model).unwrap_err();
    assert!(matches!(error, Error::NoEphemeris(_)));
    assert!(error.to_string().contains("G07"));
}

#[test]
fn minimal_entry_point() {
    let content = std::fs::read_to_string(test_resource()).unwrap();

    let samples = compute_positions(&content, "G01").unwrap();
    assert_eq!(samples.len(), 241);

    assert!(matches!(
        compute_positions(&content, "G33"),
        Err(Error::UnknownSatellite(_))
    ));
    assert!(matches!(
        compute_positions(&content, "#4"),
        Err(Error::SvFormat(_))
    ));
}
