//! Unit tests for tuning tables and their TOML round trip.

use rustlift::planner::tuning::EngineTuning;

#[test]
fn test_default_tables_match_documented_constants() {
    let tuning = EngineTuning::default();

    assert_eq!(tuning.landmarks.default_base_mev, 8.0);
    assert_eq!(tuning.landmarks.default_size_factor, 0.2);
    assert_eq!(tuning.landmarks.frequency_factors, vec![0.8, 1.0, 1.2, 1.2, 1.3, 1.4]);
    assert_eq!(tuning.progression.deload_trigger_ratio, 0.95);
    assert_eq!(tuning.progression.load_step_pct, 0.025);
    assert_eq!(tuning.autoregulation.rep_floor, 5);
    assert_eq!(tuning.substitution.max_results, 5);
    assert_eq!(tuning.splits.four_day.len(), 4);
    assert_eq!(tuning.splits.six_day.len(), 6);
}

#[test]
fn test_toml_round_trip_preserves_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tuning.toml");

    let mut tuning = EngineTuning::default();
    tuning
        .landmarks
        .base_mev
        .insert("neck".to_string(), 4.0);
    tuning.progression.load_step_pct = 0.05;

    tuning.save_to(&path).unwrap();
    let loaded = EngineTuning::load_from(&path).unwrap();

    assert_eq!(loaded.landmarks.base_mev.get("neck"), Some(&4.0));
    assert_eq!(loaded.progression.load_step_pct, 0.05);
    assert_eq!(loaded.landmarks.frequency_factors, tuning.landmarks.frequency_factors);
    assert_eq!(loaded.splits.five_day, tuning.splits.five_day);
}

#[test]
fn test_partial_toml_falls_back_to_defaults() {
    // A host overriding one section keeps defaults everywhere else
    let partial = r#"
        [progression]
        novice_rate = 0.15
    "#;
    let tuning: EngineTuning = toml::from_str(partial).unwrap();
    assert_eq!(tuning.progression.novice_rate, 0.15);
    // Unspecified fields in the same section keep their defaults
    assert_eq!(tuning.progression.experienced_rate, 0.05);
    assert_eq!(tuning.landmarks.default_base_mev, 8.0);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = EngineTuning::load_from(&missing).unwrap_err();
    assert!(err.to_string().contains("I/O"));
}
