//! Unit tests for mesocycle generation.

use std::collections::BTreeMap;

use rustlift::catalog::{builtin_catalog, ExerciseCatalog};
use rustlift::planner::error::PlannerError;
use rustlift::planner::mesocycle::MesocyclePlanner;
use rustlift::planner::selection::SelectionContext;
use rustlift::planner::tuning::EngineTuning;
use rustlift::profile::{AthleteProfile, Sex};

fn profile(days_per_week: u8) -> AthleteProfile {
    let mut profile = AthleteProfile::new(28, Sex::Male, 24);
    profile.days_per_week = days_per_week;
    profile
}

#[test]
fn test_mesocycle_has_progression_weeks_plus_deload() {
    let catalog = builtin_catalog();
    let tuning = EngineTuning::default();
    let planner = MesocyclePlanner::new(&catalog, &tuning);

    let meso = planner
        .generate(&profile(4), 4, &SelectionContext::default())
        .unwrap();

    assert_eq!(meso.weeks.len(), 5);
    for week in &meso.weeks[..4] {
        assert!(!week.is_deload);
    }
    let deload = meso.weeks.last().unwrap();
    assert!(deload.is_deload);
    assert_eq!(deload.week_number, 5);
}

#[test]
fn test_split_day_count_matches_frequency() {
    let catalog = builtin_catalog();
    let tuning = EngineTuning::default();
    let planner = MesocyclePlanner::new(&catalog, &tuning);

    for days in [3u8, 4, 5, 6] {
        let meso = planner
            .generate(&profile(days), 3, &SelectionContext::default())
            .unwrap();
        assert_eq!(meso.weeks[0].days.len(), days as usize);
    }

    // Unmapped day counts fall back to the four-day split
    let meso = planner
        .generate(&profile(2), 3, &SelectionContext::default())
        .unwrap();
    assert_eq!(meso.weeks[0].days.len(), 4);
}

#[test]
fn test_weekly_volume_is_non_decreasing_before_deload() {
    let catalog = builtin_catalog();
    let tuning = EngineTuning::default();
    let planner = MesocyclePlanner::new(&catalog, &tuning);

    let meso = planner
        .generate(&profile(4), 5, &SelectionContext::default())
        .unwrap();

    for muscle in meso.weeks[0].muscle_targets.keys() {
        let volumes: Vec<u32> = meso.weeks[..5]
            .iter()
            .map(|w| w.muscle_targets[muscle].target_volume)
            .collect();
        for pair in volumes.windows(2) {
            assert!(pair[1] >= pair[0], "{muscle} volume decreased: {volumes:?}");
        }
        // Deload sits below the first progression week
        let deload = meso.weeks[5].muscle_targets[muscle].target_volume;
        assert!(deload < volumes[0], "{muscle} deload not reduced");
    }
}

#[test]
fn test_day_sets_sum_to_weekly_target() {
    let catalog = builtin_catalog();
    let tuning = EngineTuning::default();
    let planner = MesocyclePlanner::new(&catalog, &tuning);

    let meso = planner
        .generate(&profile(4), 4, &SelectionContext::default())
        .unwrap();

    for week in &meso.weeks {
        let mut per_muscle: BTreeMap<String, u32> = BTreeMap::new();
        for day in &week.days {
            for exercise in &day.exercises {
                let muscle = exercise.muscle_group.clone().unwrap();
                *per_muscle.entry(muscle).or_insert(0) += exercise.sets;
            }
        }
        for (muscle, target) in &week.muscle_targets {
            assert_eq!(
                per_muscle.get(muscle).copied().unwrap_or(0),
                target.target_volume,
                "week {} {muscle} sets do not add up",
                week.week_number
            );
        }
    }
}

#[test]
fn test_deload_week_uses_fixed_moderate_rir() {
    let catalog = builtin_catalog();
    let tuning = EngineTuning::default();
    let planner = MesocyclePlanner::new(&catalog, &tuning);

    let meso = planner
        .generate(&profile(4), 4, &SelectionContext::default())
        .unwrap();
    let deload = meso.weeks.last().unwrap();

    for target in deload.muscle_targets.values() {
        assert_eq!(target.target_rir_compound, 4.0);
        assert_eq!(target.target_rir_isolation, 4.0);
    }
    for day in &deload.days {
        for exercise in &day.exercises {
            assert_eq!(exercise.target_rir, Some(4.0));
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    let catalog = builtin_catalog();
    let tuning = EngineTuning::default();
    let planner = MesocyclePlanner::new(&catalog, &tuning);
    let ctx = SelectionContext::default();

    let first = planner.generate(&profile(4), 4, &ctx).unwrap();
    let second = planner.generate(&profile(4), 4, &ctx).unwrap();
    // Ids differ per call; the plan content must not
    assert_eq!(first.weeks, second.weeks);
    assert_eq!(first.name, second.name);
}

#[test]
fn test_empty_catalog_is_an_error() {
    let catalog = ExerciseCatalog::default();
    let tuning = EngineTuning::default();
    let planner = MesocyclePlanner::new(&catalog, &tuning);

    let err = planner
        .generate(&profile(4), 4, &SelectionContext::default())
        .unwrap_err();
    assert!(matches!(err, PlannerError::EmptyCatalog));
}

#[test]
fn test_invalid_profile_is_an_error() {
    let catalog = builtin_catalog();
    let tuning = EngineTuning::default();
    let planner = MesocyclePlanner::new(&catalog, &tuning);

    let mut bad = profile(4);
    bad.sleep_hours = -1.0;
    let err = planner
        .generate(&bad, 4, &SelectionContext::default())
        .unwrap_err();
    assert!(matches!(err, PlannerError::Profile(_)));
}

#[test]
fn test_zero_weeks_is_rejected() {
    let catalog = builtin_catalog();
    let tuning = EngineTuning::default();
    let planner = MesocyclePlanner::new(&catalog, &tuning);

    let err = planner
        .generate(&profile(4), 0, &SelectionContext::default())
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput(_)));
}
