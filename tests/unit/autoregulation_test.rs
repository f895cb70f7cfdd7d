//! Unit tests for readiness autoregulation.

use rustlift::catalog::builtin_catalog;
use rustlift::planner::autoregulation::AutoregulationUnit;
use rustlift::planner::tuning::{AutoregulationTuning, ProgressionTuning};
use rustlift::planner::types::{
    PrescribedExercise, ReadinessSnapshot, RepTarget, WorkoutPrescription,
};

fn snapshot(sleep: u8, energy: u8, motivation: u8, soreness: u8) -> ReadinessSnapshot {
    ReadinessSnapshot {
        sleep_quality: sleep,
        energy_level: energy,
        motivation,
        muscle_soreness: soreness,
    }
}

fn plan() -> WorkoutPrescription {
    WorkoutPrescription {
        name: "Push A".to_string(),
        exercises: vec![
            PrescribedExercise {
                name: "Barbell Bench Press".to_string(),
                muscle_group: Some("chest".to_string()),
                sets: 4,
                target_reps: RepTarget::Single(10),
                target_rir: Some(2.0),
            },
            PrescribedExercise {
                name: "Lateral Raise".to_string(),
                muscle_group: None,
                sets: 3,
                target_reps: RepTarget::Range(10, 15),
                target_rir: None,
            },
        ],
    }
}

fn unit_fixtures() -> (
    rustlift::catalog::ExerciseCatalog,
    AutoregulationTuning,
    ProgressionTuning,
) {
    (
        builtin_catalog(),
        AutoregulationTuning::default(),
        ProgressionTuning::default(),
    )
}

#[test]
fn test_recovery_score_formula() {
    let (catalog, tuning, progression) = unit_fixtures();
    let unit = AutoregulationUnit::new(&catalog, &tuning, &progression);

    assert_eq!(unit.recovery_score(&snapshot(10, 10, 10, 1)), 10.0);
    assert_eq!(unit.recovery_score(&snapshot(10, 10, 10, 10)), 7.75);
    assert_eq!(unit.recovery_score(&snapshot(1, 1, 1, 10)), 1.0);
}

#[test]
fn test_low_recovery_reduces_volume_and_reps() {
    let (catalog, tuning, progression) = unit_fixtures();
    let unit = AutoregulationUnit::new(&catalog, &tuning, &progression);

    let adjusted = unit.adjust_workout(&plan(), 5.0);
    let bench = &adjusted.prescription.exercises[0];
    // 4 sets drops to 3; 10 reps drops to 8
    assert_eq!(bench.sets, 3);
    assert_eq!(bench.target_reps, RepTarget::Single(8));

    // 3 sets is at the threshold and keeps all sets
    let raises = &adjusted.prescription.exercises[1];
    assert_eq!(raises.sets, 3);
    assert_eq!(raises.target_reps, RepTarget::Range(8, 13));

    assert!(adjusted.note.contains("low"));
}

#[test]
fn test_rep_floor_is_five() {
    let (catalog, tuning, progression) = unit_fixtures();
    let unit = AutoregulationUnit::new(&catalog, &tuning, &progression);

    let mut low_rep_plan = plan();
    low_rep_plan.exercises[0].target_reps = RepTarget::Single(6);
    let adjusted = unit.adjust_workout(&low_rep_plan, 4.0);
    assert_eq!(
        adjusted.prescription.exercises[0].target_reps,
        RepTarget::Single(5)
    );
}

#[test]
fn test_high_recovery_adds_a_rep() {
    let (catalog, tuning, progression) = unit_fixtures();
    let unit = AutoregulationUnit::new(&catalog, &tuning, &progression);

    let adjusted = unit.adjust_workout(&plan(), 9.0);
    let bench = &adjusted.prescription.exercises[0];
    assert_eq!(bench.sets, 4);
    assert_eq!(bench.target_reps, RepTarget::Single(11));
    assert!(adjusted.note.contains("high"));
}

#[test]
fn test_neutral_band_changes_nothing_but_backfill() {
    let (catalog, tuning, progression) = unit_fixtures();
    let unit = AutoregulationUnit::new(&catalog, &tuning, &progression);

    let original = plan();
    let adjusted = unit.adjust_workout(&original, 7.0);

    let bench = &adjusted.prescription.exercises[0];
    assert_eq!(bench.sets, original.exercises[0].sets);
    assert_eq!(bench.target_reps, original.exercises[0].target_reps);
    assert_eq!(bench.target_rir, Some(2.0));

    // Lateral raise had no muscle group or RIR: both back-filled
    let raises = &adjusted.prescription.exercises[1];
    assert_eq!(raises.muscle_group.as_deref(), Some("shoulders"));
    assert_eq!(raises.target_rir, Some(3.0));
}

#[test]
fn test_neutral_adjustment_is_idempotent() {
    let (catalog, tuning, progression) = unit_fixtures();
    let unit = AutoregulationUnit::new(&catalog, &tuning, &progression);

    let once = unit.adjust_workout(&plan(), 7.0);
    let twice = unit.adjust_workout(&once.prescription, 7.0);
    assert_eq!(once.prescription, twice.prescription);
}

#[test]
fn test_original_plan_is_not_mutated() {
    let (catalog, tuning, progression) = unit_fixtures();
    let unit = AutoregulationUnit::new(&catalog, &tuning, &progression);

    let original = plan();
    let before = original.clone();
    let _ = unit.adjust_workout(&original, 3.0);
    assert_eq!(original, before);
}

#[test]
fn test_unknown_exercise_defaults_to_isolation_rir() {
    let (catalog, tuning, progression) = unit_fixtures();
    let unit = AutoregulationUnit::new(&catalog, &tuning, &progression);

    let mystery = WorkoutPrescription {
        name: "Custom".to_string(),
        exercises: vec![PrescribedExercise {
            name: "Mystery Machine Press".to_string(),
            muscle_group: None,
            sets: 3,
            target_reps: RepTarget::Single(10),
            target_rir: None,
        }],
    };
    let adjusted = unit.adjust_workout(&mystery, 7.0);
    let exercise = &adjusted.prescription.exercises[0];
    assert_eq!(exercise.muscle_group, None);
    assert_eq!(exercise.target_rir, Some(3.0));
}
