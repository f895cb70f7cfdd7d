//! Daily readiness autoregulation.
//!
//! Converts a readiness questionnaire into a recovery score and applies
//! banded adjustments to a planned workout: reduced volume and reps when
//! recovery is poor, a small rep bump when recovery is excellent, and no
//! change in the neutral band. The adjustment is a pure transform on a
//! clone of the prescription.

use serde::{Deserialize, Serialize};

use super::tuning::{AutoregulationTuning, ProgressionTuning};
use super::types::{ReadinessSnapshot, WorkoutPrescription};
use crate::catalog::{ExerciseCatalog, ExerciseType};

/// An adjusted prescription with the rationale for the change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedWorkout {
    /// The adjusted plan; the input plan is never mutated
    pub prescription: WorkoutPrescription,
    /// Human-readable explanation of what changed and why
    pub note: String,
}

/// Applies readiness-driven adjustments to planned workouts.
pub struct AutoregulationUnit<'a> {
    catalog: &'a ExerciseCatalog,
    tuning: &'a AutoregulationTuning,
    progression: &'a ProgressionTuning,
}

impl<'a> AutoregulationUnit<'a> {
    /// Create a unit over the catalog and tuning tables.
    pub fn new(
        catalog: &'a ExerciseCatalog,
        tuning: &'a AutoregulationTuning,
        progression: &'a ProgressionTuning,
    ) -> Self {
        Self {
            catalog,
            tuning,
            progression,
        }
    }

    /// Recovery score in roughly [1, 10] from the four readiness ratings.
    /// Soreness is inverted so that higher always means better recovered.
    pub fn recovery_score(&self, readiness: &ReadinessSnapshot) -> f64 {
        (readiness.sleep_quality as f64
            + readiness.energy_level as f64
            + readiness.motivation as f64
            + (11.0 - readiness.muscle_soreness as f64))
            / 4.0
    }

    /// Adjust a planned workout for today's recovery score.
    ///
    /// Idempotent in the neutral band: re-running with a neutral score
    /// returns the same workout (the default-RIR back-fill only writes
    /// targets that are still unset).
    pub fn adjust_workout(
        &self,
        planned: &WorkoutPrescription,
        recovery_score: f64,
    ) -> AdjustedWorkout {
        let mut adjusted = planned.clone();

        let note = if recovery_score < self.tuning.low_threshold {
            for exercise in &mut adjusted.exercises {
                if exercise.sets > self.tuning.set_drop_threshold {
                    exercise.sets -= 1;
                }
                exercise.target_reps = exercise
                    .target_reps
                    .shifted(-(self.tuning.rep_reduction as i64), self.tuning.rep_floor);
            }
            tracing::info!(recovery_score, "reducing volume and intensity");
            format!(
                "Recovery score {recovery_score:.1} is low: dropped a set from larger exercises and reduced rep targets"
            )
        } else if recovery_score > self.tuning.high_threshold {
            for exercise in &mut adjusted.exercises {
                exercise.target_reps = exercise
                    .target_reps
                    .shifted(self.tuning.rep_increase as i64, 1);
            }
            tracing::info!(recovery_score, "increasing rep targets");
            format!(
                "Recovery score {recovery_score:.1} is high: added a rep to each target"
            )
        } else {
            format!("Recovery score {recovery_score:.1} is normal: plan unchanged")
        };

        self.backfill_rir(&mut adjusted);

        AdjustedWorkout {
            prescription: adjusted,
            note,
        }
    }

    /// Fill in default RIR targets (compound vs isolation) for exercises
    /// that do not carry one, recovering the muscle group from the
    /// catalog's reverse name index when it is missing.
    fn backfill_rir(&self, workout: &mut WorkoutPrescription) {
        for exercise in &mut workout.exercises {
            if exercise.muscle_group.is_none() {
                exercise.muscle_group = self
                    .catalog
                    .muscle_for_name(&exercise.name)
                    .map(str::to_string);
            }
            if exercise.target_rir.is_none() {
                let exercise_type = self
                    .catalog
                    .find_by_name(&exercise.name)
                    .map(|def| def.exercise_type)
                    .unwrap_or(ExerciseType::Isolation);
                exercise.target_rir = Some(match exercise_type {
                    ExerciseType::Compound => self.progression.compound_base_rir,
                    ExerciseType::Isolation => self.progression.isolation_base_rir,
                });
            }
        }
    }
}
