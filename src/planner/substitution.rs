//! Equipment-aware exercise substitution.
//!
//! Given an exercise and the athlete's available equipment, filters the
//! catalog to valid alternatives and ranks them by similarity: movement
//! pattern, muscle group, and exercise type bonuses are additive, so an
//! alternative can score on all three.

use std::collections::BTreeSet;

use super::error::{PlannerError, PlannerResult};
use super::selection::ScoredExercise;
use super::tuning::SubstitutionTuning;
use crate::catalog::{ExerciseCatalog, ExerciseDefinition};

/// Ranks substitute exercises for the athlete's available equipment.
pub struct SubstitutionEngine<'a> {
    catalog: &'a ExerciseCatalog,
    tuning: &'a SubstitutionTuning,
}

impl<'a> SubstitutionEngine<'a> {
    /// Create an engine over a catalog and tuning tables.
    pub fn new(catalog: &'a ExerciseCatalog, tuning: &'a SubstitutionTuning) -> Self {
        Self { catalog, tuning }
    }

    /// Ranked substitutes for an exercise, filtered to those whose whole
    /// equipment requirement is available. Empty available equipment
    /// leaves only bodyweight exercises in play.
    pub fn substitutions_for(
        &self,
        exercise: &ExerciseDefinition,
        available_equipment: &BTreeSet<String>,
    ) -> PlannerResult<Vec<ScoredExercise>> {
        if self.catalog.is_empty() {
            return Err(PlannerError::EmptyCatalog);
        }

        let mut candidates: Vec<ScoredExercise> = self
            .catalog
            .all_exercises()
            .filter(|candidate| candidate.id != exercise.id)
            .filter(|candidate| candidate.equipment_satisfied_by(available_equipment))
            .map(|candidate| ScoredExercise {
                score: self.similarity(exercise, candidate),
                exercise: candidate.clone(),
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(self.tuning.max_results);

        tracing::debug!(
            original = %exercise.name,
            found = candidates.len(),
            "ranked substitutions"
        );
        Ok(candidates)
    }

    /// Additive similarity score between the original and a candidate.
    fn similarity(&self, original: &ExerciseDefinition, candidate: &ExerciseDefinition) -> f64 {
        let mut score = 0.0;
        if candidate.movement_pattern == original.movement_pattern {
            score += self.tuning.same_pattern_bonus;
        }
        if candidate.muscle_group == original.muscle_group {
            score += self.tuning.same_muscle_bonus;
        }
        if candidate.exercise_type == original.exercise_type {
            score += self.tuning.same_type_bonus;
        }
        score
    }
}
