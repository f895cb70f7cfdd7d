//! Exercise scoring and selection.
//!
//! Ranks catalog exercises for a muscle group by an Exercise Priority
//! Score (EPS): compound bonus, weakness weighting, novelty against the
//! recent-exercise window, recovery cost, and a gender-specific emphasis
//! on glute/hamstring work for female athletes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::tuning::SelectionTuning;
use crate::catalog::{ExerciseCatalog, ExerciseDefinition, ExerciseType, RecoveryCost};
use crate::profile::Sex;

/// Context for one selection call.
///
/// Recency is supplied explicitly by the caller; the selector holds no
/// state between invocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionContext {
    /// Muscle groups flagged as weak points
    pub weak_muscles: BTreeSet<String>,
    /// Exercise ids, most recent first
    pub recent_exercises: Vec<String>,
    /// Athlete sex, for the lower-body emphasis modifier
    pub sex: Option<Sex>,
}

/// A catalog exercise with its computed priority score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredExercise {
    pub exercise: ExerciseDefinition,
    pub score: f64,
}

/// Scores and ranks exercises for inclusion in a workout.
pub struct ExerciseSelector<'a> {
    catalog: &'a ExerciseCatalog,
    tuning: &'a SelectionTuning,
}

impl<'a> ExerciseSelector<'a> {
    /// Create a selector over a catalog and tuning tables.
    pub fn new(catalog: &'a ExerciseCatalog, tuning: &'a SelectionTuning) -> Self {
        Self { catalog, tuning }
    }

    /// Exercise Priority Score for one exercise in a selection context.
    pub fn priority_score(&self, exercise: &ExerciseDefinition, ctx: &SelectionContext) -> f64 {
        let compound_bonus = match exercise.exercise_type {
            ExerciseType::Compound => self.tuning.compound_bonus,
            ExerciseType::Isolation => self.tuning.isolation_bonus,
        };

        let weakness_multiplier = if ctx.weak_muscles.contains(&exercise.muscle_group) {
            self.tuning.weakness_multiplier
        } else {
            1.0
        };

        // The most recent exercises are suppressed entirely; older entries
        // in the window score partial novelty; absent scores full novelty.
        let novelty = match ctx.recent_exercises.iter().position(|id| *id == exercise.id) {
            None => self.tuning.novelty_absent,
            Some(idx) if idx >= self.tuning.novelty_window => self.tuning.novelty_stale,
            Some(_) => 0.0,
        };

        let recovery_term = match exercise.recovery_cost {
            RecoveryCost::Low => self.tuning.low_cost_term,
            RecoveryCost::Medium => self.tuning.medium_cost_term,
            RecoveryCost::High => self.tuning.high_cost_term,
        };

        let gender_modifier = match ctx.sex {
            Some(Sex::Female)
                if matches!(exercise.muscle_group.as_str(), "glutes" | "hamstrings") =>
            {
                self.tuning.female_lower_emphasis
            }
            _ => 1.0,
        };

        (compound_bonus + novelty + recovery_term) * weakness_multiplier * gender_modifier
    }

    /// Score every catalog exercise for a muscle group and return the top
    /// `count`, highest score first. Ties keep catalog order; unknown
    /// muscle groups return an empty list rather than failing.
    pub fn select_for_muscle(
        &self,
        muscle_group: &str,
        count: usize,
        ctx: &SelectionContext,
    ) -> Vec<ScoredExercise> {
        let mut scored: Vec<ScoredExercise> = self
            .catalog
            .exercises_for(muscle_group)
            .iter()
            .map(|exercise| ScoredExercise {
                exercise: exercise.clone(),
                score: self.priority_score(exercise, ctx),
            })
            .collect();

        // Stable sort keeps catalog order on equal scores
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(count);

        tracing::debug!(
            muscle_group,
            selected = scored.len(),
            "selected exercises for muscle"
        );
        scored
    }
}
