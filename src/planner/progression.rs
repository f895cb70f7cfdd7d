//! Week-to-week and session-to-session progression.
//!
//! Computes target weekly volume within a mesocycle, detects deload
//! triggers, derives fatigue-adjusted intensity targets, and drives the
//! per-exercise load/rep state machine from logged set history.

use serde::{Deserialize, Serialize};

use super::tuning::ProgressionTuning;
use super::types::{RepTarget, SetRecord};
use crate::catalog::ExerciseType;

/// Weekly volume computation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    /// Target weekly sets, clamped at the athlete's max
    pub target_volume: f64,
    /// Volume to use if a deload is taken
    pub deload_volume: f64,
    /// True when the target has reached the deload threshold
    pub deload_triggered: bool,
}

/// Outcome of the per-exercise progression state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionAction {
    /// No history; prescribe a conservative starting session
    StartingFresh,
    /// Add load, reset or hold reps
    IncreaseLoad,
    /// Keep load, add a rep to the target
    HoldLoadIncreaseReps,
    /// Keep everything; the athlete is at the edge of recovery
    Hold,
}

/// Next-session prescription for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionDecision {
    /// Suggested load; `None` when there is no history to anchor it
    pub target_load: Option<f64>,
    /// Suggested rep target per set
    pub target_reps: u32,
    /// Which branch of the state machine fired
    pub action: ProgressionAction,
    /// Human-readable explanation for the session view
    pub note: String,
}

/// Plans volume and load progression for one athlete.
///
/// Holds the athlete's training-age factor so the weekly ramp rate is
/// chosen once per athlete, not per call.
pub struct ProgressionPlanner<'a> {
    tuning: &'a ProgressionTuning,
    taf: f64,
}

impl<'a> ProgressionPlanner<'a> {
    /// Create a planner for an athlete with the given training-age factor.
    pub fn new(tuning: &'a ProgressionTuning, taf: f64) -> Self {
        Self { tuning, taf }
    }

    /// Weekly ramp rate for this athlete.
    fn weekly_rate(&self) -> f64 {
        if self.taf < self.tuning.novice_taf_threshold {
            self.tuning.novice_rate
        } else {
            self.tuning.experienced_rate
        }
    }

    /// Target volume for a week of the mesocycle.
    ///
    /// Week 1 always equals the starting volume; later weeks ramp by the
    /// athlete's rate and clamp at `max_volume`. The deload trigger fires
    /// once the target reaches the configured fraction of the max.
    pub fn weekly_volume(
        &self,
        starting_volume: f64,
        week_number: u32,
        max_volume: f64,
    ) -> WeeklyVolume {
        let rate = self.weekly_rate();
        let raw = starting_volume * (1.0 + (week_number.saturating_sub(1)) as f64 * rate);
        let target_volume = raw.min(max_volume);
        let deload_triggered = target_volume >= self.tuning.deload_trigger_ratio * max_volume;

        if deload_triggered {
            tracing::debug!(week_number, target_volume, max_volume, "deload triggered");
        }

        WeeklyVolume {
            target_volume,
            deload_volume: self.tuning.deload_volume_ratio * starting_volume,
            deload_triggered,
        }
    }

    /// Target RIR for an exercise type, shifted by accumulated fatigue.
    ///
    /// The volume/MRV ratio pushes the target harder (lower RIR) near the
    /// recoverable ceiling and relaxes it early in the block; the middle
    /// band is untouched. Never returns below zero.
    pub fn target_intensity(
        &self,
        exercise_type: ExerciseType,
        current_volume: f64,
        mrv: f64,
    ) -> f64 {
        let base = match exercise_type {
            ExerciseType::Compound => self.tuning.compound_base_rir,
            ExerciseType::Isolation => self.tuning.isolation_base_rir,
        };

        if mrv <= 0.0 {
            return base;
        }

        let fatigue_ratio = current_volume / mrv;
        let rir = if fatigue_ratio > self.tuning.high_fatigue_ratio {
            base - self.tuning.intensity_shift
        } else if fatigue_ratio < self.tuning.low_fatigue_ratio {
            base + self.tuning.intensity_shift
        } else {
            base
        };
        rir.max(0.0)
    }

    /// Proportional-step load autoregulation from the last session's
    /// proximity to failure. Ties resolve toward holding the load.
    pub fn suggest_load_progression(
        &self,
        previous_load: f64,
        last_rir: f64,
        target_rir: f64,
    ) -> f64 {
        let deviation = last_rir - target_rir;
        let threshold = self.tuning.rir_deviation_threshold;

        if deviation > threshold {
            previous_load * (1.0 + self.tuning.load_step_pct)
        } else if deviation < -threshold {
            previous_load * (1.0 - self.tuning.load_step_pct)
        } else {
            previous_load
        }
    }

    /// Per-exercise progression from the previous session's completed sets.
    ///
    /// With no history the athlete starts fresh. Otherwise the mean RIR of
    /// the last session decides between adding load, holding, or holding
    /// load while adding a rep, with the last set's rep attainment breaking
    /// the middle case.
    pub fn calculate_progression(
        &self,
        history: &[SetRecord],
        target_rir: f64,
        rep_range: RepTarget,
    ) -> ProgressionDecision {
        let Some(last_set) = history.last() else {
            return ProgressionDecision {
                target_load: None,
                target_reps: rep_range.low(),
                action: ProgressionAction::StartingFresh,
                note: "Starting fresh: pick a load you can control for the full rep range"
                    .to_string(),
            };
        };

        let avg_rir =
            history.iter().map(SetRecord::effective_rir).sum::<f64>() / history.len() as f64;
        let deviation = avg_rir - target_rir;
        let threshold = self.tuning.rir_deviation_threshold;
        let step = self.tuning.load_step_pct;

        let decision = if deviation > threshold {
            // Under-fatigued: add load, keep the reps that were performed
            ProgressionDecision {
                target_load: Some(last_set.weight * (1.0 + step)),
                target_reps: last_set.reps,
                action: ProgressionAction::IncreaseLoad,
                note: format!(
                    "Averaged {avg_rir:.1} RIR against a target of {target_rir:.1}; adding load"
                ),
            }
        } else if deviation < -threshold {
            // Over-fatigued: consolidate at the current load
            ProgressionDecision {
                target_load: Some(last_set.weight),
                target_reps: last_set.reps,
                action: ProgressionAction::Hold,
                note: format!(
                    "Averaged {avg_rir:.1} RIR against a target of {target_rir:.1}; holding load to consolidate"
                ),
            }
        } else if last_set.reps >= rep_range.high() {
            // Top of the rep range reached: add load, reset reps
            ProgressionDecision {
                target_load: Some(last_set.weight * (1.0 + step)),
                target_reps: rep_range.low(),
                action: ProgressionAction::IncreaseLoad,
                note: format!(
                    "Hit {} reps at the top of the range; adding load and resetting to {}",
                    last_set.reps,
                    rep_range.low()
                ),
            }
        } else {
            // Inside the range: same load, one more rep
            ProgressionDecision {
                target_load: Some(last_set.weight),
                target_reps: last_set.reps + 1,
                action: ProgressionAction::HoldLoadIncreaseReps,
                note: format!("Same load, aim for {} reps", last_set.reps + 1),
            }
        };

        tracing::debug!(
            action = ?decision.action,
            avg_rir,
            target_rir,
            last_reps = last_set.reps,
            "progression decision"
        );
        decision
    }
}
