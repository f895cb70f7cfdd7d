//! Mesocycle generation.
//!
//! Orchestrates landmarks, progression, and selection across N progression
//! weeks plus a terminal deload week for the split matching the athlete's
//! training frequency. The planner is stateless: recency weighting comes
//! in through the selection context and nothing is stored between calls.

use std::collections::BTreeMap;

use uuid::Uuid;

use super::error::{PlannerError, PlannerResult};
use super::landmarks::LandmarkCalculator;
use super::progression::ProgressionPlanner;
use super::selection::{ExerciseSelector, ScoredExercise, SelectionContext};
use super::tuning::{EngineTuning, SplitDay};
use super::types::{
    Mesocycle, MuscleWeekTarget, PlannedDay, PrescribedExercise, RepTarget, TrainingWeek,
    VolumeLandmarks,
};
use crate::catalog::{ExerciseCatalog, ExerciseType};
use crate::profile::AthleteProfile;

/// Per-muscle planning state computed once per generate call.
struct MusclePlan {
    landmarks: VolumeLandmarks,
    /// How many split days train this muscle
    frequency: u32,
    /// Starting weekly volume (sets, floating point)
    starting_volume: f64,
}

/// Generates full mesocycle plans from a profile and catalog.
pub struct MesocyclePlanner<'a> {
    catalog: &'a ExerciseCatalog,
    tuning: &'a EngineTuning,
}

impl<'a> MesocyclePlanner<'a> {
    /// Create a planner over a catalog and tuning tables.
    pub fn new(catalog: &'a ExerciseCatalog, tuning: &'a EngineTuning) -> Self {
        Self { catalog, tuning }
    }

    /// The weekly split for a training frequency (fallback: four-day).
    pub fn get_split(&self, days_per_week: u8) -> &[SplitDay] {
        self.tuning.splits.for_days_per_week(days_per_week)
    }

    /// Generate a mesocycle: `weeks` progression weeks plus one deload.
    ///
    /// The selection context carries the caller's recency window and weak
    /// muscle flags; exercises are chosen once per split day and kept for
    /// the whole block so the athlete progresses on stable movements.
    pub fn generate(
        &self,
        profile: &AthleteProfile,
        weeks: u32,
        ctx: &SelectionContext,
    ) -> PlannerResult<Mesocycle> {
        profile.validate()?;
        if self.catalog.is_empty() {
            return Err(PlannerError::EmptyCatalog);
        }
        if weeks == 0 {
            return Err(PlannerError::InvalidInput(
                "mesocycle needs at least one progression week".to_string(),
            ));
        }

        let split = self.get_split(profile.days_per_week);
        let calc = LandmarkCalculator::new(&self.tuning.landmarks);
        let taf = calc.training_age_factor(profile);
        let progression = ProgressionPlanner::new(&self.tuning.progression, taf);
        let selector = ExerciseSelector::new(self.catalog, &self.tuning.selection);

        tracing::info!(
            days_per_week = profile.days_per_week,
            weeks,
            taf,
            "generating mesocycle"
        );

        // Frequency = how often each muscle recurs in the chosen split
        let mut frequencies: BTreeMap<&str, u32> = BTreeMap::new();
        for day in split {
            for muscle in &day.muscles {
                *frequencies.entry(muscle.as_str()).or_insert(0) += 1;
            }
        }

        // Landmarks and exercise pools, once per muscle. Selections for
        // earlier split days feed the recency window for later ones so a
        // muscle trained twice a week gets movement variety across days.
        let mut plans: BTreeMap<String, MusclePlan> = BTreeMap::new();
        for (muscle, frequency) in &frequencies {
            let landmarks = calc.volume_landmarks(profile, muscle, *frequency);
            plans.insert(
                muscle.to_string(),
                MusclePlan {
                    landmarks,
                    frequency: *frequency,
                    starting_volume: self.tuning.mesocycle.start_volume_factor
                        * landmarks.mev as f64,
                },
            );
        }

        let mut threaded_ctx = ctx.clone();
        threaded_ctx.sex = threaded_ctx.sex.or(Some(profile.sex));
        let mut day_pools: Vec<Vec<(String, Vec<ScoredExercise>)>> = Vec::new();
        for day in split {
            let mut per_muscle = Vec::new();
            for muscle in &day.muscles {
                let picks = selector.select_for_muscle(muscle, 3, &threaded_ctx);
                for pick in &picks {
                    threaded_ctx
                        .recent_exercises
                        .insert(0, pick.exercise.id.clone());
                }
                per_muscle.push((muscle.clone(), picks));
            }
            day_pools.push(per_muscle);
        }

        let mut meso_weeks = Vec::with_capacity(weeks as usize + 1);
        for week_number in 1..=weeks {
            meso_weeks.push(self.build_progression_week(
                week_number,
                split,
                &plans,
                &day_pools,
                &progression,
            ));
        }
        meso_weeks.push(self.build_deload_week(weeks + 1, split, &plans, &day_pools));

        Ok(Mesocycle {
            id: Uuid::new_v4(),
            name: format!("{} Block ({} weeks + deload)", profile.goal, weeks),
            weeks: meso_weeks,
        })
    }

    fn build_progression_week(
        &self,
        week_number: u32,
        split: &[SplitDay],
        plans: &BTreeMap<String, MusclePlan>,
        day_pools: &[Vec<(String, Vec<ScoredExercise>)>],
        progression: &ProgressionPlanner<'_>,
    ) -> TrainingWeek {
        let mut muscle_targets = BTreeMap::new();
        let mut weekly_sets: BTreeMap<&str, u32> = BTreeMap::new();

        for (muscle, plan) in plans {
            let mrv = plan.landmarks.mrv as f64;
            let week = progression.weekly_volume(plan.starting_volume, week_number, mrv);
            let volume = week.target_volume;
            muscle_targets.insert(
                muscle.clone(),
                MuscleWeekTarget {
                    target_volume: volume.round() as u32,
                    target_rir_compound: progression.target_intensity(
                        ExerciseType::Compound,
                        volume,
                        mrv,
                    ),
                    target_rir_isolation: progression.target_intensity(
                        ExerciseType::Isolation,
                        volume,
                        mrv,
                    ),
                },
            );
            weekly_sets.insert(muscle.as_str(), volume.round() as u32);
        }

        let days =
            self.build_days(split, plans, day_pools, &weekly_sets, &muscle_targets, None);

        TrainingWeek {
            week_number,
            is_deload: false,
            muscle_targets,
            days,
        }
    }

    fn build_deload_week(
        &self,
        week_number: u32,
        split: &[SplitDay],
        plans: &BTreeMap<String, MusclePlan>,
        day_pools: &[Vec<(String, Vec<ScoredExercise>)>],
    ) -> TrainingWeek {
        let deload_rir = self.tuning.mesocycle.deload_rir;
        let mut muscle_targets = BTreeMap::new();
        let mut weekly_sets: BTreeMap<&str, u32> = BTreeMap::new();

        // Deload volume is pinned to a fraction of MEV, not progressed
        for (muscle, plan) in plans {
            let volume =
                (self.tuning.mesocycle.deload_mev_ratio * plan.landmarks.mev as f64).round() as u32;
            muscle_targets.insert(
                muscle.clone(),
                MuscleWeekTarget {
                    target_volume: volume,
                    target_rir_compound: deload_rir,
                    target_rir_isolation: deload_rir,
                },
            );
            weekly_sets.insert(muscle.as_str(), volume);
        }

        let days = self.build_days(
            split,
            plans,
            day_pools,
            &weekly_sets,
            &muscle_targets,
            Some(deload_rir),
        );

        TrainingWeek {
            week_number,
            is_deload: true,
            muscle_targets,
            days,
        }
    }

    /// Build the planned days of one week from per-muscle weekly set counts.
    fn build_days(
        &self,
        split: &[SplitDay],
        plans: &BTreeMap<String, MusclePlan>,
        day_pools: &[Vec<(String, Vec<ScoredExercise>)>],
        weekly_sets: &BTreeMap<&str, u32>,
        muscle_targets: &BTreeMap<String, MuscleWeekTarget>,
        rir_override: Option<f64>,
    ) -> Vec<PlannedDay> {
        // Track which occurrence of each muscle we are on, so weekly sets
        // divide across its training days with the remainder given early
        let mut seen: BTreeMap<&str, u32> = BTreeMap::new();

        split
            .iter()
            .zip(day_pools)
            .map(|(day, pools)| {
                let mut exercises = Vec::new();
                for (muscle, picks) in pools {
                    let plan = match plans.get(muscle) {
                        Some(plan) => plan,
                        // Catalog had nothing for this muscle; skip it
                        None => continue,
                    };
                    let weekly = *weekly_sets.get(muscle.as_str()).unwrap_or(&0);
                    let occurrence = seen.entry(muscle.as_str()).or_insert(0);
                    let day_sets = allocate_share(weekly, plan.frequency, *occurrence);
                    *occurrence += 1;

                    let target = muscle_targets.get(muscle);
                    exercises.extend(self.prescribe_for_muscle(
                        muscle,
                        picks,
                        weekly,
                        day_sets,
                        target,
                        rir_override,
                    ));
                }
                PlannedDay {
                    name: day.name.clone(),
                    exercises,
                }
            })
            .collect()
    }

    /// Turn a muscle's day share into concrete exercise prescriptions.
    fn prescribe_for_muscle(
        &self,
        muscle: &str,
        picks: &[ScoredExercise],
        weekly_sets: u32,
        day_sets: u32,
        target: Option<&MuscleWeekTarget>,
        rir_override: Option<f64>,
    ) -> Vec<PrescribedExercise> {
        if day_sets == 0 || picks.is_empty() {
            return Vec::new();
        }

        // Exercise count follows the weekly target, not the day share
        let wanted = if weekly_sets as f64 > self.tuning.mesocycle.three_exercise_threshold {
            3
        } else {
            2
        };
        let chosen = &picks[..wanted.min(picks.len())];

        let mut remaining = day_sets;
        let mut exercises = Vec::with_capacity(chosen.len());
        for (slot, pick) in chosen.iter().enumerate() {
            let slots_left = (chosen.len() - slot) as u32;
            let sets = remaining.div_ceil(slots_left);
            remaining -= sets;
            if sets == 0 {
                continue;
            }

            let target_rir = rir_override.or_else(|| {
                target.map(|t| match pick.exercise.exercise_type {
                    ExerciseType::Compound => t.target_rir_compound,
                    ExerciseType::Isolation => t.target_rir_isolation,
                })
            });

            exercises.push(PrescribedExercise {
                name: pick.exercise.name.clone(),
                muscle_group: Some(muscle.to_string()),
                sets,
                target_reps: default_rep_target(pick.exercise.exercise_type),
                target_rir,
            });
        }
        exercises
    }
}

/// The `occurrence`-th share when `total` sets divide across `parts` days,
/// remainder handed out to the earliest shares.
fn allocate_share(total: u32, parts: u32, occurrence: u32) -> u32 {
    if parts == 0 {
        return 0;
    }
    let base = total / parts;
    let remainder = total % parts;
    if occurrence < remainder {
        base + 1
    } else {
        base
    }
}

/// Default hypertrophy rep ranges by exercise type.
fn default_rep_target(exercise_type: ExerciseType) -> RepTarget {
    match exercise_type {
        ExerciseType::Compound => RepTarget::Range(6, 10),
        ExerciseType::Isolation => RepTarget::Range(10, 15),
    }
}
