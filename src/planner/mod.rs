//! Adaptive training planner module.
//!
//! The rule-based core of the crate:
//! - Volume landmark derivation (MV/MEV/MAV/MRV)
//! - Week-to-week volume and intensity progression
//! - Exercise scoring and selection
//! - Readiness-driven workout autoregulation
//! - Mesocycle and program-plan generation
//! - Equipment-aware exercise substitution

pub mod autoregulation;
pub mod error;
pub mod landmarks;
pub mod mesocycle;
pub mod program;
pub mod progression;
pub mod selection;
pub mod substitution;
pub mod tuning;
pub mod types;

// Re-exports for convenience
pub use autoregulation::{AdjustedWorkout, AutoregulationUnit};
pub use error::{PlannerError, PlannerResult};
pub use landmarks::{AthleteFactors, LandmarkCalculator};
pub use mesocycle::MesocyclePlanner;
pub use program::generate_program_plan;
pub use progression::{ProgressionDecision, ProgressionPlanner, WeeklyVolume};
pub use selection::{ExerciseSelector, ScoredExercise, SelectionContext};
pub use substitution::SubstitutionEngine;
pub use tuning::{ConfigError, EngineTuning};
pub use types::{
    Mesocycle, MuscleWeekTarget, PlannedDay, PrescribedExercise, Program, ProgramDay,
    ProgramDuration, ProgramPlan, ReadinessSnapshot, RepTarget, SetRecord, TrainingWeek,
    VolumeLandmarks, WorkoutPrescription,
};
