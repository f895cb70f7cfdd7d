//! RustLift - Adaptive Resistance-Training Planner
//!
//! A rule-based engine that turns an athlete profile, an exercise catalog,
//! session history, and daily readiness input into personalized volume
//! landmarks, multi-week mesocycle plans, ranked exercise selections, and
//! autoregulated set/rep/RIR prescriptions.
//!
//! The engine is synchronous and stateless between calls: every public
//! operation is a pure function of its explicit arguments and returns a new
//! structure. Persistence, rendering, and session logging are host concerns.

pub mod catalog;
pub mod planner;
pub mod profile;

// Re-export commonly used types
pub use catalog::{
    ExerciseCatalog, ExerciseDefinition, ExerciseType, MovementPattern, RecoveryCost,
};
pub use planner::autoregulation::AutoregulationUnit;
pub use planner::landmarks::LandmarkCalculator;
pub use planner::mesocycle::MesocyclePlanner;
pub use planner::progression::ProgressionPlanner;
pub use planner::selection::{ExerciseSelector, SelectionContext};
pub use planner::substitution::SubstitutionEngine;
pub use planner::tuning::EngineTuning;
pub use planner::types::{Mesocycle, ProgramPlan, WorkoutPrescription};
pub use profile::{AthleteProfile, Sex, TrainingGoal};
