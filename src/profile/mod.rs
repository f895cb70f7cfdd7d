//! Athlete profile module.
//!
//! Holds the athlete's demographic and lifestyle data consumed by the
//! planner. Profiles are owned by the host's onboarding flow; the engine
//! only reads them.

pub mod types;

pub use types::{AthleteProfile, ProfileError, Sex, TrainingGoal};
