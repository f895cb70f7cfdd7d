//! Athlete profile type definitions and validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Biological sex, used by recovery and exercise-emphasis modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

/// Primary training goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    /// Build muscle size
    #[default]
    Hypertrophy,
    /// Build maximal strength
    Strength,
    /// General fitness and conditioning
    GeneralFitness,
}

impl std::fmt::Display for TrainingGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainingGoal::Hypertrophy => write!(f, "Hypertrophy"),
            TrainingGoal::Strength => write!(f, "Strength"),
            TrainingGoal::GeneralFitness => write!(f, "General Fitness"),
        }
    }
}

/// Athlete profile with the fields the planner formulas consume.
///
/// The engine treats this as read-only input; edits belong to the host's
/// onboarding and profile screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Months of consistent resistance training
    pub training_months: u32,
    /// Average nightly sleep in hours
    pub sleep_hours: f64,
    /// Subjective life stress (1 = none, 10 = extreme)
    pub stress_level: u8,
    /// Training days per week (1-7)
    pub days_per_week: u8,
    /// Primary training goal
    pub goal: TrainingGoal,
    /// Optional per-muscle overrides for the base MEV table
    #[serde(default)]
    pub base_mev_overrides: BTreeMap<String, f64>,
}

impl AthleteProfile {
    /// Create a profile with the given required fields and no overrides.
    pub fn new(age: u32, sex: Sex, training_months: u32) -> Self {
        Self {
            age,
            sex,
            training_months,
            sleep_hours: 8.0,
            stress_level: 5,
            days_per_week: 4,
            goal: TrainingGoal::default(),
            base_mev_overrides: BTreeMap::new(),
        }
    }

    /// Validate the numeric fields used directly in planner formulas.
    ///
    /// These are the only inputs that surface as explicit failures; every
    /// other out-of-range value is clamped inside the formulas themselves.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.age < 13 {
            return Err(ProfileError::InvalidField {
                field: "age",
                reason: format!("must be at least 13, got {}", self.age),
            });
        }
        if !self.sleep_hours.is_finite() || self.sleep_hours <= 0.0 {
            return Err(ProfileError::InvalidField {
                field: "sleep_hours",
                reason: format!("must be a positive number, got {}", self.sleep_hours),
            });
        }
        if !(1..=10).contains(&self.stress_level) {
            return Err(ProfileError::InvalidField {
                field: "stress_level",
                reason: format!("must be 1-10, got {}", self.stress_level),
            });
        }
        if !(1..=7).contains(&self.days_per_week) {
            return Err(ProfileError::InvalidField {
                field: "days_per_week",
                reason: format!("must be 1-7, got {}", self.days_per_week),
            });
        }
        Ok(())
    }
}

/// Errors raised for malformed athlete profiles.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// A required numeric field is out of range or non-finite.
    #[error("Invalid profile field '{field}': {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}
