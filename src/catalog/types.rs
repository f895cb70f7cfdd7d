//! Exercise definition types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Compound (multi-joint) vs isolation (single-joint) exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    /// Multi-joint movement loading several muscle groups
    Compound,
    /// Single-joint movement targeting one muscle group
    Isolation,
}

impl std::fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExerciseType::Compound => write!(f, "Compound"),
            ExerciseType::Isolation => write!(f, "Isolation"),
        }
    }
}

/// Systemic recovery cost of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryCost {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RecoveryCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecoveryCost::Low => write!(f, "Low"),
            RecoveryCost::Medium => write!(f, "Medium"),
            RecoveryCost::High => write!(f, "High"),
        }
    }
}

/// Gross movement pattern, used for substitution similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    HorizontalPush,
    VerticalPush,
    HorizontalPull,
    VerticalPull,
    Squat,
    Hinge,
    Lunge,
    ElbowFlexion,
    ElbowExtension,
    Raise,
    Calf,
    CoreFlexion,
}

impl std::fmt::Display for MovementPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovementPattern::HorizontalPush => write!(f, "Horizontal Push"),
            MovementPattern::VerticalPush => write!(f, "Vertical Push"),
            MovementPattern::HorizontalPull => write!(f, "Horizontal Pull"),
            MovementPattern::VerticalPull => write!(f, "Vertical Pull"),
            MovementPattern::Squat => write!(f, "Squat"),
            MovementPattern::Hinge => write!(f, "Hinge"),
            MovementPattern::Lunge => write!(f, "Lunge"),
            MovementPattern::ElbowFlexion => write!(f, "Elbow Flexion"),
            MovementPattern::ElbowExtension => write!(f, "Elbow Extension"),
            MovementPattern::Raise => write!(f, "Raise"),
            MovementPattern::Calf => write!(f, "Calf Raise"),
            MovementPattern::CoreFlexion => write!(f, "Core Flexion"),
        }
    }
}

/// Immutable exercise reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    /// Stable identifier (snake_case)
    pub id: String,
    /// Display name
    pub name: String,
    /// Primary muscle group trained
    pub muscle_group: String,
    /// Compound or isolation
    pub exercise_type: ExerciseType,
    /// Systemic recovery cost
    pub recovery_cost: RecoveryCost,
    /// Equipment required; empty means bodyweight only
    pub equipment: BTreeSet<String>,
    /// Gross movement pattern
    pub movement_pattern: MovementPattern,
}

impl ExerciseDefinition {
    /// Create a definition; the id is derived from the name.
    pub fn new(
        name: &str,
        muscle_group: &str,
        exercise_type: ExerciseType,
        recovery_cost: RecoveryCost,
        equipment: &[&str],
        movement_pattern: MovementPattern,
    ) -> Self {
        Self {
            id: name.to_lowercase().replace([' ', '-'], "_"),
            name: name.to_string(),
            muscle_group: muscle_group.to_string(),
            exercise_type,
            recovery_cost,
            equipment: equipment.iter().map(|e| e.to_string()).collect(),
            movement_pattern,
        }
    }

    /// True when the exercise needs no equipment.
    pub fn is_bodyweight(&self) -> bool {
        self.equipment.is_empty()
    }

    /// True when every required piece of equipment is available.
    pub fn equipment_satisfied_by(&self, available: &BTreeSet<String>) -> bool {
        self.equipment.is_subset(available)
    }
}
