//! Planner data model.
//!
//! Plain data structures exchanged with the host: prescriptions flowing
//! out of the engine, and set records / readiness snapshots flowing in.
//! Everything serializes with serde so the host can persist plans with
//! full numeric round-trip fidelity.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-muscle weekly set-count landmarks.
///
/// Invariant for any valid profile: `mv < mev <= mav <= mrv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeLandmarks {
    /// Minimum Volume: maintenance floor
    pub mv: u32,
    /// Minimum Effective Volume
    pub mev: u32,
    /// Maximum Adaptive Volume
    pub mav: u32,
    /// Maximum Recoverable Volume
    pub mrv: u32,
}

/// Target rep prescription: a single count or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepTarget {
    /// Exact rep count
    Single(u32),
    /// Inclusive rep range (low, high)
    Range(u32, u32),
}

impl RepTarget {
    /// Lower bound of the target.
    pub fn low(&self) -> u32 {
        match self {
            RepTarget::Single(n) => *n,
            RepTarget::Range(low, _) => *low,
        }
    }

    /// Upper bound of the target.
    pub fn high(&self) -> u32 {
        match self {
            RepTarget::Single(n) => *n,
            RepTarget::Range(_, high) => *high,
        }
    }

    /// Shift both bounds by a signed amount, never dropping below `floor`.
    pub fn shifted(&self, delta: i64, floor: u32) -> RepTarget {
        let shift = |v: u32| -> u32 {
            let shifted = v as i64 + delta;
            shifted.max(floor as i64) as u32
        };
        match self {
            RepTarget::Single(n) => RepTarget::Single(shift(*n)),
            RepTarget::Range(low, high) => RepTarget::Range(shift(*low), shift(*high)),
        }
    }
}

impl std::fmt::Display for RepTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepTarget::Single(n) => write!(f, "{n}"),
            RepTarget::Range(low, high) => write!(f, "{low}-{high}"),
        }
    }
}

/// One exercise within a workout prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescribedExercise {
    /// Exercise display name
    pub name: String,
    /// Muscle group, if known at prescription time
    pub muscle_group: Option<String>,
    /// Number of working sets
    pub sets: u32,
    /// Target reps per set
    pub target_reps: RepTarget,
    /// Target reps-in-reserve; back-filled by autoregulation when absent
    pub target_rir: Option<f64>,
}

/// A single planned workout handed to the session view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPrescription {
    /// Display name ("Upper A", "Push", ...)
    pub name: String,
    /// Ordered exercises
    pub exercises: Vec<PrescribedExercise>,
}

impl WorkoutPrescription {
    /// Create an empty prescription with a name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            exercises: Vec::new(),
        }
    }

    /// Total working sets across all exercises.
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets).sum()
    }
}

/// One completed set as logged by the host after a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Load lifted
    pub weight: f64,
    /// Reps completed
    pub reps: u32,
    /// Reps in reserve, if logged
    pub rir: Option<f64>,
    /// Rate of perceived exertion, if logged
    pub rpe: Option<f64>,
    /// Optional qualitative feedback
    pub feedback: Option<String>,
}

impl SetRecord {
    /// Create a record with weight, reps, and RIR.
    pub fn new(weight: f64, reps: u32, rir: f64) -> Self {
        Self {
            weight,
            reps,
            rir: Some(rir),
            rpe: None,
            feedback: None,
        }
    }

    /// Proximity-to-failure as RIR, derived from RPE when RIR is absent.
    /// Missing on both counts is treated as zero reps in reserve.
    pub fn effective_rir(&self) -> f64 {
        self.rir
            .or_else(|| self.rpe.map(|rpe| (10.0 - rpe).max(0.0)))
            .unwrap_or(0.0)
    }
}

/// Daily readiness questionnaire, one per session.
///
/// All four ratings are 1-10; higher soreness means worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessSnapshot {
    pub sleep_quality: u8,
    pub energy_level: u8,
    pub motivation: u8,
    pub muscle_soreness: u8,
}

/// Weekly per-muscle targets within a mesocycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleWeekTarget {
    /// Target weekly sets
    pub target_volume: u32,
    /// Target RIR for compound work
    pub target_rir_compound: f64,
    /// Target RIR for isolation work
    pub target_rir_isolation: f64,
}

/// A planned training day within a mesocycle week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedDay {
    /// Split day name
    pub name: String,
    /// Ordered exercise prescriptions
    pub exercises: Vec<PrescribedExercise>,
}

/// One week of a mesocycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingWeek {
    /// 1-based week index; the deload is always the final week
    pub week_number: u32,
    /// True for the terminal deload week
    pub is_deload: bool,
    /// Per-muscle weekly targets
    pub muscle_targets: BTreeMap<String, MuscleWeekTarget>,
    /// Planned training days for the chosen split
    pub days: Vec<PlannedDay>,
}

/// A full multi-week training block ending in a deload week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesocycle {
    /// Identity for host-side tracking
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Progression weeks followed by one deload week
    pub weeks: Vec<TrainingWeek>,
}

/// A set of pre-authored template workouts to rotate into a calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Display name
    pub name: String,
    /// Sessions per week when the duration is week-based
    pub days_per_week: u8,
    /// Ordered workout templates
    pub workouts: Vec<WorkoutPrescription>,
}

/// Declared length of a program plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramDuration {
    /// Number of calendar weeks; sessions = weeks * days_per_week
    Weeks(u32),
    /// Raw session count
    Days(u32),
}

/// One scheduled session within a program plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDay {
    /// Sequential day number starting at 1
    pub day_number: u32,
    /// Calendar date when the plan was bound to a start date
    pub date: Option<NaiveDate>,
    /// The rotated template workout for this session
    pub workout: WorkoutPrescription,
    /// Completion flag, maintained by the host
    pub completed: bool,
}

/// A calendar-bound rotation of template workouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramPlan {
    /// Identity for host-side tracking
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Declared duration
    pub duration: ProgramDuration,
    /// Scheduled sessions in order
    pub days: Vec<ProgramDay>,
}
