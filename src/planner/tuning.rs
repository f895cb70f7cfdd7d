//! Engine tuning tables.
//!
//! Every tunable constant the planner formulas consume lives here as a
//! named configuration structure with sane defaults, so tests and hosts
//! can override them without touching the engine code. The whole bundle
//! round-trips through TOML.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Complete set of planner tuning tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineTuning {
    /// Volume landmark derivation constants
    pub landmarks: LandmarkTuning,
    /// Week-to-week progression constants
    pub progression: ProgressionTuning,
    /// Exercise priority-score constants
    pub selection: SelectionTuning,
    /// Readiness adjustment constants
    pub autoregulation: AutoregulationTuning,
    /// Mesocycle structure constants
    pub mesocycle: MesocycleTuning,
    /// Substitution ranking constants
    pub substitution: SubstitutionTuning,
    /// Weekly split templates per training frequency
    pub splits: SplitTables,
}

impl EngineTuning {
    /// Load tuning tables from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save tuning tables to a TOML file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))
    }
}

/// Errors loading or saving tuning files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read or written.
    #[error("Tuning file I/O error: {0}")]
    Io(String),

    /// File contents are not valid TOML for these tables.
    #[error("Tuning file parse error: {0}")]
    Parse(String),

    /// Tables could not be serialized.
    #[error("Tuning serialize error: {0}")]
    Serialize(String),
}

/// Constants for volume landmark derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkTuning {
    /// Base weekly MEV sets per muscle group
    pub base_mev: BTreeMap<String, f64>,
    /// Base MEV for muscles absent from the table
    pub default_base_mev: f64,
    /// Relative muscle size factor per muscle group
    pub size_factors: BTreeMap<String, f64>,
    /// Size factor for muscles absent from the table
    pub default_size_factor: f64,
    /// Frequency factor indexed by weekly frequency (index 0 = 1x/week)
    pub frequency_factors: Vec<f64>,
    /// Frequency factor for frequencies beyond the table
    pub default_frequency_factor: f64,
    /// Exponent applied to the training-age factor in the MEV formula
    pub taf_exponent: f64,
    /// Cap on the training-age factor
    pub taf_cap: f64,
    /// MRV multiplier base added to the recovery-capacity score
    pub mrv_base_multiplier: f64,
    /// MAV position between MEV and MRV (0 = MEV, 1 = MRV)
    pub mav_blend: f64,
    /// MV as a fraction of MEV
    pub mv_ratio: f64,
}

impl Default for LandmarkTuning {
    fn default() -> Self {
        let base_mev = [
            ("chest", 8.0),
            ("back", 10.0),
            ("shoulders", 8.0),
            ("biceps", 8.0),
            ("triceps", 6.0),
            ("quads", 8.0),
            ("hamstrings", 6.0),
            ("glutes", 6.0),
            ("calves", 8.0),
            ("core", 6.0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let size_factors = [
            ("chest", 0.3),
            ("back", 0.4),
            ("shoulders", 0.2),
            ("biceps", 0.1),
            ("triceps", 0.1),
            ("quads", 0.4),
            ("hamstrings", 0.3),
            ("glutes", 0.3),
            ("calves", 0.1),
            ("core", 0.1),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            base_mev,
            default_base_mev: 8.0,
            size_factors,
            default_size_factor: 0.2,
            frequency_factors: vec![0.8, 1.0, 1.2, 1.2, 1.3, 1.4],
            default_frequency_factor: 1.3,
            taf_exponent: 0.3,
            taf_cap: 3.0,
            mrv_base_multiplier: 2.5,
            mav_blend: 0.7,
            mv_ratio: 0.6,
        }
    }
}

impl LandmarkTuning {
    /// Base MEV for a muscle group, with the documented default fallback.
    pub fn base_mev_for(&self, muscle: &str) -> f64 {
        self.base_mev
            .get(muscle)
            .copied()
            .unwrap_or(self.default_base_mev)
    }

    /// Size factor for a muscle group, with the documented default fallback.
    pub fn size_factor_for(&self, muscle: &str) -> f64 {
        self.size_factors
            .get(muscle)
            .copied()
            .unwrap_or(self.default_size_factor)
    }

    /// Frequency factor for a weekly training frequency.
    pub fn frequency_factor_for(&self, frequency: u32) -> f64 {
        if frequency == 0 {
            return self.frequency_factors.first().copied().unwrap_or(1.0);
        }
        self.frequency_factors
            .get(frequency as usize - 1)
            .copied()
            .unwrap_or(self.default_frequency_factor)
    }
}

/// Constants for week-to-week volume and load progression.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionTuning {
    /// Weekly volume ramp for novices (TAF below the threshold)
    pub novice_rate: f64,
    /// Weekly volume ramp for experienced athletes
    pub experienced_rate: f64,
    /// TAF below which the novice rate applies
    pub novice_taf_threshold: f64,
    /// Fraction of max volume that triggers a deload
    pub deload_trigger_ratio: f64,
    /// Deload volume as a fraction of starting volume
    pub deload_volume_ratio: f64,
    /// Proportional load step for autoregulated progression
    pub load_step_pct: f64,
    /// RIR deviation beyond which load is adjusted
    pub rir_deviation_threshold: f64,
    /// Base target RIR for compound exercises
    pub compound_base_rir: f64,
    /// Base target RIR for isolation exercises
    pub isolation_base_rir: f64,
    /// Volume/MRV ratio above which intensity is pushed harder
    pub high_fatigue_ratio: f64,
    /// Volume/MRV ratio below which intensity is relaxed
    pub low_fatigue_ratio: f64,
    /// RIR shift applied outside the neutral fatigue band
    pub intensity_shift: f64,
}

impl Default for ProgressionTuning {
    fn default() -> Self {
        Self {
            novice_rate: 0.10,
            experienced_rate: 0.05,
            novice_taf_threshold: 1.5,
            deload_trigger_ratio: 0.95,
            deload_volume_ratio: 0.6,
            load_step_pct: 0.025,
            rir_deviation_threshold: 1.0,
            compound_base_rir: 2.0,
            isolation_base_rir: 3.0,
            high_fatigue_ratio: 0.8,
            low_fatigue_ratio: 0.4,
            intensity_shift: 0.5,
        }
    }
}

/// Constants for the exercise priority score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionTuning {
    /// Bonus for compound exercises
    pub compound_bonus: f64,
    /// Bonus for isolation exercises
    pub isolation_bonus: f64,
    /// Multiplier when the muscle group is flagged weak
    pub weakness_multiplier: f64,
    /// Novelty score when the exercise is absent from the recent window
    pub novelty_absent: f64,
    /// Novelty score when the exercise sits beyond the suppression window
    pub novelty_stale: f64,
    /// Number of most-recent exercises that score zero novelty
    pub novelty_window: usize,
    /// Score term for low recovery cost
    pub low_cost_term: f64,
    /// Score term for medium recovery cost
    pub medium_cost_term: f64,
    /// Score term for high recovery cost
    pub high_cost_term: f64,
    /// Multiplier for female athletes on glute/hamstring exercises
    pub female_lower_emphasis: f64,
}

impl Default for SelectionTuning {
    fn default() -> Self {
        Self {
            compound_bonus: 3.0,
            isolation_bonus: 1.0,
            weakness_multiplier: 1.5,
            novelty_absent: 2.0,
            novelty_stale: 1.0,
            novelty_window: 4,
            low_cost_term: 1.0,
            medium_cost_term: 0.0,
            high_cost_term: -1.0,
            female_lower_emphasis: 1.2,
        }
    }
}

/// Constants for readiness-driven workout adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoregulationTuning {
    /// Recovery score below which volume and intensity are reduced
    pub low_threshold: f64,
    /// Recovery score above which reps are increased
    pub high_threshold: f64,
    /// Set count above which the last set is dropped on a low score
    pub set_drop_threshold: u32,
    /// Reps removed on a low recovery score
    pub rep_reduction: u32,
    /// Floor below which reps are never reduced
    pub rep_floor: u32,
    /// Reps added on a high recovery score
    pub rep_increase: u32,
}

impl Default for AutoregulationTuning {
    fn default() -> Self {
        Self {
            low_threshold: 6.0,
            high_threshold: 8.0,
            set_drop_threshold: 3,
            rep_reduction: 2,
            rep_floor: 5,
            rep_increase: 1,
        }
    }
}

/// Constants for mesocycle structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MesocycleTuning {
    /// Starting weekly volume as a multiple of MEV
    pub start_volume_factor: f64,
    /// Target volume above which three exercises are selected per muscle
    pub three_exercise_threshold: f64,
    /// Deload week volume as a fraction of MEV
    pub deload_mev_ratio: f64,
    /// Fixed RIR target for every deload exercise
    pub deload_rir: f64,
    /// Default number of progression weeks before the deload
    pub default_weeks: u32,
}

impl Default for MesocycleTuning {
    fn default() -> Self {
        Self {
            start_volume_factor: 1.1,
            three_exercise_threshold: 12.0,
            deload_mev_ratio: 0.6,
            deload_rir: 4.0,
            default_weeks: 4,
        }
    }
}

/// Constants for substitution ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstitutionTuning {
    /// Bonus for matching movement pattern
    pub same_pattern_bonus: f64,
    /// Bonus for matching muscle group
    pub same_muscle_bonus: f64,
    /// Bonus for matching exercise type
    pub same_type_bonus: f64,
    /// Maximum number of substitutions returned
    pub max_results: usize,
}

impl Default for SubstitutionTuning {
    fn default() -> Self {
        Self {
            same_pattern_bonus: 10.0,
            same_muscle_bonus: 5.0,
            same_type_bonus: 2.0,
            max_results: 5,
        }
    }
}

/// A named training day within a weekly split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitDay {
    /// Display name ("Upper A", "Push", ...)
    pub name: String,
    /// Muscle groups trained on this day
    pub muscles: Vec<String>,
}

impl SplitDay {
    fn new(name: &str, muscles: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            muscles: muscles.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Weekly split templates keyed by training frequency.
///
/// Day counts without a template fall back to the four-day split.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitTables {
    /// Three-day full-body split
    pub three_day: Vec<SplitDay>,
    /// Four-day upper/lower split
    pub four_day: Vec<SplitDay>,
    /// Five-day upper/lower + push/pull/legs split
    pub five_day: Vec<SplitDay>,
    /// Six-day push/pull/legs split, run twice
    pub six_day: Vec<SplitDay>,
}

impl Default for SplitTables {
    fn default() -> Self {
        Self {
            three_day: vec![
                SplitDay::new("Full Body A", &["chest", "back", "quads", "biceps", "core"]),
                SplitDay::new(
                    "Full Body B",
                    &["shoulders", "hamstrings", "glutes", "triceps", "calves"],
                ),
                SplitDay::new(
                    "Full Body C",
                    &["chest", "back", "quads", "hamstrings", "core"],
                ),
            ],
            four_day: vec![
                SplitDay::new(
                    "Upper A",
                    &["chest", "back", "shoulders", "biceps", "triceps"],
                ),
                SplitDay::new("Lower A", &["quads", "hamstrings", "glutes", "calves", "core"]),
                SplitDay::new(
                    "Upper B",
                    &["chest", "back", "shoulders", "biceps", "triceps"],
                ),
                SplitDay::new("Lower B", &["quads", "hamstrings", "glutes", "calves", "core"]),
            ],
            five_day: vec![
                SplitDay::new(
                    "Upper",
                    &["chest", "back", "shoulders", "biceps", "triceps"],
                ),
                SplitDay::new("Lower", &["quads", "hamstrings", "glutes", "calves"]),
                SplitDay::new("Push", &["chest", "shoulders", "triceps"]),
                SplitDay::new("Pull", &["back", "biceps", "core"]),
                SplitDay::new("Legs", &["quads", "hamstrings", "glutes", "calves"]),
            ],
            six_day: vec![
                SplitDay::new("Push A", &["chest", "shoulders", "triceps"]),
                SplitDay::new("Pull A", &["back", "biceps", "core"]),
                SplitDay::new("Legs A", &["quads", "hamstrings", "glutes", "calves"]),
                SplitDay::new("Push B", &["chest", "shoulders", "triceps"]),
                SplitDay::new("Pull B", &["back", "biceps", "core"]),
                SplitDay::new("Legs B", &["quads", "hamstrings", "glutes", "calves"]),
            ],
        }
    }
}

impl SplitTables {
    /// Split for a weekly frequency; unmapped counts fall back to four days.
    pub fn for_days_per_week(&self, days: u8) -> &[SplitDay] {
        match days {
            3 => &self.three_day,
            4 => &self.four_day,
            5 => &self.five_day,
            6 => &self.six_day,
            _ => &self.four_day,
        }
    }
}
