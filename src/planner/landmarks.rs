//! Volume landmark derivation.
//!
//! Derives the athlete's Training-Age Factor (TAF) and Recovery-Capacity
//! Score (RCS) from profile fields, then per-muscle weekly set-count
//! landmarks (MV/MEV/MAV/MRV) from those plus the tuning tables. All
//! formulas clamp at the sub-factor level; out-of-range profile inputs
//! never raise here.

use serde::{Deserialize, Serialize};

use super::tuning::LandmarkTuning;
use super::types::VolumeLandmarks;
use crate::profile::{AthleteProfile, Sex};

/// Intermediate multipliers derived from the profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AthleteFactors {
    /// Training-age factor, 1.0 (untrained) to the configured cap
    pub taf: f64,
    /// Recovery-capacity score, product of sex/age/sleep/stress modifiers
    pub rcs: f64,
}

/// Derives volume landmarks from an athlete profile.
pub struct LandmarkCalculator<'a> {
    tuning: &'a LandmarkTuning,
}

impl<'a> LandmarkCalculator<'a> {
    /// Create a calculator over the given tuning tables.
    pub fn new(tuning: &'a LandmarkTuning) -> Self {
        Self { tuning }
    }

    /// Training-age factor: grows 0.1 per training year, capped.
    pub fn training_age_factor(&self, profile: &AthleteProfile) -> f64 {
        let taf = 1.0 + (profile.training_months as f64 / 12.0) * 0.1;
        taf.min(self.tuning.taf_cap)
    }

    /// Recovery-capacity score from sex, age, sleep, and stress modifiers.
    pub fn recovery_capacity_score(&self, profile: &AthleteProfile) -> f64 {
        let sex_mod = match profile.sex {
            Sex::Female => 1.15,
            Sex::Male => 1.0,
        };
        let age_mod = (1.2 - (profile.age as f64 - 18.0) * 0.005).max(0.7);
        let sleep_mod = (profile.sleep_hours / 8.0).min(1.2);
        let stress_mod = (10.0 - profile.stress_level as f64) / 10.0;

        let rcs = sex_mod * age_mod * sleep_mod * stress_mod;
        tracing::debug!(
            sex_mod,
            age_mod,
            sleep_mod,
            stress_mod,
            rcs,
            "derived recovery capacity score"
        );
        rcs
    }

    /// Both derived factors in one call.
    pub fn athlete_factors(&self, profile: &AthleteProfile) -> AthleteFactors {
        AthleteFactors {
            taf: self.training_age_factor(profile),
            rcs: self.recovery_capacity_score(profile),
        }
    }

    /// Per-muscle volume landmarks at a given weekly training frequency.
    ///
    /// Unknown muscle groups use the default base MEV and size factor
    /// rather than failing. Values are computed in floating point and
    /// rounded for output.
    pub fn volume_landmarks(
        &self,
        profile: &AthleteProfile,
        muscle_group: &str,
        training_frequency: u32,
    ) -> VolumeLandmarks {
        let factors = self.athlete_factors(profile);

        let base_mev = profile
            .base_mev_overrides
            .get(muscle_group)
            .copied()
            .unwrap_or_else(|| self.tuning.base_mev_for(muscle_group));
        let size_factor = self.tuning.size_factor_for(muscle_group);

        let mev = base_mev * (1.0 + size_factor) * factors.taf.powf(self.tuning.taf_exponent);
        let frequency_factor = self.tuning.frequency_factor_for(training_frequency);
        let mrv = mev * (self.tuning.mrv_base_multiplier + factors.rcs) * frequency_factor;
        let mav = mev + self.tuning.mav_blend * (mrv - mev);
        let mv = mev * self.tuning.mv_ratio;

        VolumeLandmarks {
            mv: mv.round() as u32,
            mev: mev.round() as u32,
            mav: mav.round() as u32,
            mrv: mrv.round() as u32,
        }
    }
}
