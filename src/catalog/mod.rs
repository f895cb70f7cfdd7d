//! Exercise catalog module.
//!
//! Static reference data: exercise definitions grouped by muscle, loaded
//! once at startup. The catalog also maintains a name-to-muscle reverse
//! index so callers can recover a missing muscle group from an exercise
//! name without re-scanning every group.

pub mod builtin;
pub mod types;

pub use builtin::builtin_catalog;
pub use types::{ExerciseDefinition, ExerciseType, MovementPattern, RecoveryCost};

use std::collections::{BTreeMap, HashMap};

/// Exercise reference data grouped by muscle, with a reverse name index.
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    /// Exercises per muscle group, in curated order
    groups: BTreeMap<String, Vec<ExerciseDefinition>>,
    /// Lowercased exercise name to muscle group
    name_index: HashMap<String, String>,
}

impl ExerciseCatalog {
    /// Build a catalog from grouped definitions, constructing the reverse
    /// name index in the same pass.
    pub fn new(groups: BTreeMap<String, Vec<ExerciseDefinition>>) -> Self {
        let mut name_index = HashMap::new();
        for (muscle, exercises) in &groups {
            for exercise in exercises {
                name_index.insert(exercise.name.to_lowercase(), muscle.clone());
            }
        }
        Self { groups, name_index }
    }

    /// Exercises for a muscle group; unknown groups yield an empty slice.
    pub fn exercises_for(&self, muscle_group: &str) -> &[ExerciseDefinition] {
        self.groups
            .get(muscle_group)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over every exercise in the catalog.
    pub fn all_exercises(&self) -> impl Iterator<Item = &ExerciseDefinition> {
        self.groups.values().flatten()
    }

    /// Muscle group names present in the catalog.
    pub fn muscle_groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Resolve an exercise name (case-insensitive) to its muscle group.
    pub fn muscle_for_name(&self, name: &str) -> Option<&str> {
        self.name_index.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Look up a definition by exercise name across all groups.
    pub fn find_by_name(&self, name: &str) -> Option<&ExerciseDefinition> {
        let muscle = self.muscle_for_name(name)?;
        self.exercises_for(muscle)
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Total number of exercises across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// True when the catalog holds no exercises at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
