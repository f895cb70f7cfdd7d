//! Built-in exercise catalog.
//!
//! A curated set of common resistance-training exercises across ten muscle
//! groups, with equipment requirements and movement patterns. Hosts can
//! supply their own catalog; this one covers a typical commercial gym plus
//! bodyweight options.

use std::collections::BTreeMap;

use super::types::{ExerciseDefinition, ExerciseType, MovementPattern, RecoveryCost};
use super::ExerciseCatalog;

use ExerciseType::{Compound, Isolation};
use MovementPattern as Mp;
use RecoveryCost::{High, Low, Medium};

/// Build the built-in catalog.
pub fn builtin_catalog() -> ExerciseCatalog {
    let mut groups: BTreeMap<String, Vec<ExerciseDefinition>> = BTreeMap::new();

    let def = ExerciseDefinition::new;

    groups.insert(
        "chest".into(),
        vec![
            def("Barbell Bench Press", "chest", Compound, High, &["barbell", "bench"], Mp::HorizontalPush),
            def("Incline Dumbbell Press", "chest", Compound, Medium, &["dumbbell", "bench"], Mp::HorizontalPush),
            def("Weighted Dip", "chest", Compound, Medium, &["dip_bars"], Mp::HorizontalPush),
            def("Cable Fly", "chest", Isolation, Low, &["cable"], Mp::HorizontalPush),
            def("Push-Up", "chest", Compound, Low, &[], Mp::HorizontalPush),
        ],
    );

    groups.insert(
        "back".into(),
        vec![
            def("Barbell Row", "back", Compound, High, &["barbell"], Mp::HorizontalPull),
            def("Pull-Up", "back", Compound, Medium, &["pullup_bar"], Mp::VerticalPull),
            def("Lat Pulldown", "back", Compound, Low, &["cable"], Mp::VerticalPull),
            def("Seated Cable Row", "back", Compound, Low, &["cable"], Mp::HorizontalPull),
            def("Single-Arm Dumbbell Row", "back", Compound, Medium, &["dumbbell", "bench"], Mp::HorizontalPull),
        ],
    );

    groups.insert(
        "shoulders".into(),
        vec![
            def("Overhead Press", "shoulders", Compound, High, &["barbell"], Mp::VerticalPush),
            def("Seated Dumbbell Press", "shoulders", Compound, Medium, &["dumbbell", "bench"], Mp::VerticalPush),
            def("Lateral Raise", "shoulders", Isolation, Low, &["dumbbell"], Mp::Raise),
            def("Cable Lateral Raise", "shoulders", Isolation, Low, &["cable"], Mp::Raise),
            def("Rear Delt Fly", "shoulders", Isolation, Low, &["dumbbell"], Mp::Raise),
        ],
    );

    groups.insert(
        "biceps".into(),
        vec![
            def("Barbell Curl", "biceps", Isolation, Low, &["barbell"], Mp::ElbowFlexion),
            def("Incline Dumbbell Curl", "biceps", Isolation, Low, &["dumbbell", "bench"], Mp::ElbowFlexion),
            def("Cable Curl", "biceps", Isolation, Low, &["cable"], Mp::ElbowFlexion),
            def("Chin-Up", "biceps", Compound, Medium, &["pullup_bar"], Mp::VerticalPull),
        ],
    );

    groups.insert(
        "triceps".into(),
        vec![
            def("Close-Grip Bench Press", "triceps", Compound, Medium, &["barbell", "bench"], Mp::HorizontalPush),
            def("Cable Pushdown", "triceps", Isolation, Low, &["cable"], Mp::ElbowExtension),
            def("Overhead Cable Extension", "triceps", Isolation, Low, &["cable"], Mp::ElbowExtension),
            def("Bench Dip", "triceps", Compound, Low, &["bench"], Mp::ElbowExtension),
        ],
    );

    groups.insert(
        "quads".into(),
        vec![
            def("Barbell Back Squat", "quads", Compound, High, &["barbell", "rack"], Mp::Squat),
            def("Leg Press", "quads", Compound, Medium, &["machine"], Mp::Squat),
            def("Bulgarian Split Squat", "quads", Compound, Medium, &["dumbbell", "bench"], Mp::Lunge),
            def("Leg Extension", "quads", Isolation, Low, &["machine"], Mp::Squat),
            def("Walking Lunge", "quads", Compound, Medium, &["dumbbell"], Mp::Lunge),
        ],
    );

    groups.insert(
        "hamstrings".into(),
        vec![
            def("Romanian Deadlift", "hamstrings", Compound, High, &["barbell"], Mp::Hinge),
            def("Seated Leg Curl", "hamstrings", Isolation, Low, &["machine"], Mp::Hinge),
            def("Lying Leg Curl", "hamstrings", Isolation, Low, &["machine"], Mp::Hinge),
            def("Good Morning", "hamstrings", Compound, High, &["barbell", "rack"], Mp::Hinge),
            def("Nordic Curl", "hamstrings", Isolation, Medium, &[], Mp::Hinge),
        ],
    );

    groups.insert(
        "glutes".into(),
        vec![
            def("Barbell Hip Thrust", "glutes", Compound, Medium, &["barbell", "bench"], Mp::Hinge),
            def("Conventional Deadlift", "glutes", Compound, High, &["barbell"], Mp::Hinge),
            def("Cable Kickback", "glutes", Isolation, Low, &["cable"], Mp::Hinge),
            def("Glute Bridge", "glutes", Isolation, Low, &[], Mp::Hinge),
        ],
    );

    groups.insert(
        "calves".into(),
        vec![
            def("Standing Calf Raise", "calves", Isolation, Low, &["machine"], Mp::Calf),
            def("Seated Calf Raise", "calves", Isolation, Low, &["machine"], Mp::Calf),
            def("Single-Leg Calf Raise", "calves", Isolation, Low, &[], Mp::Calf),
        ],
    );

    groups.insert(
        "core".into(),
        vec![
            def("Cable Crunch", "core", Isolation, Low, &["cable"], Mp::CoreFlexion),
            def("Hanging Leg Raise", "core", Isolation, Low, &["pullup_bar"], Mp::CoreFlexion),
            def("Ab Wheel Rollout", "core", Compound, Medium, &["ab_wheel"], Mp::CoreFlexion),
            def("Plank", "core", Isolation, Low, &[], Mp::CoreFlexion),
        ],
    );

    ExerciseCatalog::new(groups)
}
