//! Unit tests for program rotation.

use chrono::NaiveDate;
use rustlift::planner::error::PlannerError;
use rustlift::planner::program::generate_program_plan;
use rustlift::planner::types::{Program, ProgramDuration, WorkoutPrescription};

fn three_workout_program() -> Program {
    Program {
        name: "Push Pull Legs".to_string(),
        days_per_week: 4,
        workouts: vec![
            WorkoutPrescription::new("Push"),
            WorkoutPrescription::new("Pull"),
            WorkoutPrescription::new("Legs"),
        ],
    }
}

#[test]
fn test_rotation_from_start_index() {
    let program = three_workout_program();
    let plan =
        generate_program_plan(&program, ProgramDuration::Weeks(2), 1, None).unwrap();

    // 2 weeks * 4 days/week
    assert_eq!(plan.days.len(), 8);
    // Rotation starts at template index 1
    assert_eq!(plan.days[0].workout.name, "Pull");
    assert_eq!(plan.days[1].workout.name, "Legs");
    assert_eq!(plan.days[2].workout.name, "Push");
    // Rotation period equals the template-list length: entry 4 wraps
    assert_eq!(plan.days[3].workout.name, "Pull");
}

#[test]
fn test_day_numbers_are_sequential_and_uncompleted() {
    let program = three_workout_program();
    let plan =
        generate_program_plan(&program, ProgramDuration::Weeks(2), 0, None).unwrap();

    for (i, day) in plan.days.iter().enumerate() {
        assert_eq!(day.day_number, i as u32 + 1);
        assert!(!day.completed);
        assert_eq!(day.date, None);
    }
}

#[test]
fn test_raw_day_count_duration() {
    let program = three_workout_program();
    let plan = generate_program_plan(&program, ProgramDuration::Days(10), 0, None).unwrap();
    assert_eq!(plan.days.len(), 10);
    assert_eq!(plan.days[9].workout.name, "Pull");
}

#[test]
fn test_start_index_wraps_modulo() {
    let program = three_workout_program();
    let plan = generate_program_plan(&program, ProgramDuration::Days(3), 7, None).unwrap();
    // 7 % 3 == 1, so rotation starts at "Pull"
    assert_eq!(plan.days[0].workout.name, "Pull");
}

#[test]
fn test_calendar_binding_spreads_weekly_sessions() {
    let program = three_workout_program();
    let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let plan =
        generate_program_plan(&program, ProgramDuration::Weeks(1), 0, Some(start)).unwrap();

    let dates: Vec<_> = plan.days.iter().map(|d| d.date.unwrap()).collect();
    assert_eq!(dates[0], start);
    // Four sessions spread across the week, never on the same day
    for pair in dates.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert!(dates[3] < start + chrono::Duration::days(7));
}

#[test]
fn test_empty_program_is_an_error() {
    let program = Program {
        name: "Empty".to_string(),
        days_per_week: 3,
        workouts: Vec::new(),
    };
    let err = generate_program_plan(&program, ProgramDuration::Weeks(1), 0, None).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput(_)));
}
