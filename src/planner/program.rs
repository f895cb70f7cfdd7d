//! Template-based program rotation.
//!
//! Rotates a fixed list of pre-authored template workouts into a
//! calendar-bound plan: sessions are assigned round-robin from the
//! rotated template list until the declared duration is filled.

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use super::error::{PlannerError, PlannerResult};
use super::types::{Program, ProgramDay, ProgramDuration, ProgramPlan};

/// Generate a program plan by rotating the program's templates.
///
/// Total sessions are `weeks * days_per_week` for week-based durations,
/// or the raw day count. Rotation starts at `start_index` (wrap-around)
/// and every entry starts uncompleted. When `start_date` is given, each
/// session is bound to a calendar date: week-based plans spread their
/// sessions evenly across each week, day-based plans run on consecutive
/// days.
pub fn generate_program_plan(
    program: &Program,
    duration: ProgramDuration,
    start_index: usize,
    start_date: Option<NaiveDate>,
) -> PlannerResult<ProgramPlan> {
    if program.workouts.is_empty() {
        return Err(PlannerError::InvalidInput(
            "program has no template workouts to rotate".to_string(),
        ));
    }

    let sessions_per_week = program.days_per_week.max(1) as u32;
    let total_sessions = match duration {
        ProgramDuration::Weeks(weeks) => weeks * sessions_per_week,
        ProgramDuration::Days(days) => days,
    };

    let template_count = program.workouts.len();
    let offset = start_index % template_count;

    tracing::info!(
        program = %program.name,
        total_sessions,
        template_count,
        offset,
        "generating program plan"
    );

    let days = (0..total_sessions)
        .map(|i| {
            let template = &program.workouts[(offset + i as usize) % template_count];
            ProgramDay {
                day_number: i + 1,
                date: start_date.map(|start| start + Duration::days(session_offset(i, sessions_per_week, duration))),
                workout: template.clone(),
                completed: false,
            }
        })
        .collect();

    Ok(ProgramPlan {
        id: Uuid::new_v4(),
        name: program.name.clone(),
        duration,
        days,
    })
}

/// Calendar offset in days for the `i`-th session.
fn session_offset(i: u32, sessions_per_week: u32, duration: ProgramDuration) -> i64 {
    match duration {
        ProgramDuration::Days(_) => i as i64,
        ProgramDuration::Weeks(_) => {
            let week = i / sessions_per_week;
            let slot = i % sessions_per_week;
            // Spread the week's sessions evenly over its seven days
            let within_week = (slot as f64 * 7.0 / sessions_per_week as f64).floor() as i64;
            week as i64 * 7 + within_week
        }
    }
}
