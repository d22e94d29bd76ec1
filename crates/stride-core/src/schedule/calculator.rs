//! Binds a plan template to a race date.

use jiff::{civil::Date, Span};
use log::debug;

use crate::{
    error::Result,
    models::{Plan, RenderedPlan, RenderedWeek, RenderedWorkout},
};

/// Shifts `date` by a signed number of days.
fn add_days(date: Date, days: i64) -> Result<Date> {
    Ok(date.checked_add(Span::new().try_days(days)?)?)
}

/// Lays the template's weeks back to back so the last day of the last week
/// falls on `race_date`.
///
/// With `n` weeks the program starts `n * 7 - 1` days before race day; week
/// `i` starts `7 * i` days after that and workout `j` of a week lands `j`
/// days after the week start. `weeks_to_goal` counts down from `n` to 1.
///
/// The template shape is trusted here; [`crate::loader::validate_plan`]
/// rejects malformed templates before they reach this function.
///
/// # Errors
///
/// Returns `StrideError::DateOutOfRange` only when the computed dates fall
/// outside the supported calendar range.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use stride_core::{compute_schedule, models::{Plan, PlanType, Units, Week, Workout}};
///
/// let plan = Plan {
///     id: "one-week".to_string(),
///     name: "One Week".to_string(),
///     description: None,
///     plan_type: PlanType::Marathon,
///     units: Units::Miles,
///     source: None,
///     schedule: vec![Week {
///         workouts: (0..7).map(|d| Workout::new(format!("Day {d}"))).collect(),
///         ..Week::default()
///     }],
/// };
///
/// let schedule = compute_schedule(&plan, date(2026, 1, 1)).unwrap();
/// assert_eq!(schedule.start_date, date(2025, 12, 26));
/// assert_eq!(schedule.weeks[0].week_end, date(2026, 1, 1));
/// ```
pub fn compute_schedule(plan: &Plan, race_date: Date) -> Result<RenderedPlan> {
    let total_weeks = plan.total_weeks() as i64;
    let start_date = add_days(race_date, -(total_weeks * 7 - 1))?;

    debug!(
        "Computing schedule for plan '{}': {} weeks, {} to {}",
        plan.id, total_weeks, start_date, race_date
    );

    let weeks = plan
        .schedule
        .iter()
        .enumerate()
        .map(|(week_index, week)| {
            let week_start = add_days(start_date, week_index as i64 * 7)?;
            let week_end = add_days(week_start, 6)?;

            let workouts = week
                .workouts
                .iter()
                .enumerate()
                .map(|(day_index, workout)| {
                    Ok(RenderedWorkout {
                        workout: workout.clone(),
                        date: add_days(week_start, day_index as i64)?,
                        day_of_week: day_index as u8,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(RenderedWeek {
                week_start,
                week_end,
                weeks_to_goal: (total_weeks - week_index as i64) as u32,
                week_number: week_index as u32 + 1,
                original_week: week.clone(),
                workouts,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RenderedPlan {
        original_plan: plan.clone(),
        race_date,
        start_date,
        weeks,
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, datetime};

    use super::*;
    use crate::{
        error::StrideError,
        test_utils::{sample_plan, sample_plan_with_weeks},
    };

    #[test]
    fn test_one_week_plan_ends_on_race_day() {
        let plan = sample_plan_with_weeks(1);
        let schedule = compute_schedule(&plan, date(2026, 1, 1)).unwrap();

        assert_eq!(schedule.start_date, date(2025, 12, 26));
        assert_eq!(schedule.weeks[0].week_start, date(2025, 12, 26));
        assert_eq!(schedule.weeks[0].week_end, date(2026, 1, 1));
        assert_eq!(schedule.weeks[0].weeks_to_goal, 1);
        assert_eq!(schedule.weeks[0].week_number, 1);
    }

    #[test]
    fn test_weeks_are_contiguous() {
        let plan = sample_plan_with_weeks(18);
        let schedule = compute_schedule(&plan, date(2026, 4, 20)).unwrap();

        for pair in schedule.weeks.windows(2) {
            assert_eq!(pair[1].week_start, pair[0].week_end.tomorrow().unwrap());
        }
        for week in &schedule.weeks {
            assert_eq!(week.week_end, add_days(week.week_start, 6).unwrap());
        }
    }

    #[test]
    fn test_last_week_ends_on_race_date() {
        for race in [date(2026, 4, 20), date(2024, 2, 29), date(2025, 1, 1)] {
            let schedule = compute_schedule(&sample_plan_with_weeks(12), race).unwrap();
            assert_eq!(schedule.weeks.last().unwrap().week_end, race);
            assert_eq!(schedule.race_date, race);
        }
    }

    #[test]
    fn test_countdown_and_week_numbers() {
        let plan = sample_plan_with_weeks(5);
        let schedule = compute_schedule(&plan, date(2026, 10, 11)).unwrap();

        assert_eq!(schedule.weeks.len(), plan.schedule.len());
        for (i, week) in schedule.weeks.iter().enumerate() {
            assert_eq!(week.weeks_to_goal as usize, 5 - i);
            assert_eq!(week.week_number as usize, i + 1);
        }
        assert!(schedule.weeks[4].is_race_week());
        assert!(!schedule.weeks[3].is_race_week());
    }

    #[test]
    fn test_workout_dates_follow_day_offsets() {
        let schedule = compute_schedule(&sample_plan(), date(2026, 4, 20)).unwrap();

        for week in &schedule.weeks {
            assert_eq!(week.workouts.len(), 7);
            for (day, workout) in week.workouts.iter().enumerate() {
                assert_eq!(workout.day_of_week as usize, day);
                assert_eq!(workout.date, add_days(week.week_start, day as i64).unwrap());
            }
        }
        let last = schedule.weeks.last().unwrap().workouts.last().unwrap();
        assert_eq!(last.date, date(2026, 4, 20));
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let evening = datetime(2026, 1, 1, 18, 45, 0, 0);
        let schedule = compute_schedule(&sample_plan_with_weeks(1), evening.date()).unwrap();
        assert_eq!(schedule.weeks[0].week_end, date(2026, 1, 1));
    }

    #[test]
    fn test_keeps_template_back_reference() {
        let plan = sample_plan();
        let schedule = compute_schedule(&plan, date(2026, 4, 20)).unwrap();
        assert_eq!(schedule.original_plan, plan);
        assert_eq!(schedule.weeks[1].original_week, plan.schedule[1]);
    }

    #[test]
    fn test_date_overflow_is_reported() {
        let result = compute_schedule(&sample_plan_with_weeks(2), date(-9999, 1, 3));
        assert!(matches!(result, Err(StrideError::DateOutOfRange { .. })));
    }
}
