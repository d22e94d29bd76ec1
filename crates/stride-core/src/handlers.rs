//! Command handlers shared by the CLI and the MCP server.
//!
//! Each handler validates its parameters, applies the change to the
//! [`PlanStore`], and persists the store through the [`Session`] when
//! something changed. Handlers return structured values; formatting is left
//! to the interface via [`crate::display`].
//!
//! ```text
//! Interface → Handler → PlanStore + Session → Database / Catalog
//! ```

use jiff::civil::Date;
use log::debug;

use crate::{
    display::{ScheduleView, WeekView},
    error::{Result, StrideError},
    loader::PlanEntry,
    models::Units,
    pace::{normalize_goal_time, paces_for_goal, Paces},
    params::{MoveWorkout, SelectPlan, SetGoalTime, SetRaceDate, SetUnits, ShowPaces, ShowSchedule},
    session::Session,
    store::{LoadOutcome, PlanStore},
};

/// Lists the templates in the session's plans directory.
pub async fn handle_list_plans(session: &Session) -> Result<Vec<PlanEntry>> {
    session.list_plans().await
}

/// Loads the selected template if the store does not hold it yet.
///
/// Returns `None` when nothing needed loading. A successful load is
/// persisted.
pub async fn handle_ensure_plan(
    session: &Session,
    store: &mut PlanStore,
) -> Result<Option<LoadOutcome>> {
    if store.plan().is_some() {
        return Ok(None);
    }

    let outcome = session.load_plan(store).await;
    if outcome == LoadOutcome::Applied {
        session.persist(store).await?;
    }
    Ok(Some(outcome))
}

/// Selects a template and loads it. The store is persisted only when the
/// load succeeds.
pub async fn handle_select_plan(
    session: &Session,
    store: &mut PlanStore,
    params: &SelectPlan,
) -> Result<LoadOutcome> {
    let plan_id = params.plan_id.trim();
    if plan_id.is_empty() {
        return Err(StrideError::invalid_input("plan_id").with_reason("Plan id must not be empty"));
    }

    let outcome = session.select_plan(store, plan_id).await;
    if outcome == LoadOutcome::Applied {
        session.persist(store).await?;
    }
    Ok(outcome)
}

/// Parses and sets the race date, rebuilding the schedule.
pub async fn handle_set_race_date(
    session: &Session,
    store: &mut PlanStore,
    params: &SetRaceDate,
) -> Result<Date> {
    let race_date = params.race_date.trim().parse::<Date>().map_err(|e| {
        StrideError::invalid_input("race_date")
            .with_reason(format!("'{}' is not a YYYY-MM-DD date: {e}", params.race_date))
    })?;
    debug!("Setting race date {race_date}");

    handle_ensure_plan(session, store).await?;
    store.set_race_date(Some(race_date))?;
    session.persist(store).await?;
    Ok(race_date)
}

/// Sets the display units.
pub async fn handle_set_units(
    session: &Session,
    store: &mut PlanStore,
    params: &SetUnits,
) -> Result<Units> {
    let units = params
        .units
        .parse::<Units>()
        .map_err(|reason| StrideError::invalid_input("units").with_reason(reason))?;

    store.set_units(units);
    session.persist(store).await?;
    Ok(units)
}

/// Normalizes and sets the goal time. Returns the stored `H:MM:SS` form.
pub async fn handle_set_goal_time(
    session: &Session,
    store: &mut PlanStore,
    params: &SetGoalTime,
) -> Result<String> {
    let goal_time = normalize_goal_time(&params.goal_time)
        .filter(|goal| paces_for_goal(goal).is_some())
        .ok_or_else(|| {
            StrideError::invalid_input("goal_time").with_reason(format!(
                "'{}' is not a finishing time like 3:30:00",
                params.goal_time
            ))
        })?;

    store.set_goal_time(goal_time.clone());
    session.persist(store).await?;
    Ok(goal_time)
}

/// Swaps two days of the schedule. Returns `false` when nothing moved.
pub async fn handle_move_workout(
    session: &Session,
    store: &mut PlanStore,
    params: &MoveWorkout,
) -> Result<bool> {
    let moved = store.move_workout(
        params.from_week,
        params.from_day,
        params.to_week,
        params.to_day,
    );
    if moved {
        session.persist(store).await?;
    }
    Ok(moved)
}

/// Rebuilds the schedule from its template, discarding swaps. Returns
/// `false` when there is no schedule to reset.
pub async fn handle_reset_schedule(session: &Session, store: &mut PlanStore) -> Result<bool> {
    if store.get_schedule().is_none() {
        return Ok(false);
    }

    store.rebuild_schedule()?;
    session.persist(store).await?;
    Ok(true)
}

/// Deletes the saved state and puts `store` back to its defaults. Returns
/// whether anything had been saved.
pub async fn handle_clear_state(session: &Session, store: &mut PlanStore) -> Result<bool> {
    let cleared = session.reset().await?;
    *store = PlanStore::new();
    Ok(cleared)
}

/// Renders the schedule, or one week of it, as markdown. Returns `None` when
/// there is no schedule yet.
pub fn handle_show_schedule(store: &PlanStore, params: &ShowSchedule) -> Result<Option<String>> {
    let Some(schedule) = store.get_schedule() else {
        return Ok(None);
    };
    let paces = store.paces();

    let output = match params.week {
        Some(number) => {
            let index = schedule
                .weeks
                .iter()
                .position(|week| week.week_number == number)
                .ok_or_else(|| {
                    StrideError::invalid_input("week").with_reason(format!(
                        "Week {number} is outside the schedule (1-{})",
                        schedule.weeks.len()
                    ))
                })?;
            WeekView {
                week: &schedule.weeks[index],
                index,
                units: store.units(),
                paces: paces.as_ref(),
            }
            .to_string()
        }
        None => ScheduleView::new(schedule, store.units())
            .with_paces(paces.as_ref())
            .to_string(),
    };
    Ok(Some(output))
}

/// Pace bands for the requested or saved goal time, with the goal time they
/// were computed from.
pub fn handle_show_paces(store: &PlanStore, params: &ShowPaces) -> Result<(String, Paces)> {
    let goal_time = match &params.goal_time {
        Some(goal) => normalize_goal_time(goal).unwrap_or_else(|| goal.clone()),
        None => store.goal_time().to_string(),
    };

    let paces = paces_for_goal(&goal_time).ok_or_else(|| {
        StrideError::invalid_input("goal_time")
            .with_reason(format!("'{goal_time}' is not a finishing time like 3:30:00"))
    })?;
    Ok((goal_time, paces))
}
