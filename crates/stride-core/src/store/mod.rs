//! Application state container.
//!
//! [`PlanStore`] owns the user's selections and the current rendered
//! schedule. It is passed explicitly to whoever needs it (the CLI handlers,
//! the MCP server) and exposes a small read/command surface. Persistence is
//! an explicit pair, [`PlanStore::snapshot`] and [`PlanStore::from_snapshot`],
//! invoked by [`crate::session::Session`] at startup and after changes.
//!
//! # Plan loading
//!
//! Loading a template is asynchronous and may be superseded by a newer
//! selection before it completes. Each load takes a [`LoadTicket`] from
//! [`PlanStore::begin_load`]; [`PlanStore::finish_load`] applies a result only
//! if its ticket is still the latest one.
//!
//! ```rust
//! use jiff::civil::date;
//! use stride_core::{store::{LoadOutcome, PlanStore}, StrideError};
//!
//! let mut store = PlanStore::new();
//! store.set_plan_id("first");
//! let stale = store.begin_load();
//! store.set_plan_id("second");
//! let latest = store.begin_load();
//!
//! let outcome = store.finish_load(stale, Err(StrideError::PlanNotFound { id: "first".into() }));
//! assert_eq!(outcome, LoadOutcome::Stale);
//! assert!(store.load_error().is_none());
//! # let _ = latest;
//! ```

use jiff::civil::{Date, DateTime};
use log::{debug, info, warn};

use crate::{
    error::Result,
    models::{Plan, RenderedPlan, Units},
    pace::{paces_for_goal, Paces},
    schedule::{compute_schedule, mutator::swap_in_place, Slot},
};

pub mod snapshot;

pub use snapshot::StoreSnapshot;

/// Plan selected before the user picks one.
pub const DEFAULT_PLAN_ID: &str = "pfitz_18_55_4th";
/// Goal time used before the user enters one.
pub const DEFAULT_GOAL_TIME: &str = "4:00:00";

/// Handle for one in-flight plan load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    plan_id: String,
}

impl LoadTicket {
    /// Plan id the load was started for.
    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }
}

/// Result of handing a finished load to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Template installed and schedule rebuilt
    Applied,
    /// A newer load was started; the result was discarded
    Stale,
    /// Load failed; the store holds no template and no schedule
    Failed(String),
}

/// Owner of user selections and the current schedule.
#[derive(Debug, Clone)]
pub struct PlanStore {
    selected_plan_id: String,
    race_date: Option<Date>,
    units: Units,
    goal_time: String,
    plan: Option<Plan>,
    schedule: Option<RenderedPlan>,
    load_error: Option<String>,
    load_generation: u64,
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanStore {
    /// Creates a store with default selections and nothing loaded.
    pub fn new() -> Self {
        Self {
            selected_plan_id: DEFAULT_PLAN_ID.to_string(),
            race_date: None,
            units: Units::default(),
            goal_time: DEFAULT_GOAL_TIME.to_string(),
            plan: None,
            schedule: None,
            load_error: None,
            load_generation: 0,
        }
    }

    /// Restores a store from a persisted snapshot.
    ///
    /// The schedule's embedded template becomes the loaded plan when it
    /// matches the selected id, so the schedule can be rebuilt offline.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let plan = snapshot
            .current_schedule
            .as_ref()
            .map(|schedule| &schedule.original_plan)
            .filter(|plan| plan.id == snapshot.selected_plan_id)
            .cloned();

        Self {
            selected_plan_id: snapshot.selected_plan_id,
            race_date: snapshot.race_date,
            units: snapshot.units,
            goal_time: snapshot.goal_time,
            plan,
            schedule: snapshot.current_schedule,
            load_error: None,
            load_generation: 0,
        }
    }

    /// Captures the persistable part of the state.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            selected_plan_id: self.selected_plan_id.clone(),
            race_date: self.race_date,
            units: self.units,
            goal_time: self.goal_time.clone(),
            current_schedule: self.schedule.clone(),
        }
    }

    pub fn selected_plan_id(&self) -> &str {
        &self.selected_plan_id
    }

    pub fn race_date(&self) -> Option<Date> {
        self.race_date
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn goal_time(&self) -> &str {
        &self.goal_time
    }

    /// Loaded template, if any.
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Current schedule, including any swaps applied to it.
    pub fn get_schedule(&self) -> Option<&RenderedPlan> {
        self.schedule.as_ref()
    }

    /// Message of the last failed plan load.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Pace bands for the current goal time; `None` when it does not parse.
    pub fn paces(&self) -> Option<Paces> {
        paces_for_goal(&self.goal_time)
    }

    /// Selects a plan by id. Changing the id drops the loaded template and
    /// schedule until the new plan is loaded. Returns whether the id changed.
    pub fn set_plan_id(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if id == self.selected_plan_id {
            return false;
        }
        debug!("Selected plan '{}' (was '{}')", id, self.selected_plan_id);
        self.selected_plan_id = id;
        self.plan = None;
        self.schedule = None;
        self.load_error = None;
        true
    }

    /// Sets or clears the race date and rebuilds the schedule.
    ///
    /// # Errors
    ///
    /// Propagates `StrideError::DateOutOfRange` from the calculator.
    /// On error neither the race date nor the schedule changes.
    pub fn set_race_date(&mut self, race_date: Option<Date>) -> Result<()> {
        let schedule = self.schedule_for(race_date)?;
        debug!("Race date set to {race_date:?}");
        self.race_date = race_date;
        self.schedule = schedule;
        Ok(())
    }

    /// Sets the race date from a date-time, discarding the time of day.
    ///
    /// # Errors
    ///
    /// See [`PlanStore::set_race_date`].
    pub fn set_race_datetime(&mut self, race_datetime: DateTime) -> Result<()> {
        self.set_race_date(Some(race_datetime.date()))
    }

    pub fn set_units(&mut self, units: Units) {
        self.units = units;
    }

    pub fn set_goal_time(&mut self, goal_time: impl Into<String>) {
        self.goal_time = goal_time.into();
    }

    /// Replaces the schedule wholesale.
    pub fn set_schedule(&mut self, schedule: Option<RenderedPlan>) {
        self.schedule = schedule;
    }

    /// Installs a loaded template for the selected plan.
    ///
    /// Re-installing the template already in use keeps the current schedule
    /// and its swaps; a different template rebuilds it.
    ///
    /// # Errors
    ///
    /// Propagates `StrideError::DateOutOfRange` from the calculator.
    pub fn set_plan(&mut self, plan: Plan) -> Result<()> {
        let unchanged = self.plan.as_ref() == Some(&plan);
        info!("Installing plan '{}' ({} weeks)", plan.id, plan.total_weeks());
        self.selected_plan_id = plan.id.clone();
        self.plan = Some(plan);
        self.load_error = None;

        if unchanged && self.schedule.is_some() {
            return Ok(());
        }
        self.rebuild_schedule()
    }

    /// Recomputes the schedule from the template and race date, discarding
    /// any swaps. Without both, the schedule is cleared.
    ///
    /// # Errors
    ///
    /// Propagates `StrideError::DateOutOfRange` from the calculator.
    pub fn rebuild_schedule(&mut self) -> Result<()> {
        self.schedule = self.schedule_for(self.race_date)?;
        Ok(())
    }

    fn schedule_for(&self, race_date: Option<Date>) -> Result<Option<RenderedPlan>> {
        match (&self.plan, race_date) {
            (Some(plan), Some(race_date)) => compute_schedule(plan, race_date).map(Some),
            _ => Ok(None),
        }
    }

    /// Swaps the content of two day slots in the current schedule.
    ///
    /// Returns `false` without touching anything when there is no schedule,
    /// either slot is out of range, or both slots are the same.
    pub fn move_workout(
        &mut self,
        from_week: usize,
        from_day: usize,
        to_week: usize,
        to_day: usize,
    ) -> bool {
        match self.schedule.as_mut() {
            Some(schedule) => swap_in_place(
                schedule,
                Slot::new(from_week, from_day),
                Slot::new(to_week, to_day),
            ),
            None => false,
        }
    }

    /// Starts a load for the selected plan, superseding earlier ones.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        LoadTicket {
            generation: self.load_generation,
            plan_id: self.selected_plan_id.clone(),
        }
    }

    /// Applies the result of a load started with `ticket`.
    ///
    /// Results for superseded tickets are dropped. A failure clears the
    /// template and schedule and records the message in
    /// [`PlanStore::load_error`].
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Plan>) -> LoadOutcome {
        if ticket.generation != self.load_generation {
            warn!(
                "Discarding stale load of plan '{}' (generation {} < {})",
                ticket.plan_id, ticket.generation, self.load_generation
            );
            return LoadOutcome::Stale;
        }

        match result.and_then(|plan| self.set_plan(plan)) {
            Ok(()) => LoadOutcome::Applied,
            Err(e) => {
                let message = e.to_string();
                warn!("Failed to load plan '{}': {message}", ticket.plan_id);
                self.plan = None;
                self.schedule = None;
                self.load_error = Some(message.clone());
                LoadOutcome::Failed(message)
            }
        }
    }
}
