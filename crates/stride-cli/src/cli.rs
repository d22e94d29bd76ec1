//! Command arguments and their handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types; [`Cli`] runs a command against the saved state and
//! renders the result as markdown.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → handlers → display
//! ```

use std::{fmt, str::FromStr};

use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use log::debug;
use stride_core::{
    display::{DayView, LongDate, OperationStatus, PaceChart, PlanEntries},
    handlers::{
        handle_clear_state, handle_ensure_plan, handle_list_plans, handle_move_workout,
        handle_reset_schedule, handle_select_plan, handle_set_goal_time, handle_set_race_date,
        handle_set_units, handle_show_paces, handle_show_schedule,
    },
    params::{MoveWorkout, SelectPlan, SetGoalTime, SetRaceDate, SetUnits, ShowPaces, ShowSchedule},
    LoadOutcome, PlanStore, Session, Slot,
};

use crate::{args::Commands, renderer::TerminalRenderer};

/// Select a plan template
#[derive(Args)]
pub struct SelectArgs {
    #[arg(help = "Template id, as listed by `stride plans`")]
    pub plan_id: String,
}

impl From<SelectArgs> for SelectPlan {
    fn from(val: SelectArgs) -> Self {
        SelectPlan {
            plan_id: val.plan_id,
        }
    }
}

/// Set the race date
#[derive(Args)]
pub struct RaceDateArgs {
    #[arg(help = "Race day as YYYY-MM-DD")]
    pub date: String,
}

impl From<RaceDateArgs> for SetRaceDate {
    fn from(val: RaceDateArgs) -> Self {
        SetRaceDate {
            race_date: val.date,
        }
    }
}

/// Set display units
#[derive(Args)]
pub struct UnitsArgs {
    #[arg(help = "Units for distances and paces")]
    pub units: UnitsArg,
}

impl From<UnitsArgs> for SetUnits {
    fn from(val: UnitsArgs) -> Self {
        SetUnits {
            units: val.units.to_string(),
        }
    }
}

/// Command-line representation of display units
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum UnitsArg {
    /// Miles
    Mi,
    /// Kilometers
    Km,
}

impl fmt::Display for UnitsArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitsArg::Mi => write!(f, "mi"),
            UnitsArg::Km => write!(f, "km"),
        }
    }
}

/// Set the goal time
#[derive(Args)]
pub struct GoalArgs {
    #[arg(help = "Finishing time such as 3:30:00, 3:30 or 330")]
    pub goal_time: String,
}

impl From<GoalArgs> for SetGoalTime {
    fn from(val: GoalArgs) -> Self {
        SetGoalTime {
            goal_time: val.goal_time,
        }
    }
}

/// Show the schedule
#[derive(Args, Default)]
pub struct ShowArgs {
    #[arg(short, long, help = "Only show this week (1 is the first week)")]
    pub week: Option<u32>,
}

impl From<ShowArgs> for ShowSchedule {
    fn from(val: ShowArgs) -> Self {
        ShowSchedule { week: val.week }
    }
}

/// Swap two days
#[derive(Args)]
pub struct MoveArgs {
    #[arg(help = "First day as WEEK:DAY, 0-based, e.g. 0:2")]
    pub from: SlotArg,
    #[arg(help = "Second day as WEEK:DAY, 0-based, e.g. 1:5")]
    pub to: SlotArg,
}

impl From<MoveArgs> for MoveWorkout {
    fn from(val: MoveArgs) -> Self {
        MoveWorkout {
            from_week: val.from.0.week,
            from_day: val.from.0.day,
            to_week: val.to.0.week,
            to_day: val.to.0.day,
        }
    }
}

/// Day slot key in `WEEK:DAY` form, as shown next to each day by `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotArg(pub Slot);

impl FromStr for SlotArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (week, day) = s
            .split_once(':')
            .ok_or_else(|| format!("'{s}' is not a WEEK:DAY slot"))?;
        let index = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("'{s}' is not a WEEK:DAY slot"))
        };
        Ok(SlotArg(Slot::new(index(week)?, index(day)?)))
    }
}

/// Show training paces
#[derive(Args)]
pub struct PacesArgs {
    #[arg(short, long, help = "Goal time to use instead of the saved one")]
    pub goal: Option<String>,
}

impl From<PacesArgs> for ShowPaces {
    fn from(val: PacesArgs) -> Self {
        ShowPaces {
            goal_time: val.goal,
        }
    }
}

/// Undo moves, or forget everything
#[derive(Args, Default)]
pub struct ResetArgs {
    #[arg(
        long,
        help = "Delete all saved state: plan choice, race date, units, goal time and moves"
    )]
    pub all: bool,
}

/// Runs commands against the saved state.
pub struct Cli {
    session: Session,
    store: PlanStore,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Restores the saved state for `session`.
    pub async fn new(session: Session, renderer: TerminalRenderer) -> Result<Self> {
        let store = session
            .restore()
            .await
            .context("Failed to restore saved state")?;
        Ok(Self {
            session,
            store,
            renderer,
        })
    }

    pub async fn handle_command(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Plans => self.list_plans().await,
            Commands::Select(args) => self.select_plan(args.into()).await,
            Commands::RaceDate(args) => self.set_race_date(args.into()).await,
            Commands::Units(args) => self.set_units(args.into()).await,
            Commands::Goal(args) => self.set_goal_time(args.into()).await,
            Commands::Show(args) => self.show_schedule(args.into()).await,
            Commands::Move(args) => self.move_workout(args.into()).await,
            Commands::Paces(args) => self.show_paces(&args.into()),
            Commands::Reset(args) => self.reset(args).await,
            Commands::Serve => Err(anyhow!("serve is handled by the MCP server")),
        }
    }

    async fn list_plans(&self) -> Result<()> {
        let entries = handle_list_plans(&self.session)
            .await
            .context("Failed to list plans")?;

        let mut output = format!("# Plans in {}\n\n", self.session.catalog().dir().display());
        output.push_str(
            &PlanEntries::new(entries)
                .with_selected(self.store.selected_plan_id())
                .to_string(),
        );
        self.renderer.render(&output)
    }

    async fn select_plan(&mut self, params: SelectPlan) -> Result<()> {
        debug!("select: {params:?}");
        let outcome = handle_select_plan(&self.session, &mut self.store, &params).await?;

        match outcome {
            LoadOutcome::Applied => {
                let mut message = match self.store.plan() {
                    Some(plan) => format!(
                        "Selected '{}' ({}, {} weeks)",
                        plan.name,
                        plan.id,
                        plan.total_weeks()
                    ),
                    None => format!("Selected '{}'", params.plan_id),
                };
                if self.store.race_date().is_none() {
                    message.push_str(". Set a race date with `stride race-date YYYY-MM-DD`");
                }
                self.render_status(&OperationStatus::success(message))
            }
            LoadOutcome::Stale => self.render_status(&OperationStatus::unchanged(
                "A newer plan selection superseded this one",
            )),
            LoadOutcome::Failed(reason) => Err(anyhow!(
                "Failed to load plan '{}': {reason}",
                params.plan_id
            )),
        }
    }

    async fn set_race_date(&mut self, params: SetRaceDate) -> Result<()> {
        debug!("race-date: {params:?}");
        let race_date = handle_set_race_date(&self.session, &mut self.store, &params).await?;

        let message = format!("Race date set to {}", LongDate(&race_date));
        match self.store.load_error() {
            Some(reason) => self.render_status(&OperationStatus::failure(format!(
                "{message}, but the plan could not be loaded: {reason}"
            ))),
            None => self.render_status(&OperationStatus::success(message)),
        }
    }

    async fn set_units(&mut self, params: SetUnits) -> Result<()> {
        let units = handle_set_units(&self.session, &mut self.store, &params).await?;
        self.render_status(&OperationStatus::success(format!("Units set to {units}")))
    }

    async fn set_goal_time(&mut self, params: SetGoalTime) -> Result<()> {
        let goal = handle_set_goal_time(&self.session, &mut self.store, &params).await?;
        self.render_status(&OperationStatus::success(format!("Goal time set to {goal}")))
    }

    async fn show_schedule(&mut self, params: ShowSchedule) -> Result<()> {
        if let Some(LoadOutcome::Failed(reason)) =
            handle_ensure_plan(&self.session, &mut self.store).await?
        {
            return self.render_status(&OperationStatus::failure(format!(
                "Plan '{}' could not be loaded: {reason}. Run `stride plans` to see what is available",
                self.store.selected_plan_id()
            )));
        }

        match handle_show_schedule(&self.store, &params)? {
            Some(output) => self.renderer.render(&output),
            None => self.render_status(&OperationStatus::unchanged(
                "No schedule yet. Set a race date with `stride race-date YYYY-MM-DD`",
            )),
        }
    }

    async fn move_workout(&mut self, params: MoveWorkout) -> Result<()> {
        debug!("move: {params:?}");
        let from = Slot::new(params.from_week, params.from_day);
        let to = Slot::new(params.to_week, params.to_day);

        if !handle_move_workout(&self.session, &mut self.store, &params).await? {
            let reason = if self.store.get_schedule().is_none() {
                "there is no schedule yet".to_string()
            } else if from == to {
                format!("{from} and {to} are the same day")
            } else {
                format!("{from} or {to} is outside the schedule")
            };
            return self.render_status(&OperationStatus::unchanged(reason));
        }

        let mut output = OperationStatus::success(format!("Swapped {from} and {to}")).to_string();
        if let Some(schedule) = self.store.get_schedule() {
            let paces = self.store.paces();
            output.push('\n');
            for slot in [from, to] {
                if let Some(workout) = schedule.workout(slot.week, slot.day) {
                    let day = DayView {
                        workout,
                        slot,
                        units: self.store.units(),
                        paces: paces.as_ref(),
                    };
                    output.push_str(&day.to_string());
                }
            }
        }
        self.renderer.render(&output)
    }

    fn show_paces(&self, params: &ShowPaces) -> Result<()> {
        let (goal_time, paces) = handle_show_paces(&self.store, params)?;
        let chart = PaceChart {
            paces: &paces,
            units: self.store.units(),
            goal_time: &goal_time,
        };
        self.renderer.render(&chart.to_string())
    }

    async fn reset(&mut self, args: ResetArgs) -> Result<()> {
        if !args.all {
            return self.reset_schedule().await;
        }

        let cleared = handle_clear_state(&self.session, &mut self.store)
            .await
            .context("Failed to clear saved state")?;
        if cleared {
            self.render_status(&OperationStatus::success("Cleared saved state"))
        } else {
            self.render_status(&OperationStatus::unchanged("nothing was saved"))
        }
    }

    async fn reset_schedule(&mut self) -> Result<()> {
        if handle_reset_schedule(&self.session, &mut self.store).await? {
            self.render_status(&OperationStatus::success(
                "Schedule rebuilt from the plan template",
            ))
        } else {
            self.render_status(&OperationStatus::unchanged("there is no schedule to reset"))
        }
    }

    fn render_status(&self, status: &OperationStatus) -> Result<()> {
        self.renderer.render(&status.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_arg_parses_week_and_day() {
        assert_eq!("2:5".parse::<SlotArg>(), Ok(SlotArg(Slot::new(2, 5))));
        assert_eq!(" 10 : 0 ".trim().parse::<SlotArg>(), Ok(SlotArg(Slot::new(10, 0))));
    }

    #[test]
    fn test_slot_arg_rejects_malformed_keys() {
        assert!("3".parse::<SlotArg>().is_err());
        assert!("a:1".parse::<SlotArg>().is_err());
        assert!("-1:2".parse::<SlotArg>().is_err());
        assert!("1:2:3".parse::<SlotArg>().is_err());
    }

    #[test]
    fn test_move_args_convert_to_params() {
        let args = MoveArgs {
            from: "0:1".parse().unwrap(),
            to: "3:6".parse().unwrap(),
        };
        let params: MoveWorkout = args.into();
        assert_eq!(
            params,
            MoveWorkout {
                from_week: 0,
                from_day: 1,
                to_week: 3,
                to_day: 6
            }
        );
    }
}
