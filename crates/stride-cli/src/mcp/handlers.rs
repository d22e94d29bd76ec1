//! MCP tool handlers implementation

use std::sync::Arc;

use log::{debug, warn};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use stride_core::{
    display::{DayView, LongDate, OperationStatus, PaceChart, PlanEntries},
    handlers::{
        handle_ensure_plan, handle_list_plans, handle_move_workout, handle_reset_schedule,
        handle_set_goal_time, handle_set_race_date, handle_set_units, handle_show_paces,
        handle_show_schedule,
    },
    params as core, LoadOutcome, PlanStore, Session, Slot, StrideError,
};
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// Deserializes transparently into the wrapped type and forwards its JSON
/// schema, so the core params need no rmcp-specific derives.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type SelectPlan = McpParams<core::SelectPlan>;
pub type SetRaceDate = McpParams<core::SetRaceDate>;
pub type SetUnits = McpParams<core::SetUnits>;
pub type SetGoalTime = McpParams<core::SetGoalTime>;
pub type ShowSchedule = McpParams<core::ShowSchedule>;
pub type MoveWorkout = McpParams<core::MoveWorkout>;
pub type ShowPaces = McpParams<core::ShowPaces>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(output: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(output)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Session>,
    store: Arc<Mutex<PlanStore>>,
}

impl McpHandlers {
    pub fn new(session: Arc<Session>, store: Arc<Mutex<PlanStore>>) -> Self {
        Self { session, store }
    }

    pub async fn list_plans(&self) -> McpResult {
        let entries = handle_list_plans(&self.session)
            .await
            .map_err(|e| to_mcp_error("Failed to list plans", &e))?;

        let store = self.store.lock().await;
        let mut output = format!(
            "# Plans in {}\n\n",
            self.session.catalog().dir().display()
        );
        output.push_str(
            &PlanEntries::new(entries)
                .with_selected(store.selected_plan_id())
                .to_string(),
        );
        text(output)
    }

    /// Selects and loads a template without holding the store across the
    /// fetch, so a later selection that finishes first wins.
    pub async fn select_plan(&self, Parameters(params): Parameters<SelectPlan>) -> McpResult {
        debug!("select_plan: {params:?}");
        let plan_id = params.as_ref().plan_id.trim().to_string();
        if plan_id.is_empty() {
            let error =
                StrideError::invalid_input("plan_id").with_reason("Plan id must not be empty");
            return Err(to_mcp_error("Failed to select plan", &error));
        }

        let ticket = {
            let mut store = self.store.lock().await;
            store.set_plan_id(plan_id.as_str());
            store.begin_load()
        };

        let fetched = self.session.fetch_for(&ticket).await;

        let mut store = self.store.lock().await;
        match store.finish_load(ticket, fetched) {
            LoadOutcome::Applied => {
                self.session
                    .persist(&store)
                    .await
                    .map_err(|e| to_mcp_error("Failed to save state", &e))?;
                let message = match store.plan() {
                    Some(plan) => format!(
                        "Selected '{}' ({}, {} weeks)",
                        plan.name,
                        plan.id,
                        plan.total_weeks()
                    ),
                    None => format!("Selected '{plan_id}'"),
                };
                text(OperationStatus::success(message).to_string())
            }
            LoadOutcome::Stale => {
                warn!("Selection of '{plan_id}' was superseded");
                text(
                    OperationStatus::unchanged("A newer plan selection superseded this one")
                        .to_string(),
                )
            }
            LoadOutcome::Failed(reason) => Err(ErrorData::invalid_params(
                format!("Failed to load plan '{plan_id}': {reason}"),
                None,
            )),
        }
    }

    pub async fn set_race_date(&self, Parameters(params): Parameters<SetRaceDate>) -> McpResult {
        debug!("set_race_date: {params:?}");
        let mut store = self.store.lock().await;
        let race_date = handle_set_race_date(&self.session, &mut store, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to set race date", &e))?;

        let message = format!("Race date set to {}", LongDate(&race_date));
        let status = match store.load_error() {
            Some(reason) => OperationStatus::failure(format!(
                "{message}, but the plan could not be loaded: {reason}"
            )),
            None => OperationStatus::success(message),
        };
        text(status.to_string())
    }

    pub async fn set_units(&self, Parameters(params): Parameters<SetUnits>) -> McpResult {
        let mut store = self.store.lock().await;
        let units = handle_set_units(&self.session, &mut store, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to set units", &e))?;
        text(OperationStatus::success(format!("Units set to {units}")).to_string())
    }

    pub async fn set_goal_time(&self, Parameters(params): Parameters<SetGoalTime>) -> McpResult {
        let mut store = self.store.lock().await;
        let goal = handle_set_goal_time(&self.session, &mut store, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to set goal time", &e))?;
        text(OperationStatus::success(format!("Goal time set to {goal}")).to_string())
    }

    pub async fn show_schedule(&self, Parameters(params): Parameters<ShowSchedule>) -> McpResult {
        let mut store = self.store.lock().await;
        if let Some(LoadOutcome::Failed(reason)) = handle_ensure_plan(&self.session, &mut store)
            .await
            .map_err(|e| to_mcp_error("Failed to load plan", &e))?
        {
            return text(
                OperationStatus::failure(format!(
                    "Plan '{}' could not be loaded: {reason}",
                    store.selected_plan_id()
                ))
                .to_string(),
            );
        }

        match handle_show_schedule(&store, params.as_ref())
            .map_err(|e| to_mcp_error("Failed to show schedule", &e))?
        {
            Some(output) => text(output),
            None => text(
                OperationStatus::unchanged("No schedule yet. Set a race date with set_race_date")
                    .to_string(),
            ),
        }
    }

    pub async fn move_workout(&self, Parameters(params): Parameters<MoveWorkout>) -> McpResult {
        debug!("move_workout: {params:?}");
        let params = *params.as_ref();
        let from = Slot::new(params.from_week, params.from_day);
        let to = Slot::new(params.to_week, params.to_day);

        let mut store = self.store.lock().await;
        let moved = handle_move_workout(&self.session, &mut store, &params)
            .await
            .map_err(|e| to_mcp_error("Failed to move workout", &e))?;
        if !moved {
            return text(
                OperationStatus::unchanged(format!(
                    "Nothing moved: {from} and {to} must be two different days of the schedule"
                ))
                .to_string(),
            );
        }

        let mut output = OperationStatus::success(format!("Swapped {from} and {to}")).to_string();
        if let Some(schedule) = store.get_schedule() {
            let paces = store.paces();
            output.push('\n');
            for slot in [from, to] {
                if let Some(workout) = schedule.workout(slot.week, slot.day) {
                    let day = DayView {
                        workout,
                        slot,
                        units: store.units(),
                        paces: paces.as_ref(),
                    };
                    output.push_str(&day.to_string());
                }
            }
        }
        text(output)
    }

    pub async fn reset_schedule(&self) -> McpResult {
        let mut store = self.store.lock().await;
        let reset = handle_reset_schedule(&self.session, &mut store)
            .await
            .map_err(|e| to_mcp_error("Failed to reset schedule", &e))?;
        let status = if reset {
            OperationStatus::success("Schedule rebuilt from the plan template")
        } else {
            OperationStatus::unchanged("there is no schedule to reset")
        };
        text(status.to_string())
    }

    pub async fn show_paces(&self, Parameters(params): Parameters<ShowPaces>) -> McpResult {
        let store = self.store.lock().await;
        let (goal_time, paces) = handle_show_paces(&store, params.as_ref())
            .map_err(|e| to_mcp_error("Failed to compute paces", &e))?;
        let chart = PaceChart {
            paces: &paces,
            units: store.units(),
            goal_time: &goal_time,
        };
        text(chart.to_string())
    }
}
