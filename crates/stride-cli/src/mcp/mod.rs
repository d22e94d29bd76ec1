//! MCP server for Stride
//!
//! Exposes the training schedule over the Model Context Protocol so an
//! assistant can pick a plan, set the race date and rearrange days. The
//! server restores the saved state once at startup and persists every change
//! through the same [`Session`] the CLI uses.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use stride_core::{PlanStore, Session, StrideError};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

use handlers::{
    McpHandlers, McpResult, MoveWorkout, SelectPlan, SetGoalTime, SetRaceDate, SetUnits,
    ShowPaces, ShowSchedule,
};

/// MCP server for Stride
#[derive(Clone)]
pub struct StrideMcpServer {
    session: Arc<Session>,
    store: Arc<Mutex<PlanStore>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StrideMcpServer {
    /// Restores the saved state and creates the server.
    pub async fn new(session: Session) -> Result<Self, StrideError> {
        let store = session.restore().await?;
        Ok(Self {
            session: Arc::new(session),
            store: Arc::new(Mutex::new(store)),
            tool_router: Self::tool_router(),
        })
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.session.clone(), self.store.clone())
    }

    #[tool(
        name = "list_plans",
        description = "List the training plan templates available in the plans directory, with their id, type and number of weeks. The currently selected plan is marked."
    )]
    async fn list_plans(&self) -> McpResult {
        self.handlers().list_plans().await
    }

    #[tool(
        name = "select_plan",
        description = "Select a plan template by id (see list_plans) and load it. If a race date is set the schedule is rebuilt for the new plan. Moves made on the previous plan are discarded."
    )]
    async fn select_plan(&self, params: Parameters<SelectPlan>) -> McpResult {
        self.handlers().select_plan(params).await
    }

    #[tool(
        name = "set_race_date",
        description = "Set the race date as YYYY-MM-DD. The schedule is laid out so its last day falls on this date, and weeks are counted down to it."
    )]
    async fn set_race_date(&self, params: Parameters<SetRaceDate>) -> McpResult {
        self.handlers().set_race_date(params).await
    }

    #[tool(
        name = "set_units",
        description = "Set display units for distances and paces: 'mi' or 'km'. Distances in the plan are converted, the schedule itself is unchanged."
    )]
    async fn set_units(&self, params: Parameters<SetUnits>) -> McpResult {
        self.handlers().set_units(params).await
    }

    #[tool(
        name = "set_goal_time",
        description = "Set the marathon goal time, e.g. '3:30:00', '3:30' or '330' (all read as 3:30:00). Training paces shown with the schedule are derived from it."
    )]
    async fn set_goal_time(&self, params: Parameters<SetGoalTime>) -> McpResult {
        self.handlers().set_goal_time(params).await
    }

    #[tool(
        name = "show_schedule",
        description = "Show the dated training schedule as markdown. Each day carries a WEEK:DAY key (0-based) used by move_workout. Pass week (1-based) to show a single week."
    )]
    async fn show_schedule(&self, params: Parameters<ShowSchedule>) -> McpResult {
        self.handlers().show_schedule(params).await
    }

    #[tool(
        name = "move_workout",
        description = "Swap the workouts of two days, given as 0-based week and day indices. Dates stay where they are; only the workouts trade places. Swapping a day with itself or with a day outside the schedule changes nothing."
    )]
    async fn move_workout(&self, params: Parameters<MoveWorkout>) -> McpResult {
        self.handlers().move_workout(params).await
    }

    #[tool(
        name = "reset_schedule",
        description = "Rebuild the schedule from the selected template, undoing every move."
    )]
    async fn reset_schedule(&self) -> McpResult {
        self.handlers().reset_schedule().await
    }

    #[tool(
        name = "show_paces",
        description = "Show training pace ranges for the six zones (recovery, general aerobic, long run, marathon, lactate threshold, VO2max). Uses the saved goal time unless goal_time is given."
    )]
    async fn show_paces(&self, params: Parameters<ShowPaces>) -> McpResult {
        self.handlers().show_paces(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StrideMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "stride".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(r#"Stride lays a marathon training plan template onto the calendar so that its last day is race day.

## Workflow
1. `list_plans` to see the templates, then `select_plan` with an id
2. `set_race_date` with YYYY-MM-DD
3. `show_schedule` to read the plan; each day shows a `WEEK:DAY` key
4. `move_workout` to swap two days, `reset_schedule` to undo all moves
5. `set_goal_time` and `show_paces` for pace ranges per training zone

Every change is saved and shared with the `stride` command line."#
                .to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StrideMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Stride MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use stride_core::SessionBuilder;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_server_registers_schedule_tools() {
        let temp = TempDir::new().unwrap();
        let session = SessionBuilder::new()
            .with_database_path(Some(temp.path().join("stride.db")))
            .with_plans_dir(Some(temp.path().join("plans")))
            .build()
            .await
            .unwrap();
        let server = StrideMcpServer::new(session).await.unwrap();

        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "list_plans",
                "move_workout",
                "reset_schedule",
                "select_plan",
                "set_goal_time",
                "set_race_date",
                "set_units",
                "show_paces",
                "show_schedule",
            ]
        );

        let info = server.get_info();
        assert_eq!(info.server_info.name, "stride");
        assert!(info.capabilities.tools.is_some());
    }
}
