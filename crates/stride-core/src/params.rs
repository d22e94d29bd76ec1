//! Parameter structures for Stride operations.
//!
//! These are shared by every interface. The CLI converts its clap arguments
//! into them; the MCP server deserializes them directly from tool calls, with
//! JSON schemas generated when the `schema` feature is enabled.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │
//! │  (clap derives) │    │ (serde + schema)│
//! └────────┬────────┘    └────────┬────────┘
//!          └──────────┬───────────┘
//!                     ▼
//!           ┌─────────────────┐
//!           │  Core Params    │───▶ handlers
//!           └─────────────────┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for selecting and loading a plan template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SelectPlan {
    /// Template id, e.g. `pfitz_18_55_4th`
    pub plan_id: String,
}

/// Parameters for setting the race date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetRaceDate {
    /// Race day as `YYYY-MM-DD`
    pub race_date: String,
}

/// Parameters for choosing display units.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetUnits {
    /// `mi` or `km`
    pub units: String,
}

/// Parameters for setting the marathon goal time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetGoalTime {
    /// Finishing time such as `3:30:00`, `3:30` or `330`
    pub goal_time: String,
}

/// Parameters for swapping the workouts of two days.
///
/// Weeks and days are 0-based. Out-of-range positions leave the schedule
/// unchanged.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveWorkout {
    /// Week index of the first day
    pub from_week: usize,
    /// Day index (0-6) of the first day
    pub from_day: usize,
    /// Week index of the second day
    pub to_week: usize,
    /// Day index (0-6) of the second day
    pub to_day: usize,
}

/// Parameters for rendering the schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowSchedule {
    /// Only show this week (1-based week number)
    #[serde(default)]
    pub week: Option<u32>,
}

/// Parameters for the pace chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowPaces {
    /// Goal time to chart instead of the saved one
    #[serde(default)]
    pub goal_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_when_missing() {
        let schedule: ShowSchedule = serde_json::from_str("{}").unwrap();
        assert_eq!(schedule.week, None);

        let paces: ShowPaces = serde_json::from_str(r#"{"goal_time":"3:10:00"}"#).unwrap();
        assert_eq!(paces.goal_time.as_deref(), Some("3:10:00"));
    }

    #[test]
    fn test_move_workout_fields() {
        let params: MoveWorkout =
            serde_json::from_str(r#"{"from_week":0,"from_day":2,"to_week":1,"to_day":6}"#)
                .unwrap();
        assert_eq!(
            params,
            MoveWorkout {
                from_week: 0,
                from_day: 2,
                to_week: 1,
                to_day: 6
            }
        );
    }
}
