//! Flat, serializable record of user state.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{RenderedPlan, Units};

/// Everything needed to restore a [`super::PlanStore`] between runs.
///
/// The race date serializes as an ISO-8601 date string; the schedule embeds
/// its template so a restored store can rebuild without reloading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreSnapshot {
    pub selected_plan_id: String,
    pub race_date: Option<Date>,
    pub units: Units,
    pub goal_time: String,
    pub current_schedule: Option<RenderedPlan>,
}
