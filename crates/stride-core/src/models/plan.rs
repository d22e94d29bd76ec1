//! Plan template model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Units, Workout};

/// Number of workouts in every template week.
pub const DAYS_PER_WEEK: usize = 7;

/// Race distance a plan targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlanType {
    Base,
    #[serde(rename = "Multiple Distances")]
    MultipleDistances,
    Marathon,
    #[serde(rename = "Half Marathon")]
    HalfMarathon,
    #[serde(rename = "5K")]
    FiveK,
    #[serde(rename = "10K")]
    TenK,
    #[serde(rename = "15k/10m")]
    FifteenKTenMile,
    #[serde(rename = "50K")]
    FiftyK,
    #[serde(rename = "100K")]
    HundredK,
    #[serde(rename = "100M")]
    HundredMile,
}

impl PlanType {
    /// Label as written in plan templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Base => "Base",
            PlanType::MultipleDistances => "Multiple Distances",
            PlanType::Marathon => "Marathon",
            PlanType::HalfMarathon => "Half Marathon",
            PlanType::FiveK => "5K",
            PlanType::TenK => "10K",
            PlanType::FifteenKTenMile => "15k/10m",
            PlanType::FiftyK => "50K",
            PlanType::HundredK => "100K",
            PlanType::HundredMile => "100M",
        }
    }
}

/// One template week: seven workouts, Monday-first by convention.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Week {
    /// Optional note for the week
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional authored weekly volume in miles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    /// Day-ordered workouts; index is the day offset within the week
    pub workouts: Vec<Workout>,
}

/// A race-agnostic training plan template.
///
/// Templates are immutable once loaded and identified by `id`; binding one
/// to a race date produces a [`super::RenderedPlan`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier, matches the template file stem
    pub id: String,

    /// Display name of the plan
    pub name: String,

    /// Optional multi-line description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Race distance the plan targets
    #[serde(rename = "type")]
    pub plan_type: PlanType,

    /// Units the plan was authored in
    pub units: Units,

    /// Attribution for the plan (book, coach, URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Ordered weeks, the last one ending on race day
    pub schedule: Vec<Week>,
}

impl Plan {
    /// Number of weeks in the template.
    pub fn total_weeks(&self) -> usize {
        self.schedule.len()
    }
}
