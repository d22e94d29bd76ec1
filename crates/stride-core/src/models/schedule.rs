//! Rendered schedule models: a plan template bound to a race date.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Plan, Week, Workout};

/// A workout pinned to a calendar day.
///
/// `date` and `day_of_week` are fixed when the schedule is built; only the
/// flattened workout content moves when days are swapped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderedWorkout {
    /// Workout content (title, description, distance, tags)
    #[serde(flatten)]
    pub workout: Workout,

    /// Calendar day of this slot
    pub date: Date,

    /// Position within the week, 0-6
    pub day_of_week: u8,
}

/// A template week laid onto seven consecutive calendar days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderedWeek {
    /// First day of the week
    pub week_start: Date,

    /// Last day of the week, `week_start + 6 days`
    pub week_end: Date,

    /// Countdown to race day; the final week reports 1
    pub weeks_to_goal: u32,

    /// 1-based ordinal of the week within the plan
    pub week_number: u32,

    /// Template week this was rendered from
    pub original_week: Week,

    /// Seven dated workouts in day order
    pub workouts: Vec<RenderedWorkout>,
}

impl RenderedWeek {
    /// The week ending on race day.
    pub fn is_race_week(&self) -> bool {
        self.weeks_to_goal == 1
    }
}

/// A fully dated schedule; the single mutable entity of the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderedPlan {
    /// Template the schedule was built from
    pub original_plan: Plan,

    /// Race day, the last day of the last week
    pub race_date: Date,

    /// First day of the first week
    pub start_date: Date,

    /// Weeks in template order
    pub weeks: Vec<RenderedWeek>,
}

impl RenderedPlan {
    /// Looks up the workout at `(week, day)`.
    pub fn workout(&self, week: usize, day: usize) -> Option<&RenderedWorkout> {
        self.weeks.get(week)?.workouts.get(day)
    }

    /// Finds the week containing `date`, if any.
    pub fn week_containing(&self, date: Date) -> Option<&RenderedWeek> {
        self.weeks
            .iter()
            .find(|week| week.week_start <= date && date <= week.week_end)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{Distance, PlanType, Units};

    fn sample() -> RenderedPlan {
        let workout = RenderedWorkout {
            workout: Workout::new("Long Run {16:26} mi")
                .with_distance(Distance::Range(15.0, 16.0))
                .with_tag("Long Run"),
            date: date(2025, 12, 28),
            day_of_week: 6,
        };
        RenderedPlan {
            original_plan: Plan {
                id: "test".to_string(),
                name: "Test Plan".to_string(),
                description: None,
                plan_type: PlanType::Marathon,
                units: Units::Miles,
                source: None,
                schedule: vec![],
            },
            race_date: date(2025, 12, 28),
            start_date: date(2025, 12, 22),
            weeks: vec![RenderedWeek {
                week_start: date(2025, 12, 22),
                week_end: date(2025, 12, 28),
                weeks_to_goal: 1,
                week_number: 1,
                original_week: Week::default(),
                workouts: vec![workout],
            }],
        }
    }

    #[test]
    fn test_workout_serializes_flat_with_iso_date() {
        let plan = sample();
        let json = serde_json::to_value(&plan.weeks[0].workouts[0]).unwrap();
        assert_eq!(json["title"], "Long Run {16:26} mi");
        assert_eq!(json["date"], "2025-12-28");
        assert_eq!(json["day_of_week"], 6);
        assert_eq!(json["distance"], serde_json::json!([15.0, 16.0]));
    }

    #[test]
    fn test_rendered_plan_json_round_trip() {
        let plan = sample();
        let json = serde_json::to_string(&plan).unwrap();
        let restored: RenderedPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, plan);
    }

    #[test]
    fn test_week_containing() {
        let plan = sample();
        assert!(plan.week_containing(date(2025, 12, 25)).is_some());
        assert!(plan.week_containing(date(2025, 12, 29)).is_none());
        assert!(plan.weeks[0].is_race_week());
    }
}
