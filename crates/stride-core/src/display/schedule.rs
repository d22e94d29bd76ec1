//! Markdown views of a rendered schedule.
//!
//! Every view borrows the schedule and renders it in the chosen units, with
//! pace bands when a goal time is set. Day rows carry their `week:day` slot
//! key so a swap can be typed straight from the output.

use std::fmt;

use super::datetime::{LongDate, ShortDate};
use crate::{
    format::{display_weekly_total, format_distance, format_label, format_pace_range, weekly_total},
    models::{RenderedPlan, RenderedWeek, RenderedWorkout, Units, TAG_LONG_RUN, TAG_RACE, TAG_REST},
    pace::{classify_zone, Paces},
    schedule::Slot,
};

/// Whole schedule: plan header followed by every week.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use stride_core::{
///     compute_schedule,
///     display::ScheduleView,
///     loader::parse_plan,
///     models::Units,
/// };
///
/// let plan = parse_plan(
///     "id: mini\nname: Mini\ntype: Base\nunits: mi\nschedule:\n  - workouts:\n      - { title: Rest, tags: [Rest] }\n      - { title: Recovery, distance: 5 }\n      - { title: Rest, tags: [Rest] }\n      - { title: Recovery, distance: 5 }\n      - { title: Rest, tags: [Rest] }\n      - { title: Recovery, distance: 5 }\n      - { title: Long run, distance: 10 }\n",
/// )?;
/// let schedule = compute_schedule(&plan, date(2026, 1, 1))?;
///
/// let output = ScheduleView::new(&schedule, Units::Miles).to_string();
/// assert!(output.starts_with("# Mini\n"));
/// assert!(output.contains("## Week 1 · Race Week"));
/// # Ok::<(), stride_core::StrideError>(())
/// ```
pub struct ScheduleView<'a> {
    pub schedule: &'a RenderedPlan,
    pub units: Units,
    pub paces: Option<&'a Paces>,
}

impl<'a> ScheduleView<'a> {
    pub fn new(schedule: &'a RenderedPlan, units: Units) -> Self {
        Self {
            schedule,
            units,
            paces: None,
        }
    }

    /// Adds pace badges to workout rows.
    pub fn with_paces(mut self, paces: Option<&'a Paces>) -> Self {
        self.paces = paces;
        self
    }
}

impl<'a> fmt::Display for ScheduleView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = &self.schedule.original_plan;
        writeln!(f, "# {}", plan.name)?;
        writeln!(f)?;
        writeln!(f, "- Type: {}", plan.plan_type.as_str())?;
        writeln!(f, "- Race: {}", LongDate(&self.schedule.race_date))?;
        writeln!(f, "- Start: {}", LongDate(&self.schedule.start_date))?;
        writeln!(f, "- Weeks: {}", self.schedule.weeks.len())?;
        if let Some(source) = &plan.source {
            writeln!(f, "- Source: {source}")?;
        }

        if let Some(desc) = &plan.description {
            writeln!(f)?;
            writeln!(f, "{}", format_label(desc, self.units))?;
        }

        for (index, week) in self.schedule.weeks.iter().enumerate() {
            writeln!(f)?;
            write!(
                f,
                "{}",
                WeekView {
                    week,
                    index,
                    units: self.units,
                    paces: self.paces,
                }
            )?;
        }

        Ok(())
    }
}

/// One week: heading, date range and weekly volume, then seven day rows.
pub struct WeekView<'a> {
    pub week: &'a RenderedWeek,
    /// 0-based position of the week in the schedule
    pub index: usize,
    pub units: Units,
    pub paces: Option<&'a Paces>,
}

impl<'a> fmt::Display for WeekView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.week.is_race_week() {
            writeln!(f, "## Week {} · Race Week", self.week.week_number)?;
        } else {
            writeln!(
                f,
                "## Week {} · {} Weeks to Goal",
                self.week.week_number, self.week.weeks_to_goal
            )?;
        }
        writeln!(f)?;

        write!(
            f,
            "{} – {}",
            ShortDate(&self.week.week_start),
            ShortDate(&self.week.week_end)
        )?;
        let total = weekly_total(self.week);
        if total > 0.0 {
            write!(f, " · {} {}", display_weekly_total(total, self.units), self.units)?;
        }
        writeln!(f)?;

        if let Some(desc) = &self.week.original_week.description {
            writeln!(f)?;
            writeln!(f, "_{}_", format_label(desc, self.units))?;
        }

        writeln!(f)?;
        for (day, workout) in self.week.workouts.iter().enumerate() {
            write!(
                f,
                "{}",
                DayView {
                    workout,
                    slot: Slot::new(self.index, day),
                    units: self.units,
                    paces: self.paces,
                }
            )?;
        }

        Ok(())
    }
}

/// A single day row.
pub struct DayView<'a> {
    pub workout: &'a RenderedWorkout,
    pub slot: Slot,
    pub units: Units,
    pub paces: Option<&'a Paces>,
}

impl<'a> fmt::Display for DayView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let workout = &self.workout.workout;
        write!(
            f,
            "- **{}** `{}` {}",
            ShortDate(&self.workout.date),
            self.slot,
            format_label(&workout.title, self.units)
        )?;

        if let Some(distance) = &workout.distance {
            write!(f, " · {}", format_distance(distance, self.units))?;
        }

        if !workout.is_rest() {
            let zone = classify_zone(&workout.title, &workout.tags);
            if let (Some(zone), Some(paces)) = (zone, self.paces) {
                write!(f, " · {zone} {}", format_pace_range(&paces[zone], self.units))?;
            }
        }

        if workout.is_race() {
            write!(f, " · **Race Day**")?;
        }
        writeln!(f)?;

        if let Some(desc) = &workout.description {
            writeln!(f, "  {}", format_label(desc, self.units))?;
        }

        let extra_tags: Vec<&str> = workout
            .tags
            .iter()
            .map(String::as_str)
            .filter(|tag| ![TAG_REST, TAG_RACE, TAG_LONG_RUN].contains(tag))
            .collect();
        if !extra_tags.is_empty() {
            writeln!(f, "  _Tags: {}_", extra_tags.join(", "))?;
        }

        Ok(())
    }
}
