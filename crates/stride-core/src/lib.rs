//! Core library for the Stride marathon training planner.
//!
//! Stride binds a week-by-week training plan template to a race date,
//! lets the runner rearrange individual days, and derives training paces
//! from a goal finishing time.
//!
//! The four pure building blocks are:
//!
//! - [`schedule`]: [`compute_schedule`] lays a template onto the calendar so
//!   the last week ends on race day; [`move_workout`] swaps two days'
//!   content while every slot keeps its date
//! - [`pace`]: six pace zones from a goal time, keyword classification of
//!   workouts, and time parsing/formatting
//! - [`format`]: miles/kilometers conversion and `{mi:km}` label tokens
//! - [`models`]: templates and rendered schedules
//!
//! Around them sit the stateful parts: [`store::PlanStore`] owns user
//! selections and the current schedule, [`session::Session`] persists it in
//! SQLite and loads YAML templates through [`loader::PlanCatalog`], and
//! [`handlers`] implement the commands shared by the CLI and MCP server.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use stride_core::{compute_schedule, loader::parse_plan, models::Units, format::format_label};
//!
//! let plan = parse_plan(
//!     "id: tiny\nname: Tiny\ntype: Marathon\nunits: mi\nschedule:\n  - workouts:\n      - { title: Rest, tags: [Rest] }\n      - { title: \"Recovery {4:6}\", distance: 4 }\n      - { title: Rest, tags: [Rest] }\n      - { title: Recovery, distance: 3 }\n      - { title: Rest, tags: [Rest] }\n      - { title: Rest, tags: [Rest] }\n      - { title: Goal Marathon, distance: 26.2, tags: [Race] }\n",
//! )?;
//!
//! let schedule = compute_schedule(&plan, date(2026, 1, 1))?;
//! assert_eq!(schedule.start_date, date(2025, 12, 26));
//!
//! let moved = schedule.move_workout(0, 1, 0, 3);
//! assert_eq!(moved.weeks[0].workouts[3].workout.title, "Recovery {4:6}");
//! assert_eq!(format_label(&moved.weeks[0].workouts[3].workout.title, Units::Kilometers), "Recovery 6");
//! # Ok::<(), stride_core::StrideError>(())
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod format;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod pace;
pub mod params;
pub mod schedule;
pub mod session;
pub mod store;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use db::Database;
pub use display::{OperationStatus, PaceChart, PlanEntries, ScheduleView, WeekView};
pub use error::{Result, StrideError};
pub use loader::{PlanCatalog, PlanEntry};
pub use models::{Plan, RenderedPlan, Units};
pub use pace::{classify_zone, compute_paces, PaceZone, Paces};
pub use params::{
    MoveWorkout, SelectPlan, SetGoalTime, SetRaceDate, SetUnits, ShowPaces, ShowSchedule,
};
pub use schedule::{compute_schedule, move_workout, Slot};
pub use session::{Session, SessionBuilder};
pub use store::{LoadOutcome, PlanStore, StoreSnapshot};
