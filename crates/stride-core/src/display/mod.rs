//! Markdown display types for schedules, paces and command results.
//!
//! Each type is a thin wrapper that borrows domain data and implements
//! [`std::fmt::Display`], producing markdown that the CLI renders in the
//! terminal and the MCP server returns as text.
//!
//! - [`schedule`]: [`ScheduleView`], [`WeekView`] and [`DayView`]
//! - [`pace_chart`]: [`PaceChart`]
//! - [`collections`]: [`PlanEntries`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: calendar date labels
//!
//! ```rust
//! use stride_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Selected plan 'pfitz_18_55_4th'");
//! assert_eq!(status.to_string(), "Success: Selected plan 'pfitz_18_55_4th'\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod pace_chart;
pub mod schedule;
pub mod status;

pub use collections::PlanEntries;
pub use datetime::{LongDate, ShortDate};
pub use pace_chart::PaceChart;
pub use schedule::{DayView, ScheduleView, WeekView};
pub use status::{OperationStatus, StatusKind};
