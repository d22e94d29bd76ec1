//! Data models for plan templates and rendered schedules.
//!
//! Templates ([`Plan`], [`Week`], [`Workout`]) are authored relative to race
//! day and never change after loading. Binding a template to a race date
//! produces a [`RenderedPlan`], whose [`RenderedWorkout`] slots carry fixed
//! calendar dates. Display implementations live in [`crate::display`].
//!
//! Every model derives `Serialize`/`Deserialize` so the whole application
//! state round-trips through plain JSON; calendar dates use
//! [`jiff::civil::Date`] and serialize as `YYYY-MM-DD`.
//!
//! # Examples
//!
//! ```rust
//! use stride_core::models::{Distance, Workout};
//!
//! let workout = Workout::new("Long Run {16:26}")
//!     .with_distance(Distance::Single(16.0))
//!     .with_tag("Long Run");
//! assert!(workout.is_long_run());
//! ```

pub mod distance;
pub mod plan;
pub mod schedule;
pub mod units;
pub mod workout;

pub use distance::Distance;
pub use plan::{Plan, PlanType, Week, DAYS_PER_WEEK};
pub use schedule::{RenderedPlan, RenderedWeek, RenderedWorkout};
pub use units::Units;
pub use workout::{Workout, TAG_LONG_RUN, TAG_RACE, TAG_REST};
