//! Pace model: goal time to training-pace bands.
//!
//! A marathon goal time gives marathon pace in seconds per kilometer; every
//! other zone is a fixed multiplier range of that pace ([`compute_paces`]).
//! Workouts are mapped to zones from their titles by [`classify_zone`].
//!
//! Unparsable goal times are not errors: [`paces_for_goal`] returns `None`
//! and callers simply omit pace display.

pub mod classify;
pub mod time;
pub mod zones;

pub use classify::classify_zone;
pub use time::{format_goal_time, format_pace_time, normalize_goal_time, parse_time_string};
pub use zones::{compute_paces, PaceRange, PaceZone, Paces};

/// Marathon distance in kilometers.
pub const MARATHON_KM: f64 = 42.195;

/// Marathon pace in seconds per kilometer for a finishing time.
pub fn marathon_pace_per_km(goal_seconds: u32) -> f64 {
    f64::from(goal_seconds) / MARATHON_KM
}

/// Pace bands for a goal time string, or `None` if it cannot be parsed or is
/// zero.
pub fn paces_for_goal(goal_time: &str) -> Option<Paces> {
    let seconds = parse_time_string(goal_time).filter(|&s| s > 0)?;
    Some(compute_paces(marathon_pace_per_km(seconds)))
}
