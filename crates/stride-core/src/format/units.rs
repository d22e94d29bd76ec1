//! Distance and pace conversion between miles and kilometers.

use crate::{
    models::{Distance, RenderedWeek, Units},
    pace::{format_pace_time, PaceRange},
};

/// Kilometers in one mile.
pub const KM_PER_MILE: f64 = 1.60934;

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Converts a per-day distance from miles into `units`.
///
/// Kilometers are rounded to one decimal place; miles pass through as
/// authored.
pub fn convert_distance(miles: f64, units: Units) -> f64 {
    match units {
        Units::Miles => miles,
        Units::Kilometers => round_to_tenth(miles * KM_PER_MILE),
    }
}

/// Formats a workout distance with its unit label, e.g. `8 mi`,
/// `12.9 km` or `8–10 mi`. Range endpoints convert independently.
pub fn format_distance(distance: &Distance, units: Units) -> String {
    match distance.map(|value| convert_distance(value, units)) {
        Distance::Single(value) => format!("{value} {units}"),
        Distance::Range(low, high) => format!("{low}–{high} {units}"),
    }
}

/// Planned weekly volume in miles. Ranges count their midpoint.
pub fn weekly_total(week: &RenderedWeek) -> f64 {
    week.workouts
        .iter()
        .filter_map(|day| day.workout.distance.as_ref())
        .map(Distance::midpoint)
        .sum()
}

/// Weekly volume for display: whole miles, or kilometers to one decimal.
pub fn display_weekly_total(total_miles: f64, units: Units) -> f64 {
    match units {
        Units::Miles => total_miles.round(),
        Units::Kilometers => round_to_tenth(total_miles * KM_PER_MILE),
    }
}

/// Formats a pace band for display in `units`, e.g. `4:00 /km` or
/// `7:05 - 7:43 /mi`.
pub fn format_pace_range(range: &PaceRange, units: Units) -> String {
    let factor = match units {
        Units::Miles => KM_PER_MILE,
        Units::Kilometers => 1.0,
    };
    let min = format_pace_time(f64::from(range.min) * factor);
    if range.is_exact() {
        format!("{min} /{units}")
    } else {
        let max = format_pace_time(f64::from(range.max) * factor);
        format!("{min} - {max} /{units}")
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{schedule::compute_schedule, test_utils::sample_plan};

    #[test]
    fn test_convert_distance() {
        assert_eq!(convert_distance(8.0, Units::Kilometers), 12.9);
        assert_eq!(convert_distance(26.2, Units::Kilometers), 42.2);
        assert_eq!(convert_distance(8.5, Units::Miles), 8.5);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(&Distance::Single(8.0), Units::Miles), "8 mi");
        assert_eq!(format_distance(&Distance::Single(8.0), Units::Kilometers), "12.9 km");
        assert_eq!(
            format_distance(&Distance::Range(8.0, 10.0), Units::Kilometers),
            "12.9–16.1 km"
        );
        assert_eq!(format_distance(&Distance::Range(8.0, 10.0), Units::Miles), "8–10 mi");
    }

    #[test]
    fn test_weekly_total() {
        let schedule = compute_schedule(&sample_plan(), date(2026, 4, 20)).unwrap();
        // 8 + 5 + 11.5 + 6 + 14
        let total = weekly_total(&schedule.weeks[0]);
        assert_eq!(total, 44.5);
        assert_eq!(display_weekly_total(total, Units::Miles), 45.0);
        assert_eq!(display_weekly_total(total, Units::Kilometers), 71.6);
    }

    #[test]
    fn test_format_pace_range() {
        let exact = PaceRange { min: 240, max: 240 };
        assert_eq!(format_pace_range(&exact, Units::Kilometers), "4:00 /km");
        assert_eq!(format_pace_range(&exact, Units::Miles), "6:26 /mi");

        let band = PaceRange { min: 264, max: 288 };
        assert_eq!(format_pace_range(&band, Units::Kilometers), "4:24 - 4:48 /km");
        assert_eq!(format_pace_range(&band, Units::Miles), "7:05 - 7:43 /mi");
    }
}
