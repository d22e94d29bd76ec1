//! Training pace table.

use std::fmt;

use crate::{
    format::format_pace_range,
    models::Units,
    pace::{Paces, PaceZone},
};

/// All six pace zones for a goal time as a markdown table.
pub struct PaceChart<'a> {
    pub paces: &'a Paces,
    pub units: Units,
    pub goal_time: &'a str,
}

impl<'a> fmt::Display for PaceChart<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Training Paces")?;
        writeln!(f)?;
        writeln!(
            f,
            "Goal time {} · marathon pace {}",
            self.goal_time,
            format_pace_range(&self.paces[PaceZone::Marathon], self.units)
        )?;
        writeln!(f)?;
        writeln!(f, "| Zone | Pace |")?;
        writeln!(f, "|:-----|:-----|")?;
        for (zone, range) in self.paces.iter() {
            writeln!(f, "| {zone} | {} |", format_pace_range(&range, self.units))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pace::compute_paces;

    #[test]
    fn test_chart_lists_every_zone() {
        let paces = compute_paces(240.0);
        let chart = PaceChart {
            paces: &paces,
            units: Units::Kilometers,
            goal_time: "2:48:47",
        };
        let output = chart.to_string();

        assert!(output.contains("marathon pace 4:00 /km"));
        assert!(output.contains("| Recovery | 5:00 - 5:36 /km |"));
        assert!(output.contains("| Lactate Threshold | 3:36 - 3:46 /km |"));
        assert!(output.contains("| VO2 Max | 3:26 - 3:36 /km |"));
        assert_eq!(output.matches("\n| ").count(), 7);
    }

    #[test]
    fn test_chart_in_miles() {
        let paces = compute_paces(240.0);
        let chart = PaceChart {
            paces: &paces,
            units: Units::Miles,
            goal_time: "2:48:47",
        };
        assert!(chart.to_string().contains("marathon pace 6:26 /mi"));
    }
}
