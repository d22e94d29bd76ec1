//! Training pace zones derived from marathon pace.

use std::{fmt, ops::Index, str::FromStr};

use serde::{ser::SerializeMap, Serialize, Serializer};

/// One of the six training-intensity bands, slowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaceZone {
    Recovery,
    GeneralAerobic,
    LongRun,
    Marathon,
    LactateThreshold,
    Vo2Max,
}

impl PaceZone {
    /// All zones, from slowest to fastest.
    pub const ALL: [PaceZone; 6] = [
        PaceZone::Recovery,
        PaceZone::GeneralAerobic,
        PaceZone::LongRun,
        PaceZone::Marathon,
        PaceZone::LactateThreshold,
        PaceZone::Vo2Max,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            PaceZone::Recovery => "Recovery",
            PaceZone::GeneralAerobic => "General Aerobic",
            PaceZone::LongRun => "Long Run",
            PaceZone::Marathon => "Marathon",
            PaceZone::LactateThreshold => "Lactate Threshold",
            PaceZone::Vo2Max => "VO2 Max",
        }
    }

    /// `(min, max)` multipliers of time-per-distance at marathon pace.
    /// Values above 1 are slower than marathon pace.
    pub fn multipliers(&self) -> (f64, f64) {
        match self {
            PaceZone::Recovery => (1.25, 1.40),
            PaceZone::GeneralAerobic => (1.15, 1.25),
            PaceZone::LongRun => (1.10, 1.20),
            PaceZone::Marathon => (1.0, 1.0),
            PaceZone::LactateThreshold => (0.90, 0.94),
            PaceZone::Vo2Max => (0.86, 0.90),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PaceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaceZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaceZone::ALL
            .into_iter()
            .find(|zone| zone.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid pace zone: {s}"))
    }
}

/// Pace band in seconds per kilometer; `min` is the faster end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaceRange {
    pub min: u32,
    pub max: u32,
}

impl PaceRange {
    /// A zero-width band such as marathon pace.
    pub fn is_exact(&self) -> bool {
        self.min == self.max
    }
}

/// Pace bands for every zone. Always fully populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paces {
    ranges: [PaceRange; 6],
}

impl Paces {
    /// Range for `zone`.
    pub fn get(&self, zone: PaceZone) -> PaceRange {
        self.ranges[zone.index()]
    }

    /// `(zone, range)` pairs from slowest to fastest.
    pub fn iter(&self) -> impl Iterator<Item = (PaceZone, PaceRange)> + '_ {
        PaceZone::ALL.into_iter().zip(self.ranges.iter().copied())
    }
}

impl Index<PaceZone> for Paces {
    type Output = PaceRange;

    fn index(&self, zone: PaceZone) -> &Self::Output {
        &self.ranges[zone.index()]
    }
}

impl Serialize for Paces {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ranges.len()))?;
        for (zone, range) in self.iter() {
            map.serialize_entry(zone.label(), &range)?;
        }
        map.end()
    }
}

/// Computes every zone's band from marathon pace in seconds per kilometer.
///
/// Each bound is `pace * multiplier` rounded to the nearest second.
///
/// # Examples
///
/// ```rust
/// use stride_core::pace::{compute_paces, PaceZone};
///
/// let paces = compute_paces(240.0);
/// assert_eq!(paces[PaceZone::LongRun].min, 264);
/// assert_eq!(paces[PaceZone::LongRun].max, 288);
/// ```
pub fn compute_paces(marathon_seconds_per_km: f64) -> Paces {
    let ranges = PaceZone::ALL.map(|zone| {
        let (min, max) = zone.multipliers();
        PaceRange {
            min: (marathon_seconds_per_km * min).round() as u32,
            max: (marathon_seconds_per_km * max).round() as u32,
        }
    });
    Paces { ranges }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_minute_kilometer() {
        let paces = compute_paces(240.0);

        assert_eq!(paces[PaceZone::Marathon], PaceRange { min: 240, max: 240 });
        assert_eq!(paces[PaceZone::LongRun], PaceRange { min: 264, max: 288 });
        assert_eq!(paces[PaceZone::Recovery], PaceRange { min: 300, max: 336 });
        assert_eq!(paces[PaceZone::GeneralAerobic], PaceRange { min: 276, max: 300 });
        assert_eq!(paces[PaceZone::LactateThreshold], PaceRange { min: 216, max: 226 });
        assert_eq!(paces[PaceZone::Vo2Max], PaceRange { min: 206, max: 216 });
    }

    #[test]
    fn test_rounds_to_nearest_second() {
        // 3:00:00 marathon
        let paces = compute_paces(10800.0 / 42.195);
        assert_eq!(paces[PaceZone::Marathon].min, 256);
        assert_eq!(paces[PaceZone::Vo2Max].min, 220);
    }

    #[test]
    fn test_zone_ordering_for_many_paces() {
        for pace in (150..=600).step_by(7) {
            let paces = compute_paces(pace as f64);
            for (_, range) in paces.iter() {
                assert!(range.min <= range.max);
            }
            for pair in PaceZone::ALL.windows(2) {
                let slower = paces[pair[0]];
                let faster = paces[pair[1]];
                assert!(slower.min >= faster.min, "{} vs {} at {pace}", pair[0], pair[1]);
                assert!(slower.max >= faster.max, "{} vs {} at {pace}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_zone_labels_parse_back() {
        for zone in PaceZone::ALL {
            assert_eq!(zone.label().parse::<PaceZone>().unwrap(), zone);
        }
        assert_eq!("vo2 max".parse::<PaceZone>().unwrap(), PaceZone::Vo2Max);
        assert!("tempo".parse::<PaceZone>().is_err());
    }

    #[test]
    fn test_serializes_as_labelled_map() {
        let json = serde_json::to_value(compute_paces(240.0)).unwrap();
        assert_eq!(json["Marathon"]["min"], 240);
        assert_eq!(json["VO2 Max"]["max"], 216);
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
