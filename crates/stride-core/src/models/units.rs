//! Unit system enumeration.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of display unit systems.
///
/// Plan templates store distances in miles, so [`Units::Miles`] is the source
/// unit and [`Units::Kilometers`] the alternate one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Units {
    /// Miles, the source unit of plan templates
    #[serde(rename = "mi")]
    Miles,

    /// Kilometers
    #[default]
    #[serde(rename = "km")]
    Kilometers,
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(Units::Miles),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(Units::Kilometers)
            }
            _ => Err(format!("Invalid units: {s}")),
        }
    }
}

impl Units {
    /// Short unit label used in display strings and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Miles => "mi",
            Units::Kilometers => "km",
        }
    }

    /// Whether this is the unit plan templates are authored in.
    pub fn is_source(&self) -> bool {
        matches!(self, Units::Miles)
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!("MI".parse::<Units>().unwrap(), Units::Miles);
        assert_eq!("km".parse::<Units>().unwrap(), Units::Kilometers);
        assert!("furlongs".parse::<Units>().is_err());
    }

    #[test]
    fn test_default_is_kilometers() {
        assert_eq!(Units::default(), Units::Kilometers);
        assert!(!Units::default().is_source());
    }
}
