//! Maps workout titles to the pace zone they are run at.

use std::collections::BTreeSet;

use super::PaceZone;
use crate::models::TAG_RACE;

/// Keyword groups checked in order; the first group with a hit wins.
///
/// Marathon-pace markers come before long-run markers so a "Long run w/ 8 mi
/// @ MP" reads as marathon pace.
const RULES: &[(&[&str], PaceZone)] = &[
    (&["goal marathon", "race"], PaceZone::Marathon),
    (&["marathon pace", "mp"], PaceZone::Marathon),
    (&["lt", "lactate", "threshold"], PaceZone::LactateThreshold),
    (
        &["vo₂max", "vo2max", "intervals", "5k race pace"],
        PaceZone::Vo2Max,
    ),
    (&["long run", "med-long run"], PaceZone::LongRun),
    (&["gen-aerobic", "general aerobic"], PaceZone::GeneralAerobic),
    (&["recovery"], PaceZone::Recovery),
];

/// Classifies a workout into a pace zone by case-insensitive keyword match.
///
/// Tune-up races never get a zone. A `Race` tag means marathon pace.
/// Titles that match nothing return `None` and show no pace.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use stride_core::pace::{classify_zone, PaceZone};
///
/// let none = BTreeSet::new();
/// assert_eq!(classify_zone("12 mi w/ 8 mi @ MP", &none), Some(PaceZone::Marathon));
/// assert_eq!(classify_zone("8K-15K tune-up race", &none), None);
/// ```
pub fn classify_zone(title: &str, tags: &BTreeSet<String>) -> Option<PaceZone> {
    let title = title.to_lowercase();

    if title.contains("tune-up") {
        return None;
    }
    if tags.contains(TAG_RACE) {
        return Some(PaceZone::Marathon);
    }

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| title.contains(keyword)))
        .map(|(_, zone)| *zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(title: &str) -> Option<PaceZone> {
        classify_zone(title, &BTreeSet::new())
    }

    #[test]
    fn test_single_keyword_titles() {
        assert_eq!(zone("Recovery Run"), Some(PaceZone::Recovery));
        assert_eq!(zone("General Aerobic + Speed"), Some(PaceZone::GeneralAerobic));
        assert_eq!(zone("Gen-aerobic 10"), Some(PaceZone::GeneralAerobic));
        assert_eq!(zone("Long Run 15 mi"), Some(PaceZone::LongRun));
        assert_eq!(zone("Med-long run 12"), Some(PaceZone::LongRun));
        assert_eq!(zone("Lactate Threshold interval"), Some(PaceZone::LactateThreshold));
        assert_eq!(zone("VO2Max Intervals"), Some(PaceZone::Vo2Max));
        assert_eq!(zone("VO₂max 5 x 1000m"), Some(PaceZone::Vo2Max));
        assert_eq!(zone("12 mi w/ 8 mi @ MP"), Some(PaceZone::Marathon));
        assert_eq!(zone("Goal Marathon"), Some(PaceZone::Marathon));
    }

    #[test]
    fn test_marathon_pace_beats_long_run() {
        assert_eq!(zone("Long run w/ 14 mi @ marathon pace"), Some(PaceZone::Marathon));
    }

    #[test]
    fn test_threshold_beats_long_run() {
        assert_eq!(zone("Long run w/ LT segments"), Some(PaceZone::LactateThreshold));
    }

    #[test]
    fn test_tune_up_has_no_zone() {
        assert_eq!(zone("Tune-up race 10K"), None);
        let mut tags = BTreeSet::new();
        tags.insert("Race".to_string());
        assert_eq!(classify_zone("8K tune-up", &tags), None);
    }

    #[test]
    fn test_race_tag_means_marathon() {
        let mut tags = BTreeSet::new();
        tags.insert("Race".to_string());
        assert_eq!(classify_zone("Boston", &tags), Some(PaceZone::Marathon));
    }

    #[test]
    fn test_unmatched_titles() {
        assert_eq!(zone("Rest or cross-training"), None);
        assert_eq!(zone("Hill repeats"), None);
    }
}
