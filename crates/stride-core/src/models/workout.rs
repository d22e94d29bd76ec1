//! Workout model definition.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Distance;

/// Tag marking a rest day.
pub const TAG_REST: &str = "Rest";
/// Tag marking the goal race or a tune-up race.
pub const TAG_RACE: &str = "Race";
/// Tag marking the weekly long run.
pub const TAG_LONG_RUN: &str = "Long Run";

/// A single day's training content as authored in a plan template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    /// Short title, may contain `{mi:km}` unit tokens
    pub title: String,

    /// Optional longer description, may contain unit tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Planned distance in miles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<Distance>,

    /// Classification labels such as "Rest", "Race" or "Long Run"
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl Workout {
    /// Creates a workout with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the planned distance.
    pub fn with_distance(mut self, distance: Distance) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Whether the workout carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Rest day: tagged "Rest" or titled with "rest".
    pub fn is_rest(&self) -> bool {
        self.has_tag(TAG_REST) || self.title.to_lowercase().contains("rest")
    }

    /// Race day, goal or tune-up.
    pub fn is_race(&self) -> bool {
        self.has_tag(TAG_RACE)
    }

    /// The week's long run.
    pub fn is_long_run(&self) -> bool {
        self.has_tag(TAG_LONG_RUN)
    }
}
