//! Collection wrapper types for displaying groups of catalog entries.

use std::{fmt, ops::Index};

use crate::loader::PlanEntry;

/// Newtype wrapper for displaying the plans found in a catalog.
///
/// The currently selected plan, if any, is marked in the listing.
///
/// # Examples
///
/// ```rust
/// use stride_core::{display::PlanEntries, loader::PlanEntry, models::PlanType};
///
/// let entries = PlanEntries::new(vec![PlanEntry {
///     id: "pfitz_18_55_4th".to_string(),
///     name: "18 weeks, up to 55 miles/week".to_string(),
///     plan_type: PlanType::Marathon,
///     weeks: 18,
///     path: "plans/pfitz_18_55_4th.yaml".into(),
/// }]);
/// let output = entries.to_string();
/// assert!(output.contains("pfitz_18_55_4th"));
/// ```
pub struct PlanEntries<'a> {
    entries: Vec<PlanEntry>,
    selected: Option<&'a str>,
}

impl<'a> PlanEntries<'a> {
    pub fn new(entries: Vec<PlanEntry>) -> Self {
        Self {
            entries,
            selected: None,
        }
    }

    /// Marks the entry whose id is `plan_id`.
    pub fn with_selected(mut self, plan_id: &'a str) -> Self {
        self.selected = Some(plan_id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanEntry> {
        self.entries.iter()
    }
}

impl<'a> Index<usize> for PlanEntries<'a> {
    type Output = PlanEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> fmt::Display for PlanEntries<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No plans found.");
        }

        for entry in &self.entries {
            let marker = if self.selected == Some(entry.id.as_str()) {
                " (selected)"
            } else {
                ""
            };
            writeln!(f, "## {}{marker}", entry.name)?;
            writeln!(f)?;
            writeln!(f, "- **ID**: {}", entry.id)?;
            writeln!(f, "- **Type**: {}", entry.plan_type.as_str())?;
            writeln!(f, "- **Weeks**: {}", entry.weeks)?;
            writeln!(f)?;
        }

        Ok(())
    }
}
