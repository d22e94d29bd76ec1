//! Unit-conditional text in workout titles and descriptions.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

use crate::models::Units;

/// `{miles:kilometers}` token, e.g. `{8-9:13-14}`.
static UNIT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([0-9.-]+):([0-9.-]+)\}").expect("unit token pattern is valid")
});

/// Replaces every `{A:B}` token with `A` for miles or `B` for kilometers.
///
/// Text outside tokens is untouched; strings without tokens are returned
/// borrowed.
///
/// # Examples
///
/// ```rust
/// use stride_core::{format::format_label, models::Units};
///
/// assert_eq!(format_label("Run {8:13} miles", Units::Miles), "Run 8 miles");
/// assert_eq!(format_label("Run {8:13} miles", Units::Kilometers), "Run 13 miles");
/// assert_eq!(format_label("Rest Day", Units::Miles), "Rest Day");
/// ```
pub fn format_label(text: &str, units: Units) -> Cow<'_, str> {
    let group = if units.is_source() { 1 } else { 2 };
    UNIT_TOKEN.replace_all(text, |caps: &Captures<'_>| caps[group].to_string())
}
