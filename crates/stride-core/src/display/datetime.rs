//! Calendar date display utilities.

use std::fmt;

use jiff::civil::Date;

/// Compact day label used in schedule rows, e.g. `Mon Apr 20`.
pub struct ShortDate<'a>(pub &'a Date);

impl<'a> fmt::Display for ShortDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %b %-d"))
    }
}

/// Full date label used in headers, e.g. `April 20, 2026 (Monday)`.
pub struct LongDate<'a>(pub &'a Date);

impl<'a> fmt::Display for LongDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%B %-d, %Y (%A)"))
    }
}
