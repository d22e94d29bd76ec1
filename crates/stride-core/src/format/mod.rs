//! Unit-aware text and number formatting.
//!
//! Plan templates are authored in miles. These helpers produce display
//! values for either unit system without touching the stored data:
//!
//! - [`label`]: `{mi:km}` tokens embedded in titles and descriptions
//! - [`units`]: distance, weekly volume and pace conversion

pub mod label;
pub mod units;

pub use label::format_label;
pub use units::{
    convert_distance, display_weekly_total, format_distance, format_pace_range, weekly_total,
    KM_PER_MILE,
};
