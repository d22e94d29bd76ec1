//! Schedule calculation and mutation.
//!
//! - [`calculator`]: binds a template to a race date ([`compute_schedule`])
//! - [`mutator`]: pairwise content swaps between day slots ([`move_workout`])
//!
//! Both are pure with respect to their inputs: the calculator borrows the
//! template, and the mutator returns a new schedule instead of editing the
//! one it was given.

pub mod calculator;
pub mod mutator;

pub use calculator::compute_schedule;
pub use mutator::{move_workout, Slot};
