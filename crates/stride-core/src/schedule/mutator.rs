//! Pairwise workout swaps on a rendered schedule.

use std::{fmt, mem};

use log::debug;

use crate::models::{RenderedPlan, DAYS_PER_WEEK};

/// Addressable day in a rendered schedule: `(week index, day index)`, both
/// 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub week: usize,
    pub day: usize,
}

impl Slot {
    pub fn new(week: usize, day: usize) -> Self {
        Self { week, day }
    }

    /// Whether the slot addresses an existing day of `schedule`.
    pub fn is_within(&self, schedule: &RenderedPlan) -> bool {
        self.day < DAYS_PER_WEEK
            && schedule
                .weeks
                .get(self.week)
                .is_some_and(|week| self.day < week.workouts.len())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.week, self.day)
    }
}

/// Exchanges the workout content of two slots and returns the new schedule.
///
/// Title, description, distance and tags trade places; each slot keeps its
/// `date` and `day_of_week`. The input schedule is left untouched.
///
/// A slot outside the schedule makes the call a no-op, as does `from == to`;
/// both return a copy equal to the input. Applying the same swap twice
/// restores the original content.
pub fn move_workout(schedule: &RenderedPlan, from: Slot, to: Slot) -> RenderedPlan {
    let mut next = schedule.clone();
    swap_in_place(&mut next, from, to);
    next
}

/// Performs the swap on an owned schedule. Returns `false` when nothing
/// changed.
pub(crate) fn swap_in_place(schedule: &mut RenderedPlan, from: Slot, to: Slot) -> bool {
    if !from.is_within(schedule) || !to.is_within(schedule) {
        debug!("Ignoring swap {from} -> {to}: slot out of range");
        return false;
    }
    if from == to {
        return false;
    }

    debug!("Swapping workouts {from} <-> {to}");

    if from.week == to.week {
        let workouts = &mut schedule.weeks[from.week].workouts;
        let (low, high) = (from.day.min(to.day), from.day.max(to.day));
        let (head, tail) = workouts.split_at_mut(high);
        mem::swap(&mut head[low].workout, &mut tail[0].workout);
    } else {
        let (low, high) = if from.week < to.week {
            (from, to)
        } else {
            (to, from)
        };
        let (head, tail) = schedule.weeks.split_at_mut(high.week);
        mem::swap(
            &mut head[low.week].workouts[low.day].workout,
            &mut tail[0].workouts[high.day].workout,
        );
    }
    true
}

impl RenderedPlan {
    /// Swaps the content of `(from_week, from_day)` and `(to_week, to_day)`.
    ///
    /// See [`move_workout`] for the full contract.
    pub fn move_workout(
        &self,
        from_week: usize,
        from_day: usize,
        to_week: usize,
        to_day: usize,
    ) -> RenderedPlan {
        move_workout(self, Slot::new(from_week, from_day), Slot::new(to_week, to_day))
    }
}
