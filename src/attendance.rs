//! Attendance-change orchestration.
//!
//! The entry point the roster-keeping layer calls after every attendance
//! edit: diffs the old and new lists, decides between a fresh build and an
//! in-place adjustment, and returns the schedule to persist. Persistence,
//! auth, and request handling live outside this crate.

use crate::adjuster;
use crate::builder::ScheduleBuilder;
use crate::models::{PlayerId, Roster, Schedule};

/// Set difference between two attendance lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceDelta {
    /// Players present now but not before.
    pub added: Vec<PlayerId>,
    /// Players present before but not now.
    pub removed: Vec<PlayerId>,
}

impl AttendanceDelta {
    /// Computes the delta from the previous attendance list to the current.
    ///
    /// Order follows the source lists; duplicates in either list are
    /// harmless (membership is what matters).
    pub fn between(previous: &[PlayerId], current: &[PlayerId]) -> Self {
        let added = current
            .iter()
            .filter(|id| !previous.contains(id))
            .cloned()
            .collect();
        let removed = previous
            .iter()
            .filter(|id| !current.contains(id))
            .cloned()
            .collect();
        Self { added, removed }
    }

    /// Whether attendance is unchanged.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Produces the schedule for the post-change attendance.
///
/// - No schedule yet, or `regenerate` set: fresh build, nothing locked.
/// - Attendance unchanged: the existing schedule comes back untouched.
/// - Game not yet underway (period 1 still first and nothing started or
///   completed): fresh build — equivalent to adjusting an all-open grid,
///   just cheaper.
/// - Otherwise: adjustment from the first not-started period.
pub fn apply_attendance_change(
    schedule: Option<&Schedule>,
    previous_attendance: &[PlayerId],
    roster: &Roster,
    regenerate: bool,
) -> Schedule {
    let builder = ScheduleBuilder::new(roster);

    let Some(current) = schedule else {
        return builder.build();
    };
    if regenerate {
        log::debug!("explicit regenerate requested, discarding existing schedule");
        return builder.build();
    }

    let delta = AttendanceDelta::between(previous_attendance, roster.ids());
    if delta.is_empty() {
        return current.clone();
    }

    let start_from = current.first_not_started().unwrap_or(1);
    if start_from == 1 && !current.any_started_or_completed() {
        return builder.build();
    }
    adjuster::adjust(current, &delta.added, &delta.removed, roster, start_from)
}
