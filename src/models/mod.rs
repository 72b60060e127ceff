//! Rotation domain models.
//!
//! Core data types for the playing-time grid: the attendance roster with
//! scheduling attributes, the 8-period/4-quarter topology, and the schedule
//! with its best-effort violation diagnostics.
//!
//! | Type | Role |
//! |------|------|
//! | `Roster` | who is available, priority scores, point-guard flags |
//! | `Period` | one 5-player segment with lifecycle status |
//! | `Schedule` | the full 8-period grid |
//! | `Violation` | reported (never fatal) constraint misses |

mod period;
mod roster;
mod schedule;

pub use period::{
    quarter_periods, Period, PeriodStatus, PLAYERS_PER_PERIOD, QUARTERS, TOTAL_PERIODS,
};
pub use roster::{PlayerId, Roster};
pub use schedule::{Schedule, Violation, ViolationKind};
