//! Playing-time rotation scheduling for youth basketball.
//!
//! Assigns players to a fixed grid of 8 periods (4 quarters, 2 periods each,
//! 5 on the floor) so that everyone gets fair minutes, and re-plans live as
//! players arrive, leave, or periods start and complete. The heuristic is a
//! deterministic greedy fill driven by player comparators — no backtracking,
//! no solver — so identical inputs always yield identical schedules.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Roster`, `Period`, `Schedule`, `Violation`
//! - **`constraints`**: roster-size-derived caps (max segments, streak rule)
//! - **`ranking`**: the Standard and LateGame player comparators
//! - **`builder`**: quarter-by-quarter grid fill with coverage, fill, and
//!   point-guard phases
//! - **`adjuster`**: live substitution and regeneration for attendance changes
//! - **`attendance`**: top-level diff-and-dispatch entry point
//! - **`kpi`**: fairness metrics over a finished schedule
//!
//! # Architecture
//!
//! The crate is the pure scheduling core: synchronous, single-threaded, and
//! side-effect-free over its inputs. Rosters come in, a schedule value comes
//! out. Persistence, authentication, HTTP, and export belong to the calling
//! application, as does isolation between concurrent edits of the same game.
//!
//! Constraint infeasibility never raises an error — periods are left
//! short-staffed or without a point guard and the miss is recorded on
//! [`models::Schedule::violations`].
//!
//! # Example
//!
//! ```
//! use court_rotation::models::Roster;
//! use court_rotation::builder::ScheduleBuilder;
//!
//! let roster = Roster::new(["amy", "ben", "cora", "dan", "eve", "finn"])
//!     .with_priority("cora", 3)
//!     .with_point_guard("ben");
//!
//! let schedule = ScheduleBuilder::new(&roster).build();
//! assert_eq!(schedule.periods.len(), 8);
//! ```

pub mod adjuster;
pub mod attendance;
pub mod builder;
pub mod constraints;
pub mod kpi;
pub mod models;
pub mod ranking;

pub use adjuster::adjust_schedule;
pub use attendance::{apply_attendance_change, AttendanceDelta};
pub use builder::generate_schedule;
