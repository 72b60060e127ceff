//! Schedule model: the full 8-period grid plus build diagnostics.
//!
//! A schedule always holds exactly [`TOTAL_PERIODS`] periods, ordinals 1..=8
//! once each. Constraint infeasibility never fails a build; it is recorded
//! as [`Violation`]s on the schedule and the affected period is simply
//! short-staffed or left without a point guard.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Period, PeriodStatus, PlayerId, TOTAL_PERIODS};

/// The complete playing-time grid for one game.
///
/// Serializes as `{ "periods": [...] }`; violations are per-pass diagnostics
/// and stay off the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Exactly 8 periods, ordinals 1..=8 in order.
    pub periods: Vec<Period>,
    /// Best-effort constraint misses from the latest build/adjust pass.
    #[serde(skip)]
    pub violations: Vec<Violation>,
}

impl Schedule {
    /// Creates the empty grid: 8 not-started periods, no players.
    pub fn empty() -> Self {
        Self {
            periods: (1..=TOTAL_PERIODS).map(Period::new).collect(),
            violations: Vec::new(),
        }
    }

    /// The period with the given ordinal.
    pub fn period(&self, number: u8) -> Option<&Period> {
        self.periods.iter().find(|p| p.number == number)
    }

    /// Mutable access to the period with the given ordinal.
    pub fn period_mut(&mut self, number: u8) -> Option<&mut Period> {
        self.periods.iter_mut().find(|p| p.number == number)
    }

    /// Total appearances of a player across all periods.
    pub fn appearances(&self, id: &str) -> usize {
        self.periods.iter().filter(|p| p.has_player(id)).count()
    }

    /// Appearances of a player within one quarter (1..=4).
    pub fn appearances_in_quarter(&self, id: &str, quarter: u8) -> usize {
        self.periods
            .iter()
            .filter(|p| p.quarter() == quarter && p.has_player(id))
            .count()
    }

    /// Appearance counts for each listed player across the whole grid.
    pub fn appearance_counts(&self, ids: &[PlayerId]) -> HashMap<PlayerId, usize> {
        ids.iter()
            .map(|id| (id.clone(), self.appearances(id)))
            .collect()
    }

    /// Ordinal of the first period still waiting to be played.
    pub fn first_not_started(&self) -> Option<u8> {
        self.periods
            .iter()
            .find(|p| p.status == PeriodStatus::NotStarted)
            .map(|p| p.number)
    }

    /// Whether any period has been started or completed.
    pub fn any_started_or_completed(&self) -> bool {
        self.periods.iter().any(|p| p.is_locked())
    }

    /// Whether the latest pass met every constraint.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Records a constraint miss.
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::empty()
    }
}

/// A best-effort constraint miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Category of the miss.
    pub kind: ViolationKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of constraint misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A player got no floor time in a quarter.
    QuarterCoverage,
    /// A period was left without a point guard.
    MissingPointGuard,
    /// A player was placed into a third consecutive period.
    ConsecutiveStretch,
}

impl Violation {
    /// A player missed out on a quarter entirely.
    pub fn quarter_coverage(player: &str, quarter: u8) -> Self {
        Self {
            kind: ViolationKind::QuarterCoverage,
            message: format!("player '{player}' has no period in quarter {quarter}"),
        }
    }

    /// No point guard could be seated in a period.
    pub fn missing_point_guard(period: u8) -> Self {
        Self {
            kind: ViolationKind::MissingPointGuard,
            message: format!("period {period} has no point guard on the floor"),
        }
    }

    /// A third-in-a-row placement was the only option left.
    pub fn consecutive_stretch(player: &str, period: u8) -> Self {
        Self {
            kind: ViolationKind::ConsecutiveStretch,
            message: format!(
                "player '{player}' plays periods {}-{period} back to back",
                period - 2
            ),
        }
    }
}
