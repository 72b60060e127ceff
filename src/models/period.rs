//! Period model: one playing-time segment of the 8-period grid.
//!
//! A game is 4 quarters of 2 periods each, with 5 players on the floor per
//! period. Period lifecycle is tracked by [`PeriodStatus`]; the wire format
//! additionally carries a legacy `completed` boolean kept in sync with the
//! status for older consumers.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Number of periods in a game.
pub const TOTAL_PERIODS: u8 = 8;

/// Number of quarters in a game (2 periods each).
pub const QUARTERS: u8 = 4;

/// Players on the floor per period.
pub const PLAYERS_PER_PERIOD: usize = 5;

/// Lifecycle state of a period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    /// Not yet played; the scheduler may rewrite its lineup.
    #[default]
    NotStarted,
    /// Currently on the floor; only the substitution pass may touch it.
    Started,
    /// Finished; immutable.
    Completed,
}

/// The two period ordinals owned by quarter `q` (1..=4).
pub fn quarter_periods(quarter: u8) -> [u8; 2] {
    [2 * quarter - 1, 2 * quarter]
}

/// One playing-time segment.
///
/// Holds up to [`PLAYERS_PER_PERIOD`] unique player ids. `status` is the
/// source of truth for lifecycle; the legacy `completed` boolean exists only
/// on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PeriodWire", into = "PeriodWire")]
pub struct Period {
    /// Ordinal 1..=8. Never changes once the grid exists.
    pub number: u8,
    /// Players on the floor, ≤5, unique. Order carries no meaning.
    pub players: Vec<PlayerId>,
    /// Lifecycle state.
    pub status: PeriodStatus,
}

impl Period {
    /// Creates an empty, not-started period.
    pub fn new(number: u8) -> Self {
        Self {
            number,
            players: Vec::new(),
            status: PeriodStatus::NotStarted,
        }
    }

    /// Quarter (1..=4) owning this period.
    pub fn quarter(&self) -> u8 {
        (self.number + 1) / 2
    }

    /// Whether this period has finished.
    pub fn completed(&self) -> bool {
        self.status == PeriodStatus::Completed
    }

    /// Whether the scheduler must leave this period's lineup alone.
    pub fn is_locked(&self) -> bool {
        self.status != PeriodStatus::NotStarted
    }

    /// Whether the given player is on the floor in this period.
    pub fn has_player(&self, id: &str) -> bool {
        self.players.iter().any(|p| p == id)
    }

    /// Open slots remaining (0 for locked periods).
    pub fn slots_left(&self) -> usize {
        if self.is_locked() {
            0
        } else {
            PLAYERS_PER_PERIOD.saturating_sub(self.players.len())
        }
    }

    /// Whether the floor is full.
    pub fn is_full(&self) -> bool {
        self.players.len() >= PLAYERS_PER_PERIOD
    }
}

/// Wire representation: carries the legacy `completed` mirror and accepts
/// records that predate the `status` field.
#[derive(Serialize, Deserialize)]
struct PeriodWire {
    period: u8,
    players: Vec<PlayerId>,
    #[serde(default)]
    status: Option<PeriodStatus>,
    #[serde(default)]
    completed: bool,
}

impl From<PeriodWire> for Period {
    fn from(wire: PeriodWire) -> Self {
        // Legacy records have no status; the boolean is all we get.
        let status = wire.status.unwrap_or(if wire.completed {
            PeriodStatus::Completed
        } else {
            PeriodStatus::NotStarted
        });
        Self {
            number: wire.period,
            players: wire.players,
            status,
        }
    }
}

impl From<Period> for PeriodWire {
    fn from(period: Period) -> Self {
        Self {
            period: period.number,
            completed: period.completed(),
            players: period.players,
            status: Some(period.status),
        }
    }
}
