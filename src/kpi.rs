//! Rotation quality metrics.
//!
//! Read-side diagnostics computed from a schedule and its roster:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Appearance spread | max - min periods played across the roster |
//! | Quarter gaps | (player, quarter) pairs with no floor time |
//! | Guard gaps | periods without a point guard |
//! | Short periods | periods with fewer than 5 players |
//!
//! Useful for coach-facing summaries and for asserting fairness in tests.

use std::collections::HashMap;

use crate::models::{PlayerId, Roster, Schedule, PLAYERS_PER_PERIOD, QUARTERS};

/// Fairness and coverage indicators for one schedule.
#[derive(Debug, Clone)]
pub struct RotationKpi {
    /// Periods played per roster player.
    pub appearances: HashMap<PlayerId, usize>,
    /// Fewest periods played by anyone on the roster.
    pub min_appearances: usize,
    /// Most periods played by anyone on the roster.
    pub max_appearances: usize,
    /// (player, quarter) pairs where the player never took the floor.
    pub quarter_gaps: Vec<(PlayerId, u8)>,
    /// Periods with no point guard on the floor (empty when the roster has
    /// no point guard at all).
    pub guard_gaps: Vec<u8>,
    /// Periods with fewer than 5 players.
    pub short_periods: Vec<u8>,
}

impl RotationKpi {
    /// Computes indicators for a schedule against its roster.
    pub fn calculate(schedule: &Schedule, roster: &Roster) -> Self {
        let appearances = schedule.appearance_counts(roster.ids());
        let min_appearances = appearances.values().copied().min().unwrap_or(0);
        let max_appearances = appearances.values().copied().max().unwrap_or(0);

        let mut quarter_gaps = Vec::new();
        for id in roster.ids() {
            for quarter in 1..=QUARTERS {
                if schedule.appearances_in_quarter(id, quarter) == 0 {
                    quarter_gaps.push((id.clone(), quarter));
                }
            }
        }

        let guard_gaps = if roster.has_point_guard() {
            schedule
                .periods
                .iter()
                .filter(|p| !p.players.iter().any(|id| roster.is_point_guard(id)))
                .map(|p| p.number)
                .collect()
        } else {
            Vec::new()
        };

        let short_periods = schedule
            .periods
            .iter()
            .filter(|p| p.players.len() < PLAYERS_PER_PERIOD)
            .map(|p| p.number)
            .collect();

        Self {
            appearances,
            min_appearances,
            max_appearances,
            quarter_gaps,
            guard_gaps,
            short_periods,
        }
    }

    /// Difference between the most- and least-played players.
    pub fn spread(&self) -> usize {
        self.max_appearances - self.min_appearances
    }

    /// Whether playing time is within the given spread and every player
    /// covered every quarter.
    pub fn is_fair(&self, max_spread: usize) -> bool {
        self.spread() <= max_spread && self.quarter_gaps.is_empty()
    }
}
