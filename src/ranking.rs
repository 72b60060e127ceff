//! Player comparators for assignment order.
//!
//! Two total orders rank players when handing out floor time, both ending in
//! a deterministic lexicographic id tie-break so identical inputs always
//! produce identical schedules:
//!
//! - **Standard**: fewest total periods played first, priority score breaks
//!   ties (higher first).
//! - **LateGame** (fourth quarter, periods 7–8): priority score first, total
//!   periods played breaks ties. In the last quarter, higher-priority players
//!   are preferred even over exact even distribution.
//!
//! The started-period substitution fill uses the same two orders, keyed by
//! period ordinal.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{PlayerId, Roster};

/// Shared state the comparators read: appearance totals and roster attributes.
#[derive(Debug)]
pub struct RankContext<'a> {
    /// Total periods played so far, per player.
    pub totals: &'a HashMap<PlayerId, usize>,
    /// Roster carrying priority scores.
    pub roster: &'a Roster,
}

impl<'a> RankContext<'a> {
    /// Creates a ranking context.
    pub fn new(totals: &'a HashMap<PlayerId, usize>, roster: &'a Roster) -> Self {
        Self { totals, roster }
    }

    fn total_of(&self, id: &str) -> usize {
        self.totals.get(id).copied().unwrap_or(0)
    }
}

/// Which ordering ranks players for assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationRule {
    /// Even distribution first; priority only breaks ties.
    Standard,
    /// Priority first; used for the final quarter.
    LateGame,
}

impl RotationRule {
    /// Rule for filling the given quarter (1..=4).
    pub fn for_quarter(quarter: u8) -> Self {
        if quarter == 4 {
            Self::LateGame
        } else {
            Self::Standard
        }
    }

    /// Rule for a direct slot fill in the given period (1..=8).
    pub fn for_period(period: u8) -> Self {
        if period >= 7 {
            Self::LateGame
        } else {
            Self::Standard
        }
    }

    /// Compares two players under this rule. `Less` = assigned earlier.
    pub fn compare(&self, a: &str, b: &str, ctx: &RankContext<'_>) -> Ordering {
        let by_total = ctx.total_of(a).cmp(&ctx.total_of(b));
        let by_priority = ctx.roster.priority_of(b).cmp(&ctx.roster.priority_of(a));
        let chained = match self {
            Self::Standard => by_total.then(by_priority),
            Self::LateGame => by_priority.then(by_total),
        };
        chained.then_with(|| a.cmp(b))
    }

    /// Returns the players sorted by this rule.
    pub fn sorted(&self, ids: &[PlayerId], ctx: &RankContext<'_>) -> Vec<PlayerId> {
        let mut out = ids.to_vec();
        out.sort_by(|a, b| self.compare(a, b, ctx));
        out
    }
}
