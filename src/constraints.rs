//! Constraint parameters derived from roster size.
//!
//! Two rules guarantee rest on mid-sized rosters:
//!
//! | roster size | max segments per player |
//! |-------------|-------------------------|
//! | 7           | 6                       |
//! | 8–9         | 5                       |
//! | 10          | 4                       |
//! | other       | unbounded               |
//!
//! Three-in-a-row avoidance kicks in from 7 players up. Both are best-effort:
//! the builder reports misses as violations instead of failing.

/// Cap on total periods any single player may appear in, when defined.
pub fn max_segments(player_count: usize) -> Option<usize> {
    match player_count {
        7 => Some(6),
        8 | 9 => Some(5),
        10 => Some(4),
        _ => None,
    }
}

/// Whether placements should avoid three consecutive period ordinals.
pub fn avoid_three_in_row(player_count: usize) -> bool {
    player_count >= 7
}

/// Constraint parameters for one build/adjust pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintSet {
    /// Per-player appearance cap. `None` = unbounded.
    pub max_segments: Option<usize>,
    /// Whether to steer players away from a third consecutive period.
    pub avoid_three_in_row: bool,
}

impl ConstraintSet {
    /// Derives the constraint set for a roster of the given size.
    pub fn for_roster(player_count: usize) -> Self {
        Self {
            max_segments: max_segments(player_count),
            avoid_three_in_row: avoid_three_in_row(player_count),
        }
    }

    /// Whether a player with the given appearance count is at the cap.
    pub fn at_cap(&self, appearances: usize) -> bool {
        self.max_segments.is_some_and(|cap| appearances >= cap)
    }
}
