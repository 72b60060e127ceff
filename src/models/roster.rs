//! Roster model: who is available for the current game.
//!
//! The roster is the attendance list plus the two player attributes the
//! rotation heuristic consumes: a generic numeric priority score (the
//! external layer maps star/grade/level onto it) and a point-guard flag.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Unique player identifier.
pub type PlayerId = String;

/// Attendance list with scheduling attributes.
///
/// Player order is preserved from construction; duplicates are dropped,
/// keeping the first occurrence. Missing attributes default to priority 0
/// and not-a-point-guard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Attending players, in arrival order, de-duplicated.
    ids: Vec<PlayerId>,
    /// Priority score per player (higher = prioritized in ties).
    priority: HashMap<PlayerId, i32>,
    /// Players flagged as point guards.
    point_guards: HashSet<PlayerId>,
}

impl Roster {
    /// Creates a roster from an attendance list.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PlayerId>,
    {
        let mut seen = HashSet::new();
        let ids = ids
            .into_iter()
            .map(Into::into)
            .filter(|id| seen.insert(id.clone()))
            .collect();
        Self {
            ids,
            priority: HashMap::new(),
            point_guards: HashSet::new(),
        }
    }

    /// Sets a player's priority score.
    pub fn with_priority(mut self, id: impl Into<PlayerId>, score: i32) -> Self {
        self.priority.insert(id.into(), score);
        self
    }

    /// Replaces all priority scores.
    pub fn with_priorities(mut self, priority: HashMap<PlayerId, i32>) -> Self {
        self.priority = priority;
        self
    }

    /// Flags a player as a point guard.
    pub fn with_point_guard(mut self, id: impl Into<PlayerId>) -> Self {
        self.point_guards.insert(id.into());
        self
    }

    /// Replaces all point-guard flags.
    pub fn with_point_guards(mut self, point_guards: HashSet<PlayerId>) -> Self {
        self.point_guards = point_guards;
        self
    }

    /// Attending players, in order.
    pub fn ids(&self) -> &[PlayerId] {
        &self.ids
    }

    /// Number of attending players.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nobody is attending.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether the given player is attending.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|p| p == id)
    }

    /// Priority score for a player (0 when unset).
    pub fn priority_of(&self, id: &str) -> i32 {
        self.priority.get(id).copied().unwrap_or(0)
    }

    /// Whether the given player is a point guard.
    pub fn is_point_guard(&self, id: &str) -> bool {
        self.point_guards.contains(id)
    }

    /// Whether any attending player is a point guard.
    pub fn has_point_guard(&self) -> bool {
        self.ids.iter().any(|id| self.point_guards.contains(id))
    }

    /// The player holding the single maximum priority score, if unique.
    ///
    /// Returns `None` when the roster is empty or the top score is shared.
    pub fn sole_top_priority(&self) -> Option<&PlayerId> {
        let top = self.ids.iter().map(|id| self.priority_of(id)).max()?;
        let mut holders = self.ids.iter().filter(|id| self.priority_of(id) == top);
        let first = holders.next()?;
        if holders.next().is_none() {
            Some(first)
        } else {
            None
        }
    }
}
