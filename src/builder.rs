//! Quarter-by-quarter greedy schedule builder.
//!
//! # Algorithm
//!
//! For each quarter 1→4 (two periods at a time):
//!
//! 1. **Coverage**: every player with no floor time in the quarter yet is
//!    seated once, in comparator order ([`RotationRule::for_quarter`]).
//!    Players at the max-segments cap, or with no period able to take them,
//!    are skipped and a `QuarterCoverage` violation is recorded.
//! 2. **Fill**: remaining slots go to the best-ranked player with a legal
//!    period, re-ranking after every placement, until no one fits.
//! 3. **Point-guard backfill**: a period still lacking a point guard gets the
//!    best-priority one that legally fits; a period left without one is
//!    reported as `MissingPointGuard`.
//!
//! Period choice within a quarter prefers (in order): no third-in-a-row for
//! the player, no point guard on the floor yet when the player is one, more
//! open slots, lower ordinal. In the final quarter a sole top-priority player
//! is steered into period 8 when it has room.
//!
//! The pass is greedy with no backtracking; the comparator definitions and
//! phase ordering are behavior, not an optimization detail.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::constraints::ConstraintSet;
use crate::models::{
    quarter_periods, PlayerId, Roster, Schedule, Violation, QUARTERS,
};
use crate::ranking::{RankContext, RotationRule};

/// Fills the 8-period grid for a roster, honoring locked periods.
#[derive(Debug)]
pub struct ScheduleBuilder<'a> {
    roster: &'a Roster,
    constraints: ConstraintSet,
}

impl<'a> ScheduleBuilder<'a> {
    /// Creates a builder; constraints derive from the roster size.
    pub fn new(roster: &'a Roster) -> Self {
        Self {
            roster,
            constraints: ConstraintSet::for_roster(roster.len()),
        }
    }

    /// Overrides the derived constraint set.
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    /// Builds a fresh schedule: empty grid, no locked periods.
    pub fn build(&self) -> Schedule {
        let mut schedule = Schedule::empty();
        self.fill(&mut schedule);
        schedule
    }

    /// Fills every non-locked period in place.
    ///
    /// Periods whose status is `started` or `completed` are never touched;
    /// their players still count toward appearance totals. Pre-populated
    /// unlocked periods keep their players and are topped up.
    pub fn fill(&self, schedule: &mut Schedule) {
        schedule.violations.clear();
        if self.roster.is_empty() {
            return;
        }
        log::debug!(
            "filling schedule: {} players, max_segments={:?}, avoid_streak={}",
            self.roster.len(),
            self.constraints.max_segments,
            self.constraints.avoid_three_in_row
        );

        // Per-pass mutable counters; locked periods seed the totals.
        let mut totals = schedule.appearance_counts(self.roster.ids());
        for quarter in 1..=QUARTERS {
            self.fill_quarter(schedule, quarter, &mut totals);
        }
    }

    fn fill_quarter(
        &self,
        schedule: &mut Schedule,
        quarter: u8,
        totals: &mut HashMap<PlayerId, usize>,
    ) {
        let rule = RotationRule::for_quarter(quarter);

        // Phase A: one appearance per player per quarter, best-effort.
        let order = rule.sorted(self.roster.ids(), &RankContext::new(totals, self.roster));
        for player in &order {
            if schedule.appearances_in_quarter(player, quarter) > 0 {
                continue;
            }
            if self.constraints.at_cap(totals.get(player).copied().unwrap_or(0)) {
                schedule.add_violation(Violation::quarter_coverage(player, quarter));
                continue;
            }
            match self.pick_period(schedule, quarter, player) {
                Some(number) => self.place(schedule, number, player, totals),
                None => schedule.add_violation(Violation::quarter_coverage(player, quarter)),
            }
        }

        // Phase B: fill remaining slots, re-ranking after each placement.
        while quarter_slots_left(schedule, quarter) > 0 {
            let order = rule.sorted(self.roster.ids(), &RankContext::new(totals, self.roster));
            let placed = order.iter().find_map(|player| {
                if self.constraints.at_cap(totals.get(player).copied().unwrap_or(0)) {
                    return None;
                }
                self.pick_period(schedule, quarter, player)
                    .map(|number| (number, player.clone()))
            });
            match placed {
                Some((number, player)) => self.place(schedule, number, &player, totals),
                None => break,
            }
        }

        // Point-guard backfill, capacity-bound.
        if self.roster.has_point_guard() {
            for number in quarter_periods(quarter) {
                self.backfill_point_guard(schedule, number, totals);
            }
        }
    }

    /// Seats the best-priority point guard in a period lacking one, when a
    /// slot remains. A period left uncovered is reported, not fixed.
    fn backfill_point_guard(
        &self,
        schedule: &mut Schedule,
        number: u8,
        totals: &mut HashMap<PlayerId, usize>,
    ) {
        let Some(period) = schedule.period(number) else {
            return;
        };
        if period.is_locked() {
            return;
        }
        if period.players.iter().any(|p| self.roster.is_point_guard(p)) {
            return;
        }

        if period.slots_left() > 0 {
            let mut guards: Vec<&PlayerId> = self
                .roster
                .ids()
                .iter()
                .filter(|id| self.roster.is_point_guard(id))
                .filter(|id| !period.has_player(id))
                .filter(|id| !self.constraints.at_cap(totals.get(*id).copied().unwrap_or(0)))
                .collect();
            guards.sort_by(|a, b| {
                self.roster
                    .priority_of(b)
                    .cmp(&self.roster.priority_of(a))
                    .then_with(|| a.cmp(b))
            });
            if let Some(guard) = guards.first() {
                let guard = (*guard).clone();
                self.place(schedule, number, &guard, totals);
                return;
            }
        }
        schedule.add_violation(Violation::missing_point_guard(number));
    }

    /// Chooses the period within a quarter to seat a player, or `None` when
    /// neither period can legally take them.
    fn pick_period(&self, schedule: &Schedule, quarter: u8, player: &str) -> Option<u8> {
        // Closers play the last period: the sole top-priority player goes to
        // period 8 whenever it has room.
        if quarter == 4 && self.roster.sole_top_priority().map(String::as_str) == Some(player) {
            if let Some(closer) = schedule.period(8) {
                if closer.slots_left() > 0 && !closer.has_player(player) {
                    return Some(8);
                }
            }
        }

        quarter_periods(quarter)
            .into_iter()
            .filter_map(|n| schedule.period(n))
            .filter(|p| p.slots_left() > 0 && !p.has_player(player))
            .min_by_key(|p| {
                let forces_streak = self.constraints.avoid_three_in_row
                    && creates_streak(schedule, player, p.number);
                let doubles_point_guard = self.roster.is_point_guard(player)
                    && p.players.iter().any(|id| self.roster.is_point_guard(id));
                (
                    forces_streak,
                    doubles_point_guard,
                    Reverse(p.slots_left()),
                    p.number,
                )
            })
            .map(|p| p.number)
    }

    fn place(
        &self,
        schedule: &mut Schedule,
        number: u8,
        player: &str,
        totals: &mut HashMap<PlayerId, usize>,
    ) {
        if self.constraints.avoid_three_in_row && creates_streak(schedule, player, number) {
            // Accepted fallback: every streak-free option was full or capped.
            schedule.add_violation(Violation::consecutive_stretch(player, number));
        }
        if let Some(period) = schedule.period_mut(number) {
            log::trace!("period {number}: seating '{player}'");
            period.players.push(player.to_string());
            *totals.entry(player.to_string()).or_insert(0) += 1;
        }
    }
}

/// Whether seating the player in this period makes three consecutive
/// ordinals in a row. Only the two immediately preceding ordinals matter,
/// quarter boundaries included.
fn creates_streak(schedule: &Schedule, player: &str, number: u8) -> bool {
    number >= 3
        && schedule.period(number - 1).is_some_and(|p| p.has_player(player))
        && schedule.period(number - 2).is_some_and(|p| p.has_player(player))
}

/// Open slots across a quarter's two periods.
fn quarter_slots_left(schedule: &Schedule, quarter: u8) -> usize {
    quarter_periods(quarter)
        .into_iter()
        .filter_map(|n| schedule.period(n))
        .map(|p| p.slots_left())
        .sum()
}

/// Generates a fresh 8-period schedule for the given attendance list.
///
/// Spec-shaped entry point: attribute maps are keyed by player id; missing
/// entries default to priority 0 / not a point guard.
pub fn generate_schedule(
    player_ids: &[PlayerId],
    priority_map: &HashMap<PlayerId, i32>,
    point_guard_map: &HashMap<PlayerId, bool>,
) -> Schedule {
    let roster = roster_from_maps(player_ids, priority_map, point_guard_map);
    ScheduleBuilder::new(&roster).build()
}

pub(crate) fn roster_from_maps(
    player_ids: &[PlayerId],
    priority_map: &HashMap<PlayerId, i32>,
    point_guard_map: &HashMap<PlayerId, bool>,
) -> Roster {
    let guards = point_guard_map
        .iter()
        .filter(|(_, &is_pg)| is_pg)
        .map(|(id, _)| id.clone())
        .collect();
    Roster::new(player_ids.iter().cloned())
        .with_priorities(priority_map.clone())
        .with_point_guards(guards)
}
