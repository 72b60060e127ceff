//! Live schedule adjustment for attendance changes.
//!
//! Patches a schedule in place when players arrive or leave mid-game:
//!
//! 1. Started periods holding a removed player get a direct substitution —
//!    removed and no-longer-attending players are dropped and the vacated
//!    slots refilled immediately, bypassing the quarter logic.
//! 2. Every not-yet-started period from the adjustment point on is cleared.
//! 3. The builder refills the grid with started/completed periods locked,
//!    regenerating the remainder from scratch to restore balance rather
//!    than patching incrementally.
//!
//! With no `not_started` period left, only the substitution applies. With an
//! empty attendance list, cleared periods stay empty.

use std::collections::HashMap;

use crate::builder::{roster_from_maps, ScheduleBuilder};
use crate::constraints::ConstraintSet;
use crate::models::{PeriodStatus, PlayerId, Roster, Schedule};
use crate::ranking::{RankContext, RotationRule};

/// Adjusts an existing schedule for added/removed players.
///
/// `start_from` is the first period ordinal whose `not_started` lineup may
/// be rewritten (typically the first not-started period). Started and
/// completed periods are preserved exactly, except for the substitution
/// pass on started periods containing a removed player.
pub fn adjust(
    current: &Schedule,
    players_to_add: &[PlayerId],
    players_to_remove: &[PlayerId],
    roster: &Roster,
    start_from: u8,
) -> Schedule {
    log::debug!(
        "adjusting schedule from period {start_from}: +{} -{} players, {} attending",
        players_to_add.len(),
        players_to_remove.len(),
        roster.len()
    );

    let mut next = current.clone();
    next.violations.clear();

    substitute_started_periods(&mut next, players_to_remove, roster);

    for period in &mut next.periods {
        if period.number >= start_from && period.status == PeriodStatus::NotStarted {
            period.players.clear();
        }
    }

    // Locked set = everything started or completed, wherever it sits.
    ScheduleBuilder::new(roster).fill(&mut next);
    next
}

/// Replaces removed players inside started periods with the best available
/// substitutes. A direct slot fill: no quarter coverage, no streak logic,
/// just the period comparator and the max-segments cap.
fn substitute_started_periods(schedule: &mut Schedule, removed: &[PlayerId], roster: &Roster) {
    if removed.is_empty() {
        return;
    }
    let constraints = ConstraintSet::for_roster(roster.len());

    // Time actually played: started and completed periods only.
    let mut totals: HashMap<PlayerId, usize> = roster
        .ids()
        .iter()
        .map(|id| {
            let played = schedule
                .periods
                .iter()
                .filter(|p| p.is_locked() && p.has_player(id))
                .count();
            (id.clone(), played)
        })
        .collect();

    for number in 1..=crate::models::TOTAL_PERIODS {
        let Some(period) = schedule.period(number) else {
            continue;
        };
        if period.status != PeriodStatus::Started
            || !period.players.iter().any(|id| removed.contains(id))
        {
            continue;
        }

        let rule = RotationRule::for_period(number);
        let mut bench: Vec<PlayerId> = roster
            .ids()
            .iter()
            .filter(|id| !period.has_player(id) && !removed.contains(*id))
            .cloned()
            .collect();
        bench.sort_by(|a, b| rule.compare(a, b, &RankContext::new(&totals, roster)));

        let Some(period) = schedule.period_mut(number) else {
            continue;
        };
        period
            .players
            .retain(|id| !removed.contains(id) && roster.contains(id));

        for candidate in bench {
            if period.is_full() {
                break;
            }
            if constraints.at_cap(totals.get(&candidate).copied().unwrap_or(0)) {
                continue;
            }
            log::trace!("period {number}: substituting in '{candidate}'");
            period.players.push(candidate.clone());
            *totals.entry(candidate).or_insert(0) += 1;
        }
    }
}

/// Adjusts a schedule from plain id lists and attribute maps.
///
/// Spec-shaped entry point mirroring [`crate::generate_schedule`]:
/// `all_available_players` is the full post-change attendance list.
#[allow(clippy::too_many_arguments)]
pub fn adjust_schedule(
    current: &Schedule,
    players_to_add: &[PlayerId],
    players_to_remove: &[PlayerId],
    all_available_players: &[PlayerId],
    start_adjusting_from_period: u8,
    priority_map: &HashMap<PlayerId, i32>,
    point_guard_map: &HashMap<PlayerId, bool>,
) -> Schedule {
    let roster = roster_from_maps(all_available_players, priority_map, point_guard_map);
    adjust(
        current,
        players_to_add,
        players_to_remove,
        &roster,
        start_adjusting_from_period,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PLAYERS_PER_PERIOD;

    fn names(count: usize) -> Vec<PlayerId> {
        (0..count).map(|i| format!("p{i:02}")).collect()
    }

    /// Builds a fresh schedule and marks periods 1..=played as completed,
    /// with period `started` (if any) marked started.
    fn mid_game(roster: &Roster, completed_through: u8, started: Option<u8>) -> Schedule {
        let mut schedule = ScheduleBuilder::new(roster).build();
        for n in 1..=completed_through {
            schedule.period_mut(n).unwrap().status = PeriodStatus::Completed;
        }
        if let Some(n) = started {
            schedule.period_mut(n).unwrap().status = PeriodStatus::Started;
        }
        schedule
    }

    #[test]
    fn test_removal_mid_game_roster_of_five() {
        // Five players, everyone plays every period. One leaves during
        // period 5: the started period loses them, periods 6-8 rebuild
        // from the remaining four.
        let roster = Roster::new(names(5));
        let schedule = mid_game(&roster, 4, Some(5));
        assert!(schedule.period(5).unwrap().has_player("p04"));

        let remaining = Roster::new(names(4));
        let adjusted = adjust(&schedule, &[], &["p04".to_string()], &remaining, 6);

        // Completed periods untouched, departed player and all
        for n in 1..=4 {
            assert_eq!(
                adjusted.period(n).unwrap().players,
                schedule.period(n).unwrap().players
            );
        }
        // Started period: substitution dropped the removed player; with all
        // four remaining players already on the floor there is no one to sub in
        let p5 = adjusted.period(5).unwrap();
        assert!(!p5.has_player("p04"));
        assert_eq!(p5.players.len(), 4);

        // Future periods regenerated from the remaining four
        for n in 6..=8 {
            let p = adjusted.period(n).unwrap();
            assert_eq!(p.players.len(), 4);
            assert!(!p.has_player("p04"));
        }
    }

    #[test]
    fn test_substitution_fills_from_bench() {
        let roster = Roster::new(names(8));
        let mut schedule = mid_game(&roster, 4, Some(5));

        // Make period 5 a known lineup containing the player who leaves.
        schedule.period_mut(5).unwrap().players =
            vec!["p00".into(), "p01".into(), "p02".into(), "p03".into(), "p04".into()];

        let after: Vec<PlayerId> = names(8).into_iter().filter(|id| id != "p04").collect();
        let remaining = Roster::new(after);
        let adjusted = adjust(&schedule, &[], &["p04".to_string()], &remaining, 6);

        let p5 = adjusted.period(5).unwrap();
        assert!(!p5.has_player("p04"));
        assert_eq!(p5.players.len(), PLAYERS_PER_PERIOD);
        // The substitute came from the bench
        assert!(p5.players.iter().any(|id| ["p05", "p06", "p07"].contains(&id.as_str())));
    }

    #[test]
    fn test_substitution_prefers_least_played() {
        let remaining: Vec<PlayerId> =
            vec!["ann".into(), "bea".into(), "cam".into(), "dee".into(), "eli".into(), "fay".into()];
        let roster = Roster::new(remaining);

        let mut schedule = Schedule::empty();
        // Completed period 1: everyone but fay has played once.
        {
            let p1 = schedule.period_mut(1).unwrap();
            p1.players = vec!["ann".into(), "bea".into(), "cam".into(), "dee".into(), "eli".into()];
            p1.status = PeriodStatus::Completed;
        }
        // Started period 2 contains the departing player.
        {
            let p2 = schedule.period_mut(2).unwrap();
            p2.players = vec!["out".into(), "ann".into(), "bea".into(), "cam".into(), "dee".into()];
            p2.status = PeriodStatus::Started;
        }

        let adjusted = adjust(&schedule, &[], &["out".to_string()], &roster, 3);
        let p2 = adjusted.period(2).unwrap();
        assert!(!p2.has_player("out"));
        // fay has played least and gets the vacated slot over eli
        assert!(p2.has_player("fay"));
        assert_eq!(p2.players.len(), PLAYERS_PER_PERIOD);
    }

    #[test]
    fn test_substitution_drops_non_attending_players() {
        // A player who silently left attendance (not in the removal list but
        // no longer attending) is dropped from a started period too.
        let roster = Roster::new(["ann", "bea", "cam", "dee", "eli", "fay"]);
        let mut schedule = Schedule::empty();
        {
            let p1 = schedule.period_mut(1).unwrap();
            p1.players =
                vec!["out".into(), "gone".into(), "ann".into(), "bea".into(), "cam".into()];
            p1.status = PeriodStatus::Started;
        }

        let adjusted = adjust(&schedule, &[], &["out".to_string()], &roster, 2);
        let p1 = adjusted.period(1).unwrap();
        assert!(!p1.has_player("out"));
        assert!(!p1.has_player("gone"));
        assert_eq!(p1.players.len(), PLAYERS_PER_PERIOD);
    }

    #[test]
    fn test_locked_periods_preserved_on_additions() {
        let roster = Roster::new(names(6));
        let schedule = mid_game(&roster, 2, Some(3));
        let locked: Vec<Vec<PlayerId>> = (1..=3)
            .map(|n| schedule.period(n).unwrap().players.clone())
            .collect();

        let grown = Roster::new(names(8));
        let adjusted = adjust(
            &schedule,
            &["p06".to_string(), "p07".to_string()],
            &[],
            &grown,
            4,
        );

        // No removal → started period untouched as well
        for (i, n) in (1..=3).enumerate() {
            assert_eq!(adjusted.period(n).unwrap().players, locked[i]);
        }
        // Newcomers appear in the regenerated remainder
        for id in ["p06", "p07"] {
            assert!(
                (4..=8).any(|n| adjusted.period(n).unwrap().has_player(id)),
                "'{id}' never scheduled"
            );
        }
    }

    #[test]
    fn test_no_not_started_periods_substitution_only() {
        let roster = Roster::new(names(6));
        let mut schedule = mid_game(&roster, 7, Some(8));
        schedule.period_mut(8).unwrap().players =
            vec!["p00".into(), "p01".into(), "p02".into(), "p03".into(), "p04".into()];

        let after: Vec<PlayerId> = names(6).into_iter().filter(|id| id != "p00").collect();
        let remaining = Roster::new(after);
        let adjusted = adjust(&schedule, &[], &["p00".to_string()], &remaining, 8);

        // Completed periods identical
        for n in 1..=7 {
            assert_eq!(
                adjusted.period(n).unwrap().players,
                schedule.period(n).unwrap().players
            );
        }
        // Started period 8 got the substitution
        let p8 = adjusted.period(8).unwrap();
        assert!(!p8.has_player("p00"));
        assert!(p8.has_player("p05"));
    }

    #[test]
    fn test_empty_attendance_clears_future_periods() {
        let roster = Roster::new(names(5));
        let schedule = mid_game(&roster, 3, None);

        let nobody = Roster::new(Vec::<String>::new());
        let adjusted = adjust(
            &schedule,
            &[],
            &names(5),
            &nobody,
            4,
        );

        for n in 1..=3 {
            assert_eq!(
                adjusted.period(n).unwrap().players,
                schedule.period(n).unwrap().players
            );
        }
        for n in 4..=8 {
            assert!(adjusted.period(n).unwrap().players.is_empty());
        }
    }

    #[test]
    fn test_substitution_respects_max_segments() {
        // 10 attending → cap 4. A bench player already at 4 appearances in
        // locked periods cannot be subbed in.
        let roster = Roster::new(names(10));
        let mut schedule = Schedule::empty();
        for n in 1..=4 {
            let p = schedule.period_mut(n).unwrap();
            // p09 plays all four completed periods, reaching the cap
            p.players = vec![
                "p09".into(),
                format!("p0{}", n - 1),
                format!("p0{}", n % 4),
                format!("p0{}", (n + 1) % 4),
                format!("p0{}", (n + 2) % 4),
            ];
            p.players.dedup();
            p.status = PeriodStatus::Completed;
        }
        {
            let p5 = schedule.period_mut(5).unwrap();
            p5.players =
                vec!["out".into(), "p04".into(), "p05".into(), "p06".into(), "p07".into()];
            p5.status = PeriodStatus::Started;
        }

        let adjusted = adjust(&schedule, &[], &["out".to_string()], &roster, 6);
        let p5 = adjusted.period(5).unwrap();
        assert!(!p5.has_player("out"));
        assert!(!p5.has_player("p09"), "capped player subbed in");
    }

    #[test]
    fn test_adjust_schedule_entry_point() {
        let roster = Roster::new(names(7));
        let schedule = mid_game(&roster, 1, None);

        let after: Vec<PlayerId> = names(7).into_iter().filter(|id| id != "p06").collect();
        let adjusted = adjust_schedule(
            &schedule,
            &[],
            &["p06".to_string()],
            &after,
            2,
            &HashMap::new(),
            &HashMap::new(),
        );
        assert_eq!(
            adjusted.period(1).unwrap().players,
            schedule.period(1).unwrap().players
        );
        for n in 2..=8 {
            assert!(!adjusted.period(n).unwrap().has_player("p06"));
        }
    }
}
