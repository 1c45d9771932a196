//! Balanced fixture generation
//!
//! Both formats share one greedy loop: find the players still short of their
//! target, let the format's selector pick the next game from them, record it,
//! repeat. The loop stops when too few needy players remain to fill a game,
//! or after `MAX_ITERATIONS` rounds.

use serde::{Deserialize, Serialize};

use crate::doubles::DoublesSelector;
use crate::error::ScheduleError;
use crate::fairness::FairnessCounters;
use crate::fixture::{Fixture, Matchup};
use crate::format::Format;
use crate::roster::normalize_roster;
use crate::singles::SinglesSelector;

/// Upper bound on loop rounds for a single schedule.
pub const MAX_ITERATIONS: u32 = 1000;

/// Roster indices for the next game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pick {
    Singles(usize, usize),
    Doubles([usize; 2], [usize; 2]),
}

/// Chooses the next game given the needy players and live counters.
pub(crate) trait Selector {
    fn select(&mut self, needy: &[usize], counters: &FairnessCounters) -> Option<Pick>;
}

/// Why construction stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Termination {
    /// Too few players remain below target to fill another game.
    Complete,
    /// The iteration cap was hit first; the fixtures built so far are valid
    /// but some players are short of their target.
    Exhausted { iterations: u32 },
}

/// A generated schedule and how its construction ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub fixtures: Vec<Fixture>,
    pub termination: Termination,
}

impl Schedule {
    pub fn is_exhausted(&self) -> bool {
        matches!(self.termination, Termination::Exhausted { .. })
    }

    /// Games each roster member is scheduled for, in roster order.
    pub fn games_per_player(&self, roster: &[String]) -> Vec<(String, u32)> {
        roster
            .iter()
            .map(|name| {
                let games = self.fixtures.iter().filter(|f| f.involves(name)).count() as u32;
                (name.clone(), games)
            })
            .collect()
    }
}

/// Build a schedule, reporting why one could not be built.
///
/// Blank names are dropped and the rest trimmed before any check. The result
/// is fully determined by roster order, target and format.
pub fn build_schedule<S: AsRef<str>>(
    roster: &[S],
    games_per_player: u32,
    format: Format,
) -> Result<Schedule, ScheduleError> {
    let roster = normalize_roster(roster)?;

    if games_per_player == 0 {
        return Err(ScheduleError::ZeroTarget);
    }
    if roster.len() < format.min_players() {
        return Err(ScheduleError::RosterTooSmall {
            format,
            required: format.min_players(),
            actual: roster.len(),
        });
    }

    let schedule = match format {
        Format::Singles => run(&roster, games_per_player, format, SinglesSelector),
        Format::Doubles => run(
            &roster,
            games_per_player,
            format,
            DoublesSelector::new(roster.len()),
        ),
    };

    match schedule.termination {
        Termination::Complete => log::info!(
            "scheduled {} {} games for {} players at {} each",
            schedule.fixtures.len(),
            format,
            roster.len(),
            games_per_player
        ),
        Termination::Exhausted { iterations } => log::warn!(
            "{} schedule stopped after {} iterations with {} games; some players are short of {}",
            format,
            iterations,
            schedule.fixtures.len(),
            games_per_player
        ),
    }

    Ok(schedule)
}

/// Generate the fixture list, or an empty list when the roster or target
/// rules out scheduling.
pub fn generate_schedule<S: AsRef<str>>(
    roster: &[S],
    games_per_player: u32,
    format: Format,
) -> Vec<Fixture> {
    match build_schedule(roster, games_per_player, format) {
        Ok(schedule) => schedule.fixtures,
        Err(err) => {
            log::warn!("cannot schedule: {}", err);
            Vec::new()
        }
    }
}

fn run<S: Selector>(roster: &[String], target: u32, format: Format, mut selector: S) -> Schedule {
    let mut counters = FairnessCounters::new(roster.len());
    let mut fixtures = Vec::new();

    for _ in 0..MAX_ITERATIONS {
        let needy = counters.needy(target);
        if needy.len() < format.players_per_fixture() {
            return Schedule {
                fixtures,
                termination: Termination::Complete,
            };
        }

        let Some(pick) = selector.select(&needy, &counters) else {
            break;
        };

        let game_number = fixtures.len() as u32 + 1;
        let fixture = build_fixture(roster, game_number, pick);
        log::debug!(
            "game {}: {:?}, sitting out {:?}",
            game_number,
            fixture.matchup,
            fixture.sitting_out
        );
        fixtures.push(fixture);

        match pick {
            Pick::Singles(a, b) => counters.record_singles(a, b),
            Pick::Doubles(team1, team2) => counters.record_doubles(team1, team2),
        }
    }

    let termination = if counters.needy(target).len() < format.players_per_fixture() {
        Termination::Complete
    } else {
        Termination::Exhausted {
            iterations: MAX_ITERATIONS,
        }
    };
    Schedule {
        fixtures,
        termination,
    }
}

fn build_fixture(roster: &[String], game_number: u32, pick: Pick) -> Fixture {
    let (matchup, on_court): (Matchup, Vec<usize>) = match pick {
        Pick::Singles(a, b) => (
            Matchup::Singles {
                player1: roster[a].clone(),
                player2: roster[b].clone(),
            },
            vec![a, b],
        ),
        Pick::Doubles(team1, team2) => (
            Matchup::Doubles {
                team1: team1.map(|p| roster[p].clone()),
                team2: team2.map(|p| roster[p].clone()),
            },
            vec![team1[0], team1[1], team2[0], team2[1]],
        ),
    };

    let sitting_out = roster
        .iter()
        .enumerate()
        .filter(|(idx, _)| !on_court.contains(idx))
        .map(|(_, name)| name.clone())
        .collect();

    Fixture::new(game_number, matchup, sitting_out)
}
