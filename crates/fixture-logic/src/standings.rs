//! Running scoreboard
//!
//! A standings table is never edited in place: `record_result` returns a new
//! table, so anyone still holding the old one sees a consistent snapshot.

use core::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, ResultError};
use crate::fixture::{Fixture, Winner};

/// How points are split between the two sides of a finished game.
///
/// `consolation_percent` above 100 is refused by `record_result` and by
/// `TournamentConfig::validate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringPolicy {
    /// Share of the game's point value given to each loser, in percent,
    /// rounded down. 0 turns consolation points off.
    pub consolation_percent: u8,
}

impl ScoringPolicy {
    /// Losers take 30% of the point value.
    pub fn standard() -> Self {
        Self {
            consolation_percent: 30,
        }
    }

    /// Losers take nothing.
    pub fn winner_takes_all() -> Self {
        Self {
            consolation_percent: 0,
        }
    }

    /// Checked constructor for caller-supplied percentages.
    pub fn with_consolation(consolation_percent: u8) -> Result<Self, ConfigError> {
        let policy = Self {
            consolation_percent,
        };
        if !policy.is_valid() {
            return Err(ConfigError::ConsolationTooLarge(consolation_percent));
        }
        Ok(policy)
    }

    pub fn is_valid(&self) -> bool {
        self.consolation_percent <= 100
    }

    /// Loser award for a game worth `point_value`. Never more than
    /// `point_value`.
    pub fn consolation(&self, point_value: u32) -> u32 {
        let percent = u64::from(self.consolation_percent.min(100));
        // percent <= 100 keeps the quotient within u32
        (u64::from(point_value) * percent / 100) as u32
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// One player's line on the scoreboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsEntry {
    pub games_played: u32,
    pub wins: u32,
    pub points: u32,
    /// `wins / games_played * 100`, or 0 before the first game
    pub win_percentage: f64,
}

impl StandingsEntry {
    /// The entry after one more game, or `None` if a counter would overflow.
    fn record(&self, won: bool, points: u32) -> Option<Self> {
        let games_played = self.games_played.checked_add(1)?;
        let wins = self.wins.checked_add(u32::from(won))?;
        let points = self.points.checked_add(points)?;
        Some(Self {
            games_played,
            wins,
            points,
            win_percentage: win_percentage(wins, games_played),
        })
    }
}

fn win_percentage(wins: u32, games_played: u32) -> f64 {
    if games_played == 0 {
        0.0
    } else {
        wins as f64 / games_played as f64 * 100.0
    }
}

/// Scoreboard for every roster member, kept in roster order.
///
/// Serialized as a JSON object keyed by player name, entries in roster order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Standings {
    entries: Vec<(String, StandingsEntry)>,
}

impl Standings {
    pub fn get(&self, name: &str) -> Option<&StandingsEntry> {
        self.entries
            .iter()
            .find(|(player, _)| player == name)
            .map(|(_, entry)| entry)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut StandingsEntry> {
        self.entries
            .iter_mut()
            .find(|(player, _)| player == name)
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StandingsEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

impl Serialize for Standings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

struct StandingsVisitor;

impl<'de> Visitor<'de> for StandingsVisitor {
    type Value = Standings;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of player name to standings entry")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, StandingsEntry)> =
            Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, entry)) = map.next_entry::<String, StandingsEntry>()? {
            if entries.iter().any(|(player, _)| *player == name) {
                return Err(de::Error::custom(format_args!(
                    "duplicate standings entry for player {:?}",
                    name
                )));
            }
            entries.push((name, entry));
        }
        Ok(Standings { entries })
    }
}

impl<'de> Deserialize<'de> for Standings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StandingsVisitor)
    }
}

/// Zeroed entry for every non-blank roster name.
pub fn initialize_standings<S: AsRef<str>>(roster: &[S]) -> Standings {
    let mut entries: Vec<(String, StandingsEntry)> = Vec::with_capacity(roster.len());
    for name in roster {
        let name = name.as_ref().trim();
        if name.is_empty() || entries.iter().any(|(player, _)| player == name) {
            continue;
        }
        entries.push((name.to_string(), StandingsEntry::default()));
    }
    Standings { entries }
}

/// Fold one game's outcome into a fresh copy of `standings`.
///
/// Every winner gets a win, a game and `point_value` points; every loser gets
/// a game and the policy's consolation share. Players sitting out are
/// untouched. The fixture itself is not modified: marking it completed is the
/// caller's half of the transition. On any error the input table is the only
/// table; nothing partially updated escapes.
pub fn record_result(
    standings: &Standings,
    fixture: &Fixture,
    winner: Winner,
    point_value: u32,
    policy: &ScoringPolicy,
) -> Result<Standings, ResultError> {
    if fixture.completed {
        return Err(ResultError::AlreadyCompleted(fixture.game_number));
    }
    fixture.check_winner(winner)?;
    if !policy.is_valid() {
        return Err(ResultError::InvalidConsolation(policy.consolation_percent));
    }

    let consolation = policy.consolation(point_value);
    let mut updated = standings.clone();

    let sides = [
        (fixture.winners(winner), true, point_value),
        (fixture.losers(winner), false, consolation),
    ];
    for (names, won, points) in sides {
        for name in names {
            let entry = updated
                .get_mut(name)
                .ok_or_else(|| ResultError::UnknownPlayer(name.clone()))?;
            *entry = entry
                .record(won, points)
                .ok_or_else(|| ResultError::StandingsOverflow(name.clone()))?;
        }
    }

    log::debug!(
        "game {}: {} won, {} points each, {} consolation",
        fixture.game_number,
        fixture.winners(winner).join(" & "),
        point_value,
        consolation
    );

    Ok(updated)
}

/// Leaderboard order: points, then win percentage, both descending. Players
/// level on both keep roster order.
pub fn rank_standings(standings: &Standings) -> Vec<(String, StandingsEntry)> {
    let mut ranked = standings.entries.clone();
    ranked.sort_by(|(_, a), (_, b)| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.win_percentage.total_cmp(&a.win_percentage))
    });
    ranked
}
