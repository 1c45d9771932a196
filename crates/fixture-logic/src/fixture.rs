//! Scheduled games and winner tokens

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResultError;
use crate::format::Format;

/// Side reported as the winner of a fixture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player1,
    Player2,
    Team1,
    Team2,
}

impl Winner {
    pub fn as_str(self) -> &'static str {
        match self {
            Winner::Player1 => "player1",
            Winner::Player2 => "player2",
            Winner::Team1 => "team1",
            Winner::Team2 => "team2",
        }
    }

    /// Format this token belongs to.
    pub fn format(self) -> Format {
        match self {
            Winner::Player1 | Winner::Player2 => Format::Singles,
            Winner::Team1 | Winner::Team2 => Format::Doubles,
        }
    }

    fn is_first_side(self) -> bool {
        matches!(self, Winner::Player1 | Winner::Team1)
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Winner {
    type Err = ResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player1" => Ok(Winner::Player1),
            "player2" => Ok(Winner::Player2),
            "team1" => Ok(Winner::Team1),
            "team2" => Ok(Winner::Team2),
            other => Err(ResultError::UnknownWinner(other.to_string())),
        }
    }
}

/// Who plays whom in a fixture.
///
/// Flattened into the fixture on the wire, so a singles game carries
/// `player1`/`player2` and a doubles game carries `team1`/`team2`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Matchup {
    Singles { player1: String, player2: String },
    Doubles { team1: [String; 2], team2: [String; 2] },
}

impl Matchup {
    pub fn format(&self) -> Format {
        match self {
            Matchup::Singles { .. } => Format::Singles,
            Matchup::Doubles { .. } => Format::Doubles,
        }
    }

    /// First side followed by second side.
    fn sides(&self) -> (&[String], &[String]) {
        match self {
            Matchup::Singles { player1, player2 } => {
                (core::slice::from_ref(player1), core::slice::from_ref(player2))
            }
            Matchup::Doubles { team1, team2 } => (team1.as_slice(), team2.as_slice()),
        }
    }
}

/// One scheduled game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    /// 1-based position in the schedule
    pub game_number: u32,
    #[serde(flatten)]
    pub matchup: Matchup,
    pub sitting_out: Vec<String>,
    pub completed: bool,
    pub winner: Option<Winner>,
}

impl Fixture {
    pub fn new(game_number: u32, matchup: Matchup, sitting_out: Vec<String>) -> Self {
        Self {
            game_number,
            matchup,
            sitting_out,
            completed: false,
            winner: None,
        }
    }

    pub fn format(&self) -> Format {
        self.matchup.format()
    }

    /// Everyone on court, first side first.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        let (first, second) = self.matchup.sides();
        first.iter().chain(second.iter()).map(String::as_str)
    }

    pub fn involves(&self, name: &str) -> bool {
        self.participants().any(|p| p == name)
    }

    /// Whether `winner` names a side of this fixture.
    pub fn accepts(&self, winner: Winner) -> bool {
        winner.format() == self.format()
    }

    /// Check `winner` against this fixture's format.
    pub fn check_winner(&self, winner: Winner) -> Result<(), ResultError> {
        if self.accepts(winner) {
            Ok(())
        } else {
            Err(ResultError::WinnerMismatch {
                winner,
                format: self.format(),
            })
        }
    }

    /// Players on the side named by `winner`.
    pub fn winners(&self, winner: Winner) -> &[String] {
        let (first, second) = self.matchup.sides();
        if winner.is_first_side() {
            first
        } else {
            second
        }
    }

    /// Players on the other side.
    pub fn losers(&self, winner: Winner) -> &[String] {
        let (first, second) = self.matchup.sides();
        if winner.is_first_side() {
            second
        } else {
            first
        }
    }
}
