//! Match formats

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FixtureError;

/// Game format for a whole tournament.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Format {
    /// One player against one player.
    #[serde(rename = "1v1")]
    Singles,
    /// Two teams of two.
    #[default]
    #[serde(rename = "2v2")]
    Doubles,
}

impl Format {
    /// Smallest roster the scheduler accepts for this format.
    pub fn min_players(self) -> usize {
        match self {
            Format::Singles => 3,
            Format::Doubles => 4,
        }
    }

    /// Number of players on court in one fixture.
    pub fn players_per_fixture(self) -> usize {
        match self {
            Format::Singles => 2,
            Format::Doubles => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Singles => "1v1",
            Format::Doubles => "2v2",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1v1" => Ok(Format::Singles),
            "2v2" => Ok(Format::Doubles),
            other => Err(FixtureError::UnknownFormat(other.to_string())),
        }
    }
}
