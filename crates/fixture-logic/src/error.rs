//! Error types for scheduling, result recording and configuration

use thiserror::Error;

use crate::fixture::Winner;
use crate::format::Format;

/// Reasons a schedule cannot be built.
///
/// `generate_schedule` collapses all of these into an empty fixture list;
/// `build_schedule` hands them back so the caller can word a message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("{format} needs at least {required} players, got {actual}")]
    RosterTooSmall {
        format: Format,
        required: usize,
        actual: usize,
    },

    #[error("games per player must be at least 1")]
    ZeroTarget,

    #[error("player {0:?} appears more than once in the roster")]
    DuplicatePlayer(String),

    #[error("{player_count} players at {games_per_player} games each is too many games to count")]
    GameCountOverflow {
        player_count: u32,
        games_per_player: u32,
    },
}

/// Reasons a reported result is refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResultError {
    #[error("unknown winner token {0:?}")]
    UnknownWinner(String),

    #[error("winner {winner} is not valid for a {format} fixture")]
    WinnerMismatch { winner: Winner, format: Format },

    #[error("game {0} has already been completed")]
    AlreadyCompleted(u32),

    #[error("game {got} reported but game {expected} is next")]
    OutOfOrder { expected: u32, got: u32 },

    #[error("every game in the schedule has been played")]
    ScheduleFinished,

    #[error("player {0:?} has no standings entry")]
    UnknownPlayer(String),

    #[error("consolation percent {0} exceeds 100")]
    InvalidConsolation(u8),

    #[error("standings for player {0:?} would overflow")]
    StandingsOverflow(String),
}

/// Invalid tournament configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("games per player must be at least 1")]
    ZeroTarget,

    #[error("point value must be at least 1")]
    ZeroPointValue,

    #[error("consolation percent {0} exceeds 100")]
    ConsolationTooLarge(u8),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Umbrella error for callers that drive the whole tournament.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("unknown format {0:?}, expected \"1v1\" or \"2v2\"")]
    UnknownFormat(String),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Result(#[from] ResultError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
