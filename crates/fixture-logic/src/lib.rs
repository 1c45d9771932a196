//! Fixture Logic for Smash Dash
//!
//! Balanced scheduling and standings for small 1v1 and 2v2 tournaments.
//! This crate is compiled to:
//! - Native (for tests and tooling)
//! - WASM (for the browser front end)

mod config;
mod doubles;
mod error;
mod fairness;
mod fixture;
mod format;
mod planning;
mod roster;
mod schedule;
mod session;
mod singles;
mod standings;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::TournamentConfig;
pub use error::{ConfigError, FixtureError, ResultError, ScheduleError};
pub use fixture::{Fixture, Matchup, Winner};
pub use format::Format;
pub use planning::{games_per_player_options, min_games_per_player, total_games};
pub use roster::normalize_roster;
pub use schedule::{build_schedule, generate_schedule, Schedule, Termination, MAX_ITERATIONS};
pub use session::TournamentSession;
pub use standings::{
    initialize_standings, rank_standings, record_result, ScoringPolicy, Standings, StandingsEntry,
};
