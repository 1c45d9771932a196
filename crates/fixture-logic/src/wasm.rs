//! WASM bindings for the tournament front end

#![cfg(feature = "wasm")]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::fixture::{Fixture, Winner};
use crate::format::Format;
use crate::planning::{games_per_player_options, total_games};
use crate::schedule::build_schedule;
use crate::standings::{
    initialize_standings, rank_standings, record_result, ScoringPolicy, Standings,
};

fn parse_format(format: &str) -> Result<Format, JsError> {
    format
        .parse::<Format>()
        .map_err(|e| JsError::new(&e.to_string()))
}

fn parse_roster(roster: &js_sys::Array) -> Result<Vec<String>, JsError> {
    roster
        .iter()
        .map(|value| {
            value
                .as_string()
                .ok_or_else(|| JsError::new("Roster must be an array of names"))
        })
        .collect()
}

/// Plain JS objects rather than `Map`s, so the UI can index standings by name.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Build the balanced schedule
///
/// # Arguments
/// * `roster` - Array of player names (blank entries are ignored)
/// * `games_per_player` - Target games for each player
/// * `format` - `"1v1"` or `"2v2"`
///
/// # Returns
/// `{fixtures: [...], termination: {kind: "complete" | "exhausted", ...}}`.
/// Throws with a readable message when the roster or target rules the
/// schedule out.
#[wasm_bindgen]
pub fn generate_fixtures(
    roster: js_sys::Array,
    games_per_player: u32,
    format: &str,
) -> Result<JsValue, JsError> {
    let roster = parse_roster(&roster)?;
    let format = parse_format(format)?;

    let schedule = build_schedule(&roster, games_per_player, format)
        .map_err(|e| JsError::new(&e.to_string()))?;

    to_js(&schedule)
}

/// Zeroed standings keyed by player name
#[wasm_bindgen]
pub fn init_standings(roster: js_sys::Array) -> Result<JsValue, JsError> {
    let roster = parse_roster(&roster)?;
    to_js(&initialize_standings(&roster))
}

/// Apply one result and return the new standings
///
/// The input standings object is not modified. `consolation_percent` of 30
/// matches the default scoring; pass 0 for winner-takes-all. Values above
/// 100 are refused.
#[wasm_bindgen]
pub fn apply_result(
    standings: JsValue,
    fixture: JsValue,
    winner: &str,
    point_value: u32,
    consolation_percent: u8,
) -> Result<JsValue, JsError> {
    let standings: Standings = serde_wasm_bindgen::from_value(standings)
        .map_err(|e| JsError::new(&format!("Invalid standings: {}", e)))?;
    let fixture: Fixture = serde_wasm_bindgen::from_value(fixture)
        .map_err(|e| JsError::new(&format!("Invalid fixture: {}", e)))?;
    let winner: Winner = winner
        .parse()
        .map_err(|e: crate::error::ResultError| JsError::new(&e.to_string()))?;
    let policy = ScoringPolicy::with_consolation(consolation_percent)
        .map_err(|e| JsError::new(&e.to_string()))?;

    let updated = record_result(&standings, &fixture, winner, point_value, &policy)
        .map_err(|e| JsError::new(&e.to_string()))?;

    to_js(&updated)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeaderboardRow {
    rank: usize,
    player: String,
    points: u32,
    games_played: u32,
    wins: u32,
    win_percentage: f64,
}

/// Ranked rows for the leaderboard table
#[wasm_bindgen]
pub fn leaderboard(standings: JsValue) -> Result<JsValue, JsError> {
    let standings: Standings = serde_wasm_bindgen::from_value(standings)
        .map_err(|e| JsError::new(&format!("Invalid standings: {}", e)))?;

    let rows: Vec<LeaderboardRow> = rank_standings(&standings)
        .into_iter()
        .enumerate()
        .map(|(idx, (player, entry))| LeaderboardRow {
            rank: idx + 1,
            player,
            points: entry.points,
            games_played: entry.games_played,
            wins: entry.wins,
            win_percentage: entry.win_percentage,
        })
        .collect();

    to_js(&rows)
}

/// Games-per-player choices for the setup form
#[wasm_bindgen]
pub fn get_games_per_player_options(player_count: u32, format: &str) -> Result<Vec<u32>, JsError> {
    Ok(games_per_player_options(player_count, parse_format(format)?))
}

/// Number of games a full schedule needs
#[wasm_bindgen]
pub fn get_total_games(
    player_count: u32,
    games_per_player: u32,
    format: &str,
) -> Result<u32, JsError> {
    total_games(player_count, games_per_player, parse_format(format)?)
        .map_err(|e| JsError::new(&e.to_string()))
}
