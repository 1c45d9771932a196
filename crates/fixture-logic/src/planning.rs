//! Setup-screen arithmetic: sensible targets and schedule length

use crate::error::ScheduleError;
use crate::format::Format;

/// Smallest games-per-player target worth offering.
///
/// - 1v1: one game against every other player (`n - 1`)
/// - 2v2: 0 below four players, else `max(2, (n - 1) / 2)` so partners can rotate
pub fn min_games_per_player(player_count: u32, format: Format) -> u32 {
    match format {
        Format::Singles => player_count.saturating_sub(1),
        Format::Doubles => {
            if player_count < 4 {
                0
            } else {
                ((player_count - 1) / 2).max(2)
            }
        }
    }
}

/// Targets to offer at setup: the minimum plus up to four steps above it,
/// capped at `2n` for 1v1 and `n` for 2v2. Sorted, no duplicates.
///
/// Both the cap and the steps saturate at `u32::MAX`.
pub fn games_per_player_options(player_count: u32, format: Format) -> Vec<u32> {
    let min = min_games_per_player(player_count, format);
    let cap = match format {
        Format::Singles => player_count.saturating_mul(2),
        Format::Doubles => player_count,
    };

    let mut options = vec![min];
    options.extend(
        (1..=4)
            .filter_map(|step| min.checked_add(step))
            .filter(|&option| option <= cap),
    );
    options.sort_unstable();
    options.dedup();
    options
}

/// Games needed for every player to reach `games_per_player`, rounded up.
pub fn total_games(
    player_count: u32,
    games_per_player: u32,
    format: Format,
) -> Result<u32, ScheduleError> {
    let slots = u64::from(player_count) * u64::from(games_per_player);
    let games = slots.div_ceil(format.players_per_fixture() as u64);
    u32::try_from(games).map_err(|_| ScheduleError::GameCountOverflow {
        player_count,
        games_per_player,
    })
}
