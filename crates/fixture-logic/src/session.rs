//! One tournament from schedule to final leaderboard
//!
//! Results are accepted strictly in schedule order: only the fixture under the
//! cursor can be completed, and only once.

use serde::{Deserialize, Serialize};

use crate::config::TournamentConfig;
use crate::error::{FixtureError, ResultError};
use crate::fixture::{Fixture, Winner};
use crate::roster::normalize_roster;
use crate::schedule::{build_schedule, Termination};
use crate::standings::{
    initialize_standings, rank_standings, record_result, Standings, StandingsEntry,
};

/// Live tournament state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSession {
    config: TournamentConfig,
    roster: Vec<String>,
    fixtures: Vec<Fixture>,
    termination: Termination,
    standings: Standings,
    /// Index of the fixture awaiting a result or an `advance`
    current: usize,
}

impl TournamentSession {
    /// Schedule the roster and open the first game.
    pub fn start<S: AsRef<str>>(
        roster: &[S],
        config: TournamentConfig,
    ) -> Result<Self, FixtureError> {
        config.validate()?;
        let roster = normalize_roster(roster)?;
        let schedule = build_schedule(&roster, config.games_per_player, config.format)?;
        let standings = initialize_standings(&roster);

        log::info!(
            "tournament started: {} players, {} games",
            roster.len(),
            schedule.fixtures.len()
        );

        Ok(Self {
            config,
            roster,
            fixtures: schedule.fixtures,
            termination: schedule.termination,
            standings,
            current: 0,
        })
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn standings(&self) -> &Standings {
        &self.standings
    }

    /// Fixture under the cursor, `None` once every game is done.
    pub fn current_fixture(&self) -> Option<&Fixture> {
        self.fixtures.get(self.current)
    }

    /// (completed games, total games)
    pub fn progress(&self) -> (usize, usize) {
        let done = self.fixtures.iter().filter(|f| f.completed).count();
        (done, self.fixtures.len())
    }

    pub fn is_finished(&self) -> bool {
        self.fixtures.iter().all(|f| f.completed)
    }

    /// Record the winner of `game_number`, which must be the current game.
    pub fn record_result(
        &mut self,
        game_number: u32,
        winner: Winner,
    ) -> Result<&StandingsEntry, ResultError> {
        let fixture = self
            .fixtures
            .get(self.current)
            .ok_or(ResultError::ScheduleFinished)?;

        if fixture.game_number != game_number {
            if self
                .fixtures
                .iter()
                .any(|f| f.game_number == game_number && f.completed)
            {
                return Err(ResultError::AlreadyCompleted(game_number));
            }
            return Err(ResultError::OutOfOrder {
                expected: fixture.game_number,
                got: game_number,
            });
        }

        let standings = record_result(
            &self.standings,
            fixture,
            winner,
            self.config.point_value,
            &self.config.scoring,
        )?;

        let fixture = &mut self.fixtures[self.current];
        fixture.completed = true;
        fixture.winner = Some(winner);
        self.standings = standings;

        let lead = &fixture.winners(winner)[0];
        self.standings
            .get(lead)
            .ok_or_else(|| ResultError::UnknownPlayer(lead.clone()))
    }

    /// Move the cursor past a completed game. Returns `true` when the
    /// tournament is over.
    pub fn advance(&mut self) -> Result<bool, ResultError> {
        let fixture = self
            .fixtures
            .get(self.current)
            .ok_or(ResultError::ScheduleFinished)?;
        if !fixture.completed {
            return Err(ResultError::OutOfOrder {
                expected: fixture.game_number,
                got: fixture.game_number + 1,
            });
        }
        self.current += 1;
        Ok(self.current >= self.fixtures.len())
    }

    /// Current leaderboard, best first.
    pub fn leaderboard(&self) -> Vec<(String, StandingsEntry)> {
        rank_standings(&self.standings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::fixture::Matchup;

    fn three_player_singles() -> TournamentSession {
        TournamentSession::start(&["A", "B", "C"], TournamentConfig::singles(2)).unwrap()
    }

    #[test]
    fn test_start() {
        let session = three_player_singles();
        assert_eq!(session.fixtures().len(), 3);
        assert_eq!(session.progress(), (0, 3));
        assert_eq!(session.current_fixture().unwrap().game_number, 1);
        assert_eq!(session.standings().len(), 3);
        assert_eq!(session.termination(), Termination::Complete);
    }

    #[test]
    fn test_start_refuses_small_roster() {
        let err = TournamentSession::start(&["A", "B"], TournamentConfig::singles(2)).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Schedule(ScheduleError::RosterTooSmall { .. })
        ));
    }

    #[test]
    fn test_record_in_order() {
        let mut session = three_player_singles();
        let entry = *session.record_result(1, Winner::Player1).unwrap();
        assert_eq!((entry.wins, entry.points), (1, 11));

        let game = &session.fixtures()[0];
        assert!(game.completed);
        assert_eq!(game.winner, Some(Winner::Player1));
        assert_eq!(session.progress(), (1, 3));
    }

    #[test]
    fn test_duplicate_result_rejected() {
        let mut session = three_player_singles();
        session.record_result(1, Winner::Player1).unwrap();
        assert_eq!(
            session.record_result(1, Winner::Player2),
            Err(ResultError::AlreadyCompleted(1))
        );
        session.advance().unwrap();
        assert_eq!(
            session.record_result(1, Winner::Player2),
            Err(ResultError::AlreadyCompleted(1))
        );
        assert_eq!(session.standings().get("A").unwrap().games_played, 1);
    }

    #[test]
    fn test_out_of_order_rejected() {
        let mut session = three_player_singles();
        assert_eq!(
            session.record_result(2, Winner::Player1),
            Err(ResultError::OutOfOrder { expected: 1, got: 2 })
        );
        assert_eq!(session.progress(), (0, 3));
    }

    #[test]
    fn test_wrong_format_token_leaves_state_alone() {
        let mut session = three_player_singles();
        let before = session.clone();
        assert!(matches!(
            session.record_result(1, Winner::Team1),
            Err(ResultError::WinnerMismatch { .. })
        ));
        assert_eq!(session, before);
    }

    #[test]
    fn test_advance_requires_result() {
        let mut session = three_player_singles();
        assert!(session.advance().is_err());
    }

    #[test]
    fn test_full_run_to_leaderboard() {
        let mut session =
            TournamentSession::start(&["A", "B", "C", "D"], TournamentConfig::doubles(3)).unwrap();
        assert_eq!(session.fixtures().len(), 3);

        let mut finished = false;
        while !finished {
            let game = session.current_fixture().unwrap().clone();
            // Whoever has A on their team wins.
            let winner = match &game.matchup {
                Matchup::Doubles { team1, .. } if team1.contains(&"A".to_string()) => Winner::Team1,
                _ => Winner::Team2,
            };
            session.record_result(game.game_number, winner).unwrap();
            finished = session.advance().unwrap();
        }

        assert!(session.is_finished());
        assert!(session.current_fixture().is_none());
        assert_eq!(
            session.record_result(4, Winner::Team1),
            Err(ResultError::ScheduleFinished)
        );

        let board = session.leaderboard();
        assert_eq!(board[0].0, "A");
        assert_eq!(board[0].1.points, 33);
        assert_eq!(board[0].1.win_percentage, 100.0);
        let total_games: u32 = board.iter().map(|(_, e)| e.games_played).sum();
        assert_eq!(total_games, 12);
    }
}
