//! 2v2 pairing rule

use crate::fairness::FairnessCounters;
use crate::schedule::{Pick, Selector};

type Teams = ([usize; 2], [usize; 2]);

/// Picks the next 2v2 game from the needy players.
///
/// Every ordered choice of two disjoint pairs is enumerated once up front,
/// `(i < j)` for team 1 and `(k < l)` for team 2 in roster order. Each round
/// the list is filtered down to candidates made only of needy players and the
/// lowest `(games already played, repeat interactions)` score wins, earliest
/// candidate on ties.
#[derive(Clone, Debug)]
pub(crate) struct DoublesSelector {
    candidates: Vec<Teams>,
}

impl DoublesSelector {
    pub fn new(roster_len: usize) -> Self {
        let n = roster_len;
        let mut candidates = Vec::new();
        for i in 0..n {
            for j in i + 1..n {
                for k in 0..n {
                    for l in k + 1..n {
                        if k != i && k != j && l != i && l != j {
                            candidates.push(([i, j], [k, l]));
                        }
                    }
                }
            }
        }
        Self { candidates }
    }

    #[cfg(test)]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }
}

/// Primary key: total games already played by the four players.
fn games_score(counters: &FairnessCounters, (team1, team2): &Teams) -> u32 {
    team1
        .iter()
        .chain(team2.iter())
        .map(|&p| counters.games(p))
        .sum()
}

/// Secondary key: both partnerships plus the four cross-team oppositions.
fn interaction_score(counters: &FairnessCounters, (team1, team2): &Teams) -> u32 {
    let partners = counters.partnership.get(team1[0], team1[1])
        + counters.partnership.get(team2[0], team2[1]);
    let opponents: u32 = team1
        .iter()
        .flat_map(|&a| team2.iter().map(move |&b| (a, b)))
        .map(|(a, b)| counters.opposition.get(a, b))
        .sum();
    partners + opponents
}

impl Selector for DoublesSelector {
    fn select(&mut self, needy: &[usize], counters: &FairnessCounters) -> Option<Pick> {
        let mut is_needy = vec![false; counters.roster_len()];
        for &p in needy {
            is_needy[p] = true;
        }

        self.candidates
            .iter()
            .filter(|(team1, team2)| team1.iter().chain(team2.iter()).all(|&p| is_needy[p]))
            .min_by_key(|teams| (games_score(counters, teams), interaction_score(counters, teams)))
            .map(|&(team1, team2)| Pick::Doubles(team1, team2))
    }
}
