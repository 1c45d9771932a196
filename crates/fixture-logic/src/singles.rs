//! 1v1 pairing rule

use crate::fairness::FairnessCounters;
use crate::schedule::{Pick, Selector};

/// Picks the next 1v1 game from the needy players.
///
/// Players are searched in order of games played, then distinct opponents
/// faced (both ascending, roster order on ties). The first pair in that order
/// that has never met wins; when every needy pair has already met, the first
/// pair with the fewest meetings is repeated.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SinglesSelector;

impl Selector for SinglesSelector {
    fn select(&mut self, needy: &[usize], counters: &FairnessCounters) -> Option<Pick> {
        let mut order = needy.to_vec();
        order.sort_by_key(|&p| (counters.games(p), counters.opposition.distinct(p)));

        let mut best: Option<(u32, usize, usize)> = None;
        for (i, &a) in order.iter().enumerate() {
            for &b in &order[i + 1..] {
                let met = counters.opposition.get(a, b);
                if best.map_or(true, |(fewest, _, _)| met < fewest) {
                    best = Some((met, a, b));
                    if met == 0 {
                        return Some(Pick::Singles(a, b));
                    }
                }
            }
        }

        best.map(|(_, a, b)| Pick::Singles(a, b))
    }
}
