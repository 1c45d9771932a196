//! Balance counters used while a schedule is being built
//!
//! Players are addressed by their roster index, so every counter is a flat
//! vector and a lookup can never miss.

/// Symmetric `n × n` count matrix over unordered player pairs.
#[derive(Clone, Debug)]
pub(crate) struct PairMatrix {
    size: usize,
    counts: Vec<u32>,
}

impl PairMatrix {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            counts: vec![0; size * size],
        }
    }

    pub fn get(&self, a: usize, b: usize) -> u32 {
        self.counts[a * self.size + b]
    }

    pub fn increment(&mut self, a: usize, b: usize) {
        debug_assert_ne!(a, b, "pair counters never track a player with itself");
        self.counts[a * self.size + b] += 1;
        self.counts[b * self.size + a] += 1;
    }

    /// Number of distinct players `a` has a non-zero count with.
    pub fn distinct(&self, a: usize) -> usize {
        let row = &self.counts[a * self.size..(a + 1) * self.size];
        row.iter().filter(|&&c| c > 0).count()
    }
}

/// Per-player games played plus the pair matrices for one format.
#[derive(Clone, Debug)]
pub(crate) struct FairnessCounters {
    games: Vec<u32>,
    /// Singles: meetings. Doubles: times on opposite teams.
    pub opposition: PairMatrix,
    /// Doubles only: times on the same team.
    pub partnership: PairMatrix,
}

impl FairnessCounters {
    pub fn new(size: usize) -> Self {
        Self {
            games: vec![0; size],
            opposition: PairMatrix::new(size),
            partnership: PairMatrix::new(size),
        }
    }

    pub fn roster_len(&self) -> usize {
        self.games.len()
    }

    pub fn games(&self, player: usize) -> u32 {
        self.games[player]
    }

    /// Roster indices still below `target`, in roster order.
    pub fn needy(&self, target: u32) -> Vec<usize> {
        (0..self.games.len())
            .filter(|&p| self.games[p] < target)
            .collect()
    }

    pub fn record_singles(&mut self, a: usize, b: usize) {
        self.games[a] += 1;
        self.games[b] += 1;
        self.opposition.increment(a, b);
    }

    pub fn record_doubles(&mut self, team1: [usize; 2], team2: [usize; 2]) {
        for &p in team1.iter().chain(team2.iter()) {
            self.games[p] += 1;
        }
        self.partnership.increment(team1[0], team1[1]);
        self.partnership.increment(team2[0], team2[1]);
        for &a in &team1 {
            for &b in &team2 {
                self.opposition.increment(a, b);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_is_symmetric() {
        let mut m = PairMatrix::new(4);
        m.increment(0, 3);
        m.increment(3, 0);
        assert_eq!(m.get(0, 3), 2);
        assert_eq!(m.get(3, 0), 2);
        assert_eq!(m.get(1, 2), 0);
    }

    #[test]
    fn test_distinct_counts_nonzero_entries() {
        let mut m = PairMatrix::new(5);
        m.increment(0, 1);
        m.increment(0, 1);
        m.increment(0, 4);
        assert_eq!(m.distinct(0), 2);
        assert_eq!(m.distinct(1), 1);
        assert_eq!(m.distinct(2), 0);
    }

    #[test]
    fn test_doubles_updates_all_counters() {
        let mut c = FairnessCounters::new(5);
        c.record_doubles([0, 1], [2, 3]);

        for p in 0..4 {
            assert_eq!(c.games(p), 1);
        }
        assert_eq!(c.games(4), 0);
        assert_eq!(c.partnership.get(0, 1), 1);
        assert_eq!(c.partnership.get(2, 3), 1);
        assert_eq!(c.partnership.get(0, 2), 0);
        for a in [0, 1] {
            for b in [2, 3] {
                assert_eq!(c.opposition.get(a, b), 1);
                assert_eq!(c.opposition.get(b, a), 1);
            }
        }
        assert_eq!(c.opposition.get(0, 1), 0);
    }

    #[test]
    fn test_needy_tracks_target() {
        let mut c = FairnessCounters::new(3);
        c.record_singles(0, 1);
        assert_eq!(c.needy(1), vec![2]);
        assert_eq!(c.needy(2), vec![0, 1, 2]);
    }
}
