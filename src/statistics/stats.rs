pub struct Stats {
    expansions: usize,
    dead_ends: usize,
    tokens_spent: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            expansions: 0,
            dead_ends: 0,
            tokens_spent: 0,
        }
    }

    /// Record into the statistics object that a vertex was expanded during a
    /// depth-first walk
    pub fn bump_expansions(&mut self) {
        self.expansions += 1
    }

    /// Record into the statistics object that a branch starved and was
    /// abandoned
    pub fn bump_dead_ends(&mut self) {
        self.dead_ends += 1
    }

    /// Record into the statistics object that a food token was spent at a
    /// location during a feasibility walk
    pub fn bump_tokens_spent(&mut self) {
        self.tokens_spent += 1
    }

    pub fn get_expansions(&self) -> usize {
        self.expansions
    }

    pub fn get_dead_ends(&self) -> usize {
        self.dead_ends
    }

    pub fn get_tokens_spent(&self) -> usize {
        self.tokens_spent
    }

    /// Combine the counters of two stats objects, e.g. to aggregate over a
    /// batch of queries
    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            expansions: self.expansions + other.expansions,
            dead_ends: self.dead_ends + other.dead_ends,
            tokens_spent: self.tokens_spent + other.tokens_spent,
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
