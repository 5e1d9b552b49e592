/// Item counts per tier, from tier 0 up to the working tier of a trial.
///
/// Counts are unsigned; every removal the simulator performs is covered by
/// a pair it checked for beforehand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    counts: Vec<u64>,
}

impl Inventory {
    /// An empty inventory able to hold tiers `0..=top`.
    pub fn new(top: usize) -> Self {
        Self {
            counts: vec![0; top + 1],
        }
    }

    /// The highest tier tracked.
    pub fn top(&self) -> usize {
        self.counts.len() - 1
    }

    /// Items held at `level`.
    pub fn count(&self, level: usize) -> u64 {
        self.counts.get(level).copied().unwrap_or(0)
    }

    /// All counts, lowest tier first.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// True once an item of the top tier exists.
    pub fn is_complete(&self) -> bool {
        self.count(self.top()) > 0
    }

    /// Top up tier 0 to a pair. Returns how many base items were bought.
    pub fn restock_base(&mut self) -> u64 {
        let missing = 2u64.saturating_sub(self.counts[0]);
        self.counts[0] += missing;
        missing
    }

    /// Add `n` items at `level`.
    pub fn add(&mut self, level: usize, n: u64) {
        self.counts[level] += n;
    }

    /// Remove `n` items at `level`.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` items are held; a count never goes below zero.
    pub fn take(&mut self, level: usize, n: u64) {
        let held = self.counts[level];
        assert!(held >= n, "taking {n} from tier {level} holding {held}");
        self.counts[level] = held - n;
    }

    /// Pick the tier to fuse next.
    ///
    /// Scans from the top tier down and returns the first tier holding a
    /// pair. Base items are only bought when the scan reaches tier 0, so
    /// nothing is purchased while a higher pair is waiting. Returns the tier
    /// and the number of base items bought to make it.
    pub fn next_pair(&mut self) -> (usize, u64) {
        for level in (0..=self.top()).rev() {
            let bought = if level == 0 { self.restock_base() } else { 0 };
            if self.counts[level] >= 2 {
                return (level, bought);
            }
        }
        // tier 0 always holds a pair after restocking
        (0, 0)
    }
}
