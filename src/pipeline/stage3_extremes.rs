use crate::model::scores::ScoredUtterance;

/// Bounded tracker for the K highest and K lowest scored utterances in a
/// stream. Both sets are kept sorted ascending by score; equal scores are
/// kept as distinct entries in insertion order, so ties never collapse.
#[derive(Debug, Clone)]
pub struct ExtremalTracker {
    k: usize,
    highest: Vec<ScoredUtterance>,
    lowest: Vec<ScoredUtterance>,
}

impl ExtremalTracker {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            highest: Vec::with_capacity(k),
            lowest: Vec::with_capacity(k),
        }
    }

    pub fn insert(&mut self, item: ScoredUtterance) {
        if self.k == 0 {
            return;
        }
        self.insert_highest(item.clone());
        self.insert_lowest(item);
    }

    fn insert_highest(&mut self, item: ScoredUtterance) {
        if self.highest.len() == self.k {
            // At capacity the weakest member sits at index 0; admission is
            // strict, so an item tying the current floor is rejected.
            if item.score <= self.highest[0].score {
                return;
            }
            self.highest.remove(0);
        }
        let pos = self.highest.partition_point(|e| e.score <= item.score);
        self.highest.insert(pos, item);
    }

    fn insert_lowest(&mut self, item: ScoredUtterance) {
        if self.lowest.len() == self.k {
            let ceiling = self.lowest[self.lowest.len() - 1].score;
            if item.score >= ceiling {
                return;
            }
            self.lowest.pop();
        }
        let pos = self.lowest.partition_point(|e| e.score <= item.score);
        self.lowest.insert(pos, item);
    }

    /// Highest-scored items, descending. Repeatable read; never drains.
    pub fn highest(&self) -> Vec<ScoredUtterance> {
        self.highest.iter().rev().cloned().collect()
    }

    /// Lowest-scored items, ascending. Repeatable read; never drains.
    pub fn lowest(&self) -> Vec<ScoredUtterance> {
        self.lowest.clone()
    }
}

#[derive(Debug)]
pub struct Stage3Output {
    pub highest: Vec<ScoredUtterance>,
    pub lowest: Vec<ScoredUtterance>,
}

pub fn run_stage3(scored: &[ScoredUtterance], k: usize) -> Stage3Output {
    let mut tracker = ExtremalTracker::new(k);
    for item in scored {
        tracker.insert(item.clone());
    }
    Stage3Output {
        highest: tracker.highest(),
        lowest: tracker.lowest(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_extremes.rs"]
mod tests;
