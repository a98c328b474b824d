use std::collections::BTreeMap;

use crate::input::InputBundle;
use crate::markers::MarkerWeights;
use crate::model::scores::ScoredUtterance;

/// Fixed-width score histogram. Bins are identified by a quantized integer
/// index so iteration order is numeric, and the lower bound is recovered as
/// `index * bin_width` only when reporting.
#[derive(Debug, Clone)]
pub struct Histogram {
    bin_width: f64,
    counts: BTreeMap<i64, u64>,
    total: u64,
}

impl Histogram {
    pub fn new(bin_width: f64) -> Self {
        Self {
            bin_width,
            counts: BTreeMap::new(),
            total: 0,
        }
    }

    // Floor toward negative infinity: with width 0.02, -0.03 belongs to the
    // -0.04 bin, not -0.02.
    fn bin_index(&self, score: f64) -> i64 {
        (score / self.bin_width).floor() as i64
    }

    pub fn bucket_key(&self, score: f64) -> f64 {
        self.bin_index(score) as f64 * self.bin_width
    }

    pub fn add(&mut self, score: f64) {
        *self.counts.entry(self.bin_index(score)).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Bin lower bound and relative frequency, ascending by bin. Empty when
    /// nothing was added.
    pub fn frequencies(&self) -> Vec<(f64, f64)> {
        if self.total == 0 {
            return Vec::new();
        }
        let total = self.total as f64;
        self.counts
            .iter()
            .map(|(&idx, &count)| (idx as f64 * self.bin_width, count as f64 / total))
            .collect()
    }
}

/// Pre-labeled (name, value) pairs echoed as percentage-scaled frequencies.
/// One value per label, no binning; distinct from bucketed histogramming.
#[derive(Debug, Clone)]
pub struct LabeledFrequencies {
    entries: Vec<(String, f64)>,
}

impl LabeledFrequencies {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    pub fn percentages(&self) -> Vec<(String, f64)> {
        self.entries
            .iter()
            .map(|(label, value)| (label.clone(), value * 100.0))
            .collect()
    }
}

#[derive(Debug)]
pub struct Stage4Output {
    pub histogram: Histogram,
    pub marker_means: LabeledFrequencies,
}

pub fn run_stage4(
    bundle: &InputBundle,
    scored: &[ScoredUtterance],
    weights: &MarkerWeights,
    bin_width: f64,
) -> Stage4Output {
    let mut histogram = Histogram::new(bin_width);
    for item in scored {
        histogram.add(item.score);
    }

    let n = bundle.utterances.len();
    let mut means = Vec::with_capacity(weights.len());
    for entry in weights.entries() {
        let sum: f64 = bundle
            .utterances
            .iter()
            .map(|u| u.markers.get(entry.id.as_str()).copied().unwrap_or(0.0))
            .sum();
        let mean = if n == 0 { 0.0 } else { sum / n as f64 };
        means.push((entry.label.clone(), mean));
    }

    Stage4Output {
        histogram,
        marker_means: LabeledFrequencies::new(means),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_histogram.rs"]
mod tests;
