use std::collections::HashMap;

use crate::input::InputBundle;
use crate::markers::MarkerWeights;
use crate::model::profile::NormalizationPolicy;
use crate::model::scores::ScoredUtterance;

const PROGRESS_INTERVAL: usize = 1000;

/// Reduces one marker vector to a normalized scalar in [-1, 1]. Markers
/// absent from the weight table are ignored; markers absent from the input
/// count as zero strength.
#[derive(Debug, Clone)]
pub struct Scorer<'a> {
    weights: &'a MarkerWeights,
    policy: NormalizationPolicy,
}

impl<'a> Scorer<'a> {
    pub fn new(weights: &'a MarkerWeights, policy: NormalizationPolicy) -> Self {
        Self { weights, policy }
    }

    pub fn score(&self, markers: &HashMap<String, f64>) -> f64 {
        let mut raw = 0.0;
        for entry in self.weights.entries() {
            raw += markers.get(entry.id.as_str()).copied().unwrap_or(0.0) * entry.weight;
        }

        let abs_max = self.weights.abs_max();
        if abs_max == 0.0 {
            return 0.0;
        }

        match self.policy {
            NormalizationPolicy::Ratio => raw / abs_max,
            NormalizationPolicy::SymmetricRescale => {
                let min = -abs_max;
                let max = abs_max;
                2.0 * (raw - min) / (max - min) - 1.0
            }
        }
    }
}

#[derive(Debug)]
pub struct Stage2Output {
    pub scored: Vec<ScoredUtterance>,
}

pub fn run_stage2(
    bundle: &InputBundle,
    weights: &MarkerWeights,
    policy: NormalizationPolicy,
) -> Stage2Output {
    let scorer = Scorer::new(weights, policy);
    let total = bundle.utterances.len();
    let mut scored = Vec::with_capacity(total);
    for utt in &bundle.utterances {
        scored.push(ScoredUtterance {
            id: utt.id.clone(),
            text: utt.text.clone(),
            score: scorer.score(&utt.markers),
        });
        if scored.len() % PROGRESS_INTERVAL == 0 {
            tracing::info!("scored {}/{} utterances", scored.len(), total);
        }
    }
    Stage2Output { scored }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
