pub mod defs;

use defs::builtin_markers;

#[derive(Debug, Clone)]
pub struct MarkerWeight {
    pub id: String,
    pub label: String,
    pub weight: f64,
}

/// Immutable marker weight table. Weights are fixed at construction and
/// `abs_max` is the sum of their absolute values, the normalization
/// denominator used by the scorer.
#[derive(Debug, Clone)]
pub struct MarkerWeights {
    entries: Vec<MarkerWeight>,
    abs_max: f64,
}

impl MarkerWeights {
    pub fn new(entries: Vec<MarkerWeight>) -> Self {
        let abs_max = entries.iter().map(|e| e.weight.abs()).sum();
        Self { entries, abs_max }
    }

    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        let entries = pairs
            .iter()
            .map(|&(id, weight)| MarkerWeight {
                id: id.to_string(),
                label: id.to_string(),
                weight,
            })
            .collect();
        Self::new(entries)
    }

    pub fn builtin() -> Self {
        let entries = builtin_markers()
            .iter()
            .map(|def| MarkerWeight {
                id: def.id.to_string(),
                label: def.label.to_string(),
                weight: def.weight,
            })
            .collect();
        Self::new(entries)
    }

    pub fn entries(&self) -> &[MarkerWeight] {
        &self.entries
    }

    pub fn abs_max(&self) -> f64 {
        self.abs_max
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
