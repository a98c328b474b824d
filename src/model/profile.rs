#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationPolicy {
    Ratio,
    SymmetricRescale,
}

#[derive(Debug, Clone)]
pub struct ScoringProfile {
    pub normalization: NormalizationPolicy,
    pub top_k: usize,
    pub bin_width: f64,
    pub limit: Option<usize>,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            normalization: NormalizationPolicy::Ratio,
            top_k: 5,
            bin_width: 0.02,
            limit: None,
        }
    }
}
