use serde::Serialize;

use crate::model::scores::ScoredUtterance;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub corpus: String,
    pub n_utterances: usize,
    pub normalization: String,
    pub top_k: usize,
    pub bin_width: f64,
    pub limit: Option<usize>,
    pub most_polite: Option<SummaryUtterance>,
    pub most_negative: Option<SummaryUtterance>,
    pub elapsed_seconds: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryUtterance {
    pub id: String,
    pub score: f64,
    pub text: String,
}

impl SummaryUtterance {
    pub fn from_scored(item: &ScoredUtterance) -> Self {
        Self {
            id: item.id.clone(),
            score: item.score,
            text: item.text.clone(),
        }
    }
}

pub fn render_summary_json(data: &SummaryData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}
