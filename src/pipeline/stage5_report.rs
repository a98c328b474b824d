use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::scores::ScoredUtterance;
use crate::report::csv::render_scores_csv;
use crate::report::hist::{render_histogram, render_labeled};
use crate::report::json::{SummaryData, SummaryUtterance, render_summary_json};
use crate::report::text::render_extremes_text;

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub corpus_name: &'a str,
    pub scored: &'a [ScoredUtterance],
    pub highest: &'a [ScoredUtterance],
    pub lowest: &'a [ScoredUtterance],
    pub frequencies: &'a [(f64, f64)],
    pub marker_percentages: &'a [(String, f64)],

    pub tool_name: String,
    pub tool_version: String,
    pub normalization: String,
    pub top_k: usize,
    pub bin_width: f64,
    pub limit: Option<usize>,
    pub elapsed_secs: f64,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let scores_path = out_dir.join(format!("{}-politeness_scores.csv", input.corpus_name));
    write_text(&scores_path, &render_scores_csv(input.scored))?;

    // The positive block is rendered ascending, like the negative one.
    let mut positive = input.highest.to_vec();
    positive.reverse();
    let extremes_path = out_dir.join(format!(
        "{}-negative_positive_utterances.txt",
        input.corpus_name
    ));
    write_text(
        &extremes_path,
        &render_extremes_text(input.lowest, &positive, input.elapsed_secs),
    )?;

    let histogram_path = out_dir.join(format!("{}-histogram.txt", input.corpus_name));
    write_text(&histogram_path, &render_histogram(input.frequencies))?;

    let labeled_path = out_dir.join(format!("{}-marker_frequencies.txt", input.corpus_name));
    write_text(&labeled_path, &render_labeled(input.marker_percentages))?;

    let summary_path = out_dir.join(format!("{}-summary.json", input.corpus_name));
    let summary = build_summary(input);
    write_text(&summary_path, &render_summary_json(&summary)?)?;

    Ok(())
}

fn build_summary(input: &Stage5Input<'_>) -> SummaryData {
    SummaryData {
        tool: input.tool_name.clone(),
        version: input.tool_version.clone(),
        corpus: input.corpus_name.to_string(),
        n_utterances: input.scored.len(),
        normalization: input.normalization.clone(),
        top_k: input.top_k,
        bin_width: input.bin_width,
        limit: input.limit,
        most_polite: input.highest.first().map(SummaryUtterance::from_scored),
        most_negative: input.lowest.first().map(SummaryUtterance::from_scored),
        elapsed_seconds: input.elapsed_secs,
    }
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
