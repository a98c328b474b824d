mod input;
mod logging;
mod markers;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use clap::error::ErrorKind;
use thiserror::Error;
use tracing::info;

use crate::input::InputError;
use crate::markers::MarkerWeights;
use crate::model::profile::{NormalizationPolicy, ScoringProfile};
use crate::pipeline::stage2_score::run_stage2;
use crate::pipeline::stage3_extremes::{Stage3Output, run_stage3};
use crate::pipeline::stage4_histogram::run_stage4;
use crate::pipeline::stage5_report::{ReportError, Stage5Input, write_reports};

#[derive(Debug, Parser)]
#[command(
    name = "polite-rank",
    version,
    about = "Politeness scoring and ranking for annotated conversational corpora"
)]
struct Cli {
    /// Corpus to analyze
    corpus: Option<String>,

    /// Directory holding annotated corpora
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Directory for output artifacts
    #[arg(long, default_value = "data")]
    out: PathBuf,

    /// Number of utterances kept at each extreme
    #[arg(long, default_value_t = 5)]
    top_k: usize,

    /// Histogram bin width
    #[arg(long, default_value_t = 0.02)]
    bin_width: f64,

    /// Score normalization policy (ratio|symmetric)
    #[arg(long, default_value = "ratio")]
    normalization: String,

    /// Cap on the number of utterances read from the corpus
    #[arg(long)]
    limit: Option<usize>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    logging::init();

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Error)]
enum RunError {
    #[error("{0}")]
    Config(&'static str),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn run(cli: Cli) -> Result<(), RunError> {
    let Some(corpus_name) = cli.corpus.clone() else {
        return Err(RunError::Config("Please specify a corpus name."));
    };
    if !input::corpus::is_supported(&corpus_name) {
        return Err(RunError::Config("Corpus not supported."));
    }
    let profile = build_profile(&cli)?;

    let start = Instant::now();

    info!("Loading corpus...");
    let bundle = input::load_corpus(&cli.data, &corpus_name, profile.limit)?;

    let weights = MarkerWeights::builtin();

    info!("Scoring utterances...");
    let stage2 = run_stage2(&bundle, &weights, profile.normalization);
    let stage3 = run_stage3(&stage2.scored, profile.top_k);
    let stage4 = run_stage4(&bundle, &stage2.scored, &weights, profile.bin_width);

    print_console_summary(&stage3);

    let elapsed_secs = start.elapsed().as_secs_f64();

    let frequencies = stage4.histogram.frequencies();
    let marker_percentages = stage4.marker_means.percentages();
    let stage5 = Stage5Input {
        corpus_name: &corpus_name,
        scored: &stage2.scored,
        highest: &stage3.highest,
        lowest: &stage3.lowest,
        frequencies: &frequencies,
        marker_percentages: &marker_percentages,
        tool_name: "polite-rank".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        normalization: normalization_name(profile.normalization).to_string(),
        top_k: profile.top_k,
        bin_width: profile.bin_width,
        limit: profile.limit,
        elapsed_secs,
    };
    write_reports(&stage5, &cli.out)?;

    println!("Execution time: {:.2} seconds", elapsed_secs);

    Ok(())
}

fn build_profile(cli: &Cli) -> Result<ScoringProfile, RunError> {
    let mut profile = ScoringProfile::default_v1();
    profile.normalization = match cli.normalization.as_str() {
        "ratio" => NormalizationPolicy::Ratio,
        "symmetric" => NormalizationPolicy::SymmetricRescale,
        _ => {
            return Err(RunError::Config(
                "invalid --normalization (use ratio|symmetric)",
            ));
        }
    };
    if !(cli.bin_width > 0.0) {
        return Err(RunError::Config("invalid --bin-width (must be positive)"));
    }
    profile.top_k = cli.top_k;
    profile.bin_width = cli.bin_width;
    profile.limit = cli.limit;
    Ok(profile)
}

fn normalization_name(policy: NormalizationPolicy) -> &'static str {
    match policy {
        NormalizationPolicy::Ratio => "ratio",
        NormalizationPolicy::SymmetricRescale => "symmetric",
    }
}

fn print_console_summary(stage3: &Stage3Output) {
    let (Some(most_polite), Some(most_negative)) =
        (stage3.highest.first(), stage3.lowest.first())
    else {
        info!("no utterances scored; skipping console summary");
        return;
    };
    println!("Most polite utterance: {}", most_polite.text);
    println!("Politeness score: {}", most_polite.score);
    println!();
    println!("Most negative utterance: {}", most_negative.text);
    println!("Politeness score: {}", most_negative.score);
}
