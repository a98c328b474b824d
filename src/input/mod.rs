use std::path::{Path, PathBuf};

pub mod corpus;
pub mod gz;
pub mod utterances;

use thiserror::Error;

use utterances::{UtteranceRecord, parse_utterances};

#[derive(Debug, Clone)]
pub struct InputBundle {
    pub corpus_name: String,
    pub source_path: PathBuf,
    pub utterances: Vec<UtteranceRecord>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

pub fn load_corpus(
    data_dir: &Path,
    corpus_name: &str,
    limit: Option<usize>,
) -> Result<InputBundle, InputError> {
    let source_path = corpus::find_utterances_path(data_dir, corpus_name)?;
    let mut reader = gz::open_maybe_gz(&source_path)?;
    let utterances = parse_utterances(reader.as_mut(), limit)?;
    tracing::info!(
        "loaded {} utterances from {}",
        utterances.len(),
        source_path.display()
    );
    Ok(InputBundle {
        corpus_name: corpus_name.to_string(),
        source_path,
        utterances,
    })
}
