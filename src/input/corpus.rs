use std::path::{Path, PathBuf};

use crate::input::InputError;

pub const SUPPORTED_CORPORA: &[&str] = &[
    "wiki-corpus",
    "reddit-corpus-small",
    "conversations-gone-awry-cmv-corpus",
    "conversations-gone-awry-corpus",
];

pub fn is_supported(name: &str) -> bool {
    SUPPORTED_CORPORA.contains(&name)
}

pub fn find_utterances_path(data_dir: &Path, corpus_name: &str) -> Result<PathBuf, InputError> {
    let corpus_dir = data_dir.join(corpus_name);
    let plain = corpus_dir.join("utterances.jsonl");
    if plain.exists() {
        return Ok(plain);
    }
    let gz = corpus_dir.join("utterances.jsonl.gz");
    if gz.exists() {
        return Ok(gz);
    }
    Err(InputError::MissingInput(format!(
        "no utterances.jsonl or utterances.jsonl.gz under {}",
        corpus_dir.display()
    )))
}
