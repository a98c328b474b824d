use std::collections::HashMap;
use std::io::BufRead;

use serde::Deserialize;

use crate::input::InputError;

/// One annotated utterance as supplied by the corpus annotation layer.
/// Marker strengths absent from `markers` mean zero.
#[derive(Debug, Clone, Deserialize)]
pub struct UtteranceRecord {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub markers: HashMap<String, f64>,
}

pub fn parse_utterances(
    reader: &mut dyn BufRead,
    limit: Option<usize>,
) -> Result<Vec<UtteranceRecord>, InputError> {
    let mut out = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        if limit.is_some_and(|cap| out.len() >= cap) {
            break;
        }
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let record: UtteranceRecord = serde_json::from_str(trimmed)
            .map_err(|e| InputError::Parse(format!("line {}: {}", idx + 1, e)))?;
        out.push(record);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/utterances.rs"]
mod tests;
