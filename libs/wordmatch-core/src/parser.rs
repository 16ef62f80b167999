//! Parser for word-pair list files.
//!
//! # Format
//! ```text
//! horse,le cheval
//! dog,le chien,dog.wav,chien.wav
//! ```
//!
//! One pair per line: the two display terms, optionally followed by audio
//! file references for the left and right side. Blank lines are skipped.

use crate::error::ParseError;
use crate::types::WordPair;

/// Parse file content into word pairs.
pub fn parse(content: &str) -> Result<Vec<WordPair>, ParseError> {
    let mut pairs = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        pairs.push(parse_line(line, line_num)?);
    }

    Ok(pairs)
}

fn parse_line(line: &str, line_num: usize) -> Result<WordPair, ParseError> {
    let mut fields = line.split(',').map(str::trim);

    let term_a = fields.next().unwrap_or("");
    let term_b = fields
        .next()
        .ok_or(ParseError::MissingSeparator { line: line_num })?;

    if term_a.is_empty() || term_b.is_empty() {
        return Err(ParseError::EmptyTerm { line: line_num });
    }

    let audio_a = fields.next().filter(|s| !s.is_empty()).map(String::from);
    let audio_b = fields.next().filter(|s| !s.is_empty()).map(String::from);

    Ok(WordPair {
        term_a: term_a.to_string(),
        term_b: term_b.to_string(),
        audio_a,
        audio_b,
    })
}
