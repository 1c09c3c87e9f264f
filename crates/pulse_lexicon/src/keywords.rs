use crate::tables;
use lazy_static::lazy_static;
use pulse_core::KeywordEntry;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

/// Shortest token kept as a keyword, in bytes (tokens are ASCII after cleaning).
pub const MIN_KEYWORD_LEN: usize = 4;

/// Upper bound on chained map lookups (`warnings` -> `warning` -> `warn`).
const MAX_NORMALIZATION_STEPS: usize = 4;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^a-z0-9_\s]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Counts normalized keywords in `text`, most frequent first.
///
/// Equal frequencies keep the order in which the keywords were first seen.
pub fn extract_keywords(text: &str) -> Vec<KeywordEntry> {
    let lowered = text.to_ascii_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");
    let cleaned = WHITESPACE.replace_all(&cleaned, " ");

    let mut entries: Vec<KeywordEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in cleaned.split(' ') {
        let token = token.trim();
        if !is_candidate(token) {
            continue;
        }

        let keyword = normalize(token);
        if !is_candidate(keyword) {
            continue;
        }

        match index.get(keyword) {
            Some(&i) => entries[i].frequency += 1,
            None => {
                index.insert(keyword.to_string(), entries.len());
                entries.push(KeywordEntry::new(keyword, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    debug!(keywords = entries.len(), "extracted keywords");
    entries
}

/// Maps a token to its canonical form, following chained entries.
pub fn normalize(token: &str) -> &str {
    let mut current = token;
    for _ in 0..MAX_NORMALIZATION_STEPS {
        match tables::canonical(current) {
            Some(next) if next != current => current = next,
            _ => break,
        }
    }
    current
}

fn is_candidate(token: &str) -> bool {
    token.len() >= MIN_KEYWORD_LEN && !is_numeric(token) && !tables::is_stop_word(token)
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
