//! Discriminating keywords for OCR name detection.
//!
//! A keyword is a leading or trailing run of whole words of a card name that is
//! long enough to survive OCR noise and that no other card name contains. A
//! scanner can then recognise a card from a partially read title.

use std::collections::{BTreeSet, HashMap};

/// Keywords must be strictly longer than this many characters.
pub const MIN_KEYWORD_EXCLUSIVE_LEN: usize = 4;

/// Word-prefixes then word-suffixes of `name`, excluding the full name.
pub fn word_prefixes_and_suffixes(name: &str) -> Vec<String> {
    let words: Vec<&str> = name.split_whitespace().collect();
    let mut candidates = Vec::new();
    for end in 1..words.len() {
        candidates.push(words[..end].join(" "));
    }
    for start in 1..words.len() {
        candidates.push(words[start..].join(" "));
    }
    candidates
}

/// Keywords of `target` against `corpus`. Corpus entries equal to `target` are
/// the target itself and are ignored.
pub fn extract_keywords(target: &str, corpus: &[String]) -> Vec<String> {
    let target_lower = target.to_lowercase();
    let others: Vec<String> = corpus
        .iter()
        .map(|name| name.to_lowercase())
        .filter(|name| *name != target_lower)
        .collect();

    let mut keywords: Vec<String> = Vec::new();
    for candidate in word_prefixes_and_suffixes(target) {
        if candidate.chars().count() <= MIN_KEYWORD_EXCLUSIVE_LEN {
            continue;
        }
        if keywords.contains(&candidate) {
            continue;
        }
        let needle = candidate.to_lowercase();
        if others.iter().any(|other| other.contains(&needle)) {
            continue;
        }
        keywords.push(candidate);
    }
    keywords
}

/// Keywords for every distinct name, computed once per name.
pub fn keywords_by_name<'a, I>(names: I) -> HashMap<String, Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let corpus: Vec<String> = names
        .into_iter()
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    corpus
        .iter()
        .map(|name| (name.clone(), extract_keywords(name, &corpus)))
        .collect()
}
