//! Text processing utilities: segmentation, word sets and TF-IDF terms

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::warn;

/// Script-aware segmentation: kanji runs, kana runs, other word runs, single punctuation marks
const SEGMENT_PATTERN: &str = r"\p{Han}+|\p{Hiragana}+|[\p{Katakana}ー]+|[\w&&[^\p{Han}\p{Hiragana}\p{Katakana}ー]]+|[^\w\s]";

/// Word-character runs, used for set-overlap relevance
const WORD_PATTERN: &str = r"\w+";

/// Terms of two or more word characters, used for TF-IDF vectors
const TERM_PATTERN: &str = r"\b\w\w+\b";

/// Sentence terminators (ideographic and Latin)
const SENTENCE_PATTERN: &str = r"[。.!?]";

static SEGMENT_RE: OnceLock<Option<Regex>> = OnceLock::new();
static WORD_RE: OnceLock<Option<Regex>> = OnceLock::new();
static TERM_RE: OnceLock<Option<Regex>> = OnceLock::new();
static SENTENCE_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Snowball stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(error = %e, pattern, "Failed to compile tokenizer regex");
            None
        }
    })
    .as_ref()
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Split text on whitespace. Never fails; the fallback of every other tokenizer.
pub fn whitespace_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(|s| s.to_string()).collect()
}

/// Segment text into approximate word-level units.
///
/// This is a script-boundary approximation, not morphological analysis.
/// Unsegmented scripts are broken at script changes, so `猫が好きです。` yields
/// `猫`, `が`, `好`, `きです`, `。`; kanji stems are cut from their kana inflections. Text with whitespace boundaries splits into words
/// and standalone punctuation marks. Case is preserved.
pub fn segment(text: &str) -> Vec<String> {
    match compiled(&SEGMENT_RE, SEGMENT_PATTERN) {
        Some(re) => re.find_iter(text).map(|m| m.as_str().to_string()).collect(),
        None => whitespace_tokens(text),
    }
}

/// Lower-cased set of `\w+` runs
pub fn word_set(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    match compiled(&WORD_RE, WORD_PATTERN) {
        Some(re) => re.find_iter(&lower).map(|m| m.as_str().to_string()).collect(),
        None => whitespace_tokens(&lower).into_iter().collect(),
    }
}

/// Lower-cased TF-IDF terms (two or more word characters), optionally stemmed
pub fn tfidf_terms(text: &str, stem: bool) -> Vec<String> {
    let lower = text.to_lowercase();
    let terms: Vec<String> = match compiled(&TERM_RE, TERM_PATTERN) {
        Some(re) => re.find_iter(&lower).map(|m| m.as_str().to_string()).collect(),
        None => whitespace_tokens(&lower),
    };
    if !stem {
        return terms;
    }

    let stemmer = get_stemmer();
    terms.iter().map(|t| stemmer.stem(t).to_string()).collect()
}

/// Split text into sentences, discarding fragments that are empty after trimming
pub fn sentences(text: &str) -> Vec<&str> {
    let fragments: Vec<&str> = match compiled(&SENTENCE_RE, SENTENCE_PATTERN) {
        Some(re) => re.split(text).collect(),
        None => text.split(['。', '.', '!', '?']).collect(),
    };
    fragments
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Length in Unicode scalar values, the unit every length threshold is expressed in
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
