//! Lexicon-based polarity analysis and the keyword-count fallback

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{AnscoreError, Result};

const BUILTIN_LEXICON: &str = include_str!("../../assets/sentiment_lexicon.tsv");

const RESOURCE: &str = "sentiment lexicon";

/// Multiplier applied to a valence preceded by a negation
const NEGATION_SCALAR: f64 = -0.74;

/// Magnitude added by an intensifier directly before a sentiment word
const BOOSTER_INCREMENT: f64 = 0.293;

/// Intensifier damping by distance (1, 2, 3 tokens back)
const BOOSTER_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;

/// Valence scaling around a contrastive "but"
const BEFORE_CONTRAST: f64 = 0.5;
const AFTER_CONTRAST: f64 = 1.5;

/// Normalization constant: compound = s / sqrt(s^2 + alpha)
const NORMALIZATION_ALPHA: f64 = 15.0;

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "cannot",
    "without", "hardly",
];

const INCREMENTERS: &[&str] = &[
    "absolutely",
    "completely",
    "extremely",
    "highly",
    "incredibly",
    "really",
    "so",
    "totally",
    "very",
    "especially",
    "particularly",
    "remarkably",
    "truly",
];

const DECREMENTERS: &[&str] = &["barely", "slightly", "somewhat", "marginally", "less"];

const POSITIVE_KEYWORDS: &[&str] = &[
    "良い",
    "素晴らしい",
    "優れた",
    "簡単",
    "効果的",
    "役立つ",
    "good",
    "great",
    "excellent",
    "easy",
    "effective",
    "helpful",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "悪い",
    "難しい",
    "複雑",
    "問題",
    "困難",
    "欠点",
    "bad",
    "poor",
    "difficult",
    "complex",
    "problem",
    "drawback",
];

/// Token valences. Entries in unsegmented scripts are matched as substrings.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    words: HashMap<String, f64>,
    phrases: Vec<(String, f64)>,
}

impl SentimentLexicon {
    /// The lexicon compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::parse("built-in", BUILTIN_LEXICON)
    }

    /// Load a lexicon file (`token<TAB>valence` per line)
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AnscoreError::resource_unavailable(RESOURCE, format!("{}: {}", path.display(), e))
        })?;
        Self::parse(&path.display().to_string(), &content)
    }

    /// Parse lexicon text; `source` names it in error messages
    pub fn parse(source: &str, content: &str) -> Result<Self> {
        let mut words = HashMap::new();
        let mut phrases = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            let (token, valence) = match (fields.next(), fields.next()) {
                (Some(token), Some(valence)) if !token.trim().is_empty() => (token.trim(), valence),
                _ => {
                    return Err(AnscoreError::resource_unavailable(
                        RESOURCE,
                        format!("{} line {}: expected token<TAB>valence", source, idx + 1),
                    ))
                }
            };
            let valence: f64 = match valence.trim().parse() {
                Ok(v) if f64::is_finite(v) => v,
                _ => {
                    return Err(AnscoreError::resource_unavailable(
                        RESOURCE,
                        format!("{} line {}: invalid valence {:?}", source, idx + 1, valence),
                    ))
                }
            };

            let token = token.to_lowercase();
            if token.chars().any(is_unsegmented) {
                phrases.push((token, valence));
            } else {
                words.insert(token, valence);
            }
        }

        if words.is_empty() && phrases.is_empty() {
            return Err(AnscoreError::resource_unavailable(
                RESOURCE,
                format!("{}: no entries", source),
            ));
        }

        Ok(Self { words, phrases })
    }

    pub fn len(&self) -> usize {
        self.words.len() + self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compound polarity in [-1, 1]; 0 for text without sentiment-bearing tokens
    pub fn compound(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = lower
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|t| !t.is_empty())
            .collect();

        let mut valences = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.words.get(*token) else {
                valences.push(0.0);
                continue;
            };

            let mut valence = base;
            for (distance, damping) in BOOSTER_DAMPING.iter().enumerate() {
                let Some(prev) = i.checked_sub(distance + 1).map(|j| tokens[j]) else {
                    break;
                };
                if let Some(scalar) = booster(prev) {
                    let scalar = scalar * damping;
                    valence += if valence < 0.0 { -scalar } else { scalar };
                }
                if is_negation(prev) {
                    valence *= NEGATION_SCALAR;
                }
            }
            valences.push(valence);
        }

        if let Some(pivot) = tokens.iter().position(|t| *t == "but") {
            for (i, valence) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *valence *= BEFORE_CONTRAST;
                } else if i > pivot {
                    *valence *= AFTER_CONTRAST;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();
        for (phrase, valence) in &self.phrases {
            sum += valence * lower.matches(phrase.as_str()).count() as f64;
        }

        let emphasis = lower.matches('!').count().min(MAX_EXCLAMATIONS) as f64 * EXCLAMATION_BOOST;
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        normalize(sum)
    }
}

/// Map a compound score in [-1, 1] onto [0, 1]
pub fn rescale(compound: f64) -> f64 {
    ((compound + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Share of positive keywords among the positive and negative keywords present.
///
/// Each keyword counts once when it occurs anywhere in the text; 0.5 when none occur.
pub fn keyword_sentiment(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let positive = POSITIVE_KEYWORDS
        .iter()
        .filter(|w| lower.contains(*w))
        .count();
    let negative = NEGATIVE_KEYWORDS
        .iter()
        .filter(|w| lower.contains(*w))
        .count();

    let total = positive + negative;
    if total > 0 {
        positive as f64 / total as f64
    } else {
        0.5
    }
}

fn normalize(sum: f64) -> f64 {
    if sum == 0.0 {
        return 0.0;
    }
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn booster(token: &str) -> Option<f64> {
    if INCREMENTERS.contains(&token) {
        Some(BOOSTER_INCREMENT)
    } else if DECREMENTERS.contains(&token) {
        Some(-BOOSTER_INCREMENT)
    } else {
        None
    }
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

/// Kana and CJK ideographs, written without spaces between words
fn is_unsegmented(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{30FF}' | '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn lexicon() -> SentimentLexicon {
        SentimentLexicon::builtin().unwrap()
    }

    #[test]
    fn test_builtin_lexicon_loads() {
        let lex = lexicon();
        assert!(lex.len() > 100);
        assert!(!lex.is_empty());
    }

    #[test]
    fn test_neutral_text() {
        let lex = lexicon();
        assert_eq!(lex.compound(""), 0.0);
        assert_eq!(lex.compound("the table has four legs"), 0.0);
        assert_eq!(rescale(lex.compound("the table has four legs")), 0.5);
    }

    #[test]
    fn test_single_word_compound() {
        let expected = 1.9 / (1.9f64 * 1.9 + 15.0).sqrt();
        assert!((lexicon().compound("This is good.") - expected).abs() < 1e-9);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let lex = lexicon();
        assert!(lex.compound("this is not good") < 0.0);
        assert!(lex.compound("this isn't good") < 0.0);
    }

    #[test]
    fn test_boosters_scale_magnitude() {
        let lex = lexicon();
        let plain = lex.compound("good");
        assert!(lex.compound("very good") > plain);
        let damped = lex.compound("slightly good");
        assert!(damped < plain && damped > 0.0);
        assert!(lex.compound("very bad") < lex.compound("bad"));
    }

    #[test]
    fn test_contrast_weights_second_clause() {
        let lex = lexicon();
        assert!(lex.compound("the idea is great but the code is bad") < 0.0);
        assert!(lex.compound("the code is bad but the idea is great") > 0.0);
    }

    #[test]
    fn test_exclamation_emphasis() {
        let lex = lexicon();
        assert!(lex.compound("good!!") > lex.compound("good"));
        assert_eq!(lex.compound("good!!!!"), lex.compound("good!!!!!!!"));
    }

    #[test]
    fn test_unsegmented_entries_match_substrings() {
        let lex = lexicon();
        assert!(lex.compound("この方法は素晴らしい") > 0.0);
        assert!(lex.compound("この方法には問題がある") < 0.0);
    }

    #[test]
    fn test_compound_is_bounded() {
        let text = "great ".repeat(500);
        let compound = lexicon().compound(&text);
        assert!(compound <= 1.0 && compound > 0.99);
    }

    #[test]
    fn test_rescale() {
        assert_eq!(rescale(-1.0), 0.0);
        assert_eq!(rescale(0.0), 0.5);
        assert_eq!(rescale(1.0), 1.0);
        assert_eq!(rescale(3.0), 1.0);
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        assert!(SentimentLexicon::parse("t", "good 1.9").is_err());
        assert!(SentimentLexicon::parse("t", "good\tabc").is_err());
        assert!(SentimentLexicon::parse("t", "good\tinf").is_err());
        assert!(SentimentLexicon::parse("t", "# comment only\n\n").is_err());
    }

    #[test]
    fn test_parse_error_is_resource_unavailable() {
        let err = SentimentLexicon::parse("custom.tsv", "good\tabc").unwrap_err();
        assert!(matches!(err, AnscoreError::ResourceUnavailable { .. }));
        assert!(err.to_string().contains("custom.tsv line 1"));
    }

    #[test]
    fn test_load_custom_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lexicon.tsv");
        fs::write(&path, "# custom\nsplendid\t2.5\nmeh\t-0.5\n").unwrap();

        let lex = SentimentLexicon::load(&path).unwrap();
        assert_eq!(lex.len(), 2);
        assert!(lex.compound("a splendid answer") > 0.0);
        assert_eq!(lex.compound("a good answer"), 0.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = SentimentLexicon::load(&dir.path().join("absent.tsv")).unwrap_err();
        assert!(matches!(err, AnscoreError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_keyword_sentiment() {
        assert_eq!(keyword_sentiment("良い方法です"), 1.0);
        assert_eq!(keyword_sentiment("難しい問題です"), 0.0);
        assert_eq!(keyword_sentiment("良いが難しい"), 0.5);
        assert_eq!(keyword_sentiment("nothing to report"), 0.5);
        assert_eq!(keyword_sentiment(""), 0.5);
    }

    #[test]
    fn test_keyword_sentiment_counts_presence_not_occurrences() {
        // "good" twice and "problem" once still counts one keyword each
        assert_eq!(keyword_sentiment("good, good, but a problem"), 0.5);
    }
}
