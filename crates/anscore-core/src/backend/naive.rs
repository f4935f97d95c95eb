use super::LanguageBackend;
use crate::error::Result;
use crate::metrics::bleu::overlap_f1;
use crate::metrics::sentiment::keyword_sentiment;
use crate::text::whitespace_tokens;

/// Whitespace tokens, overlap F1 in place of BLEU, keyword-count sentiment
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveBackend;

impl LanguageBackend for NaiveBackend {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        whitespace_tokens(text)
    }

    fn bleu(&self, candidate: &[String], reference: &[String]) -> f64 {
        overlap_f1(candidate, reference)
    }

    fn sentiment(&self, text: &str) -> Result<f64> {
        Ok(keyword_sentiment(text))
    }
}
