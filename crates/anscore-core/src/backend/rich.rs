use super::LanguageBackend;
use crate::error::{AnscoreError, Result};
use crate::metrics::bleu::sentence_bleu;
use crate::metrics::sentiment::{keyword_sentiment, rescale, SentimentLexicon};
use crate::text::segment;

/// Script-aware segmentation, n-gram BLEU and lexicon polarity
///
/// Without a lexicon only sentiment degrades, to keyword counting.
#[derive(Debug, Clone)]
pub struct RichBackend {
    lexicon: Option<SentimentLexicon>,
}

impl RichBackend {
    pub fn new(lexicon: SentimentLexicon) -> Self {
        Self {
            lexicon: Some(lexicon),
        }
    }

    /// Rich tokenization and BLEU with keyword-count sentiment
    pub fn without_lexicon() -> Self {
        Self { lexicon: None }
    }

    pub fn has_lexicon(&self) -> bool {
        self.lexicon.is_some()
    }
}

impl LanguageBackend for RichBackend {
    fn name(&self) -> &'static str {
        "rich"
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        segment(text)
    }

    fn bleu(&self, candidate: &[String], reference: &[String]) -> f64 {
        sentence_bleu(candidate, reference)
    }

    fn sentiment(&self, text: &str) -> Result<f64> {
        let Some(lexicon) = &self.lexicon else {
            return Ok(keyword_sentiment(text));
        };
        let compound = lexicon.compound(text);
        if !compound.is_finite() {
            return Err(AnscoreError::computation(
                "sentiment",
                format!("non-finite compound score {}", compound),
            ));
        }
        Ok(rescale(compound))
    }
}
