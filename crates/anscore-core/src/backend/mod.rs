//! Language backends: tokenization, lexical overlap and sentiment
//!
//! The rich backend needs language assets (the sentiment lexicon); the naive one
//! uses plain string operations. The backend is chosen once, when an evaluator is
//! built, so individual scorers never branch on asset availability.

mod naive;
mod rich;

pub use naive::NaiveBackend;
pub use rich::RichBackend;

use tracing::{debug, warn};

use crate::config::{BackendPreference, EngineConfig};
use crate::error::Result;
use crate::metrics::sentiment::SentimentLexicon;

/// Capability interface over the language-dependent scorers
pub trait LanguageBackend: Send + Sync + std::fmt::Debug {
    /// Short identifier reported in output (`rich` or `naive`)
    fn name(&self) -> &'static str;

    /// Split text into word-level tokens. Must not fail.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Overlap of candidate tokens with reference tokens in [0, 1]
    fn bleu(&self, candidate: &[String], reference: &[String]) -> f64;

    /// Sentiment in [0, 1]; 0.5 is neutral
    fn sentiment(&self, text: &str) -> Result<f64>;
}

/// Build the backend the configuration asks for.
///
/// `auto` keeps rich tokenization and BLEU when the lexicon cannot be loaded and
/// degrades sentiment alone to keyword counting; `rich` propagates the load failure.
pub fn select_backend(config: &EngineConfig) -> Result<Box<dyn LanguageBackend>> {
    let backend: Box<dyn LanguageBackend> = match config.backend {
        BackendPreference::Naive => Box::new(NaiveBackend),
        BackendPreference::Rich => Box::new(RichBackend::new(load_lexicon(config)?)),
        BackendPreference::Auto => match load_lexicon(config) {
            Ok(lexicon) => Box::new(RichBackend::new(lexicon)),
            Err(e) => {
                warn!(error = %e, "sentiment lexicon unavailable, using keyword sentiment");
                Box::new(RichBackend::without_lexicon())
            }
        },
    };

    debug!(
        backend = backend.name(),
        preference = %config.backend,
        "language backend selected"
    );
    Ok(backend)
}

fn load_lexicon(config: &EngineConfig) -> Result<SentimentLexicon> {
    match &config.sentiment.lexicon_path {
        Some(path) => SentimentLexicon::load(path),
        None => SentimentLexicon::builtin(),
    }
}
