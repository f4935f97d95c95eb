use super::*;
use crate::backend::RichBackend;
use crate::config::BackendPreference;
use crate::error::AnscoreError;
use crate::metrics::sentiment::SentimentLexicon;

fn rich() -> Evaluator {
    Evaluator::with_backend(
        EngineConfig::default(),
        Box::new(RichBackend::new(SentimentLexicon::builtin().unwrap())),
    )
}

fn naive() -> Evaluator {
    Evaluator::with_backend(EngineConfig::default(), Box::new(NaiveBackend))
}

/// Backend whose sentiment analysis always fails
#[derive(Debug)]
struct BrokenSentiment;

impl LanguageBackend for BrokenSentiment {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        crate::text::whitespace_tokens(text)
    }

    fn bleu(&self, candidate: &[String], reference: &[String]) -> f64 {
        bleu::overlap_f1(candidate, reference)
    }

    fn sentiment(&self, _text: &str) -> Result<f64> {
        Err(AnscoreError::resource_unavailable(
            "sentiment lexicon",
            "not loaded",
        ))
    }
}

#[test]
fn test_identical_answer_and_reference() {
    for evaluator in [rich(), naive()] {
        let text = "The cat sat on the mat.";
        let m = evaluator.compute_metrics(text, text);
        assert!((m.bleu_score - 1.0).abs() < 1e-9, "{}", evaluator.backend_name());
        assert!((m.similarity_score - 1.0).abs() < 1e-9);
        assert_eq!(m.relevance_score, 1.0);
    }
}

#[test]
fn test_empty_candidate_gives_defaults() {
    for evaluator in [rich(), naive()] {
        let m = evaluator.compute_metrics("", "The cat sat on the mat.");
        assert_eq!(m.word_count, 0);
        assert_eq!(m.bleu_score, 0.0);
        assert_eq!(m.similarity_score, 0.0);
        assert_eq!(m.relevance_score, 0.0);
        assert_eq!(m.readability_score, 0.0);
        assert_eq!(m.diversity_score, 0.0);
        assert_eq!(m.conciseness_score, 0.0);
        assert_eq!(m.sentiment_score, 0.5);
        assert_eq!(m, MetricsResult::default());
    }
}

#[test]
fn test_missing_reference_zeroes_reference_scores() {
    let candidates = [
        "Rust guarantees memory safety without a garbage collector.",
        "短い回答です。",
        "   ",
        "x",
    ];
    for evaluator in [rich(), naive()] {
        for candidate in candidates {
            let m = evaluator.compute_metrics(candidate, "");
            assert_eq!(m.bleu_score, 0.0);
            assert_eq!(m.similarity_score, 0.0);
            assert_eq!(m.relevance_score, 0.0);
        }
    }
}

#[test]
fn test_word_count_ignores_reference() {
    let evaluator = rich();
    let a = evaluator.compute_metrics("The cat sat on the mat.", "");
    let b = evaluator.compute_metrics("The cat sat on the mat.", "A completely different text");
    assert_eq!(a.word_count, 7);
    assert_eq!(a.word_count, b.word_count);
}

#[test]
fn test_diversity_bounds() {
    let evaluator = rich();
    let distinct = evaluator.compute_metrics("alpha beta gamma delta", "");
    assert_eq!(distinct.diversity_score, 1.0);

    let repeated = evaluator.compute_metrics("go go go go", "");
    assert_eq!(repeated.word_count, 4);
    assert_eq!(repeated.diversity_score, 1.0 / repeated.word_count as f64);
}

#[test]
fn test_length_heuristics_flow_through() {
    let evaluator = naive();
    let m = evaluator.compute_metrics(&"a".repeat(25), "");
    assert_eq!(m.conciseness_score, 0.5);

    let m = evaluator.compute_metrics(&format!("{}.", "a".repeat(39)), "");
    assert_eq!(m.readability_score, 1.0);
}

#[test]
fn test_sentiment_failure_falls_back_to_keywords() {
    let evaluator = Evaluator::with_backend(EngineConfig::default(), Box::new(BrokenSentiment));
    let m = evaluator.compute_metrics("この方法は効果的で簡単です", "");
    assert_eq!(m.sentiment_score, 1.0);

    let m = evaluator.compute_metrics("plain statement", "");
    assert_eq!(m.sentiment_score, 0.5);
}

#[test]
fn test_degenerate_similarity_defaults_to_zero() {
    let m = rich().compute_metrics("a ! ?", "b , .");
    assert_eq!(m.similarity_score, 0.0);
    assert!(m.word_count > 0);
}

#[test]
fn test_rich_and_naive_bleu_differ_on_reordering() {
    let candidate = "mat the on sat cat the";
    let reference = "the cat sat on the mat";
    assert_eq!(rich().compute_metrics(candidate, reference).bleu_score, 0.0);
    assert!((naive().compute_metrics(candidate, reference).bleu_score - 1.0).abs() < 1e-9);
}

#[test]
fn test_compute_is_idempotent() {
    let evaluator = rich();
    let candidate = "Rust is fast and safe. It is great for systems programming!";
    let reference = "Rust is a fast, memory-safe systems language.";
    let first = evaluator.compute_metrics(candidate, reference);
    let second = evaluator.compute_metrics(candidate, reference);
    assert_eq!(first, second);
    assert_eq!(first.bleu_score.to_bits(), second.bleu_score.to_bits());
    assert_eq!(
        first.similarity_score.to_bits(),
        second.similarity_score.to_bits()
    );
}

#[test]
fn test_all_scores_bounded() {
    let evaluator = rich();
    let long = "word ".repeat(400);
    let inputs = [
        ("The cat sat on the mat.", "The cat sat on the mat."),
        ("terrible awful horrible!!!!", "nothing alike"),
        ("素晴らしい回答です。とても役立つ。", "役立つ回答です。"),
        (long.as_str(), "word"),
    ];
    for (candidate, reference) in inputs {
        let m = evaluator.compute_metrics(candidate, reference);
        for (name, value) in m.to_metric_map() {
            if name == "word_count" {
                continue;
            }
            let value = value.unwrap();
            assert!((0.0..=1.0).contains(&value), "{} = {}", name, value);
        }
    }
}

#[test]
fn test_parallel_calls_agree() {
    let evaluator = rich();
    let shared = &evaluator;
    let expected = evaluator.compute_metrics("The cat sat on the mat.", "A cat sat on a mat.");
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    shared.compute_metrics("The cat sat on the mat.", "A cat sat on a mat.")
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_metric_map_feeds_aggregator() {
    let evaluator = rich();
    let text = "The cat sat on the mat.";
    let mut map = evaluator.compute_metrics(text, text).to_metric_map();
    let without_judgment = evaluator.aggregate_quality(&map);
    map.insert("is_correct".to_string(), Some(1.0));
    let with_judgment = evaluator.aggregate_quality(&map);
    assert!((with_judgment - without_judgment - 25.0).abs() < 1e-9);
    assert!(with_judgment <= 100.0);
}

#[test]
fn test_free_functions_use_defaults() {
    let m = compute_metrics("The cat sat on the mat.", "The cat sat on the mat.");
    assert_eq!(m.relevance_score, 1.0);

    let mut map = MetricMap::new();
    for (name, _) in QualityWeights::default().entries() {
        map.insert(name.to_string(), Some(1.0));
    }
    assert_eq!(aggregate_quality(&map), 100.0);
}

#[test]
fn test_new_rejects_invalid_config() {
    let mut config = EngineConfig::default();
    config.weights.is_correct = 0.5;
    assert!(Evaluator::new(config).is_err());
}

#[test]
fn test_new_selects_configured_backend() {
    let config = EngineConfig {
        backend: BackendPreference::Naive,
        ..EngineConfig::default()
    };
    assert_eq!(Evaluator::new(config).unwrap().backend_name(), "naive");
}

#[test]
fn test_missing_lexicon_leaves_lexicon_free_scores_intact() {
    let mut config = EngineConfig::default();
    config.sentiment.lexicon_path = Some("/nonexistent/lexicon.tsv".into());
    let degraded = Evaluator::new(config).unwrap();
    let healthy = Evaluator::new(EngineConfig::default()).unwrap();
    assert_eq!(degraded.backend_name(), "rich");

    let candidate = "mat the on sat cat the.";
    let reference = "the cat sat on the mat.";
    let a = healthy.compute_metrics(candidate, reference);
    let b = degraded.compute_metrics(candidate, reference);
    assert_eq!(b.bleu_score, a.bleu_score);
    assert_eq!(b.bleu_score, 0.0);
    assert_eq!(b.word_count, a.word_count);
    assert_eq!(b.word_count, 7);
    assert_eq!(b.diversity_score, a.diversity_score);
    assert_eq!(b.sentiment_score, 0.5);
}
