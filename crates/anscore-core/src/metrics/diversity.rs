//! Lexical diversity (type/token ratio)

use std::collections::HashSet;

/// Distinct surface forms over total tokens; 0.0 for no tokens
pub fn diversity(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    distinct.len() as f64 / tokens.len() as f64
}
