//! Length-window conciseness

use crate::config::ConcisenessConfig;
use crate::text::char_len;

/// Piecewise score over character length `L`:
/// `L < min` ramps up as `L / min`, `[min, max]` is 1.0, above `max` decays
/// linearly to 0.0 at `zero`.
pub fn conciseness(text: &str, config: &ConcisenessConfig) -> f64 {
    length_score(char_len(text), config)
}

pub fn length_score(len: usize, config: &ConcisenessConfig) -> f64 {
    let len = len as f64;
    let min = config.min_chars as f64;
    let max = config.max_chars as f64;
    let zero = config.zero_chars as f64;

    if len < min {
        len / min
    } else if len <= max {
        1.0
    } else {
        (1.0 - (len - max) / (zero - max)).max(0.0)
    }
}
