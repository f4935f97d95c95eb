use anscore_core::config::BackendPreference;
use anscore_core::format::OutputFormat;
use anscore_core::metrics::Correctness;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse backend preference from string
pub fn parse_backend(s: &str) -> std::result::Result<BackendPreference, String> {
    s.parse::<BackendPreference>().map_err(|e| e.to_string())
}

/// Parse correctness judgment from string
pub fn parse_correctness(s: &str) -> std::result::Result<Correctness, String> {
    s.parse::<Correctness>().map_err(|e| e.to_string())
}

/// Parse a non-negative, finite number of seconds
pub fn parse_seconds(s: &str) -> std::result::Result<f64, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("expected seconds >= 0, got {}", s));
    }
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("records").unwrap(), OutputFormat::Records);
        assert!(parse_format("yaml").unwrap_err().contains("unknown format"));
    }

    #[test]
    fn test_parse_backend() {
        assert_eq!(parse_backend("naive").unwrap(), BackendPreference::Naive);
        assert!(parse_backend("fancy").is_err());
    }

    #[test]
    fn test_parse_correctness() {
        assert_eq!(parse_correctness("partial").unwrap(), Correctness::Partial);
        assert!(parse_correctness("sort of").is_err());
    }

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds("1.5").unwrap(), 1.5);
        assert_eq!(parse_seconds("0").unwrap(), 0.0);
        assert!(parse_seconds("-2").is_err());
        assert!(parse_seconds("NaN").is_err());
        assert!(parse_seconds("soon").is_err());
    }
}
