use jiff::{SignedDuration, Span, SpanRelativeTo};

/// Accepts "5s", "1m 30s", ISO 8601 ("PT2S") or a plain number of seconds.
pub fn parse_duration(input: &str) -> Result<SignedDuration, String> {
    let duration = input
        .parse::<SignedDuration>()
        .ok()
        .or_else(|| {
            input
                .parse::<Span>()
                .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
                .ok()
        })
        .or_else(|| input.parse::<i64>().ok().map(SignedDuration::from_secs))
        .ok_or_else(|| format!("Invalid duration `{input}`"))?;

    if duration.is_negative() || duration.is_zero() {
        return Err(format!("Duration must be positive, got `{input}`"));
    }

    Ok(duration)
}

/// Fraction of the predicted score used as the half-width of a confidence
/// interval.
pub fn parse_uncertainty(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .parse()
        .map_err(|_| format!("Invalid uncertainty `{input}`"))?;

    if !(0.0..=1.0).contains(&value) {
        return Err(format!("Uncertainty must be between 0 and 1, got {value}"));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_formats() {
        assert_eq!(parse_duration("5s"), Ok(SignedDuration::from_secs(5)));
        assert_eq!(parse_duration("PT2S"), Ok(SignedDuration::from_secs(2)));
        assert_eq!(parse_duration("30"), Ok(SignedDuration::from_secs(30)));
        assert_eq!(parse_duration("1m 30s"), Ok(SignedDuration::from_secs(90)));
    }

    #[test]
    fn test_parse_duration_rejects_garbage_and_non_positive() {
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("0").is_err());
        assert!(parse_duration("-3").is_err());
    }

    #[test]
    fn test_parse_uncertainty() {
        assert_eq!(parse_uncertainty("0.15"), Ok(0.15));
        assert!(parse_uncertainty("1.5").is_err());
        assert!(parse_uncertainty("-0.1").is_err());
        assert!(parse_uncertainty("wide").is_err());
    }
}
