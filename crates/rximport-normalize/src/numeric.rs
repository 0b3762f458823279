//! Currency-tolerant numeric parsing.

/// Strip currency decorations (naira/dollar signs, commas, whitespace).
fn strip_decorations(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !matches!(ch, '₦' | '$' | ',') && !ch.is_whitespace())
        .collect()
}

/// Parse a human-entered amount, returning `0.0` when nothing parses.
///
/// `"₦3,500.00"` → `3500.0`, `""` → `0.0`. The zero sentinel keeps bulk
/// imports moving past malformed cells; callers that must distinguish a true
/// zero from a parse failure use [`parse_numeric_checked`].
pub fn parse_numeric_value(raw: &str) -> f64 {
    parse_numeric_checked(raw).unwrap_or(0.0)
}

/// Like [`parse_numeric_value`] but with an explicit "could not parse".
pub fn parse_numeric_checked(raw: &str) -> Option<f64> {
    let stripped = strip_decorations(raw);
    if stripped.is_empty() {
        return None;
    }
    // f64::from_str accepts "nan"/"inf"; amounts are always finite.
    stripped.parse().ok().filter(|value: &f64| value.is_finite())
}
