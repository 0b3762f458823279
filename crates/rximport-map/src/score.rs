//! Synonym similarity scoring for column headers.
//!
//! Headers are short, English, pharmacy-domain labels, so the scorer is a
//! small ordered rule list over normalized text rather than a general string
//! distance. First applicable rule wins; rules never blend.

/// Normalize a header or synonym for comparison: lowercase, collapse
/// separator runs (`_`, `-`, `.`, `/`, whitespace) into single spaces, trim.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score how well a header matches one candidate label.
///
/// - exact normalized equality → 1.0
/// - one side a substring of the other → 0.9
/// - shared tokens → 0.7 × shared / max(token counts)
/// - nothing shared → 0.0
pub fn similarity(header: &str, candidate: &str) -> f64 {
    let a = normalize_header(header);
    let b = normalize_header(candidate);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return 0.9;
    }
    let tokens_a: Vec<&str> = a.split(' ').collect();
    let tokens_b: Vec<&str> = b.split(' ').collect();
    let shared = tokens_a
        .iter()
        .filter(|token| tokens_b.contains(token))
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    if shared == 0 {
        return 0.0;
    }
    0.7 * shared as f64 / tokens_a.len().max(tokens_b.len()) as f64
}
