//! Nearest-field hints for unmapped columns.
//!
//! When a column stays unmapped, reports list the closest target fields by
//! Jaro-Winkler similarity so a human can fix the mapping quickly. This is
//! presentation-only: the contractual scorer in [`crate::score`] is the one
//! that decides mappings, and these hints never feed back into it.

use rapidfuzz::distance::jaro_winkler;

use rximport_model::TargetField;

use crate::score::normalize_header;

/// A candidate field for manual review, with its fuzzy similarity.
#[derive(Debug, Clone)]
pub struct FieldHint {
    pub field: TargetField,
    pub score: f64,
}

/// The `limit` closest target fields to a header, best first.
///
/// Fields scoring under 0.5 are omitted; an empty result means the header
/// resembles nothing in the vocabulary.
pub fn nearest_fields(header: &str, limit: usize) -> Vec<FieldHint> {
    let normalized = normalize_header(header);
    let mut hints: Vec<FieldHint> = TargetField::ALL
        .iter()
        .map(|&field| {
            let display = field.as_str().replace('_', " ");
            let best = std::iter::once(display.as_str())
                .chain(field.synonyms().iter().copied())
                .map(|candidate| {
                    jaro_winkler::similarity(normalized.chars(), normalize_header(candidate).chars())
                })
                .fold(0.0f64, f64::max);
            FieldHint { field, score: best }
        })
        .filter(|hint| hint.score >= 0.5)
        .collect();
    hints.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    hints.truncate(limit);
    hints
}
