//! Header-to-field assignment over whole datasets.
//!
//! Two greedy passes keep the assignment one-to-one without global
//! optimization: a high-confidence pass against the full field set, then a
//! best-remaining pass for the stragglers. Ties resolve by input order:
//! headers and candidate fields are iterated as ordered slices, never as
//! hash maps, so outcomes stay deterministic.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};
use tracing::debug;

use rximport_model::{
    ColumnMapping, FieldMatch, HIGH_CONFIDENCE, MIN_CONFIDENCE, MappingResult, MatchSource,
    TargetField,
};

use crate::classify::{SAMPLE_LIMIT, TypeGuess, detect_field_type_with_today};
use crate::score::similarity;

/// Confidence attached to value-classification fallback matches: above the
/// reporting floor, below the first-pass gate, so a value-derived match can
/// never displace a synonym match.
const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Find the best target field for one header.
///
/// Every candidate field is scored against its full synonym list (the
/// field's own identifier, underscores read as spaces, included) and the
/// single best `(field, confidence)` pair wins; on equal confidence the
/// earlier field in `target_fields` is kept. When no synonym scores at all
/// and column values are available, the values are classified and the
/// detected type is mapped to a plausible field by keyword.
///
/// Returns `None` when the best confidence sits below the 0.3 floor.
pub fn match_header_to_field(
    header: &str,
    target_fields: &[TargetField],
    column_values: Option<&[String]>,
) -> Option<FieldMatch> {
    match_header_with_today(
        header,
        target_fields,
        column_values,
        Local::now().date_naive(),
    )
}

/// [`match_header_to_field`] with an injected reference date for the
/// expiry-vs-date value classification, for deterministic fixtures.
pub fn match_header_with_today(
    header: &str,
    target_fields: &[TargetField],
    column_values: Option<&[String]>,
    today: NaiveDate,
) -> Option<FieldMatch> {
    let mut best: Option<(TargetField, f64)> = None;
    for &field in target_fields {
        let display = field.as_str().replace('_', " ");
        let candidates = std::iter::once(display.as_str()).chain(field.synonyms().iter().copied());
        for candidate in candidates {
            let score = similarity(header, candidate);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((field, score));
            }
        }
    }

    match best {
        Some((field, confidence)) if confidence >= MIN_CONFIDENCE => Some(FieldMatch {
            field,
            confidence,
            source: MatchSource::Synonym,
        }),
        Some((_, confidence)) if confidence > 0.0 => None,
        _ => {
            let values = column_values?;
            let guess = detect_field_type_with_today(values, today)?;
            let field = field_for_type_guess(guess, target_fields)?;
            debug!(
                header,
                guess = guess.as_str(),
                field = field.as_str(),
                "value-pattern fallback"
            );
            Some(FieldMatch {
                field,
                confidence: FALLBACK_CONFIDENCE,
                source: MatchSource::ValuePattern,
            })
        }
    }
}

/// Map a detected value type onto a candidate field by keyword containment,
/// falling back to an exact type-name match.
fn field_for_type_guess(guess: TypeGuess, target_fields: &[TargetField]) -> Option<TargetField> {
    let by_keyword = |keywords: &[&str]| {
        target_fields
            .iter()
            .copied()
            .find(|field| keywords.iter().any(|kw| field.as_str().contains(kw)))
    };
    match guess {
        TypeGuess::Price => by_keyword(&["price"]),
        TypeGuess::Numeric => by_keyword(&["stock", "quantity"]),
        TypeGuess::Date => by_keyword(&["date"]),
        other => target_fields
            .iter()
            .copied()
            .find(|field| field.as_str() == other.as_str()),
    }
}

/// Auto-map every header of a dataset onto the target fields, one-to-one.
///
/// Pass 1 accepts matches at or above 0.7 confidence against the full field
/// set; pass 2 retries each leftover header against only the unclaimed
/// fields and accepts whatever clears the floor. Every header appears in
/// the result exactly once, possibly unmapped; no field is assigned twice.
pub fn auto_map_headers(
    headers: &[String],
    target_fields: &[TargetField],
    rows: &[Vec<String>],
) -> MappingResult {
    auto_map_headers_with_today(headers, target_fields, rows, Local::now().date_naive())
}

/// [`auto_map_headers`] with an injected reference date, for deterministic
/// fixtures and replayable pipelines.
pub fn auto_map_headers_with_today(
    headers: &[String],
    target_fields: &[TargetField],
    rows: &[Vec<String>],
    today: NaiveDate,
) -> MappingResult {
    let samples = sample_columns(headers.len(), rows);
    let mut used: BTreeSet<TargetField> = BTreeSet::new();
    let mut matches: Vec<Option<FieldMatch>> = vec![None; headers.len()];

    // High-confidence pass: full candidate set, first header wins a field.
    for (idx, header) in headers.iter().enumerate() {
        let candidate =
            match_header_with_today(header, target_fields, Some(samples[idx].as_slice()), today);
        if let Some(found) = candidate
            && found.confidence >= HIGH_CONFIDENCE
            && !used.contains(&found.field)
        {
            debug!(
                header = header.as_str(),
                field = found.field.as_str(),
                confidence = found.confidence,
                "mapped (high)"
            );
            used.insert(found.field);
            matches[idx] = Some(found);
        }
    }

    // Low-confidence pass: leftovers compete only for unclaimed fields.
    for (idx, header) in headers.iter().enumerate() {
        if matches[idx].is_some() {
            continue;
        }
        let remaining: Vec<TargetField> = target_fields
            .iter()
            .copied()
            .filter(|field| !used.contains(field))
            .collect();
        if remaining.is_empty() {
            break;
        }
        if let Some(found) =
            match_header_with_today(header, &remaining, Some(samples[idx].as_slice()), today)
        {
            debug!(
                header = header.as_str(),
                field = found.field.as_str(),
                confidence = found.confidence,
                "mapped (low)"
            );
            used.insert(found.field);
            matches[idx] = Some(found);
        }
    }

    MappingResult {
        columns: headers
            .iter()
            .zip(matches)
            .map(|(header, field_match)| ColumnMapping {
                header: header.trim().to_string(),
                field_match,
            })
            .collect(),
    }
}

/// First [`SAMPLE_LIMIT`] non-empty values of each column, in row order.
fn sample_columns(column_count: usize, rows: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut samples = vec![Vec::new(); column_count];
    for row in rows {
        for (idx, sample) in samples.iter_mut().enumerate() {
            if sample.len() >= SAMPLE_LIMIT {
                continue;
            }
            if let Some(value) = row.get(idx) {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    sample.push(trimmed.to_string());
                }
            }
        }
    }
    samples
}
