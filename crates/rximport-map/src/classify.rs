//! Value-pattern classification for whole columns.
//!
//! Given a sample of raw cell values, guess the semantic type of the column
//! from shape alone. Checks run in a fixed order and the first category that
//! clears its majority threshold wins. Thresholds are deliberately generous
//! (50–70%) for dirty real-world data: a mixed column that reaches no
//! majority classifies as nothing rather than as the wrong thing.

use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of non-empty values sampled from a column.
pub const SAMPLE_LIMIT: usize = 10;

const DATE_THRESHOLD: f64 = 0.7;
const BATCH_THRESHOLD: f64 = 0.5;
const PHONE_THRESHOLD: f64 = 0.5;
const EMAIL_THRESHOLD: f64 = 0.5;
const NUMERIC_THRESHOLD: f64 = 0.7;

/// Semantic type guessed from value shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeGuess {
    ExpiryDate,
    Date,
    BatchNumber,
    Phone,
    Email,
    Price,
    Numeric,
}

impl TypeGuess {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeGuess::ExpiryDate => "expiry_date",
            TypeGuess::Date => "date",
            TypeGuess::BatchNumber => "batch_number",
            TypeGuess::Phone => "phone",
            TypeGuess::Email => "email",
            TypeGuess::Price => "price",
            TypeGuess::Numeric => "numeric",
        }
    }
}

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\d{4}-\d{1,2}-\d{1,2}$",
        r"^\d{1,2}/\d{1,2}/\d{4}$",
        r"^\d{1,2}-\d{1,2}-\d{4}$",
        r"^\d{1,2}/\d{4}$",
        r"^\d{1,2}-\d{4}$",
        r"(?i)^(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*([\s,.-]|$)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("date pattern"))
    .collect()
});

static FOUR_DIGIT_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("year pattern"));

static LETTERS_THEN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+\d+$").expect("batch pattern"));

static BN_PREFIXED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^b\s?n[\s:.\-]*\d+$").expect("bn pattern"));

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("email pattern")
});

static NUMERIC_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?\d*$").expect("numeric pattern"));

static TWO_DECIMALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\d{2}$").expect("decimals pattern"));

/// Classify a column from its sampled values using today's date for the
/// expiry-vs-date split. Tests and replayable pipelines should prefer
/// [`detect_field_type_with_today`].
pub fn detect_field_type_from_values(values: &[String]) -> Option<TypeGuess> {
    detect_field_type_with_today(values, Local::now().date_naive())
}

/// Classify a column from its sampled values against an explicit reference
/// date. Only the first [`SAMPLE_LIMIT`] non-empty values are considered.
pub fn detect_field_type_with_today(values: &[String], today: NaiveDate) -> Option<TypeGuess> {
    let sample: Vec<&str> = values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .take(SAMPLE_LIMIT)
        .collect();
    if sample.is_empty() {
        return None;
    }
    let total = sample.len() as f64;

    // 1. Dates. A future-leaning year anywhere in the matches marks the
    //    column as expiry rather than a generic date.
    let date_matches: Vec<&str> = sample
        .iter()
        .copied()
        .filter(|value| DATE_PATTERNS.iter().any(|pattern| pattern.is_match(value)))
        .collect();
    if date_matches.len() as f64 / total >= DATE_THRESHOLD {
        let current_year = today.year();
        let future_leaning = date_matches.iter().any(|value| {
            FOUR_DIGIT_YEAR
                .find(value)
                .and_then(|m| m.as_str().parse::<i32>().ok())
                .is_some_and(|year| year > current_year)
        });
        return Some(if future_leaning {
            TypeGuess::ExpiryDate
        } else {
            TypeGuess::Date
        });
    }

    // 2. Batch codes.
    let batch_matches = sample.iter().filter(|value| is_batch_like(value)).count();
    if batch_matches as f64 / total >= BATCH_THRESHOLD {
        return Some(TypeGuess::BatchNumber);
    }

    // 3. Phone numbers (Nigerian mobile shapes, then generic 10-11 digit).
    let phone_matches = sample.iter().filter(|value| is_phone_like(value)).count();
    if phone_matches as f64 / total >= PHONE_THRESHOLD {
        return Some(TypeGuess::Phone);
    }

    // 4. Emails.
    let email_matches = sample
        .iter()
        .filter(|value| EMAIL_SHAPE.is_match(value))
        .count();
    if email_matches as f64 / total >= EMAIL_THRESHOLD {
        return Some(TypeGuess::Email);
    }

    // 5. Numeric family, promoted to price on any currency evidence.
    let numeric_matches: Vec<&str> = sample
        .iter()
        .copied()
        .filter(|value| NUMERIC_SHAPE.is_match(&strip_amount_decorations(value)))
        .collect();
    if numeric_matches.len() as f64 / total >= NUMERIC_THRESHOLD {
        let priced = sample
            .iter()
            .any(|value| value.contains('₦') || value.contains('$') || TWO_DECIMALS.is_match(value));
        return Some(if priced {
            TypeGuess::Price
        } else {
            TypeGuess::Numeric
        });
    }

    None
}

fn is_batch_like(value: &str) -> bool {
    if LETTERS_THEN_DIGITS.is_match(value) || BN_PREFIXED.is_match(value) {
        return true;
    }
    // 6+ alphanumeric chars, mixed: all-digit runs belong to phone/numeric.
    value.len() >= 6
        && value.chars().all(|ch| ch.is_ascii_alphanumeric())
        && value.chars().any(|ch| ch.is_ascii_alphabetic())
        && value.chars().any(|ch| ch.is_ascii_digit())
}

fn is_phone_like(value: &str) -> bool {
    let stripped: String = value
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '(' | ')'))
        .collect();
    if let Some(rest) = stripped.strip_prefix("+234") {
        return rest.len() == 10 && rest.chars().all(|ch| ch.is_ascii_digit());
    }
    if !stripped.chars().all(|ch| ch.is_ascii_digit()) {
        return false;
    }
    if stripped.len() == 11 && stripped.starts_with('0') {
        return matches!(stripped.as_bytes()[1], b'7' | b'8' | b'9');
    }
    (10..=11).contains(&stripped.len())
}

fn strip_amount_decorations(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !matches!(ch, '₦' | '$' | ',') && !ch.is_whitespace())
        .collect()
}
