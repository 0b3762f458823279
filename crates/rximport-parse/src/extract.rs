//! Destructive sub-field extraction from one free-text product line.
//!
//! The extractor runs a fixed pipeline of stages (quantity, price, expiry,
//! batch) over a single residual string. Within a stage the patterns are
//! tried in order, the first hit wins, and its span is cut out of the
//! residual so later stages see cleaner text. Whatever survives all four
//! stages becomes the product name.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use rximport_model::ParsedProductLine;
use rximport_normalize::{expand_two_digit_year, month_from_name, parse_numeric_value};

use crate::category::infer_category;

/// Characters trimmed off the ends of the residual name.
const NAME_TRIM: [char; 5] = ['-', '–', '—', ':', ','];

/// Longest name kept when falling back to the raw input.
const NAME_FALLBACK_MAX: usize = 100;

static QUANTITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bx\s*(\d+)\b",
        r"(?i)\b(\d+)\s*(?:pcs|pieces|units?|tabs?|tablets?|caps?|capsules?|bottles?|packs?|boxes?|cartons?)\b",
        r"(?i)\(\s*(\d+)\s*(?:tablets?|caps?|capsules?|pieces?|pcs|units?)\s*\)",
        r"(?i)\bqty\s*[:.]?\s*(\d+)\b",
        r"(?i)\bstock\s*[:.]?\s*(\d+)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("quantity pattern"))
    .collect()
});

static PRICE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"@?\s*(?:₦|\bN)\s*(\d[\d,]*(?:\.\d+)?)",
        r"@\s*(\d[\d,]*(?:\.\d+)?)",
        r"(?i)\bNGN\s*(\d[\d,]*(?:\.\d+)?)",
        r"(?i)\bprice\s*[:.]?\s*[₦N]?\s*(\d[\d,]*(?:\.\d+)?)",
        r"(?i)\bcost\s*[:.]?\s*[₦N]?\s*(\d[\d,]*(?:\.\d+)?)",
        r"(?i)\b(\d[\d,]*(?:\.\d+)?)\s*(?:naira|ngn)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("price pattern"))
    .collect()
});

const EXPIRY_PREFIX: &str = r"(?i)\b(?:exp|expiry|best\s+before|bb)[:.\s]*";

static EXPIRY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{EXPIRY_PREFIX}(\d{{1,2}})[/-](\d{{2}}|\d{{4}})\b")).expect("expiry m/y")
});

static EXPIRY_ISO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{EXPIRY_PREFIX}(\d{{4}})-(\d{{1,2}})-(\d{{1,2}})\b")).expect("expiry iso")
});

static EXPIRY_MONTH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{EXPIRY_PREFIX}(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s*,?\s*(\d{{4}})\b"
    ))
    .expect("expiry month name")
});

// "bn"/"b/n" may run straight into the token (BN123); the spelled keywords
// need a word boundary so "lotion" and "batches" stay in the name.
static BATCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:b/n|bn|(?:batch|lot)\b)[\s:.\-]*([A-Za-z0-9][A-Za-z0-9\-]*)")
        .expect("batch pattern")
});

/// Cheap pre-check: does this line look like it carries embedded fields?
///
/// True when the text is at least 5 characters long and any quantity,
/// price, expiry, or batch indicator occurs anywhere. Callers use this to
/// skip the full extractor for plain product names.
pub fn is_compound_line(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.chars().count() < 5 {
        return false;
    }
    QUANTITY_PATTERNS.iter().any(|p| p.is_match(trimmed))
        || PRICE_PATTERNS.iter().any(|p| p.is_match(trimmed))
        || EXPIRY_MONTH_YEAR.is_match(trimmed)
        || EXPIRY_ISO.is_match(trimmed)
        || EXPIRY_MONTH_NAME.is_match(trimmed)
        || BATCH_PATTERN.is_match(trimmed)
}

/// Decompose one free-text product line into structured fields.
///
/// Stages run in a fixed order (quantity, price, expiry, batch), each
/// removing its matched span from the residual; the category scan then
/// reads the residual without consuming it, and the leftover text becomes
/// the name. When stripping leaves fewer than 2 characters, the name falls
/// back to the original input truncated to 100 characters.
pub fn parse_compound_product_line(text: &str) -> ParsedProductLine {
    let original = text.trim();
    let mut line = ParsedProductLine::name_only(String::new());
    let mut residual = original.to_string();

    if let Some((range, value)) = extract_quantity(&residual) {
        trace!(value, "quantity");
        line.quantity = Some(value);
        cut(&mut residual, range);
    }
    if let Some((range, value)) = extract_price(&residual) {
        trace!(value, "price");
        line.price = Some(value);
        cut(&mut residual, range);
    }
    if let Some((range, value)) = extract_expiry(&residual) {
        trace!(value = value.as_str(), "expiry");
        line.expiry = Some(value);
        cut(&mut residual, range);
    }
    if let Some((range, value)) = extract_batch(&residual) {
        trace!(value = value.as_str(), "batch");
        line.batch_number = Some(value);
        cut(&mut residual, range);
    }

    line.category = infer_category(&residual);

    let name = clean_name(&residual);
    line.name = if name.chars().count() < 2 {
        original.chars().take(NAME_FALLBACK_MAX).collect()
    } else {
        name
    };
    line
}

/// Replace the matched span with a space so word boundaries survive.
fn cut(residual: &mut String, range: Range<usize>) {
    residual.replace_range(range, " ");
}

fn extract_quantity(residual: &str) -> Option<(Range<usize>, u32)> {
    for pattern in QUANTITY_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(residual) {
            let whole = caps.get(0).expect("match");
            if let Ok(value) = caps[1].parse() {
                return Some((whole.range(), value));
            }
        }
    }
    None
}

fn extract_price(residual: &str) -> Option<(Range<usize>, f64)> {
    for pattern in PRICE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(residual) {
            let whole = caps.get(0).expect("match");
            let value = parse_numeric_value(&caps[1]);
            if value > 0.0 {
                return Some((whole.range(), value));
            }
        }
    }
    None
}

fn extract_expiry(residual: &str) -> Option<(Range<usize>, String)> {
    if let Some(caps) = EXPIRY_MONTH_YEAR.captures(residual) {
        if let Some(date) = month_year_date(&caps) {
            return Some((caps.get(0).expect("match").range(), date));
        }
    }
    if let Some(caps) = EXPIRY_ISO.captures(residual) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        if (1..=12).contains(&month) && (1..=31).contains(&day) {
            return Some((
                caps.get(0).expect("match").range(),
                format!("{year:04}-{month:02}-{day:02}"),
            ));
        }
    }
    if let Some(caps) = EXPIRY_MONTH_NAME.captures(residual) {
        let month = month_from_name(&caps[1])?;
        let year: i32 = caps[2].parse().ok()?;
        return Some((
            caps.get(0).expect("match").range(),
            format!("{year:04}-{month:02}-01"),
        ));
    }
    None
}

fn month_year_date(caps: &Captures<'_>) -> Option<String> {
    let month: u32 = caps[1].parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    let raw_year: u32 = caps[2].parse().ok()?;
    let year = expand_two_digit_year(raw_year);
    Some(format!("{year:04}-{month:02}-01"))
}

fn extract_batch(residual: &str) -> Option<(Range<usize>, String)> {
    let caps = BATCH_PATTERN.captures(residual)?;
    let token = caps[1].trim_matches('-').to_string();
    if token.is_empty() {
        return None;
    }
    Some((caps.get(0).expect("match").range(), token))
}

/// Collapse whitespace and trim leading/trailing separators.
fn clean_name(residual: &str) -> String {
    residual
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|ch: char| ch.is_whitespace() || NAME_TRIM.contains(&ch))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rximport_model::DosageForm;

    #[test]
    fn full_line_with_at_price_and_short_expiry() {
        let line = parse_compound_product_line("Paracetamol 500mg Tab x100 @₦1500 exp 03/26");
        assert_eq!(line.quantity, Some(100));
        assert_eq!(line.price, Some(1500.0));
        assert_eq!(line.expiry.as_deref(), Some("2026-03-01"));
        assert_eq!(line.category, Some(DosageForm::Tablet));
        assert!(line.name.contains("Paracetamol 500mg"), "name: {}", line.name);
    }

    #[test]
    fn naira_prefix_and_batch_marker() {
        let line = parse_compound_product_line("Amoxicillin 250mg Caps - 50pcs N2000 B/N: ABC123");
        assert_eq!(line.quantity, Some(50));
        assert_eq!(line.price, Some(2000.0));
        assert_eq!(line.batch_number.as_deref(), Some("ABC123"));
        assert_eq!(line.category, Some(DosageForm::Capsule));
        assert_eq!(line.name, "Amoxicillin 250mg Caps");
    }

    #[test]
    fn fields_are_independently_optional() {
        let line = parse_compound_product_line("Cough Syrup 100ml qty: 12");
        assert_eq!(line.quantity, Some(12));
        assert_eq!(line.price, None);
        assert_eq!(line.expiry, None);
        assert_eq!(line.batch_number, None);
        assert_eq!(line.category, Some(DosageForm::Syrup));
        assert!(line.name.starts_with("Cough Syrup"));
    }

    #[test]
    fn price_spelling_variants() {
        assert_eq!(
            parse_compound_product_line("Ibuprofen NGN 850").price,
            Some(850.0)
        );
        assert_eq!(
            parse_compound_product_line("Ibuprofen price: ₦850.50").price,
            Some(850.5)
        );
        assert_eq!(
            parse_compound_product_line("Ibuprofen 1,200 naira").price,
            Some(1200.0)
        );
        assert_eq!(
            parse_compound_product_line("Ibuprofen cost N300").price,
            Some(300.0)
        );
    }

    #[test]
    fn expiry_spelling_variants() {
        assert_eq!(
            parse_compound_product_line("Zinnat expiry 2027-06-15").expiry.as_deref(),
            Some("2027-06-15")
        );
        assert_eq!(
            parse_compound_product_line("Zinnat best before Mar 2027").expiry.as_deref(),
            Some("2027-03-01")
        );
        assert_eq!(
            parse_compound_product_line("Zinnat exp: 11/2027").expiry.as_deref(),
            Some("2027-11-01")
        );
    }

    #[test]
    fn quantity_in_parentheses() {
        let line = parse_compound_product_line("Vitamin C (30 tablets) lot 88A1");
        assert_eq!(line.quantity, Some(30));
        assert_eq!(line.batch_number.as_deref(), Some("88A1"));
        assert!(line.name.starts_with("Vitamin C"));
    }

    #[test]
    fn over_stripped_line_falls_back_to_original() {
        let line = parse_compound_product_line("x100 ₦500");
        assert_eq!(line.quantity, Some(100));
        assert_eq!(line.price, Some(500.0));
        // Residual is empty, so the name reverts to the raw input.
        assert_eq!(line.name, "x100 ₦500");
    }

    #[test]
    fn long_fallback_name_is_truncated() {
        // Everything is consumed by the stages, so the name falls back to
        // the original input, capped at 100 characters.
        let long = format!("B/N: {} x5", "A".repeat(120));
        let line = parse_compound_product_line(&long);
        assert_eq!(line.quantity, Some(5));
        assert_eq!(line.batch_number.as_deref(), Some("A".repeat(120).as_str()));
        assert_eq!(line.name.chars().count(), 100);
    }

    #[test]
    fn keyword_prefixes_inside_words_do_not_trigger() {
        let line = parse_compound_product_line("Calamine lotion ₦500");
        assert_eq!(line.batch_number, None);
        assert_eq!(line.price, Some(500.0));
        assert!(line.name.contains("lotion"), "name: {}", line.name);
    }

    #[test]
    fn attached_batch_token_still_extracts() {
        let line = parse_compound_product_line("Amoxil BN4521 x20");
        assert_eq!(line.quantity, Some(20));
        assert_eq!(line.batch_number.as_deref(), Some("4521"));
        assert_eq!(line.name, "Amoxil");
    }

    #[test]
    fn compound_pre_check() {
        assert!(!is_compound_line("Paracetamol"));
        assert!(is_compound_line("Paracetamol x100"));
        assert!(is_compound_line("Zinnat exp 03/26"));
        assert!(is_compound_line("Amoxil B/N: XYZ1"));
        assert!(!is_compound_line("x1"));
        assert!(!is_compound_line(""));
    }
}
