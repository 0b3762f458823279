//! Flexible date parsing for human-entered spreadsheet cells.
//!
//! Inventory sheets mix `2026-03-01`, `01/03/2026`, `03/2026`, `15-Jan-2024`
//! and worse, often within one column. The parser tries a fixed ladder of
//! strategies and normalizes everything to `YYYY-MM-DD`. Failure is a
//! `None`, never an error: one malformed cell must not abort a bulk import.

use chrono::NaiveDate;

/// Month-name table used wherever a month is spelled out.
/// Lookup is by 3-letter prefix, case-insensitive.
const MONTH_ABBREVS: [(&str, u32); 12] = [
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

/// Resolve a spelled-out month ("jan", "January", "SEPT") to its number.
pub fn month_from_name(raw: &str) -> Option<u32> {
    let lower = raw.trim().to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTH_ABBREVS
        .iter()
        .find(|(abbrev, _)| lower.starts_with(abbrev))
        .map(|(_, month)| *month)
}

/// Widen a 2-digit year to the 2000s.
pub fn expand_two_digit_year(year: u32) -> i32 {
    if year < 100 { 2000 + year as i32 } else { year as i32 }
}

/// Parse a loosely-formatted date string to `YYYY-MM-DD`.
///
/// Strategies, in order:
/// 1. canonical `YYYY-MM-DD` (re-emitted zero-padded, so the function is
///    idempotent on its own output)
/// 2. slash dates `D/M/YYYY`, disambiguating day vs month by which
///    component exceeds 12 (day-first wins when both fit)
/// 3. `M/YYYY` with the day defaulting to `01`
/// 4. dash dates `D-M-YYYY`
/// 5. a fixed list of chrono formats for month-name and compact spellings
///
/// Returns `None` only when every strategy fails.
pub fn parse_flexible_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    try_iso(trimmed)
        .or_else(|| try_slash(trimmed))
        .or_else(|| try_dash_dmy(trimmed))
        .or_else(|| try_known_formats(trimmed))
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// `Option`-free convenience for callers that want the parsed date itself.
pub fn parse_flexible_naive(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    try_iso(trimmed)
        .or_else(|| try_slash(trimmed))
        .or_else(|| try_dash_dmy(trimmed))
        .or_else(|| try_known_formats(trimmed))
}

fn parse_component(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

fn try_iso(value: &str) -> Option<NaiveDate> {
    let mut parts = value.splitn(3, '-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if year.len() != 4 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, parse_component(month)?, parse_component(day)?)
}

fn try_slash(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('/').collect();
    match parts.as_slice() {
        [a, b, y] if y.len() == 4 => {
            let a = parse_component(a)?;
            let b = parse_component(b)?;
            let year: i32 = y.parse().ok()?;
            // Day-first unless only the second component can be a day.
            let (day, month) = if a > 12 {
                (a, b)
            } else if b > 12 {
                (b, a)
            } else {
                (a, b)
            };
            NaiveDate::from_ymd_opt(year, month, day)
        }
        [m, y] if y.len() == 4 => {
            let month = parse_component(m)?;
            let year: i32 = y.parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1)
        }
        _ => None,
    }
}

fn try_dash_dmy(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('-').collect();
    let [a, b, y] = parts.as_slice() else {
        return None;
    };
    if y.len() != 4 {
        return None;
    }
    let a = parse_component(a)?;
    let b = parse_component(b)?;
    let year: i32 = y.parse().ok()?;
    let (day, month) = if b > 12 && a <= 12 { (b, a) } else { (a, b) };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn try_known_formats(value: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 8] = [
        "%d-%b-%Y",  // 15-Jan-2024
        "%d %b %Y",  // 15 Jan 2024
        "%d %B %Y",  // 15 January 2024
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
        "%Y/%m/%d",  // 2024/01/15
        "%d.%m.%Y",  // 15.01.2024
        "%Y%m%d",    // 20240115
    ];
    for format in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    // Month-name plus year ("Jan 2024", "March 2026"): day defaults to 01.
    let mut words = value.split_whitespace();
    if let (Some(name), Some(year), None) = (words.next(), words.next(), words.next())
        && let Some(month) = month_from_name(name)
        && year.len() == 4
        && let Ok(year) = year.parse::<i32>()
    {
        return NaiveDate::from_ymd_opt(year, month, 1);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn canonical_passes_through() {
        assert_eq!(
            parse_flexible_date("2026-03-01").as_deref(),
            Some("2026-03-01")
        );
        // Unpadded components are re-emitted padded.
        assert_eq!(
            parse_flexible_date("2026-3-1").as_deref(),
            Some("2026-03-01")
        );
    }

    #[test]
    fn idempotent_on_own_output() {
        let once = parse_flexible_date("15/01/2024").unwrap();
        assert_eq!(parse_flexible_date(&once).as_deref(), Some(once.as_str()));
    }

    #[test]
    fn slash_dates_disambiguate_by_magnitude() {
        // Day-first by default.
        assert_eq!(
            parse_flexible_date("05/03/2026").as_deref(),
            Some("2026-03-05")
        );
        // First component can only be a day.
        assert_eq!(
            parse_flexible_date("25/03/2026").as_deref(),
            Some("2026-03-25")
        );
        // Second component can only be a day, so the first is the month.
        assert_eq!(
            parse_flexible_date("03/25/2026").as_deref(),
            Some("2026-03-25")
        );
    }

    #[test]
    fn month_year_defaults_day() {
        assert_eq!(
            parse_flexible_date("03/2026").as_deref(),
            Some("2026-03-01")
        );
        assert_eq!(
            parse_flexible_date("Jan 2024").as_deref(),
            Some("2024-01-01")
        );
    }

    #[test]
    fn dash_dmy() {
        assert_eq!(
            parse_flexible_date("15-01-2024").as_deref(),
            Some("2024-01-15")
        );
    }

    #[test]
    fn month_name_formats() {
        assert_eq!(
            parse_flexible_date("15-Jan-2024").as_deref(),
            Some("2024-01-15")
        );
        assert_eq!(
            parse_flexible_date("Jan 15, 2024").as_deref(),
            Some("2024-01-15")
        );
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("no date here"), None);
        assert_eq!(parse_flexible_date("99/99/9999"), None);
    }

    #[test]
    fn month_names_resolve() {
        assert_eq!(month_from_name("jan"), Some(1));
        assert_eq!(month_from_name("September"), Some(9));
        assert_eq!(month_from_name("SEPT"), Some(9));
        assert_eq!(month_from_name("xx"), None);
    }

    proptest! {
        #[test]
        fn valid_dates_are_idempotent(year in 1990i32..2090, month in 1u32..=12, day in 1u32..=28) {
            let canonical = format!("{year:04}-{month:02}-{day:02}");
            let parsed = parse_flexible_date(&canonical).unwrap();
            prop_assert_eq!(&parsed, &canonical);
            prop_assert_eq!(parse_flexible_date(&parsed).unwrap(), canonical);
        }
    }
}
