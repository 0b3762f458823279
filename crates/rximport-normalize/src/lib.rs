//! Leaf normalizers shared by the classifier, mapper, and line extractor.
//!
//! Both normalizers degrade instead of raising: an unparseable date is
//! `None`, an unparseable amount is `0.0` (with checked variants for callers
//! that need to tell the two apart).

pub mod datetime;
pub mod numeric;

pub use datetime::{expand_two_digit_year, month_from_name, parse_flexible_date, parse_flexible_naive};
pub use numeric::{parse_numeric_checked, parse_numeric_value};
