//! Header-to-field auto-mapping for inventory spreadsheets.
//!
//! Three cooperating pieces:
//! - [`score`]: the dictionary-driven similarity scorer (exact / substring /
//!   token overlap; a versioned contract, not a general string metric)
//! - [`classify`]: value-pattern classification of whole columns from a
//!   sample of their cells
//! - [`engine`]: the greedy two-pass assignment that keeps mappings
//!   one-to-one across a dataset
//!
//! All functions are pure and side-effect-free; a call owns all of its
//! state, so callers may map many datasets concurrently without
//! coordination.

pub mod classify;
pub mod engine;
pub mod hints;
pub mod score;

pub use classify::{SAMPLE_LIMIT, TypeGuess, detect_field_type_from_values, detect_field_type_with_today};
pub use engine::{
    auto_map_headers, auto_map_headers_with_today, match_header_to_field, match_header_with_today,
};
pub use hints::{FieldHint, nearest_fields};
pub use score::{normalize_header, similarity};
