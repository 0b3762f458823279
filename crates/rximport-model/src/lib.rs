//! Data model for the pharmacy inventory field-mapping engine.
//!
//! Everything here is transient and process-local: target-field vocabulary,
//! mapping results, and the structured shape of a parsed product line.
//! The synonym dictionary on [`TargetField`] is a versioned contract:
//! changing it changes mapping outcomes for existing import fixtures.

pub mod error;
pub mod field;
pub mod mapping;
pub mod product;

pub use error::ModelError;
pub use field::TargetField;
pub use mapping::{
    ColumnMapping, FieldMatch, HIGH_CONFIDENCE, ImportConfig, MIN_CONFIDENCE, MappingResult,
    MatchSource,
};
pub use product::{DosageForm, ParsedProductLine};
