//! Mapping result types for header-to-field assignment.

use serde::{Deserialize, Serialize};

use crate::field::TargetField;

/// Minimum confidence for a match to be reported at all.
pub const MIN_CONFIDENCE: f64 = 0.3;

/// Confidence at or above which a mapping is auto-accepted in the first
/// assignment pass.
pub const HIGH_CONFIDENCE: f64 = 0.7;

/// How a header-to-field match was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// Header text matched the field's synonym dictionary.
    Synonym,
    /// No synonym hit; the column's values were classified instead.
    ValuePattern,
}

/// A proposed assignment of one column to one target field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMatch {
    /// The field this column maps onto.
    pub field: TargetField,
    /// Confidence in [0, 1]. Never below [`MIN_CONFIDENCE`] in results.
    pub confidence: f64,
    /// Whether the match came from the synonym dictionary or value shapes.
    pub source: MatchSource,
}

/// One column of the input dataset and its resolved match, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// The header exactly as it appeared in the source (trimmed).
    pub header: String,
    /// The accepted match, or `None` when the column stays unmapped.
    pub field_match: Option<FieldMatch>,
}

/// Complete mapping for a dataset: one entry per source column, in input
/// order. No target field appears in more than one entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    pub columns: Vec<ColumnMapping>,
}

impl MappingResult {
    /// The match for a given header, if the header exists and was mapped.
    pub fn mapping_for(&self, header: &str) -> Option<&FieldMatch> {
        self.columns
            .iter()
            .find(|column| column.header == header)
            .and_then(|column| column.field_match.as_ref())
    }

    /// Headers that ended up with no field assignment.
    pub fn unmapped_headers(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| column.field_match.is_none())
            .map(|column| column.header.as_str())
            .collect()
    }

    /// Count of columns that received a field.
    pub fn mapped_count(&self) -> usize {
        self.columns
            .iter()
            .filter(|column| column.field_match.is_some())
            .count()
    }

    /// True if a given field was claimed by some column.
    pub fn is_field_used(&self, field: TargetField) -> bool {
        self.columns
            .iter()
            .any(|column| column.field_match.as_ref().is_some_and(|m| m.field == field))
    }
}

/// Serializable import configuration produced from a reviewed mapping.
///
/// This is the record import tooling persists and replays; its JSON shape is
/// part of the engine's public contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Free-form label for the source file or upload.
    pub source: String,
    /// Accepted column-to-field assignments.
    pub mappings: Vec<ColumnMapping>,
    /// Columns left for the catch-all metadata bucket.
    pub unmapped_columns: Vec<String>,
}

impl ImportConfig {
    /// Build a config from a mapping result.
    pub fn from_result(source: &str, result: &MappingResult) -> Self {
        let unmapped_columns = result
            .unmapped_headers()
            .into_iter()
            .map(str::to_string)
            .collect();
        let mappings = result
            .columns
            .iter()
            .filter(|column| column.field_match.is_some())
            .cloned()
            .collect();
        Self {
            source: source.to_string(),
            mappings,
            unmapped_columns,
        }
    }
}
