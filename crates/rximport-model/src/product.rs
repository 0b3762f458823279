//! Structured output of the compound product-line extractor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dosage form inferred from keywords left in a product line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DosageForm {
    Tablet,
    Capsule,
    Syrup,
    Injection,
    Cream,
    Drops,
    Inhaler,
    Powder,
}

impl DosageForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            DosageForm::Tablet => "Tablet",
            DosageForm::Capsule => "Capsule",
            DosageForm::Syrup => "Syrup",
            DosageForm::Injection => "Injection",
            DosageForm::Cream => "Cream",
            DosageForm::Drops => "Drops",
            DosageForm::Inhaler => "Inhaler",
            DosageForm::Powder => "Powder",
        }
    }
}

impl fmt::Display for DosageForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields recovered from one free-text product line.
///
/// `name` is always populated; every other field is independently absent
/// when its pattern did not occur in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedProductLine {
    /// Residual text after sub-field extraction, or the truncated original
    /// input when extraction left nothing usable.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Normalized to `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<DosageForm>,
}

impl ParsedProductLine {
    /// A line with only a name and no extracted sub-fields.
    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            price: None,
            expiry: None,
            batch_number: None,
            category: None,
        }
    }

    /// True if any sub-field beyond the name was recovered.
    pub fn has_extracted_fields(&self) -> bool {
        self.quantity.is_some()
            || self.price.is_some()
            || self.expiry.is_some()
            || self.batch_number.is_some()
            || self.category.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_only_has_no_fields() {
        let line = ParsedProductLine::name_only("Paracetamol");
        assert_eq!(line.name, "Paracetamol");
        assert!(!line.has_extracted_fields());
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let line = ParsedProductLine::name_only("Paracetamol");
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, "{\"name\":\"Paracetamol\"}");
    }

    #[test]
    fn dosage_form_display_matches_table() {
        assert_eq!(DosageForm::Tablet.to_string(), "Tablet");
        assert_eq!(DosageForm::Drops.to_string(), "Drops");
    }
}
