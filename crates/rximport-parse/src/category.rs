//! Dosage-form inference from keywords left in a product line.

use std::sync::LazyLock;

use regex::Regex;

use rximport_model::DosageForm;

/// Keyword table in declaration order; the first entry whose pattern hits
/// wins. Patterns match whole words, singular or plural.
static CATEGORY_PATTERNS: LazyLock<Vec<(Regex, DosageForm)>> = LazyLock::new(|| {
    [
        (r"(?i)\b(?:tab|tablet)s?\b", DosageForm::Tablet),
        (r"(?i)\b(?:cap|capsule)s?\b", DosageForm::Capsule),
        (r"(?i)\b(?:syrup|syr|suspension|susp)s?\b", DosageForm::Syrup),
        (r"(?i)\b(?:inj|injection|vial)s?\b", DosageForm::Injection),
        (r"(?i)\b(?:cream|ointment|gel|topical)s?\b", DosageForm::Cream),
        (r"(?i)\b(?:drop|eye|ear)s?\b", DosageForm::Drops),
        (r"(?i)\b(?:inhaler|spray|nasal)s?\b", DosageForm::Inhaler),
        (r"(?i)\b(?:powder|sachet)s?\b", DosageForm::Powder),
    ]
    .into_iter()
    .map(|(pattern, form)| (Regex::new(pattern).expect("category pattern"), form))
    .collect()
});

/// Scan text (non-destructively) for a dosage-form keyword.
pub fn infer_category(text: &str) -> Option<DosageForm> {
    CATEGORY_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, form)| *form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_hit_in_table_order() {
        assert_eq!(infer_category("Paracetamol 500mg Tab"), Some(DosageForm::Tablet));
        assert_eq!(infer_category("Amoxicillin Caps"), Some(DosageForm::Capsule));
        assert_eq!(infer_category("Cough SYRUP 100ml"), Some(DosageForm::Syrup));
        assert_eq!(infer_category("Insulin vial"), Some(DosageForm::Injection));
        assert_eq!(infer_category("Hydrocortisone ointment"), Some(DosageForm::Cream));
        assert_eq!(infer_category("Chloramphenicol eye drops"), Some(DosageForm::Drops));
        assert_eq!(infer_category("Salbutamol inhaler"), Some(DosageForm::Inhaler));
        assert_eq!(infer_category("ORS sachets"), Some(DosageForm::Powder));
        assert_eq!(infer_category("Paracetamol"), None);
    }

    #[test]
    fn earlier_table_entries_win() {
        // Both tablet and capsule keywords present; tablet is declared first.
        assert_eq!(
            infer_category("Combo pack tab and cap"),
            Some(DosageForm::Tablet)
        );
    }

    #[test]
    fn keywords_only_match_whole_words() {
        // "tabular", "recap" must not trigger.
        assert_eq!(infer_category("tabular data recap"), None);
    }
}
