use rximport_model::DosageForm;
use rximport_parse::{is_compound_line, parse_compound_product_line};

#[test]
fn invoice_paste_batch() {
    // Lines as they arrive from a scanned supplier invoice: mixed ordering,
    // mixed currency spellings, mixed expiry formats.
    let lines = [
        "Paracetamol 500mg Tab x100 @₦1500 exp 03/26",
        "Amoxicillin 250mg Caps - 50pcs N2000 B/N: ABC123",
        "Cough Syrup 100ml qty: 12 NGN 950",
        "Insulin vial (10 units) exp 2027-01-31 lot INS-44",
        "Hydrocortisone cream 1% ₦780",
    ];
    let parsed: Vec<_> = lines.iter().map(|l| parse_compound_product_line(l)).collect();

    assert_eq!(parsed[0].quantity, Some(100));
    assert_eq!(parsed[0].price, Some(1500.0));
    assert_eq!(parsed[0].expiry.as_deref(), Some("2026-03-01"));
    assert_eq!(parsed[0].category, Some(DosageForm::Tablet));

    assert_eq!(parsed[1].quantity, Some(50));
    assert_eq!(parsed[1].price, Some(2000.0));
    assert_eq!(parsed[1].batch_number.as_deref(), Some("ABC123"));
    assert_eq!(parsed[1].category, Some(DosageForm::Capsule));

    assert_eq!(parsed[2].quantity, Some(12));
    assert_eq!(parsed[2].price, Some(950.0));
    assert_eq!(parsed[2].category, Some(DosageForm::Syrup));

    assert_eq!(parsed[3].quantity, Some(10));
    assert_eq!(parsed[3].expiry.as_deref(), Some("2027-01-31"));
    assert_eq!(parsed[3].batch_number.as_deref(), Some("INS-44"));
    assert_eq!(parsed[3].category, Some(DosageForm::Injection));

    assert_eq!(parsed[4].price, Some(780.0));
    assert_eq!(parsed[4].category, Some(DosageForm::Cream));
    assert!(parsed[4].name.contains("Hydrocortisone"));

    // Every line keeps a usable name.
    for line in &parsed {
        assert!(line.name.chars().count() >= 2, "name lost: {line:?}");
    }
}

#[test]
fn pre_check_gates_plain_names() {
    assert!(!is_compound_line("Paracetamol"));
    assert!(!is_compound_line("Multivitamin Syrup"));
    assert!(is_compound_line("Paracetamol x100"));
    assert!(is_compound_line("anything ₦20"));
}

#[test]
fn parsed_line_serializes_for_import_tooling() {
    let line = parse_compound_product_line("Paracetamol 500mg Tab x100 @₦1500 exp 03/26");
    let json = serde_json::to_value(&line).unwrap();
    assert_eq!(json["quantity"], 100);
    assert_eq!(json["expiry"], "2026-03-01");
    assert_eq!(json["category"], "Tablet");
}
