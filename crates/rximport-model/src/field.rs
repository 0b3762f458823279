use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical inventory and contact fields that spreadsheet columns are
/// mapped onto.
///
/// This is a closed set: the synonym dictionary attached to each field is a
/// versioned contract, and adding or removing entries changes mapping
/// outcomes for existing import tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetField {
    // Product fields
    Name,
    UnitPrice,
    SellingPrice,
    BatchNumber,
    ExpiryDate,
    ManufacturingDate,
    CurrentStock,
    Category,
    BarcodeId,
    NafdacRegNumber,
    ReorderLevel,
    Supplier,
    Location,
    // Customer / prescriber fields
    FullName,
    Phone,
    Email,
    DateOfBirth,
    Address,
    HospitalClinic,
    Specialty,
    LicenseNumber,
}

impl TargetField {
    /// All fields in declaration order. Iteration order matters: mapping
    /// tie-breaks resolve in favor of earlier entries.
    pub const ALL: [TargetField; 21] = [
        TargetField::Name,
        TargetField::UnitPrice,
        TargetField::SellingPrice,
        TargetField::BatchNumber,
        TargetField::ExpiryDate,
        TargetField::ManufacturingDate,
        TargetField::CurrentStock,
        TargetField::Category,
        TargetField::BarcodeId,
        TargetField::NafdacRegNumber,
        TargetField::ReorderLevel,
        TargetField::Supplier,
        TargetField::Location,
        TargetField::FullName,
        TargetField::Phone,
        TargetField::Email,
        TargetField::DateOfBirth,
        TargetField::Address,
        TargetField::HospitalClinic,
        TargetField::Specialty,
        TargetField::LicenseNumber,
    ];

    /// The snake_case identifier used in configs and serialized mappings.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetField::Name => "name",
            TargetField::UnitPrice => "unit_price",
            TargetField::SellingPrice => "selling_price",
            TargetField::BatchNumber => "batch_number",
            TargetField::ExpiryDate => "expiry_date",
            TargetField::ManufacturingDate => "manufacturing_date",
            TargetField::CurrentStock => "current_stock",
            TargetField::Category => "category",
            TargetField::BarcodeId => "barcode_id",
            TargetField::NafdacRegNumber => "nafdac_reg_number",
            TargetField::ReorderLevel => "reorder_level",
            TargetField::Supplier => "supplier",
            TargetField::Location => "location",
            TargetField::FullName => "full_name",
            TargetField::Phone => "phone",
            TargetField::Email => "email",
            TargetField::DateOfBirth => "date_of_birth",
            TargetField::Address => "address",
            TargetField::HospitalClinic => "hospital_clinic",
            TargetField::Specialty => "specialty",
            TargetField::LicenseNumber => "license_number",
        }
    }

    /// Known alternate header spellings for this field.
    ///
    /// Matching is case- and separator-insensitive; the field's own
    /// identifier (with underscores read as spaces) is always considered in
    /// addition to this list.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            TargetField::Name => &[
                "product name",
                "medication name",
                "drug name",
                "item name",
                "medicine name",
                "product",
                "medicine",
                "item",
                "drug",
                "description",
            ],
            TargetField::UnitPrice => &[
                "cost price",
                "unit cost",
                "buying price",
                "purchase price",
                "cost",
                "cp",
            ],
            TargetField::SellingPrice => &[
                "price",
                "sale price",
                "retail price",
                "selling",
                "sp",
                "amount",
            ],
            TargetField::BatchNumber => &[
                "batch no",
                "batch",
                "lot number",
                "lot no",
                "lot",
                "bn",
                "b n",
            ],
            TargetField::ExpiryDate => &[
                "expiry",
                "expiration date",
                "exp date",
                "exp",
                "expires",
                "best before",
                "use by",
            ],
            TargetField::ManufacturingDate => &[
                "mfg date",
                "manufacture date",
                "mfd",
                "production date",
                "date of manufacture",
            ],
            TargetField::CurrentStock => &[
                "stock",
                "quantity",
                "qty",
                "stock level",
                "on hand",
                "units",
                "stock qty",
                "balance",
            ],
            TargetField::Category => &[
                "type",
                "class",
                "product category",
                "dosage form",
                "form",
                "group",
            ],
            TargetField::BarcodeId => &[
                "barcode",
                "bar code",
                "ean",
                "upc",
                "sku",
                "product code",
                "item code",
            ],
            TargetField::NafdacRegNumber => &[
                "nafdac",
                "nafdac no",
                "nafdac number",
                "nafdac reg",
                "reg no",
                "registration number",
            ],
            TargetField::ReorderLevel => &[
                "reorder point",
                "min stock",
                "minimum stock",
                "reorder qty",
                "low stock level",
            ],
            TargetField::Supplier => &[
                "vendor",
                "distributor",
                "supplier name",
                "wholesaler",
                "manufacturer",
            ],
            TargetField::Location => &[
                "shelf",
                "rack",
                "store location",
                "shelf location",
                "aisle",
                "bin",
            ],
            TargetField::FullName => &[
                "customer name",
                "patient name",
                "client name",
                "doctor name",
                "name of customer",
                "full names",
            ],
            TargetField::Phone => &[
                "phone number",
                "mobile",
                "mobile number",
                "telephone",
                "tel",
                "gsm",
                "phone no",
                "contact number",
                "whatsapp",
            ],
            TargetField::Email => &["email address", "e mail", "mail"],
            TargetField::DateOfBirth => &["dob", "birth date", "birthday", "d o b"],
            TargetField::Address => &[
                "home address",
                "residential address",
                "street address",
                "contact address",
            ],
            TargetField::HospitalClinic => &[
                "hospital",
                "clinic",
                "hospital name",
                "facility",
                "place of work",
            ],
            TargetField::Specialty => &[
                "specialization",
                "speciality",
                "field",
                "area of practice",
            ],
            TargetField::LicenseNumber => &[
                "license no",
                "licence number",
                "licence no",
                "mdcn number",
                "practice license",
                "license",
            ],
        }
    }
}

impl fmt::Display for TargetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetField {
    type Err = crate::error::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        TargetField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| crate::error::ModelError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for field in TargetField::ALL {
            assert_eq!(field.as_str().parse::<TargetField>().unwrap(), field);
        }
    }

    #[test]
    fn from_str_accepts_spaces_and_dashes() {
        assert_eq!(
            "Unit Price".parse::<TargetField>().unwrap(),
            TargetField::UnitPrice
        );
        assert_eq!(
            "expiry-date".parse::<TargetField>().unwrap(),
            TargetField::ExpiryDate
        );
        assert!("frobnicator".parse::<TargetField>().is_err());
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&TargetField::NafdacRegNumber).unwrap();
        assert_eq!(json, "\"nafdac_reg_number\"");
    }

    #[test]
    fn every_field_has_synonyms() {
        for field in TargetField::ALL {
            assert!(
                !field.synonyms().is_empty(),
                "{field} has an empty synonym list"
            );
        }
    }
}
