//! Compound product-line extraction.
//!
//! A "compound line" is one human-typed or OCR'd string carrying a product
//! name plus any of quantity, price, expiry, batch number, and dosage form,
//! in no fixed order ("Amoxicillin 250mg Caps - 50pcs N2000 B/N: ABC123").
//! [`parse_compound_product_line`] unscrambles it; [`is_compound_line`] is
//! the cheap pre-check callers use to skip plain names.

pub mod category;
pub mod extract;

pub use category::infer_category;
pub use extract::{is_compound_line, parse_compound_product_line};
