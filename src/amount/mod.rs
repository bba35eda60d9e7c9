//! Amount Normalization Module
//!
//! Converts amounts written in major units (`"10"`, `"0.25"`, `"1.5e-3"`) into
//! exact integers in the ledger's minor unit (10^18 per major unit).
//!
//! Text is first classified into an [`AmountLiteral`]; the scaling rule for each
//! literal kind lives in one place, [`AmountLiteral::to_minor_units`].

mod normalizer;


pub use normalizer::{AmountLiteral, DECIMALS, normalize, scale_major};
