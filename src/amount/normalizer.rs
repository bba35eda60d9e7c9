use crate::{Error, Result};
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Minor-unit exponent: one major unit is 10^18 minor units
pub const DECIMALS: u32 = 18;

/// Largest power of ten a decimal exponent may scale up by
const MAX_SCALE_UP: u32 = 4096;

static DECIMAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?[0-9]*\.[0-9]+([eE][-+]?[0-9]+)?$").expect("valid decimal pattern")
});

static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("valid integer pattern"));

/// Classified amount text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountLiteral<'a> {
    /// `[-+]?digits.digits([eE][-+]?digits)?`
    Decimal(&'a str),
    /// `[-+]?digits`
    Integer(&'a str),
}

impl<'a> AmountLiteral<'a> {
    /// Classify `text` by its shape
    ///
    /// # Returns
    /// * `Err(Error::InvalidAmount)` if the text is neither a decimal nor an integer literal
    pub fn classify(text: &'a str) -> Result<Self> {
        if DECIMAL_PATTERN.is_match(text) {
            Ok(Self::Decimal(text))
        } else if INTEGER_PATTERN.is_match(text) {
            Ok(Self::Integer(text))
        } else {
            Err(invalid(text))
        }
    }

    /// Scale the literal by 10^18
    ///
    /// Integers scale exactly. Decimals are scaled and then truncated toward zero,
    /// so any fraction of a minor unit is dropped.
    pub fn to_minor_units(&self) -> Result<BigInt> {
        match *self {
            Self::Integer(text) => {
                let value = BigInt::from_str(text).map_err(|_| invalid(text))?;
                Ok(value * pow10(DECIMALS))
            }
            Self::Decimal(text) => {
                let decimal = BigDecimal::from_str(text).map_err(|_| invalid(text))?;
                // decimal == digits * 10^-scale
                let (digits, scale) = decimal.into_bigint_and_exponent();
                let shift = i64::from(DECIMALS)
                    .checked_sub(scale)
                    .ok_or_else(|| invalid(text))?;

                if shift >= 0 {
                    let up = u32::try_from(shift)
                        .ok()
                        .filter(|up| *up <= MAX_SCALE_UP)
                        .ok_or_else(|| invalid(text))?;
                    return Ok(digits * pow10(up));
                }

                let down = shift.unsigned_abs();
                // 10^down > |digits| once down exceeds bits / 3
                if down > digits.magnitude().bits() / 3 + 1 {
                    return Ok(BigInt::default());
                }
                let down = u32::try_from(down).map_err(|_| invalid(text))?;
                Ok(digits / pow10(down))
            }
        }
    }
}

/// Normalize amount text into minor units
pub fn normalize(text: &str) -> Result<BigInt> {
    AmountLiteral::classify(text)?.to_minor_units()
}

/// Scale a whole number of major units into minor units
pub fn scale_major(value: u64) -> BigUint {
    BigUint::from(value) * BigUint::from(10u32).pow(DECIMALS)
}

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}

fn invalid(text: &str) -> Error {
    Error::InvalidAmount {
        value: text.to_string(),
    }
}
