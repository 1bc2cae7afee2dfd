use std::fmt;

use thiserror::Error;

/// Largest amount a cheque line can carry: 99,999,999,999.99.
pub const MAX_AMOUNT: f64 = 99_999_999_999.99;

/// Validation failure for a cheque amount.
///
/// Zero is never an error; it has a fixed-text rendering per script.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConvertError {
    #[error("amount cannot be negative")]
    NegativeAmount,

    #[error("amount cannot exceed {0:.2}")]
    AmountTooLarge(f64),
}

/// A validated cheque amount, stored as whole cents.
///
/// Non-negative and bounded by [`MAX_AMOUNT`] by construction, with exactly
/// two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(u64);

impl Amount {
    /// Validate a raw value and round it to the nearest cent.
    ///
    /// The range check runs on the raw value, before rounding, so a value
    /// that would only round into range is still rejected. Rounding scales
    /// by 100 and rounds half away from zero on the scaled value; binary
    /// floating point makes `1.005` land on 100 cents, which is the
    /// documented behavior at the 0.005 boundary.
    pub fn from_f64(value: f64) -> Result<Self, ConvertError> {
        if value < 0.0 {
            return Err(ConvertError::NegativeAmount);
        }
        if value > MAX_AMOUNT {
            return Err(ConvertError::AmountTooLarge(MAX_AMOUNT));
        }
        Ok(Amount((value * 100.0).round() as u64))
    }

    /// Construct from a known-valid cent count.
    pub fn from_cents(cents: u64) -> Self {
        Amount(cents)
    }

    /// Whole currency units (dollars or pounds).
    pub fn whole(&self) -> u64 {
        self.0 / 100
    }

    /// Fractional part, 0..=99 cents.
    pub fn cents(&self) -> u8 {
        (self.0 % 100) as u8
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.whole(), self.cents())
    }
}
