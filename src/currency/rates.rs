use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// ISO 4217-style currency code.
///
/// The builtin table covers the currencies the guide displays (USD, NPR,
/// EUR, GBP), but codes are open-ended: an unknown code is handled by the
/// rate fallback, not rejected here.
///
/// # Examples
///
/// ```
/// use guidebook_engine::currency::rates::CurrencyCode;
///
/// let npr = CurrencyCode::new("NPR");
/// assert_eq!(npr.as_str(), "NPR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Errors arising from rate-table construction.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("conversion factor must be positive, got {factor} for {code}")]
    InvalidFactor { code: CurrencyCode, factor: Decimal },
}

/// Fixed conversion-factor table against an implicit USD base.
///
/// Every factor means "units of `code` per one unit of the base currency";
/// the base carries factor 1.0 and appears in the table like any other code.
/// A code absent from the table reports par (1.0) — the documented degraded
/// behavior for unknown currencies, so a conversion never fails on a code.
///
/// The table is read-only after construction; it deserializes from a plain
/// `{"CODE": "factor"}` JSON map with factors written as decimal strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: HashMap<CurrencyCode, Decimal>,
}

impl RateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rates the guide ships with. USD is the base.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (code, factor) in [
            ("USD", dec!(1.0)),
            ("NPR", dec!(132.12)),
            ("EUR", dec!(0.95)),
            ("GBP", dec!(0.81)),
        ] {
            // Builtin factors are positive by construction.
            let _ = table.set_factor(CurrencyCode::new(code), factor);
        }
        table
    }

    /// Set the factor for one code: 1 base unit = `factor` units of `code`.
    pub fn set_factor(&mut self, code: CurrencyCode, factor: Decimal) -> Result<(), RateError> {
        if factor <= Decimal::ZERO {
            return Err(RateError::InvalidFactor { code, factor });
        }
        self.rates.insert(code, factor);
        Ok(())
    }

    /// The factor for a code, or par (1.0) when the code is unknown.
    ///
    /// A non-positive factor smuggled in through deserialization is treated
    /// as unknown too, so downstream division stays well-defined.
    pub fn factor_or_par(&self, code: &CurrencyCode) -> Decimal {
        match self.rates.get(code) {
            Some(factor) if *factor > Decimal::ZERO => *factor,
            Some(factor) => {
                log::warn!("non-positive factor {} for {}, using par", factor, code);
                Decimal::ONE
            }
            None => {
                log::warn!("no rate for {}, using par", code);
                Decimal::ONE
            }
        }
    }

    /// Check every factor is positive. Used after deserializing a rates file.
    pub fn validate(&self) -> Result<(), RateError> {
        for (code, factor) in &self.rates {
            if *factor <= Decimal::ZERO {
                return Err(RateError::InvalidFactor {
                    code: code.clone(),
                    factor: *factor,
                });
            }
        }
        Ok(())
    }

    /// All known codes, sorted.
    pub fn codes(&self) -> Vec<&CurrencyCode> {
        let mut codes: Vec<&CurrencyCode> = self.rates.keys().collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
