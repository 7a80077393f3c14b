use crate::currency::rates::{CurrencyCode, RateTable};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors arising from a conversion request.
///
/// An unknown currency code is deliberately not an error — see
/// [`RateTable::factor_or_par`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("invalid amount: {input:?}")]
    InvalidAmount { input: String },
}

/// A finished conversion: the amount at exactly two decimal digits and the
/// target currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    amount: Decimal,
    currency: CurrencyCode,
}

impl Conversion {
    /// The converted amount, carrying scale 2.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// The amount rendered with its two decimal digits, e.g. `"132.12"`.
    pub fn formatted_amount(&self) -> String {
        self.amount.to_string()
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Convert a decimal amount string from one currency to another.
///
/// The computation is `amount * factor(to) / factor(from)` with both
/// factors read through the par fallback, rounded half-up
/// (`MidpointAwayFromZero`) and rescaled to exactly two decimal digits.
/// The function is pure: same inputs, same output, no drift across
/// repeated conversions.
///
/// An unparsable amount is a typed failure, never a panic.
///
/// # Examples
///
/// ```
/// use guidebook_engine::currency::convert::convert;
/// use guidebook_engine::currency::rates::{CurrencyCode, RateTable};
///
/// let rates = RateTable::builtin();
/// let usd = CurrencyCode::new("USD");
/// let npr = CurrencyCode::new("NPR");
///
/// let conversion = convert("1.00", &usd, &npr, &rates).unwrap();
/// assert_eq!(conversion.formatted_amount(), "132.12");
/// assert_eq!(conversion.currency().as_str(), "NPR");
/// ```
pub fn convert(
    amount: &str,
    from: &CurrencyCode,
    to: &CurrencyCode,
    rates: &RateTable,
) -> Result<Conversion, ConversionError> {
    let parsed: Decimal = amount.parse().map_err(|_| ConversionError::InvalidAmount {
        input: amount.to_string(),
    })?;

    let factor_from = rates.factor_or_par(from);
    let factor_to = rates.factor_or_par(to);

    let mut result = (parsed * factor_to / factor_from)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    result.rescale(2);

    Ok(Conversion {
        amount: result,
        currency: to.clone(),
    })
}
