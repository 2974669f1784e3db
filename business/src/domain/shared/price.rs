use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("price.negative")]
    Negative,
    #[error("price.not_finite")]
    NotFinite,
    #[error("price.malformed")]
    Malformed,
}

/// A non-negative decimal amount.
///
/// Comparison is numeric, so `2.50` and `2.5` are the same price.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "BigDecimal", into = "BigDecimal")]
pub struct Price(BigDecimal);

impl Price {
    pub fn new(amount: BigDecimal) -> Result<Self, PriceError> {
        if amount < BigDecimal::zero() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Builds a price from a floating point number using its shortest
    /// decimal representation, so `2.99_f64` becomes exactly `2.99`.
    pub fn from_f64(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() {
            return Err(PriceError::NotFinite);
        }
        value.to_string().parse()
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.0
    }

    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = BigDecimal::from_str(s.trim()).map_err(|_| PriceError::Malformed)?;
        Self::new(amount)
    }
}

impl TryFrom<BigDecimal> for Price {
    type Error = PriceError;

    fn try_from(amount: BigDecimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for BigDecimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
