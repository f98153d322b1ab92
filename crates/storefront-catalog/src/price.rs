//! Price type for catalog money values.
//!
//! Stored in minor units (cents) to avoid floating-point precision issues.
//! The catalog is single-currency; currency handling belongs to a collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product price in minor currency units (cents).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Price(i64);

impl Price {
    /// Create a price from minor units.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a price from a decimal amount (e.g., `49.99`).
    pub fn from_decimal(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    /// The price in minor units.
    pub fn as_cents(&self) -> i64 {
        self.0
    }

    /// The price as a decimal amount.
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero price.
    pub fn zero() -> Self {
        Self(0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_decimal())
    }
}
