//! Integer currency amounts.
//!
//! The store trades in whole taka; there are no fractional amounts
//! anywhere in the catalog or the order book, so prices are plain
//! integers rather than decimals.

use serde::{Deserialize, Serialize};

/// A currency amount in whole taka.
///
/// Arithmetic saturates rather than wrapping: a pathological
/// price-times-quantity product clamps at `i64::MAX` instead of
/// silently producing a nonsense total.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Taka(i64);

impl Taka {
    /// Zero taka.
    pub const ZERO: Self = Self(0);

    /// Create an amount from a whole-taka value.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the underlying integer value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Multiply by a unit count, saturating on overflow.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }

    /// Add another amount, saturating on overflow.
    #[must_use]
    pub const fn plus(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::fmt::Display for Taka {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Taka {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl From<Taka> for i64 {
    fn from(amount: Taka) -> Self {
        amount.0
    }
}
