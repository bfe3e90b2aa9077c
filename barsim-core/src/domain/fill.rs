//! Fill outcome — the result of one fill-simulation attempt.

use serde::{Deserialize, Serialize};

/// Result of one fill attempt.
///
/// Invariant: a non-fill has all numeric fields zero; a fill has a positive
/// price, the full requested quantity (no partial fills), and a
/// non-negative commission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillOutcome {
    pub filled: bool,
    pub fill_price: f64,
    pub quantity: f64,
    pub commission: f64,
}

impl FillOutcome {
    /// The canonical non-fill outcome. No commission is ever charged on a
    /// non-fill.
    pub fn none() -> Self {
        Self {
            filled: false,
            fill_price: 0.0,
            quantity: 0.0,
            commission: 0.0,
        }
    }

    /// A completed fill.
    pub fn filled(fill_price: f64, quantity: f64, commission: f64) -> Self {
        Self {
            filled: true,
            fill_price,
            quantity,
            commission,
        }
    }

    /// Cash value of the fill: quantity × price.
    pub fn notional(&self) -> f64 {
        self.quantity * self.fill_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_fill_is_all_zero() {
        let outcome = FillOutcome::none();
        assert!(!outcome.filled);
        assert_eq!(outcome.fill_price, 0.0);
        assert_eq!(outcome.quantity, 0.0);
        assert_eq!(outcome.commission, 0.0);
        assert_eq!(outcome.notional(), 0.0);
    }

    #[test]
    fn notional_is_quantity_times_price() {
        let outcome = FillOutcome::filled(101.0, 10.0, 1.01);
        assert_eq!(outcome.notional(), 1010.0);
    }
}
