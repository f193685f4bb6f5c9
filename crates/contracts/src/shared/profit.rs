use serde::{Deserialize, Serialize};

/// Profit/loss derived from a purchase and a sell amount.
///
/// Display invariant: the rendered value is always `sell - purchase` to two
/// decimal places, and exactly one style class is active, matching the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitLoss {
    pub amount: f64,
}

impl ProfitLoss {
    /// `sell - purchase`, with non-finite inputs treated as zero (an empty
    /// or garbled field parses to zero on the form side the same way).
    pub fn from_amounts(purchase: f64, sell: f64) -> Self {
        let purchase = if purchase.is_finite() { purchase } else { 0.0 };
        let sell = if sell.is_finite() { sell } else { 0.0 };
        Self {
            amount: sell - purchase,
        }
    }

    /// Two-decimal display string: "50.00", "-50.00", "0.00".
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.amount)
    }

    /// The single active style class: profit above zero, loss below, none at
    /// exactly zero.
    pub fn css_class(&self) -> Option<&'static str> {
        if self.amount > 0.0 {
            Some("profit")
        } else if self.amount < 0.0 {
            Some("loss")
        } else {
            None
        }
    }
}

impl Default for ProfitLoss {
    fn default() -> Self {
        Self { amount: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profit_case() {
        let pl = ProfitLoss::from_amounts(100.0, 150.0);
        assert_eq!(pl.formatted(), "50.00");
        assert_eq!(pl.css_class(), Some("profit"));
    }

    #[test]
    fn loss_case() {
        let pl = ProfitLoss::from_amounts(150.0, 100.0);
        assert_eq!(pl.formatted(), "-50.00");
        assert_eq!(pl.css_class(), Some("loss"));
    }

    #[test]
    fn break_even_has_no_class() {
        let pl = ProfitLoss::from_amounts(120.0, 120.0);
        assert_eq!(pl.formatted(), "0.00");
        assert_eq!(pl.css_class(), None);
    }

    #[test]
    fn fractional_amounts_round_to_two_decimals() {
        let pl = ProfitLoss::from_amounts(10.004, 20.0);
        assert_eq!(pl.formatted(), "10.00");
        assert_eq!(pl.css_class(), Some("profit"));
    }

    #[test]
    fn non_finite_inputs_are_zeroed() {
        let pl = ProfitLoss::from_amounts(f64::NAN, 50.0);
        assert_eq!(pl.formatted(), "50.00");
        let pl = ProfitLoss::from_amounts(10.0, f64::INFINITY);
        assert_eq!(pl.formatted(), "-10.00");
        assert_eq!(pl.css_class(), Some("loss"));
    }
}
