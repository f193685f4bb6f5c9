use crate::shared::profit::ProfitLoss;
use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// An order record, keyed by `order_number`.
///
/// Field names mirror the backend JSON and the form field identifiers 1:1,
/// so a serialized order can be walked key-by-key to populate the edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Order {
    pub platform: String,
    pub order_number: String,
    pub model_number: String,
    pub purchase: f64,
    pub sell: f64,
    pub profit_loss: f64,
    pub payment_mode: String,
    pub spent: f64,
    /// Order date as `YYYY-MM-DD`; may be empty for legacy records.
    pub order_date: String,
    pub order_delivered: String,
    pub mobile_number: String,
    pub to_supply: String,
    pub cash_received: f64,
    pub memo: String,
    #[serde(deserialize_with = "flag_from_any")]
    pub delivery_status: u8,
}

/// Legacy data contains `delivery_status` as 0/1, true/false, "1", and even
/// the stray string "cancel". Anything that is not recognizably 1 maps to 0.
fn flag_from_any<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => u8::from(b),
        serde_json::Value::Number(n) => u8::from(n.as_f64() == Some(1.0)),
        serde_json::Value::String(s) => u8::from(s.trim() == "1"),
        _ => 0,
    })
}

impl Order {
    /// Parse the order date; `None` for empty or unparseable values.
    pub fn order_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.order_date.trim(), "%Y-%m-%d").ok()
    }

    /// Profit/loss as derived from the purchase and sell amounts. The stored
    /// `profit_loss` field is what the backend last computed; the display
    /// always recomputes.
    pub fn computed_profit_loss(&self) -> ProfitLoss {
        ProfitLoss::from_amounts(self.purchase, self.sell)
    }

    pub fn is_delivered(&self) -> bool {
        self.delivery_status == 1
    }

    /// Cash counts as received once a positive sell amount is fully covered.
    pub fn is_cash_received(&self) -> bool {
        self.sell > 0.0 && self.cash_received >= self.sell
    }

    /// Serialize for the session-storage handoff between pages.
    pub fn to_session_payload(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decode a session-storage handoff payload.
    pub fn from_session_payload(raw: &str) -> anyhow::Result<Order> {
        serde_json::from_str(raw).context("malformed edit order payload")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Order {
        Order {
            platform: "Amazon".to_string(),
            order_number: "X1".to_string(),
            model_number: "M-42".to_string(),
            purchase: 100.0,
            sell: 150.0,
            profit_loss: 50.0,
            payment_mode: "HDFC 4311 EMI".to_string(),
            spent: 100.0,
            order_date: "2024-06-01".to_string(),
            order_delivered: String::new(),
            mobile_number: "9999999999".to_string(),
            to_supply: "Ravi".to_string(),
            cash_received: 0.0,
            memo: String::new(),
            delivery_status: 1,
        }
    }

    #[test]
    fn session_payload_round_trip() {
        let order = sample();
        let payload = order.to_session_payload();
        let restored = Order::from_session_payload(&payload).unwrap();
        assert_eq!(restored, order);
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(Order::from_session_payload("{not json").is_err());
        assert!(Order::from_session_payload("").is_err());
    }

    #[test]
    fn delivery_status_accepts_legacy_forms() {
        for (raw, expected) in [
            (r#"{"delivery_status": 1}"#, 1),
            (r#"{"delivery_status": 0}"#, 0),
            (r#"{"delivery_status": true}"#, 1),
            (r#"{"delivery_status": "1"}"#, 1),
            (r#"{"delivery_status": "cancel"}"#, 0),
            (r#"{}"#, 0),
        ] {
            let order: Order = serde_json::from_str(raw).unwrap();
            assert_eq!(order.delivery_status, expected, "raw: {}", raw);
        }
    }

    #[test]
    fn missing_fields_default() {
        let order: Order = serde_json::from_str(r#"{"order_number": "A7"}"#).unwrap();
        assert_eq!(order.order_number, "A7");
        assert_eq!(order.purchase, 0.0);
        assert!(order.order_date.is_empty());
    }

    #[test]
    fn order_date_parsing_fails_open() {
        let mut order = sample();
        assert_eq!(
            order.order_date_parsed(),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        order.order_date = String::new();
        assert_eq!(order.order_date_parsed(), None);
        order.order_date = "01/06/2024".to_string();
        assert_eq!(order.order_date_parsed(), None);
    }

    #[test]
    fn cash_received_requires_positive_sell() {
        let mut order = sample();
        assert!(!order.is_cash_received());
        order.cash_received = 150.0;
        assert!(order.is_cash_received());
        order.sell = 0.0;
        assert!(!order.is_cash_received());
    }

    #[test]
    fn partial_payment_is_not_received() {
        // the checkbox must stay actionable until the sell amount is covered
        let mut order = sample();
        order.sell = 100.0;
        order.cash_received = 50.0;
        assert!(!order.is_cash_received());
        order.cash_received = 100.0;
        assert!(order.is_cash_received());
    }
}
