//! Wire DTOs and endpoint paths for the backend the client talks to.
//!
//! All three remote actions are JSON-over-POST and idempotent at the
//! protocol level: repeating the same call has the same effect.

use serde::{Deserialize, Serialize};

/// `POST /update_delivery_status`
pub const UPDATE_DELIVERY_STATUS: &str = "/update_delivery_status";
/// `POST /mark_cash_received`
pub const MARK_CASH_RECEIVED: &str = "/mark_cash_received";
/// `POST /check_order_exists`
pub const CHECK_ORDER_EXISTS: &str = "/check_order_exists";
/// `GET /api/orders` — full order list for the index table.
pub const ORDERS_LIST: &str = "/api/orders";
/// `GET /api/dashboard/spend` — aggregates for the spend dashboard.
pub const DASHBOARD_SPEND: &str = "/api/dashboard/spend";

/// Native form POST target in "add" mode.
pub const FORM_ACTION_ADD: &str = "/add";

/// Native form POST target in "edit" mode.
pub fn form_action_edit(order_number: &str) -> String {
    format!("/edit/{}", order_number)
}

/// Per-row delete target, hit after an explicit confirmation prompt.
pub fn delete_action(order_number: &str) -> String {
    format!("/delete/{}", order_number)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDeliveryStatusRequest {
    pub order_number: String,
    pub delivery_status: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkCashReceivedRequest {
    pub order_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOrderRequest {
    pub order_number: String,
}

/// Generic success/failure envelope for the mutating actions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatusResponse {
    pub success: bool,
}

/// Response to the order-number availability check.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_actions() {
        assert_eq!(form_action_edit("X1"), "/edit/X1");
        assert_eq!(delete_action("X1"), "/delete/X1");
        assert_eq!(FORM_ACTION_ADD, "/add");
    }

    #[test]
    fn status_request_wire_shape() {
        let body = serde_json::to_value(UpdateDeliveryStatusRequest {
            order_number: "A7".to_string(),
            delivery_status: 1,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"order_number": "A7", "delivery_status": 1})
        );
    }

    #[test]
    fn responses_default_to_failure() {
        let status: StatusResponse = serde_json::from_str("{}").unwrap();
        assert!(!status.success);
        let exists: ExistsResponse = serde_json::from_str("{}").unwrap();
        assert!(!exists.exists);
    }
}
