use crate::domain::order::Order;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Card owners the dashboard groups spend by. The final "Others" bucket
/// catches everything that does not map to a named owner. Both donut charts
/// always show all eight segments in this order, whatever the server sends.
pub const OWNERS: [&str; 8] = ["GS", "GSW", "DS", "BS", "NS", "BK", "JK", "Others"];

pub const OTHERS_LABEL: &str = "Others";

/// Expand a server-supplied owner→amount map to the fixed owner list,
/// defaulting absent owners to zero. Keys outside [`OWNERS`] are dropped.
pub fn zero_filled(amounts: &HashMap<String, f64>) -> Vec<(&'static str, f64)> {
    OWNERS
        .iter()
        .map(|owner| (*owner, amounts.get(*owner).copied().unwrap_or(0.0)))
        .collect()
}

/// Headline dashboard metrics for the selected month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardTotals {
    pub earning: f64,
    pub total_spent: f64,
    pub total_received: f64,
    pub cash_pending: f64,
    pub total_stock_available: usize,
    pub yet_to_deliver: usize,
}

/// One row of the cash-pending table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CashPendingLine {
    pub order_number: String,
    pub model_number: String,
    pub to_supply: String,
    pub cash_pending: f64,
}

/// Everything the spend dashboard needs for one page view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpendReport {
    /// Owner → spend for the selected month; may be sparse.
    pub monthly: HashMap<String, f64>,
    /// Owner → spend for the latest financial year; may be sparse.
    pub yearly: HashMap<String, f64>,
    /// Month the report covers, `YYYY-MM`.
    pub selected_month: String,
    /// Financial year label, e.g. "2024-2025".
    pub latest_year: String,
    pub totals: DashboardTotals,
    /// Delivered orders not yet sold (in stock).
    pub stock_orders: Vec<Order>,
    /// Unsold orders still awaiting delivery.
    pub yet_to_deliver_orders: Vec<Order>,
    pub cash_pending_orders: Vec<CashPendingLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_fill_always_yields_eight_segments() {
        let sparse: HashMap<String, f64> =
            [("GS".to_string(), 120.5), ("BK".to_string(), 40.0)].into();
        let filled = zero_filled(&sparse);
        assert_eq!(filled.len(), OWNERS.len());
        assert_eq!(filled[0], ("GS", 120.5));
        assert_eq!(filled[5], ("BK", 40.0));
        assert!(filled
            .iter()
            .filter(|(owner, _)| *owner != "GS" && *owner != "BK")
            .all(|(_, amount)| *amount == 0.0));
    }

    #[test]
    fn zero_fill_of_empty_map() {
        let filled = zero_filled(&HashMap::new());
        assert_eq!(filled.len(), 8);
        assert!(filled.iter().all(|(_, amount)| *amount == 0.0));
        assert_eq!(filled.last().unwrap().0, OTHERS_LABEL);
    }

    #[test]
    fn zero_fill_drops_unknown_owners() {
        let sparse: HashMap<String, f64> = [("NOBODY".to_string(), 999.0)].into();
        let filled = zero_filled(&sparse);
        assert!(filled.iter().all(|(_, amount)| *amount == 0.0));
    }

    #[test]
    fn report_deserializes_from_sparse_json() {
        let report: SpendReport = serde_json::from_str(
            r#"{
                "monthly": {"GS": 10.0},
                "selected_month": "2024-06",
                "totals": {"earning": 50.0}
            }"#,
        )
        .unwrap();
        assert_eq!(report.monthly.len(), 1);
        assert!(report.yearly.is_empty());
        assert_eq!(report.totals.earning, 50.0);
        assert_eq!(report.totals.yet_to_deliver, 0);
        assert!(report.stock_orders.is_empty());
    }
}
