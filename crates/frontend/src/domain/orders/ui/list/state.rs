use crate::shared::date_utils::date_in_range;
use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};
use contracts::domain::order::Order;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Fixed page size of the orders table.
pub const PAGE_SIZE: usize = 10;

/// Columns a header click may sort by. Action buttons, the toggles, and the
/// computed profit/loss column are not sortable.
pub const SORTABLE_FIELDS: [&str; 8] = [
    "platform",
    "order_number",
    "model_number",
    "purchase",
    "sell",
    "payment_mode",
    "spent",
    "order_date",
];

#[derive(Clone, Debug)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub search_query: String,
    pub date_from: String,
    pub date_to: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub is_loaded: bool,
}

impl Default for OrdersState {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            search_query: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            // newest orders first by default
            sort_field: "order_date".to_string(),
            sort_ascending: false,
            page: 0,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<OrdersState> {
    RwSignal::new(OrdersState::default())
}

/// One resolved view of the table: filter (date range ANDed with free-text
/// search), sort, then slice out the current page. The page index is clamped
/// when the filtered set shrinks underneath it.
pub struct PageView {
    pub rows: Vec<Order>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

pub fn page_view(state: &OrdersState) -> PageView {
    let in_range: Vec<Order> = state
        .orders
        .iter()
        .filter(|order| date_in_range(&order.order_date, &state.date_from, &state.date_to))
        .cloned()
        .collect();
    let mut rows = filter_list(in_range, &state.search_query);
    sort_list(&mut rows, &state.sort_field, state.sort_ascending);

    let filtered_count = rows.len();
    let total_pages = filtered_count.div_ceil(PAGE_SIZE);
    let page = state.page.min(total_pages.saturating_sub(1));
    let rows = rows
        .into_iter()
        .skip(page * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    PageView {
        rows,
        page,
        total_pages,
        filtered_count,
    }
}

impl Searchable for Order {
    fn matches_filter(&self, needle: &str) -> bool {
        let haystacks = [
            self.platform.as_str(),
            self.order_number.as_str(),
            self.model_number.as_str(),
            self.payment_mode.as_str(),
            self.order_date.as_str(),
            self.to_supply.as_str(),
            self.mobile_number.as_str(),
            self.memo.as_str(),
        ];
        if haystacks
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
        {
            return true;
        }
        [self.purchase, self.sell, self.spent]
            .iter()
            .any(|amount| format!("{:.2}", amount).contains(needle))
    }
}

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        fn num(a: f64, b: f64) -> Ordering {
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        match field {
            "platform" => self.platform.cmp(&other.platform),
            "order_number" => self.order_number.cmp(&other.order_number),
            "model_number" => self.model_number.cmp(&other.model_number),
            "purchase" => num(self.purchase, other.purchase),
            "sell" => num(self.sell, other.sell),
            "payment_mode" => self.payment_mode.cmp(&other.payment_mode),
            "spent" => num(self.spent, other.spent),
            // ISO dates compare correctly as strings; empty dates group first
            "order_date" => self.order_date.cmp(&other.order_date),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(number: &str, date: &str, purchase: f64) -> Order {
        Order {
            order_number: number.to_string(),
            order_date: date.to_string(),
            platform: "Amazon".to_string(),
            purchase,
            ..Order::default()
        }
    }

    fn state_with(orders: Vec<Order>) -> OrdersState {
        OrdersState {
            orders,
            is_loaded: true,
            ..OrdersState::default()
        }
    }

    #[test]
    fn default_sort_is_newest_first() {
        let state = state_with(vec![
            order("A", "2024-01-10", 10.0),
            order("B", "2024-06-01", 20.0),
            order("C", "2024-03-15", 30.0),
        ]);
        let view = page_view(&state);
        let numbers: Vec<&str> = view.rows.iter().map(|o| o.order_number.as_str()).collect();
        assert_eq!(numbers, ["B", "C", "A"]);
    }

    #[test]
    fn date_filter_ands_with_search() {
        let mut state = state_with(vec![
            order("A", "2024-06-01", 10.0),
            order("B", "2024-06-01", 20.0),
            order("C", "2024-09-01", 10.0),
        ]);
        state.date_from = "2024-05-01".to_string();
        state.date_to = "2024-07-01".to_string();
        state.search_query = "a".to_string();
        // all platforms are "Amazon" so search alone matches everything;
        // the date range must still exclude C
        let view = page_view(&state);
        assert_eq!(view.filtered_count, 2);
        assert!(view.rows.iter().all(|o| o.order_date == "2024-06-01"));
    }

    #[test]
    fn dateless_rows_survive_the_date_filter() {
        let mut state = state_with(vec![
            order("A", "", 10.0),
            order("B", "2020-01-01", 20.0),
        ]);
        state.date_from = "2024-05-01".to_string();
        let view = page_view(&state);
        assert_eq!(view.filtered_count, 1);
        assert_eq!(view.rows[0].order_number, "A");
    }

    #[test]
    fn search_matches_amounts() {
        let mut state = state_with(vec![
            order("A", "2024-06-01", 123.45),
            order("B", "2024-06-01", 99.0),
        ]);
        state.search_query = "123.45".to_string();
        assert_eq!(page_view(&state).filtered_count, 1);
    }

    #[test]
    fn pages_are_fixed_size_and_clamped() {
        let orders: Vec<Order> = (0..25)
            .map(|i| order(&format!("N{:02}", i), "2024-06-01", i as f64))
            .collect();
        let mut state = state_with(orders);
        state.sort_field = "order_number".to_string();
        state.sort_ascending = true;

        let view = page_view(&state);
        assert_eq!(view.rows.len(), PAGE_SIZE);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.rows[0].order_number, "N00");

        state.page = 2;
        let view = page_view(&state);
        assert_eq!(view.rows.len(), 5);

        // shrink the filtered set underneath a high page index
        state.search_query = "n00".to_string();
        let view = page_view(&state);
        assert_eq!(view.page, 0);
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn sort_toggles_by_numeric_field() {
        let mut state = state_with(vec![
            order("A", "2024-06-01", 30.0),
            order("B", "2024-06-01", 10.0),
            order("C", "2024-06-01", 20.0),
        ]);
        state.sort_field = "purchase".to_string();
        state.sort_ascending = true;
        let view = page_view(&state);
        assert_eq!(view.rows[0].order_number, "B");
        state.sort_ascending = false;
        let view = page_view(&state);
        assert_eq!(view.rows[0].order_number, "A");
    }
}
