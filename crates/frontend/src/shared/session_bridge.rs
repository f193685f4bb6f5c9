//! Session-storage handoff between the dashboard and the index page.
//!
//! Two slots, each consumed at most once: `searchQuery` carries a search
//! term that pre-filters the orders table, `editOrderData` carries a
//! serialized order that pre-populates and opens the edit form. Both are
//! read and deleted on index load; a malformed edit payload is logged and
//! the slot still cleared.

use contracts::domain::order::Order;
use web_sys::window;

const SEARCH_QUERY_KEY: &str = "searchQuery";
const EDIT_ORDER_KEY: &str = "editOrderData";

fn session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Stash a search term and navigate to the index page.
pub fn view_order(order_number: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(SEARCH_QUERY_KEY, order_number);
    }
    go_to_index();
}

/// Stash a serialized order for editing and navigate to the index page.
pub fn edit_order(order: &Order) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(EDIT_ORDER_KEY, &order.to_session_payload());
    }
    go_to_index();
}

/// Consume the pending search query, if any.
pub fn take_search_query() -> Option<String> {
    let storage = session_storage()?;
    let value = storage.get_item(SEARCH_QUERY_KEY).ok()??;
    let _ = storage.remove_item(SEARCH_QUERY_KEY);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Consume the pending edit payload, if any. The slot is cleared even when
/// the payload does not decode; the failure is logged, nothing is shown.
pub fn take_edit_order() -> Option<Order> {
    let storage = session_storage()?;
    let raw = storage.get_item(EDIT_ORDER_KEY).ok()??;
    let _ = storage.remove_item(EDIT_ORDER_KEY);
    // a literal "null" marks an absent payload, not a malformed one
    if raw == "null" {
        return None;
    }
    match Order::from_session_payload(&raw) {
        Ok(order) => Some(order),
        Err(e) => {
            log::error!("discarding edit payload: {:#}", e);
            None
        }
    }
}

fn go_to_index() {
    if let Some(w) = window() {
        let _ = w.location().set_href("/");
    }
}
