//! Delivery-status and cash-received toggles, shared by the index table and
//! the dashboard tables.

use crate::domain::orders::api;
use crate::shared::browser;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delivery-status switch. Fires on both transitions. On the dashboard the
/// page reloads after a successful update (the row may leave the stock
/// table); on the index page the toggle simply stays as the user set it.
#[component]
pub fn DeliveryStatusToggle(
    order_number: String,
    /// Initial state from the loaded row
    checked: bool,
    /// Dashboard context reloads on success
    #[prop(optional)]
    reload_on_success: bool,
) -> impl IntoView {
    let (is_checked, set_is_checked) = signal(checked);
    let order_number = StoredValue::new(order_number);

    view! {
        <input
            type="checkbox"
            class="delivery-status-toggle"
            prop:checked=move || is_checked.get()
            on:change=move |ev| {
                let status = event_target_checked(&ev);
                set_is_checked.set(status);
                let order_no = order_number.get_value();
                spawn_local(async move {
                    match api::update_delivery_status(&order_no, u8::from(status)).await {
                        Ok(response) if response.success => {
                            if reload_on_success {
                                browser::reload_page();
                            }
                        }
                        Ok(_) => browser::alert("Failed to update status"),
                        Err(_) => browser::alert("Failed to update status"),
                    }
                });
            }
        />
    }
}

/// Cash-received checkbox. Only the unchecked→checked transition fires a
/// request; unchecking is a no-op. A successful call reloads the page so the
/// received amount and pending totals refresh.
#[component]
pub fn CashReceivedToggle(order_number: String, checked: bool) -> impl IntoView {
    let order_number = StoredValue::new(order_number);

    view! {
        <input
            type="checkbox"
            class="mark-cash"
            prop:checked=checked
            disabled=checked
            on:change=move |ev| {
                if !event_target_checked(&ev) {
                    return;
                }
                let order_no = order_number.get_value();
                spawn_local(async move {
                    match api::mark_cash_received(&order_no).await {
                        Ok(response) if response.success => browser::reload_page(),
                        Ok(_) => browser::alert("Failed to mark cash received."),
                        Err(_) => browser::alert("Failed to mark cash received."),
                    }
                });
            }
        />
    }
}
