//! Add/edit order form.
//!
//! The index page shows either the table or this form, never both. The form
//! submits as a native POST (the backend handles persistence and file
//! uploads); everything else here — reset, edit population, live
//! profit/loss, order-number availability — is client-side.

use crate::domain::orders::api;
use crate::shared::browser;
use contracts::api::{form_action_edit, FORM_ACTION_ADD};
use contracts::domain::order::Order;
use contracts::shared::profit::ProfitLoss;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub const TITLE_ADD: &str = "Add New Order";
const MSG_TAKEN: &str = "Order number already exists!";
const MSG_CHECK_FAILED: &str = "Could not check order number.";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewMode {
    Table,
    Form,
}

/// All form field signals plus the form-level state (title, POST target,
/// availability warning). `Copy` so closures can capture it freely.
#[derive(Clone, Copy)]
pub struct OrderFormState {
    pub platform: RwSignal<String>,
    pub order_number: RwSignal<String>,
    pub model_number: RwSignal<String>,
    pub purchase: RwSignal<String>,
    pub sell: RwSignal<String>,
    pub payment_mode: RwSignal<String>,
    pub spent: RwSignal<String>,
    pub order_date: RwSignal<String>,
    pub order_delivered: RwSignal<String>,
    pub mobile_number: RwSignal<String>,
    pub to_supply: RwSignal<String>,
    pub cash_received: RwSignal<String>,
    pub memo: RwSignal<String>,
    pub delivery_status: RwSignal<bool>,

    pub title: RwSignal<String>,
    pub action: RwSignal<String>,
    pub availability_msg: RwSignal<String>,
    pub order_number_taken: RwSignal<bool>,
    /// Monotonic token: only the newest availability request may write the
    /// warning state.
    check_seq: StoredValue<u64>,
}

impl OrderFormState {
    pub fn new() -> Self {
        Self {
            platform: RwSignal::new(String::new()),
            order_number: RwSignal::new(String::new()),
            model_number: RwSignal::new(String::new()),
            purchase: RwSignal::new(String::new()),
            sell: RwSignal::new(String::new()),
            payment_mode: RwSignal::new(String::new()),
            spent: RwSignal::new(String::new()),
            order_date: RwSignal::new(String::new()),
            order_delivered: RwSignal::new(String::new()),
            mobile_number: RwSignal::new(String::new()),
            to_supply: RwSignal::new(String::new()),
            cash_received: RwSignal::new(String::new()),
            memo: RwSignal::new(String::new()),
            delivery_status: RwSignal::new(false),
            title: RwSignal::new(TITLE_ADD.to_string()),
            action: RwSignal::new(FORM_ACTION_ADD.to_string()),
            availability_msg: RwSignal::new(String::new()),
            order_number_taken: RwSignal::new(false),
            check_seq: StoredValue::new(0),
        }
    }

    fn text_signal(&self, name: &str) -> Option<RwSignal<String>> {
        match name {
            "platform" => Some(self.platform),
            "order_number" => Some(self.order_number),
            "model_number" => Some(self.model_number),
            "purchase" => Some(self.purchase),
            "sell" => Some(self.sell),
            "payment_mode" => Some(self.payment_mode),
            "spent" => Some(self.spent),
            "order_date" => Some(self.order_date),
            "order_delivered" => Some(self.order_delivered),
            "mobile_number" => Some(self.mobile_number),
            "to_supply" => Some(self.to_supply),
            "cash_received" => Some(self.cash_received),
            "memo" => Some(self.memo),
            _ => None,
        }
    }

    /// Back to pristine "add" mode: every field cleared, title and POST
    /// target reset, availability warning gone.
    pub fn reset(&self) {
        for name in TEXT_FIELD_NAMES {
            if let Some(signal) = self.text_signal(name) {
                signal.set(String::new());
            }
        }
        self.delivery_status.set(false);
        self.title.set(TITLE_ADD.to_string());
        self.action.set(FORM_ACTION_ADD.to_string());
        self.availability_msg.set(String::new());
        self.order_number_taken.set(false);
    }

    /// Fill the form from an order for editing. Walks the order's JSON keys
    /// so fields the form does not know are silently skipped; checkbox
    /// fields use checked-iff-1 semantics. Profit/loss re-derives from the
    /// populated purchase/sell signals on its own.
    pub fn populate_for_edit(&self, order: &Order) {
        let object = match serde_json::to_value(order) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => return,
        };
        for assignment in field_assignments(&object) {
            match assignment {
                FieldAssignment::Text(name, value) => {
                    if let Some(signal) = self.text_signal(name) {
                        signal.set(value);
                    }
                }
                FieldAssignment::Flag(_, checked) => self.delivery_status.set(checked),
            }
        }
        self.title.set(format!("Edit Order: {}", order.order_number));
        self.action.set(form_action_edit(&order.order_number));
        self.availability_msg.set(String::new());
        self.order_number_taken.set(false);
    }
}

impl Default for OrderFormState {
    fn default() -> Self {
        Self::new()
    }
}

const TEXT_FIELD_NAMES: [&str; 13] = [
    "platform",
    "order_number",
    "model_number",
    "purchase",
    "sell",
    "payment_mode",
    "spent",
    "order_date",
    "order_delivered",
    "mobile_number",
    "to_supply",
    "cash_received",
    "memo",
];

#[derive(Debug, Clone, PartialEq)]
enum FieldAssignment {
    Text(&'static str, String),
    Flag(&'static str, bool),
}

/// Map an order's JSON keys onto form fields. Unknown keys (attachments,
/// server-computed values, future fields) produce no assignment.
fn field_assignments(object: &serde_json::Map<String, serde_json::Value>) -> Vec<FieldAssignment> {
    object
        .iter()
        .filter_map(|(key, value)| {
            if key == "delivery_status" {
                return Some(FieldAssignment::Flag("delivery_status", is_flag_set(value)));
            }
            TEXT_FIELD_NAMES
                .iter()
                .find(|name| *name == key)
                .map(|name| FieldAssignment::Text(name, value_to_field_string(value)))
        })
        .collect()
}

/// Checkbox semantics: checked iff the value equals 1 (in any of the forms
/// legacy data uses).
fn is_flag_set(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64() == Some(1.0),
        serde_json::Value::String(s) => s.trim() == "1",
        _ => false,
    }
}

/// Render a JSON value into an input field. Whole numbers drop the
/// fractional part ("100", not "100.0").
fn value_to_field_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Empty and garbled amounts count as zero, like the form-side parse in the
/// profit/loss computation.
fn parsed_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Order-number availability check. Empty input short-circuits to clearing
/// the message without a request. Each call bumps the sequence token; a
/// response is dropped unless it belongs to the newest request, so a slow
/// reply can never overwrite a fresher one.
pub fn run_availability_check(fields: OrderFormState) {
    let seq = fields.check_seq.get_value() + 1;
    fields.check_seq.set_value(seq);

    let order_no = fields.order_number.get_untracked().trim().to_string();
    if order_no.is_empty() {
        fields.availability_msg.set(String::new());
        fields.order_number_taken.set(false);
        return;
    }
    spawn_local(async move {
        let result = api::check_order_exists(&order_no).await;
        if fields.check_seq.get_value() != seq {
            return;
        }
        match result {
            Ok(response) if response.exists => {
                fields.availability_msg.set(MSG_TAKEN.to_string());
                fields.order_number_taken.set(true);
            }
            Ok(_) => {
                fields.availability_msg.set(String::new());
                fields.order_number_taken.set(false);
            }
            Err(_) => {
                fields.availability_msg.set(MSG_CHECK_FAILED.to_string());
                fields.order_number_taken.set(false);
            }
        }
    });
}

/// Reset to "add" mode and put the cursor back in the order-number field.
/// The focus is deferred a tick so it also works right after the form
/// section becomes visible. Re-running the availability check with the now
/// empty field clears any stale warning.
pub fn reset_form(fields: OrderFormState) {
    fields.reset();
    run_availability_check(fields);
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(50).await;
        browser::focus_field("order_number");
    });
}

#[component]
fn FormField(
    name: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=name>{label}</label>
            <input
                id=name
                name=name
                type=input_type.unwrap_or("text")
                class="form__input"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn OrderForm(fields: OrderFormState, view_mode: RwSignal<ViewMode>) -> impl IntoView {
    let profit = Memo::new(move |_| {
        ProfitLoss::from_amounts(
            parsed_amount(&fields.purchase.get()),
            parsed_amount(&fields.sell.get()),
        )
    });

    let profit_class = move || match profit.get().css_class() {
        Some(class) => format!("form__input form__input--readonly {}", class),
        None => "form__input form__input--readonly".to_string(),
    };

    let order_number_class = move || {
        if fields.order_number_taken.get() {
            "form__input is-invalid"
        } else {
            "form__input"
        }
    };

    view! {
        <section id="formSection" class="form-section">
            <div class="form-section__header">
                <h2 id="formTitle" class="form-section__title">
                    {move || fields.title.get()}
                </h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| view_mode.set(ViewMode::Table)
                >
                    "Back to list"
                </Button>
            </div>

            <form
                id="orderForm"
                method="post"
                action=move || fields.action.get()
                class="order-form"
            >
                <div class="form__group">
                    <label class="form__label" for="order_number">"Order Number"</label>
                    <input
                        id="order_number"
                        name="order_number"
                        type="text"
                        class=order_number_class
                        prop:value=move || fields.order_number.get()
                        on:input=move |ev| {
                            fields.order_number.set(event_target_value(&ev));
                            run_availability_check(fields);
                        }
                    />
                    <span id="order-availability-msg" class="form__warning">
                        {move || fields.availability_msg.get()}
                    </span>
                </div>

                <FormField name="platform" label="Platform" value=fields.platform />
                <FormField name="model_number" label="Model Number" value=fields.model_number />
                <FormField name="purchase" label="Purchase" input_type="number" value=fields.purchase />
                <FormField name="sell" label="Sell" input_type="number" value=fields.sell />

                <div class="form__group">
                    <label class="form__label" for="profit_loss">"Profit / Loss"</label>
                    <input
                        id="profit_loss"
                        name="profit_loss"
                        type="text"
                        readonly=true
                        class=profit_class
                        prop:value=move || profit.get().formatted()
                    />
                </div>

                <FormField name="payment_mode" label="Payment Mode" value=fields.payment_mode />
                <FormField name="spent" label="Spent" input_type="number" value=fields.spent />
                <FormField name="order_date" label="Order Date" input_type="date" value=fields.order_date />
                <FormField name="order_delivered" label="Delivered On" input_type="date" value=fields.order_delivered />
                <FormField name="mobile_number" label="Mobile Number" value=fields.mobile_number />
                <FormField name="to_supply" label="To Supply" value=fields.to_supply />
                <FormField name="cash_received" label="Cash Received" input_type="number" value=fields.cash_received />
                <FormField name="memo" label="Memo" value=fields.memo />

                <div class="form__group form__group--checkbox">
                    <input
                        id="delivery_status"
                        name="delivery_status"
                        type="checkbox"
                        value="1"
                        prop:checked=move || fields.delivery_status.get()
                        on:change=move |ev| fields.delivery_status.set(event_target_checked(&ev))
                    />
                    <label class="form__label" for="delivery_status">"Delivered"</label>
                </div>

                <div class="form__actions">
                    <button type="submit" class="btn btn--primary">"Save Order"</button>
                    <button
                        type="button"
                        class="btn btn--secondary"
                        on:click=move |_| reset_form(fields)
                    >
                        "Reset"
                    </button>
                </div>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn assignments_skip_unknown_keys() {
        let map = object(json!({
            "order_number": "X1",
            "purchase": 100,
            "screenshots": [{"link": "https://example.test"}],
            "some_future_field": "whatever"
        }));
        let assignments = field_assignments(&map);
        assert_eq!(assignments.len(), 2);
        assert!(assignments
            .contains(&FieldAssignment::Text("order_number", "X1".to_string())));
        assert!(assignments.contains(&FieldAssignment::Text("purchase", "100".to_string())));
    }

    #[test]
    fn checkbox_semantics_checked_iff_one() {
        for (value, expected) in [
            (json!(1), true),
            (json!(1.0), true),
            (json!("1"), true),
            (json!(0), false),
            (json!("cancel"), false),
            (json!(null), false),
        ] {
            let map = object(json!({ "delivery_status": value }));
            assert_eq!(
                field_assignments(&map),
                vec![FieldAssignment::Flag("delivery_status", expected)]
            );
        }
    }

    #[test]
    fn numbers_render_without_trailing_fraction() {
        assert_eq!(value_to_field_string(&json!(100.0)), "100");
        assert_eq!(value_to_field_string(&json!(100.5)), "100.5");
        assert_eq!(value_to_field_string(&json!("9876543210")), "9876543210");
        assert_eq!(value_to_field_string(&json!(null)), "");
    }

    #[test]
    fn amounts_parse_with_zero_fallback() {
        assert_eq!(parsed_amount("150"), 150.0);
        assert_eq!(parsed_amount(" 99.5 "), 99.5);
        assert_eq!(parsed_amount(""), 0.0);
        assert_eq!(parsed_amount("abc"), 0.0);
    }

    #[test]
    fn profit_recomputes_from_field_strings() {
        let pl = ProfitLoss::from_amounts(parsed_amount("100"), parsed_amount("150"));
        assert_eq!(pl.formatted(), "50.00");
        assert_eq!(pl.css_class(), Some("profit"));
        let pl = ProfitLoss::from_amounts(parsed_amount(""), parsed_amount(""));
        assert_eq!(pl.formatted(), "0.00");
        assert_eq!(pl.css_class(), None);
    }
}
