pub mod state;

use self::state::{create_state, page_view};
use crate::domain::orders::api;
use crate::domain::orders::ui::form::{
    reset_form, OrderForm, OrderFormState, ViewMode,
};
use crate::domain::orders::ui::toggles::{CashReceivedToggle, DeliveryStatusToggle};
use crate::shared::browser;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_order_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use crate::shared::session_bridge;
use contracts::domain::order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Orders index page: the table view (sort, search, date-range filter,
/// pagination, row actions) and the add/edit form view, mutually exclusive.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let state = create_state();
    let fields = OrderFormState::new();
    let view_mode = RwSignal::new(ViewMode::Table);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load_orders = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_orders().await {
                Ok(orders) => {
                    state.update(|s| {
                        s.orders = orders;
                        s.is_loaded = true;
                    });
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_orders();
        }
    });

    let search_query = RwSignal::new(String::new());
    Effect::new(move || {
        let query = search_query.get();
        untrack(move || {
            state.update(|s| {
                if s.search_query != query {
                    s.search_query = query;
                    s.page = 0;
                }
            });
        });
    });

    // consume the navigation-bridge slots exactly once per page load
    let bridge_consumed = StoredValue::new(false);
    Effect::new(move |_| {
        if bridge_consumed.get_value() {
            return;
        }
        bridge_consumed.set_value(true);
        if let Some(query) = session_bridge::take_search_query() {
            search_query.set(query);
        }
        if let Some(order) = session_bridge::take_edit_order() {
            fields.populate_for_edit(&order);
            view_mode.set(ViewMode::Form);
        }
    });

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
            s.page = 0;
        });
    };

    let open_add_form = move |_| {
        reset_form(fields);
        view_mode.set(ViewMode::Form);
    };

    let open_edit_form = move |order: Order| {
        fields.populate_for_edit(&order);
        view_mode.set(ViewMode::Form);
    };

    let delete_with_confirm = move |order_number: String| {
        let prompt = format!(
            "Are you sure you want to delete order #{}?",
            order_number
        );
        if !browser::confirm(&prompt) {
            return;
        }
        spawn_local(async move {
            match api::delete_order(&order_number).await {
                Ok(()) => browser::reload_page(),
                Err(_) => browser::alert("Failed to delete order"),
            }
        });
    };

    let rows = Signal::derive(move || state.with(|s| page_view(s).rows));
    let current_page = Signal::derive(move || state.with(|s| page_view(s).page));
    let total_pages = Signal::derive(move || state.with(|s| page_view(s).total_pages));
    let filtered_count = Signal::derive(move || state.with(|s| page_view(s).filtered_count));

    let sortable_header = move |field: &'static str, label: &'static str| {
        view! {
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| toggle_sort(field)
            >
                {label}
                <span class=move || state.with(|s| get_sort_class(&s.sort_field, field))>
                    {move || {
                        get_sort_indicator(
                            &state.with(|s| s.sort_field.clone()),
                            field,
                            state.with(|s| s.sort_ascending),
                        )
                    }}
                </span>
            </div>
        }
    };

    view! {
        <Show when=move || view_mode.get() == ViewMode::Form>
            <OrderForm fields=fields view_mode=view_mode />
        </Show>

        <Show when=move || view_mode.get() == ViewMode::Table>
            <section id="tableSection" class="table-section">
                <div class="page__header">
                    <div class="page__header-left">
                        <h1 class="page__title">"Orders"</h1>
                        <span class="badge badge--primary">
                            {move || state.with(|s| s.orders.len().to_string())}
                        </span>
                    </div>
                    <div class="page__header-right">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=open_add_form
                        >
                            {icon("plus")}
                            " Add New Order"
                        </Button>
                    </div>
                </div>

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <label class="form__label">"Search:"</label>
                                <Input
                                    value=search_query
                                    placeholder="Order number, platform, model..."
                                />
                            </Flex>
                        </div>
                        <Flex vertical=true gap=FlexGap::Small>
                            <label class="form__label" for="order-date-from">"Order date from:"</label>
                            <input
                                type="date"
                                id="order-date-from"
                                class="form__input"
                                prop:value=move || state.with(|s| s.date_from.clone())
                                on:change=move |ev| {
                                    state.update(|s| {
                                        s.date_from = event_target_value(&ev);
                                        s.page = 0;
                                    });
                                }
                            />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <label class="form__label" for="order-date-to">"to:"</label>
                            <input
                                type="date"
                                id="order-date-to"
                                class="form__input"
                                prop:value=move || state.with(|s| s.date_to.clone())
                                on:change=move |ev| {
                                    state.update(|s| {
                                        s.date_to = event_target_value(&ev);
                                        s.page = 0;
                                    });
                                }
                            />
                        </Flex>
                        <div class="filter-panel__pagination">
                            <PaginationControls
                                current_page=current_page
                                total_pages=total_pages
                                total_count=filtered_count
                                on_page_change=Callback::new(move |page| {
                                    state.update(|s| s.page = page);
                                })
                            />
                        </div>
                    </Flex>
                </div>

                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <Show when=move || loading.get()>
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Spinner />
                        <span>"Loading orders..."</span>
                    </Flex>
                </Show>

                <div class="table-wrapper">
                    <Table attr:id="ordersTable" attr:style="width: 100%; min-width: 1100px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>{sortable_header("order_date", "Order Date")}</TableHeaderCell>
                                <TableHeaderCell>{sortable_header("order_number", "Order #")}</TableHeaderCell>
                                <TableHeaderCell>{sortable_header("platform", "Platform")}</TableHeaderCell>
                                <TableHeaderCell>{sortable_header("model_number", "Model")}</TableHeaderCell>
                                <TableHeaderCell>{sortable_header("purchase", "Purchase")}</TableHeaderCell>
                                <TableHeaderCell>{sortable_header("sell", "Sell")}</TableHeaderCell>
                                <TableHeaderCell>"P/L"</TableHeaderCell>
                                <TableHeaderCell>{sortable_header("payment_mode", "Payment Mode")}</TableHeaderCell>
                                <TableHeaderCell>{sortable_header("spent", "Spent")}</TableHeaderCell>
                                <TableHeaderCell>"Delivered"</TableHeaderCell>
                                <TableHeaderCell>"Cash"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|order| order.order_number.clone()
                                children=move |order| {
                                    // each view! child is its own closure, so
                                    // every row value gets a local first
                                    let profit = order.computed_profit_loss();
                                    let profit_class = match profit.css_class() {
                                        Some(class) => format!("table__amount {}", class),
                                        None => "table__amount".to_string(),
                                    };
                                    let profit_text = profit.formatted();
                                    let order_date = format_order_date(&order.order_date);
                                    let order_number = order.order_number.clone();
                                    let platform = order.platform.clone();
                                    let model_number = order.model_number.clone();
                                    let purchase = format!("{:.2}", order.purchase);
                                    let sell = format!("{:.2}", order.sell);
                                    let payment_mode = order.payment_mode.clone();
                                    let spent = format!("{:.2}", order.spent);
                                    let delivered = order.is_delivered();
                                    let cash_received = order.is_cash_received();
                                    let delivery_order_number = order.order_number.clone();
                                    let cash_order_number = order.order_number.clone();
                                    let order_number_for_delete = order.order_number.clone();
                                    let order_for_edit = order;

                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {order_date}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {order_number}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {platform}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {model_number}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-variant-numeric: tabular-nums;">
                                                        {purchase}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-variant-numeric: tabular-nums;">
                                                        {sell}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=profit_class>{profit_text}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {payment_mode}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-variant-numeric: tabular-nums;">
                                                        {spent}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <DeliveryStatusToggle
                                                        order_number=delivery_order_number
                                                        checked=delivered
                                                    />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <CashReceivedToggle
                                                        order_number=cash_order_number
                                                        checked=cash_received
                                                    />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button
                                                        class="btn-icon"
                                                        title="Edit"
                                                        on:click=move |_| open_edit_form(order_for_edit.clone())
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="btn-icon btn-icon--danger"
                                                        title="Delete"
                                                        on:click=move |_| delete_with_confirm(
                                                            order_number_for_delete.clone(),
                                                        )
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || {
                    state.with(|s| s.is_loaded) && filtered_count.get() == 0 && !loading.get()
                }>
                    <div class="table-empty">"No orders match the current filters."</div>
                </Show>
            </section>
        </Show>
    }
}
