//! Spend dashboard: headline totals, two per-owner donut charts, the stock
//! table and the cash-pending table.

use crate::domain::orders::api;
use crate::domain::orders::ui::toggles::{CashReceivedToggle, DeliveryStatusToggle};
use crate::shared::components::donut_chart::DonutChart;
use crate::shared::date_utils::format_order_date;
use crate::shared::icons::icon;
use crate::shared::session_bridge;
use contracts::domain::order::Order;
use contracts::domain::spend::{zero_filled, SpendReport};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SpendDashboard() -> impl IntoView {
    let (report, set_report) = signal(None::<SpendReport>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_spend_report().await {
                Ok(data) => set_report.set(Some(data)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="dashboard">
            <div class="page__header">
                <h1 class="page__title">"Spend Dashboard"</h1>
            </div>

            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <Show when=move || loading.get()>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Spinner />
                    <span>"Loading dashboard..."</span>
                </Flex>
            </Show>

            {move || {
                report.get().map(|report| {
                    let totals = report.totals.clone();
                    let monthly = zero_filled(&report.monthly);
                    let yearly = zero_filled(&report.yearly);
                    let monthly_title =
                        format!("Spend by Card ({})", report.selected_month);
                    let yearly_title =
                        format!("Spend by Card (FY {})", report.latest_year);
                    let stock_orders = report.stock_orders.clone();
                    let yet_to_deliver = report.yet_to_deliver_orders.clone();
                    let cash_pending = report.cash_pending_orders.clone();

                    view! {
                        <div class="dashboard__cards">
                            <MetricCard label="Earning" value=format!("\u{20b9}{:.2}", totals.earning) />
                            <MetricCard label="Total Spent" value=format!("\u{20b9}{:.2}", totals.total_spent) />
                            <MetricCard label="Total Received" value=format!("\u{20b9}{:.2}", totals.total_received) />
                            <MetricCard label="Cash Pending" value=format!("\u{20b9}{:.2}", totals.cash_pending) />
                            <MetricCard label="Stock Available" value=totals.total_stock_available.to_string() />
                            <MetricCard label="Yet to Deliver" value=totals.yet_to_deliver.to_string() />
                        </div>

                        <div class="dashboard__charts">
                            <DonutChart title=monthly_title data=monthly />
                            <DonutChart title=yearly_title data=yearly />
                        </div>

                        <div class="dashboard__tables">
                            <OrderTableBlock title="Stock Available" orders=stock_orders />
                            <OrderTableBlock title="Yet to Deliver" orders=yet_to_deliver />

                            <section class="dashboard__table-block">
                                <h2 class="dashboard__table-title">"Cash Pending"</h2>
                                <Table attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>"Order #"</TableHeaderCell>
                                            <TableHeaderCell>"Model"</TableHeaderCell>
                                            <TableHeaderCell>"Supplied To"</TableHeaderCell>
                                            <TableHeaderCell>"Pending"</TableHeaderCell>
                                            <TableHeaderCell>"Received"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        <For
                                            each=move || cash_pending.clone()
                                            key=|line| line.order_number.clone()
                                            children=move |line| {
                                                let order_number = line.order_number.clone();
                                                let model_number = line.model_number.clone();
                                                let to_supply = line.to_supply.clone();
                                                let pending =
                                                    format!("\u{20b9}{:.2}", line.cash_pending);
                                                let toggle_order_number = line.order_number;
                                                view! {
                                                    <TableRow>
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>
                                                                {order_number}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>
                                                                {model_number}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>
                                                                {to_supply}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                <span style="font-variant-numeric: tabular-nums;">
                                                                    {pending}
                                                                </span>
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                <CashReceivedToggle
                                                                    order_number=toggle_order_number
                                                                    checked=false
                                                                />
                                                            </TableCellLayout>
                                                        </TableCell>
                                                    </TableRow>
                                                }
                                            }
                                        />
                                    </TableBody>
                                </Table>
                            </section>
                        </div>
                    }
                })
            }}
        </div>
    }
}

/// Order listing shared by the stock and yet-to-deliver blocks. The
/// delivery toggle reloads on success in both: a toggled row moves between
/// the two tables, so the whole report has to refresh.
#[component]
fn OrderTableBlock(title: &'static str, orders: Vec<Order>) -> impl IntoView {
    view! {
        <section class="dashboard__table-block">
            <h2 class="dashboard__table-title">{title}</h2>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Order #"</TableHeaderCell>
                        <TableHeaderCell>"Model"</TableHeaderCell>
                        <TableHeaderCell>"Purchase"</TableHeaderCell>
                        <TableHeaderCell>"Order Date"</TableHeaderCell>
                        <TableHeaderCell>"Delivered"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || orders.clone()
                        key=|order| order.order_number.clone()
                        children=move |order| {
                            // each view! child is its own closure, so every
                            // row value gets a local first
                            let order_number = order.order_number.clone();
                            let model_number = order.model_number.clone();
                            let purchase = format!("{:.2}", order.purchase);
                            let order_date = format_order_date(&order.order_date);
                            let delivered = order.is_delivered();
                            let toggle_order_number = order.order_number.clone();
                            let order_number_for_view = order.order_number.clone();
                            let order_for_edit = order;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {order_number}
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
                                            {order_date}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <DeliveryStatusToggle
                                                order_number=toggle_order_number
                                                checked=delivered
                                                reload_on_success=true
                                            />
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <button
                                                class="btn-icon"
                                                title="View on orders page"
                                                on:click=move |_| {
                                                    session_bridge::view_order(&order_number_for_view)
                                                }
                                            >
                                                {icon("eye")}
                                            </button>
                                            <button
                                                class="btn-icon"
                                                title="Edit"
                                                on:click=move |_| {
                                                    session_bridge::edit_order(&order_for_edit)
                                                }
                                            >
                                                {icon("edit")}
                                            </button>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </section>
    }
}

#[component]
fn MetricCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="metric-card">
            <div class="metric-card__label">{label}</div>
            <div class="metric-card__value">{value}</div>
        </div>
    }
}
