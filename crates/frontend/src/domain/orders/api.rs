//! Remote action client for the order backend.
//!
//! Fire-and-forget JSON-over-POST operations plus the two read endpoints.
//! No retry, no backoff, no request cancellation; callers that care about
//! stale responses guard with a sequence token on their side.

use crate::shared::api_utils::api_url;
use contracts::api::{
    delete_action, CheckOrderRequest, ExistsResponse, MarkCashReceivedRequest, StatusResponse,
    UpdateDeliveryStatusRequest, CHECK_ORDER_EXISTS, DASHBOARD_SPEND, MARK_CASH_RECEIVED,
    ORDERS_LIST, UPDATE_DELIVERY_STATUS,
};
use contracts::domain::order::Order;
use contracts::domain::spend::SpendReport;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

async fn get_json<R: DeserializeOwned>(path: &str) -> Result<R, String> {
    let cache_buster = js_sys::Date::now() as i64;
    let url = format!("{}?_ts={}", api_url(path), cache_buster);
    match Request::get(&url)
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .send()
        .await
    {
        Ok(response) if response.ok() => response
            .json::<R>()
            .await
            .map_err(|e| format!("parse error: {}", e)),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("network error: {}", e)),
    }
}

async fn post_json<B: Serialize, R: DeserializeOwned>(path: &str, body: &B) -> Result<R, String> {
    let request = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("encode error: {}", e))?;
    match request.send().await {
        Ok(response) if response.ok() => response
            .json::<R>()
            .await
            .map_err(|e| format!("parse error: {}", e)),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("network error: {}", e)),
    }
}

/// Full order list for the index table; everything after this single load
/// is client-side.
pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    get_json(ORDERS_LIST).await
}

pub async fn fetch_spend_report() -> Result<SpendReport, String> {
    get_json(DASHBOARD_SPEND).await
}

pub async fn update_delivery_status(
    order_number: &str,
    delivery_status: u8,
) -> Result<StatusResponse, String> {
    post_json(
        UPDATE_DELIVERY_STATUS,
        &UpdateDeliveryStatusRequest {
            order_number: order_number.to_string(),
            delivery_status,
        },
    )
    .await
}

pub async fn mark_cash_received(order_number: &str) -> Result<StatusResponse, String> {
    post_json(
        MARK_CASH_RECEIVED,
        &MarkCashReceivedRequest {
            order_number: order_number.to_string(),
        },
    )
    .await
}

pub async fn check_order_exists(order_number: &str) -> Result<ExistsResponse, String> {
    post_json(
        CHECK_ORDER_EXISTS,
        &CheckOrderRequest {
            order_number: order_number.to_string(),
        },
    )
    .await
}

/// Plain POST with an empty body; the caller confirms with the user first.
pub async fn delete_order(order_number: &str) -> Result<(), String> {
    match Request::post(&api_url(&delete_action(order_number)))
        .send()
        .await
    {
        Ok(response) if response.ok() => Ok(()),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("network error: {}", e)),
    }
}
