use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::modules::bookings::use_cases::add_funds::inbound::http as add_funds_http;
use crate::modules::bookings::use_cases::cancel_booking::inbound::http as cancel_http;
use crate::modules::bookings::use_cases::get_display_balance::inbound::http as balance_http;
use crate::modules::bookings::use_cases::list_bookings::inbound::http as list_http;
use crate::modules::bookings::use_cases::list_transactions::inbound::http as transactions_http;
use crate::modules::bookings::use_cases::submit_booking::inbound::http as submit_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/bookings", post(submit_http::handle).get(list_http::handle))
        .route("/bookings/{id}", delete(cancel_http::handle))
        .route("/wallet/balance", get(balance_http::handle))
        .route("/wallet/transactions", get(transactions_http::handle))
        .route("/wallet/add-funds", post(add_funds_http::handle))
        .with_state(state)
}

/// `*` anywhere in the list allows every origin. Unparseable origins are skipped.
pub fn cors_layer(allowed: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = allowed
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
