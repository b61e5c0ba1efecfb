use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DisplayBalanceParams {
    /// When absent the balance is fetched from the backend.
    pub remote_balance: Option<f64>,
}

#[derive(Serialize)]
pub struct DisplayBalanceResponse {
    pub balance: f64,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<DisplayBalanceParams>,
) -> impl IntoResponse {
    let balance = match params.remote_balance {
        Some(remote_balance) => state.display_balance.handle(remote_balance).await,
        None => state.display_balance.handle_with_remote_balance().await,
    };

    match balance {
        Ok(balance) => Json(DisplayBalanceResponse { balance }).into_response(),
        Err(ApplicationError::Remote(error)) => {
            tracing::warn!(%error, "remote balance unavailable");
            StatusCode::BAD_GATEWAY.into_response()
        }
        Err(error) => {
            tracing::error!(%error, "computing display balance failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
