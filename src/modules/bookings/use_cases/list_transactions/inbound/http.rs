use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_transactions.handle().await {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => {
            tracing::error!(%error, "listing transactions failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
