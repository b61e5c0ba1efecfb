use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_bookings.handle().await {
        Ok(bookings) => Json(bookings).into_response(),
        Err(error) => {
            tracing::error!(%error, "listing bookings failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
