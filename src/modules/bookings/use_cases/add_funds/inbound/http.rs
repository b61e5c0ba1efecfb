use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::bookings::adapters::outbound::remote_bookings::RemoteError;
use crate::modules::bookings::use_cases::add_funds::command::AddFunds;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddFundsBody {
    pub amount: f64,
    pub upi_id: String,
}

#[derive(Serialize)]
pub struct AddFundsResponse {
    pub new_balance: f64,
}

#[derive(Serialize)]
pub struct AddFundsFailure {
    pub message: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddFundsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = AddFunds {
        amount: body.amount,
        upi_id: body.upi_id,
    };

    match state.add_funds.handle(command).await {
        Ok(new_balance) => Json(AddFundsResponse { new_balance }).into_response(),
        Err(ApplicationError::Domain(message)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(AddFundsFailure { message })).into_response()
        }
        Err(ApplicationError::Remote(error)) => {
            tracing::warn!(%error, "top-up failed");
            let message = match error {
                RemoteError::Rejected(message) => message,
                _ => "Failed to add money".to_string(),
            };
            (StatusCode::BAD_GATEWAY, Json(AddFundsFailure { message })).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "top-up failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
