use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::bookings::core::booking::{BookingRecord, LotReference};
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::submit_booking::command::SubmitBooking;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitBookingBody {
    pub parking_lot_id: String,
    #[serde(default)]
    pub lot_name: String,
    #[serde(default)]
    pub lot_category: String,
    #[serde(default)]
    pub lot_distance: String,
    #[serde(default)]
    pub hourly_price: String,
    pub slot_label: String,
    pub vehicle_tag: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_amount: f64,
}

impl SubmitBookingBody {
    pub fn into_command(self, booking_id: String, requested_at: DateTime<Utc>) -> SubmitBooking {
        SubmitBooking {
            booking_id,
            lot: LotReference {
                id: self.parking_lot_id,
                name: self.lot_name,
                category: self.lot_category,
                distance: self.lot_distance,
                hourly_price: self.hourly_price,
            },
            slot_label: self.slot_label,
            vehicle_tag: self.vehicle_tag,
            start_time: self.start_time,
            end_time: self.end_time,
            total_amount: self.total_amount,
            requested_at,
        }
    }
}

#[derive(Serialize)]
pub struct SubmitBookingResponse {
    pub booking: BookingRecord,
    pub simulated: bool,
    pub remote_error: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitBookingBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = body.into_command(Uuid::now_v7().to_string(), Utc::now());

    match state.submit_booking.handle(command).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(SubmitBookingResponse {
                simulated: result.booking.is_local(),
                booking: result.booking,
                remote_error: result.remote_error,
            }),
        )
            .into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        Err(error) => {
            tracing::error!(%error, "booking submission failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
