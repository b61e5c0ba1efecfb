use crate::modules::bookings::core::booking::{BookingRecord, BookingStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("backend rejected the request: {0}")]
    Rejected(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Body of `POST /api/driver/bookings`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRemoteBooking {
    pub parking_lot_id: String,
    pub vehicle_number: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub slot_type: String,
}

impl From<&BookingRecord> for NewRemoteBooking {
    fn from(booking: &BookingRecord) -> Self {
        Self {
            parking_lot_id: booking.lot.id.clone(),
            vehicle_number: booking.vehicle_tag.clone(),
            start_time: booking.start_time,
            end_time: booking.end_time,
            total_amount: booking.total_amount,
            status: booking.status,
            slot_type: booking.slot_label().to_string(),
        }
    }
}

#[async_trait]
pub trait RemoteBookingService: Send + Sync {
    /// Returns the id the backend assigned, when the response carries one.
    async fn create_booking(&self, booking: &NewRemoteBooking)
    -> Result<Option<String>, RemoteError>;
    async fn cancel_booking(&self, booking_id: &str) -> Result<(), RemoteError>;
    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, RemoteError>;
}
