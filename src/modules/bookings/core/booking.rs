// Booking record as shown in the driver's history.
//
// The serialized shape is the one the client has always stored under `local_bookings`
// and the one the backend returns from its booking list, so the same type reads both.
// Lot display fields are denormalized because the backend may be unreachable later.
//
// Boundaries
// - No input or output here.

use crate::shared::core::primitives::{flexible_utc, string_or_number};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    /// Backend-side lifecycle states. Local records are never created in them.
    Active,
    Completed,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Active => "ACTIVE",
            BookingStatus::Completed => "COMPLETED",
        }
    }

    /// The only transition: anything cancels to `Cancelled`, which is terminal.
    pub fn cancel(self) -> BookingStatus {
        BookingStatus::Cancelled
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingOrigin {
    #[default]
    Remote,
    LocalFallback,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LotReference {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub category: String,
    #[serde(rename = "location", default)]
    pub distance: String,
    #[serde(rename = "price", default, deserialize_with = "string_or_number")]
    pub hourly_price: String,
}

impl LotReference {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Station"
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotReference {
    #[serde(rename = "slotNumber", default, deserialize_with = "string_or_number")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "parkingLot")]
    pub lot: LotReference,
    #[serde(rename = "parkingSlot", default)]
    pub slot: SlotReference,
    #[serde(rename = "vehicleNumber", default)]
    pub vehicle_tag: String,
    #[serde(deserialize_with = "flexible_utc")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "flexible_utc")]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub total_amount: f64,
    pub status: BookingStatus,
    #[serde(default)]
    pub origin: BookingOrigin,
}

impl BookingRecord {
    pub fn slot_label(&self) -> &str {
        &self.slot.label
    }

    pub fn is_local(&self) -> bool {
        self.origin == BookingOrigin::LocalFallback
    }

    pub fn cancelled(mut self) -> Self {
        self.status = self.status.cancel();
        self
    }
}

/// Orders bookings by start time, latest first. The sort is stable.
pub fn sort_latest_first(bookings: &mut [BookingRecord]) {
    bookings.sort_by(|a, b| b.start_time.cmp(&a.start_time));
}
