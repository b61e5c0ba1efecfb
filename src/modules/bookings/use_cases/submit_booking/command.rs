// Intent to book a slot. Amount and times come from the caller, which already checked
// the driver's balance covers `total_amount`.

use crate::modules::bookings::core::booking::LotReference;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitBooking {
    pub booking_id: String,
    pub lot: LotReference,
    pub slot_label: String,
    pub vehicle_tag: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_amount: f64,
    pub requested_at: DateTime<Utc>,
}
