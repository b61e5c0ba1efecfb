use crate::modules::bookings::core::booking::{
    BookingOrigin, BookingRecord, BookingStatus, LotReference, SlotReference,
};
use chrono::{DateTime, Duration, Utc};

pub fn base_start_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-10-17T09:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// A confirmed two hour booking at Grand Plaza, starting `offset_seconds` after the base start.
pub fn make_booking_record(id: &str, offset_seconds: i64, origin: BookingOrigin) -> BookingRecord {
    let start_time = base_start_time() + Duration::seconds(offset_seconds);
    BookingRecord {
        id: id.to_string(),
        lot: LotReference {
            id: "lot-7".into(),
            name: "Grand Plaza".into(),
            category: "EV".into(),
            distance: "0.5km".into(),
            hourly_price: "20".into(),
        },
        slot: SlotReference {
            label: "Slow (L1)".into(),
        },
        vehicle_tag: "CAR-4821".into(),
        start_time,
        end_time: start_time + Duration::hours(2),
        total_amount: 40.0,
        status: BookingStatus::Confirmed,
        origin,
    }
}
