use crate::modules::bookings::core::booking::LotReference;
use crate::modules::bookings::use_cases::submit_booking::command::SubmitBooking;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitBookingDto {
    pub booking_id: String,
    pub parking_lot: LotReference,
    pub slot_label: String,
    pub vehicle_tag: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_amount: f64,
}

pub struct SubmitBookingBuilder {
    inner: SubmitBooking,
}

impl Default for SubmitBookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitBookingBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/submit_booking.json").unwrap();
        let dto: SubmitBookingDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: SubmitBooking {
                booking_id: dto.booking_id,
                lot: dto.parking_lot,
                slot_label: dto.slot_label,
                vehicle_tag: dto.vehicle_tag,
                start_time: dto.start_time,
                end_time: dto.end_time,
                total_amount: dto.total_amount,
                requested_at: DateTime::from_timestamp_millis(1_792_227_600_000).unwrap(),
            },
        }
    }

    pub fn booking_id(mut self, v: impl Into<String>) -> Self {
        self.inner.booking_id = v.into();
        self
    }

    pub fn lot_id(mut self, v: impl Into<String>) -> Self {
        self.inner.lot.id = v.into();
        self
    }

    pub fn lot_name(mut self, v: impl Into<String>) -> Self {
        self.inner.lot.name = v.into();
        self
    }

    pub fn slot_label(mut self, v: impl Into<String>) -> Self {
        self.inner.slot_label = v.into();
        self
    }

    pub fn vehicle_tag(mut self, v: impl Into<String>) -> Self {
        self.inner.vehicle_tag = v.into();
        self
    }

    pub fn start_time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end_time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn total_amount(mut self, v: f64) -> Self {
        self.inner.total_amount = v;
        self
    }

    pub fn requested_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> SubmitBooking {
        self.inner
    }
}

#[cfg(test)]
mod submit_booking_builder_tests {
    use super::*;
    use chrono::Duration;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = SubmitBookingBuilder::default().build();
        assert_eq!(built.booking_id, "bk-fixed-0001");
        assert_eq!(built.lot.id, "7");
        assert_eq!(built.lot.name, "Grand Plaza");
        assert_eq!(built.lot.hourly_price, "20");
        assert_eq!(built.slot_label, "Slow (L1)");
        assert_eq!(built.vehicle_tag, "CAR-4821");
        assert_eq!(built.total_amount, 40.0);
        assert_eq!(built.end_time - built.start_time, Duration::hours(2));
        assert_eq!(built.requested_at.timestamp_millis(), 1_792_227_600_000);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let start = DateTime::from_timestamp(1_800_000_000, 0).unwrap();
        let custom = SubmitBookingBuilder::new()
            .booking_id("bk-123")
            .lot_id("lot-9")
            .lot_name("Mall Deck")
            .slot_label("Fast (L3)")
            .vehicle_tag("EV-1")
            .start_time(start)
            .end_time(start + Duration::minutes(30))
            .total_amount(12.5)
            .requested_at(start)
            .build();

        assert_eq!(custom.booking_id, "bk-123");
        assert_eq!(custom.lot.id, "lot-9");
        assert_eq!(custom.lot.name, "Mall Deck");
        assert_eq!(custom.slot_label, "Fast (L3)");
        assert_eq!(custom.vehicle_tag, "EV-1");
        assert_eq!(custom.start_time, start);
        assert_eq!(custom.end_time, start + Duration::minutes(30));
        assert_eq!(custom.total_amount, 12.5);
        assert_eq!(custom.requested_at, start);
    }
}
