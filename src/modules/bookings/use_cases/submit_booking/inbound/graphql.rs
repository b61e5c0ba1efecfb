use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::bookings::core::booking::LotReference;
use crate::modules::bookings::use_cases::list_bookings::inbound::graphql::GqlBooking;
use crate::modules::bookings::use_cases::submit_booking::command::SubmitBooking;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct SubmitBookingInput {
    pub parking_lot_id: String,
    #[graphql(default)]
    pub lot_name: String,
    #[graphql(default)]
    pub lot_category: String,
    #[graphql(default)]
    pub lot_distance: String,
    #[graphql(default)]
    pub hourly_price: String,
    pub slot_label: String,
    pub vehicle_tag: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_amount: f64,
}

#[derive(SimpleObject)]
pub struct GqlBookingResult {
    pub booking: GqlBooking,
    pub remote_error: Option<String>,
}

#[derive(Default)]
pub struct SubmitBookingMutation;

#[Object]
impl SubmitBookingMutation {
    async fn submit_booking(
        &self,
        context: &Context<'_>,
        input: SubmitBookingInput,
    ) -> GqlResult<GqlBookingResult> {
        let state = context.data_unchecked::<AppState>();

        let command = SubmitBooking {
            booking_id: Uuid::now_v7().to_string(),
            lot: LotReference {
                id: input.parking_lot_id,
                name: input.lot_name,
                category: input.lot_category,
                distance: input.lot_distance,
                hourly_price: input.hourly_price,
            },
            slot_label: input.slot_label,
            vehicle_tag: input.vehicle_tag,
            start_time: input.start_time,
            end_time: input.end_time,
            total_amount: input.total_amount,
            requested_at: Utc::now(),
        };

        let result = state
            .submit_booking
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlBookingResult {
            booking: result.booking.into(),
            remote_error: result.remote_error,
        })
    }
}
