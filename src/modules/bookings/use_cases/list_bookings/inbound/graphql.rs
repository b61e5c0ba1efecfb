use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::bookings::core::booking::{BookingOrigin, BookingRecord};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlBooking {
    pub id: String,
    pub lot_id: String,
    pub lot_name: String,
    pub slot_label: String,
    pub vehicle_tag: String,
    pub start_time: String,
    pub end_time: String,
    pub total_amount: f64,
    pub status: String,
    pub simulated: bool,
}

impl From<BookingRecord> for GqlBooking {
    fn from(b: BookingRecord) -> Self {
        Self {
            simulated: b.origin == BookingOrigin::LocalFallback,
            status: b.status.as_str().to_string(),
            lot_name: b.lot.display_name().to_string(),
            lot_id: b.lot.id,
            slot_label: b.slot.label,
            vehicle_tag: b.vehicle_tag,
            start_time: b.start_time.to_rfc3339(),
            end_time: b.end_time.to_rfc3339(),
            total_amount: b.total_amount,
            id: b.id,
        }
    }
}

#[derive(Default)]
pub struct ListBookingsQuery;

#[Object]
impl ListBookingsQuery {
    async fn bookings(&self, context: &Context<'_>) -> GqlResult<Vec<GqlBooking>> {
        let state = context.data_unchecked::<AppState>();
        let bookings = state.list_bookings.handle().await?;
        Ok(bookings.into_iter().map(GqlBooking::from).collect())
    }
}
