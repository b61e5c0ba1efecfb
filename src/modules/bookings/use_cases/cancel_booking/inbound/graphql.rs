use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct CancelBookingMutation;

#[Object]
impl CancelBookingMutation {
    async fn cancel_booking(&self, context: &Context<'_>, id: ID) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        state.cancel_booking.handle(&id).await?;
        Ok(id)
    }
}
