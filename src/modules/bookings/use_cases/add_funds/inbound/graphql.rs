use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::bookings::use_cases::add_funds::command::AddFunds;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddFundsMutation;

#[Object]
impl AddFundsMutation {
    /// Returns the new wallet balance.
    async fn add_funds(&self, context: &Context<'_>, amount: f64, upi_id: String) -> GqlResult<f64> {
        let state = context.data_unchecked::<AppState>();
        let new_balance = state
            .add_funds
            .handle(AddFunds { amount, upi_id })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(new_balance)
    }
}
