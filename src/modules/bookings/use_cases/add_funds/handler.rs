use crate::modules::bookings::adapters::outbound::remote_wallet::RemoteWalletService;
use crate::modules::bookings::use_cases::add_funds::command::AddFunds;
use crate::modules::bookings::use_cases::add_funds::decide::decide_add_funds;
use crate::modules::bookings::use_cases::add_funds::decision::Decision;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use std::sync::Arc;

/// Wallet top-up. Remote only: there is no local fallback and the local ledger is untouched.
pub struct AddFundsHandler<TRemote>
where
    TRemote: RemoteWalletService + ?Sized,
{
    remote: Arc<TRemote>,
}

impl<TRemote> AddFundsHandler<TRemote>
where
    TRemote: RemoteWalletService + ?Sized,
{
    pub fn new(remote: Arc<TRemote>) -> Self {
        Self { remote }
    }

    /// Returns the new remote balance.
    pub async fn handle(&self, command: AddFunds) -> Result<f64, ApplicationError> {
        let request = match decide_add_funds(command) {
            Decision::Accepted { request } => request,
            Decision::Rejected { reason } => {
                return Err(ApplicationError::Domain(reason.to_string()));
            }
        };

        let new_balance = self.remote.add_funds(&request).await?;
        tracing::info!(amount = request.amount, new_balance, "wallet topped up");
        Ok(new_balance)
    }
}
