use crate::modules::bookings::adapters::outbound::local_ledger_store::LocalLedgerStore;
use crate::modules::bookings::adapters::outbound::remote_wallet::RemoteWalletService;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

/// Spendable balance as the driver should see it: the backend's balance minus charges
/// the backend never received.
pub struct GetDisplayBalanceHandler<TStore, TRemote>
where
    TStore: KeyValueStore + ?Sized,
    TRemote: RemoteWalletService + ?Sized,
{
    local: Arc<LocalLedgerStore<TStore>>,
    remote: Arc<TRemote>,
}

impl<TStore, TRemote> GetDisplayBalanceHandler<TStore, TRemote>
where
    TStore: KeyValueStore + ?Sized,
    TRemote: RemoteWalletService + ?Sized,
{
    pub fn new(local: Arc<LocalLedgerStore<TStore>>, remote: Arc<TRemote>) -> Self {
        Self { local, remote }
    }

    pub async fn handle(&self, remote_balance: f64) -> Result<f64, ApplicationError> {
        let wallet = self.local.wallet().await?;
        Ok(wallet.display_balance(remote_balance))
    }

    /// Fetches the authoritative balance first. A failed fetch is an error, never zero.
    pub async fn handle_with_remote_balance(&self) -> Result<f64, ApplicationError> {
        let remote_balance = self.remote.balance().await?;
        self.handle(remote_balance).await
    }
}
