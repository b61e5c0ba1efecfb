use crate::modules::bookings::adapters::outbound::local_ledger_store::LocalLedgerStore;
use crate::modules::bookings::adapters::outbound::remote_wallet::RemoteWalletService;
use crate::modules::bookings::core::wallet::{Transaction, sort_newest_first};
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

pub struct ListTransactionsHandler<TStore, TRemote>
where
    TStore: KeyValueStore + ?Sized,
    TRemote: RemoteWalletService + ?Sized,
{
    local: Arc<LocalLedgerStore<TStore>>,
    remote: Arc<TRemote>,
}

impl<TStore, TRemote> ListTransactionsHandler<TStore, TRemote>
where
    TStore: KeyValueStore + ?Sized,
    TRemote: RemoteWalletService + ?Sized,
{
    pub fn new(local: Arc<LocalLedgerStore<TStore>>, remote: Arc<TRemote>) -> Self {
        Self { local, remote }
    }

    pub async fn handle(&self) -> Result<Vec<Transaction>, ApplicationError> {
        let mut merged = self.local.wallet().await?.transactions;
        match self.remote.transactions().await {
            Ok(remote) => merged.extend(remote),
            Err(error) => {
                tracing::warn!(%error, "backend transactions unavailable, showing local ones only")
            }
        }
        sort_newest_first(&mut merged);
        Ok(merged)
    }
}
