use crate::modules::bookings::adapters::outbound::remote_bookings::RemoteError;
use crate::modules::bookings::core::wallet::Transaction;
use async_trait::async_trait;
use serde::Serialize;

/// Body of `POST /api/driver/dashboard/add-money`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFundsRequest {
    pub amount: f64,
    pub upi_id: String,
}

#[async_trait]
pub trait RemoteWalletService: Send + Sync {
    async fn balance(&self) -> Result<f64, RemoteError>;
    async fn transactions(&self) -> Result<Vec<Transaction>, RemoteError>;
    /// Returns the new balance.
    async fn add_funds(&self, request: &AddFundsRequest) -> Result<f64, RemoteError>;
}
