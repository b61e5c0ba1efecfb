use crate::modules::bookings::adapters::outbound::local_ledger_store::LocalLedgerStore;
use crate::modules::bookings::adapters::outbound::remote_bookings::RemoteBookingService;
use crate::modules::bookings::adapters::outbound::session_cancellations::SessionCancellations;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

pub struct CancelBookingHandler<TStore, TRemote>
where
    TStore: KeyValueStore + ?Sized,
    TRemote: RemoteBookingService + ?Sized,
{
    local: Arc<LocalLedgerStore<TStore>>,
    remote: Arc<TRemote>,
    cancellations: Arc<SessionCancellations>,
}

impl<TStore, TRemote> CancelBookingHandler<TStore, TRemote>
where
    TStore: KeyValueStore + ?Sized,
    TRemote: RemoteBookingService + ?Sized,
{
    pub fn new(
        local: Arc<LocalLedgerStore<TStore>>,
        remote: Arc<TRemote>,
        cancellations: Arc<SessionCancellations>,
    ) -> Self {
        Self {
            local,
            remote,
            cancellations,
        }
    }

    /// Cancels wherever the booking lives. The remote call is best effort and the local
    /// wallet is left alone, so nothing is refunded.
    pub async fn handle(&self, booking_id: &str) -> Result<(), ApplicationError> {
        if let Err(error) = self.remote.cancel_booking(booking_id).await {
            tracing::warn!(booking_id, %error, "remote cancel failed, cancelling locally");
        }

        self.cancellations.insert(booking_id).await;
        let was_local = self.local.mark_cancelled(booking_id).await?;
        tracing::debug!(booking_id, was_local, "booking cancelled");
        Ok(())
    }
}
