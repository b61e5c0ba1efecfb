use crate::modules::bookings::adapters::outbound::local_ledger_store::LocalLedgerStore;
use crate::modules::bookings::adapters::outbound::remote_bookings::RemoteBookingService;
use crate::modules::bookings::adapters::outbound::session_cancellations::SessionCancellations;
use crate::modules::bookings::core::booking::{BookingRecord, sort_latest_first};
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

/// Merged booking history: backend records plus local fallbacks, latest start first.
/// An unreachable backend only hides its part of the list.
pub struct ListBookingsHandler<TStore, TRemote>
where
    TStore: KeyValueStore + ?Sized,
    TRemote: RemoteBookingService + ?Sized,
{
    local: Arc<LocalLedgerStore<TStore>>,
    remote: Arc<TRemote>,
    cancellations: Arc<SessionCancellations>,
}

impl<TStore, TRemote> ListBookingsHandler<TStore, TRemote>
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

    pub async fn handle(&self) -> Result<Vec<BookingRecord>, ApplicationError> {
        let remote = match self.remote.list_bookings().await {
            Ok(bookings) => bookings,
            Err(error) => {
                tracing::warn!(%error, "backend booking list unavailable, showing local bookings only");
                Vec::new()
            }
        };

        let mut merged = Vec::with_capacity(remote.len());
        for booking in remote {
            if self.cancellations.contains(&booking.id).await {
                merged.push(booking.cancelled());
            } else {
                merged.push(booking);
            }
        }
        merged.extend(self.local.bookings().await?);

        sort_latest_first(&mut merged);
        Ok(merged)
    }
}
