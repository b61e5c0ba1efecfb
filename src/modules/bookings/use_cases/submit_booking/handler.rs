use crate::modules::bookings::adapters::outbound::local_ledger_store::LocalLedgerStore;
use crate::modules::bookings::adapters::outbound::remote_bookings::{
    NewRemoteBooking, RemoteBookingService,
};
use crate::modules::bookings::core::booking::{BookingOrigin, BookingRecord};
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::submit_booking::command::SubmitBooking;
use crate::modules::bookings::use_cases::submit_booking::decide::decide_submit;
use crate::modules::bookings::use_cases::submit_booking::decision::Decision;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

/// Outcome shown to the driver. Both paths read as a confirmed booking;
/// `remote_error` tells a simulated confirmation apart.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingResult {
    pub booking: BookingRecord,
    pub remote_error: Option<String>,
}

impl BookingResult {
    pub fn origin(&self) -> BookingOrigin {
        self.booking.origin
    }
}

pub struct SubmitBookingHandler<TStore, TRemote>
where
    TStore: KeyValueStore + ?Sized,
    TRemote: RemoteBookingService + ?Sized,
{
    local: Arc<LocalLedgerStore<TStore>>,
    remote: Arc<TRemote>,
}

impl<TStore, TRemote> SubmitBookingHandler<TStore, TRemote>
where
    TStore: KeyValueStore + ?Sized,
    TRemote: RemoteBookingService + ?Sized,
{
    pub fn new(local: Arc<LocalLedgerStore<TStore>>, remote: Arc<TRemote>) -> Self {
        Self { local, remote }
    }

    pub async fn handle(&self, command: SubmitBooking) -> Result<BookingResult, ApplicationError> {
        let (booking, fallback_debit) = match decide_submit(command) {
            Decision::Accepted {
                booking,
                fallback_debit,
            } => (booking, fallback_debit),
            Decision::Rejected { reason } => {
                return Err(ApplicationError::Domain(reason.to_string()));
            }
        };

        match self
            .remote
            .create_booking(&NewRemoteBooking::from(&booking))
            .await
        {
            Ok(remote_id) => {
                tracing::debug!(booking_id = %booking.id, ?remote_id, "booking committed remotely");
                Ok(BookingResult {
                    booking: BookingRecord {
                        id: remote_id.unwrap_or(booking.id),
                        origin: BookingOrigin::Remote,
                        ..booking
                    },
                    remote_error: None,
                })
            }
            Err(error) => {
                tracing::info!(
                    booking_id = %booking.id,
                    amount = booking.total_amount,
                    %error,
                    "remote booking failed, recording local fallback"
                );
                let booking = BookingRecord {
                    origin: BookingOrigin::LocalFallback,
                    ..booking
                };
                self.local
                    .record_fallback(booking.clone(), fallback_debit)
                    .await?;
                Ok(BookingResult {
                    booking,
                    remote_error: Some(error.to_string()),
                })
            }
        }
    }
}
