// In memory stand-in for the backend.
//
// Purpose
// - Drive the use case handlers in tests and local runs without a server.
// - `toggle_offline` makes every call fail as if the network were down.

use crate::modules::bookings::adapters::outbound::remote_bookings::{
    NewRemoteBooking, RemoteBookingService, RemoteError,
};
use crate::modules::bookings::adapters::outbound::remote_wallet::{
    AddFundsRequest, RemoteWalletService,
};
use crate::modules::bookings::core::booking::{
    BookingOrigin, BookingRecord, LotReference, SlotReference,
};
use crate::modules::bookings::core::wallet::Transaction;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBackend {
    pub bookings: RwLock<Vec<BookingRecord>>,
    pub transactions: RwLock<Vec<Transaction>>,
    pub balance: RwLock<f64>,
    pub cancel_requests: RwLock<Vec<String>>,
    is_offline: bool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(balance: f64) -> Self {
        Self {
            balance: RwLock::new(balance),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RemoteError> {
        if self.is_offline {
            return Err(RemoteError::Unreachable("Backend offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RemoteBookingService for InMemoryBackend {
    async fn create_booking(
        &self,
        booking: &NewRemoteBooking,
    ) -> Result<Option<String>, RemoteError> {
        self.ensure_online()?;
        let mut bookings = self.bookings.write().await;
        let id = format!("remote-{}", bookings.len() + 1);
        bookings.push(BookingRecord {
            id: id.clone(),
            lot: LotReference {
                id: booking.parking_lot_id.clone(),
                ..LotReference::default()
            },
            slot: SlotReference {
                label: booking.slot_type.clone(),
            },
            vehicle_tag: booking.vehicle_number.clone(),
            start_time: booking.start_time,
            end_time: booking.end_time,
            total_amount: booking.total_amount,
            status: booking.status,
            origin: BookingOrigin::Remote,
        });
        *self.balance.write().await -= booking.total_amount;
        Ok(Some(id))
    }

    async fn cancel_booking(&self, booking_id: &str) -> Result<(), RemoteError> {
        self.cancel_requests
            .write()
            .await
            .push(booking_id.to_string());
        self.ensure_online()?;
        let mut bookings = self.bookings.write().await;
        match bookings.iter_mut().find(|b| b.id == booking_id) {
            Some(booking) => {
                booking.status = booking.status.cancel();
                Ok(())
            }
            None => Err(RemoteError::Status {
                status: 404,
                body: format!("booking {booking_id} not found"),
            }),
        }
    }

    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, RemoteError> {
        self.ensure_online()?;
        Ok(self.bookings.read().await.clone())
    }
}

#[async_trait::async_trait]
impl RemoteWalletService for InMemoryBackend {
    async fn balance(&self) -> Result<f64, RemoteError> {
        self.ensure_online()?;
        Ok(*self.balance.read().await)
    }

    async fn transactions(&self) -> Result<Vec<Transaction>, RemoteError> {
        self.ensure_online()?;
        Ok(self.transactions.read().await.clone())
    }

    async fn add_funds(&self, request: &AddFundsRequest) -> Result<f64, RemoteError> {
        self.ensure_online()?;
        let mut balance = self.balance.write().await;
        *balance += request.amount;
        Ok(*balance)
    }
}
