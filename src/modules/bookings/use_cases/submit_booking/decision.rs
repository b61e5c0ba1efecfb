use crate::modules::bookings::core::booking::BookingRecord;
use crate::modules::bookings::core::wallet::Transaction;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("parking lot id is required")]
    MissingLot,

    #[error("end time must be after start time")]
    InvalidInterval,

    #[error("total amount must be a finite, non-negative number")]
    InvalidAmount,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Accepted {
        booking: BookingRecord,
        /// Recorded only if the booking falls back to local storage.
        fallback_debit: Transaction,
    },
    Rejected {
        reason: DecideError,
    },
}
