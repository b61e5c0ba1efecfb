use crate::modules::bookings::adapters::outbound::remote_wallet::AddFundsRequest;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("amount must be a finite number greater than zero")]
    InvalidAmount,

    #[error("upi id must look like name@bank")]
    InvalidUpiId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Accepted { request: AddFundsRequest },
    Rejected { reason: DecideError },
}
