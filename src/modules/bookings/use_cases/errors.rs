use crate::modules::bookings::adapters::outbound::remote_bookings::RemoteError;
use crate::shared::infrastructure::key_value_store::KeyValueStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Domain(String),

    #[error(transparent)]
    Storage(#[from] KeyValueStoreError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}
