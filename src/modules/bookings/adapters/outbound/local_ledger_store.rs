// Local ledger store: the bookings and wallet blobs kept on the device.
//
// Responsibilities
// - Own the `local_bookings` and `local_wallet` keys. Nothing else writes them.
// - Serialize every read-modify-write behind one async mutex so concurrent submissions
//   cannot lose updates.
// - Read defensively: a blob that does not parse, or carries an unknown schema version,
//   is logged and treated as empty.
// - Never write over such a blob. Writes that would replace it fail with
//   `KeyValueStoreError::Unreadable` so the original bytes stay on disk.

use crate::modules::bookings::core::booking::{BookingOrigin, BookingRecord, BookingStatus};
use crate::modules::bookings::core::wallet::{Transaction, WalletLedger};
use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const LOCAL_BOOKINGS_KEY: &str = "local_bookings";
pub const LOCAL_WALLET_KEY: &str = "local_wallet";
pub const WALLET_SCHEMA_VERSION: u32 = 1;

fn legacy_wallet_version() -> u32 {
    1
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredWallet {
    #[serde(default = "legacy_wallet_version")]
    version: u32,
    #[serde(default)]
    deducted: f64,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl From<&WalletLedger> for StoredWallet {
    fn from(ledger: &WalletLedger) -> Self {
        Self {
            version: WALLET_SCHEMA_VERSION,
            deducted: ledger.deducted_total(),
            transactions: ledger.transactions.clone(),
        }
    }
}

/// A decoded blob, or the reason it was discarded.
struct Loaded<T> {
    value: T,
    discarded: Option<String>,
}

impl<T: Default> Loaded<T> {
    fn readable(value: T) -> Self {
        Self {
            value,
            discarded: None,
        }
    }

    fn discarded(key: &str, reason: String) -> Self {
        tracing::warn!(key, %reason, "discarding unreadable blob");
        Self {
            value: T::default(),
            discarded: Some(reason),
        }
    }

    fn writable(self, key: &str) -> Result<T, KeyValueStoreError> {
        match self.discarded {
            None => Ok(self.value),
            Some(reason) => Err(KeyValueStoreError::Unreadable {
                key: key.to_string(),
                reason,
            }),
        }
    }
}

pub struct LocalLedgerStore<TStore>
where
    TStore: KeyValueStore + ?Sized,
{
    store: Arc<TStore>,
    write_lock: Mutex<()>,
}

impl<TStore> LocalLedgerStore<TStore>
where
    TStore: KeyValueStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn bookings(&self) -> Result<Vec<BookingRecord>, KeyValueStoreError> {
        let _guard = self.write_lock.lock().await;
        self.read_bookings().await.map(|(bookings, _)| bookings.value)
    }

    pub async fn wallet(&self) -> Result<WalletLedger, KeyValueStoreError> {
        let _guard = self.write_lock.lock().await;
        self.read_wallet().await.map(|wallet| wallet.value)
    }

    /// Appends a fallback booking and prepends its debit.
    ///
    /// If the wallet write fails the previous bookings blob is written back, so a
    /// booking never survives without its debit unless that restore fails too.
    /// Fails without writing anything if either blob could not be read.
    pub async fn record_fallback(
        &self,
        booking: BookingRecord,
        debit: Transaction,
    ) -> Result<(), KeyValueStoreError> {
        let _guard = self.write_lock.lock().await;

        let (bookings, previous_raw) = self.read_bookings().await?;
        let mut bookings = bookings.writable(LOCAL_BOOKINGS_KEY)?;
        let mut wallet = self.read_wallet().await?.writable(LOCAL_WALLET_KEY)?;

        bookings.push(BookingRecord {
            origin: BookingOrigin::LocalFallback,
            ..booking
        });
        self.write_json(LOCAL_BOOKINGS_KEY, &bookings).await?;

        wallet.record(debit);
        if let Err(error) = self
            .write_json(LOCAL_WALLET_KEY, &StoredWallet::from(&wallet))
            .await
        {
            let restore = previous_raw.unwrap_or_else(|| "[]".to_string());
            if let Err(restore_error) = self.store.set(LOCAL_BOOKINGS_KEY, &restore).await {
                tracing::error!(%restore_error, "could not roll back local bookings");
            }
            return Err(error);
        }
        Ok(())
    }

    /// Returns whether a local booking with `id` exists. Already cancelled bookings
    /// are left untouched.
    pub async fn mark_cancelled(&self, id: &str) -> Result<bool, KeyValueStoreError> {
        let _guard = self.write_lock.lock().await;

        let (bookings, _) = self.read_bookings().await?;
        let bookings = bookings.value;
        let Some(position) = bookings.iter().position(|b| b.id == id) else {
            return Ok(false);
        };
        if bookings[position].status == BookingStatus::Cancelled {
            return Ok(true);
        }

        let bookings: Vec<BookingRecord> = bookings
            .into_iter()
            .map(|b| if b.id == id { b.cancelled() } else { b })
            .collect();
        self.write_json(LOCAL_BOOKINGS_KEY, &bookings).await?;
        Ok(true)
    }

    async fn read_bookings(
        &self,
    ) -> Result<(Loaded<Vec<BookingRecord>>, Option<String>), KeyValueStoreError> {
        let raw = self.store.get(LOCAL_BOOKINGS_KEY).await?;
        let bookings = match raw.as_deref() {
            None => Loaded::readable(Vec::new()),
            Some(text) => match serde_json::from_str::<Vec<BookingRecord>>(text) {
                Ok(bookings) => Loaded::readable(
                    bookings
                        .into_iter()
                        .map(|b| BookingRecord {
                            origin: BookingOrigin::LocalFallback,
                            ..b
                        })
                        .collect(),
                ),
                Err(error) => Loaded::discarded(LOCAL_BOOKINGS_KEY, error.to_string()),
            },
        };
        Ok((bookings, raw))
    }

    async fn read_wallet(&self) -> Result<Loaded<WalletLedger>, KeyValueStoreError> {
        let Some(text) = self.store.get(LOCAL_WALLET_KEY).await? else {
            return Ok(Loaded::readable(WalletLedger::default()));
        };
        Ok(match serde_json::from_str::<StoredWallet>(&text) {
            Ok(stored) if stored.version == WALLET_SCHEMA_VERSION => {
                Loaded::readable(WalletLedger::new(stored.transactions))
            }
            Ok(stored) => Loaded::discarded(
                LOCAL_WALLET_KEY,
                format!("unknown schema version {}", stored.version),
            ),
            Err(error) => Loaded::discarded(LOCAL_WALLET_KEY, error.to_string()),
        })
    }

    async fn write_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), KeyValueStoreError> {
        let text =
            serde_json::to_string(value).map_err(|e| KeyValueStoreError::Serialization {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        self.store.set(key, &text).await
    }
}
