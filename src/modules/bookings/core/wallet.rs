// Wallet adjustment ledger.
//
// Tracks charges the backend never saw (bookings that fell back to local storage) so
// the spendable balance shown to the driver can be corrected. The deducted total is
// always folded from the transactions, never stored separately.

use crate::shared::core::primitives::{EpochMillis, string_or_number};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Credit,
    Debit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredTransaction")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "date")]
    pub timestamp_display: String,
    pub is_local: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<EpochMillis>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTransaction {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    #[serde(rename = "type")]
    kind: TransactionType,
    #[serde(default)]
    title: String,
    amount: f64,
    #[serde(rename = "date", default)]
    timestamp_display: String,
    #[serde(default)]
    is_local: bool,
    #[serde(default)]
    created_at: Option<EpochMillis>,
}

impl From<StoredTransaction> for Transaction {
    /// Older local entries carry no `createdAt`; their ids are the epoch millis at
    /// which they were recorded.
    fn from(stored: StoredTransaction) -> Self {
        let created_at = match stored.created_at {
            Some(at) => Some(at),
            None if stored.is_local => stored.id.parse::<EpochMillis>().ok(),
            None => None,
        };
        Self {
            id: stored.id,
            kind: stored.kind,
            title: stored.title,
            amount: stored.amount,
            timestamp_display: stored.timestamp_display,
            is_local: stored.is_local,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletLedger {
    /// Newest first.
    pub transactions: Vec<Transaction>,
}

impl WalletLedger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Sum of local debits, the amount the backend balance does not know about yet.
    pub fn deducted_total(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.is_local)
            .fold(0.0, |total, t| match t.kind {
                TransactionType::Debit => total + t.amount,
                TransactionType::Credit => total - t.amount,
            })
    }

    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    /// Not clamped: a negative result is shown as-is.
    pub fn display_balance(&self, remote_balance: f64) -> f64 {
        remote_balance - self.deducted_total()
    }
}

/// Orders a merged history newest first. Entries without `created_at` go last,
/// keeping their relative order.
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
