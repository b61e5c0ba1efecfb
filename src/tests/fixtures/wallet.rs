use crate::modules::bookings::core::wallet::{Transaction, TransactionType};
use crate::shared::core::primitives::EpochMillis;

pub fn make_local_debit(id: &str, amount: f64, created_at: EpochMillis) -> Transaction {
    Transaction {
        id: id.to_string(),
        kind: TransactionType::Debit,
        title: "EV Charging: Grand Plaza".into(),
        amount,
        timestamp_display: "10/17/2026 9:00:00 AM".into(),
        is_local: true,
        created_at: Some(created_at),
    }
}
