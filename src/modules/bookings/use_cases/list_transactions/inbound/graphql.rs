use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::bookings::core::wallet::{Transaction, TransactionType};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTransaction {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub amount: f64,
    pub date: String,
    pub is_local: bool,
    pub created_at: Option<i64>,
}

impl From<Transaction> for GqlTransaction {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id,
            kind: match t.kind {
                TransactionType::Credit => "CREDIT",
                TransactionType::Debit => "DEBIT",
            }
            .to_string(),
            title: t.title,
            amount: t.amount,
            date: t.timestamp_display,
            is_local: t.is_local,
            created_at: t.created_at,
        }
    }
}

#[derive(Default)]
pub struct ListTransactionsQuery;

#[Object]
impl ListTransactionsQuery {
    async fn transactions(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTransaction>> {
        let state = context.data_unchecked::<AppState>();
        let transactions = state.list_transactions.handle().await?;
        Ok(transactions.into_iter().map(GqlTransaction::from).collect())
    }
}
