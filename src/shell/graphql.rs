use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::bookings::use_cases::add_funds::inbound::graphql::AddFundsMutation;
use crate::modules::bookings::use_cases::cancel_booking::inbound::graphql::CancelBookingMutation;
use crate::modules::bookings::use_cases::get_display_balance::inbound::graphql::DisplayBalanceQuery;
use crate::modules::bookings::use_cases::list_bookings::inbound::graphql::ListBookingsQuery;
use crate::modules::bookings::use_cases::list_transactions::inbound::graphql::ListTransactionsQuery;
use crate::modules::bookings::use_cases::submit_booking::inbound::graphql::SubmitBookingMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListBookingsQuery, DisplayBalanceQuery, ListTransactionsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(SubmitBookingMutation, CancelBookingMutation, AddFundsMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

#[cfg(test)]
mod app_schema_tests {
    use super::*;
    use crate::modules::bookings::adapters::outbound::backend_in_memory::InMemoryBackend;
    use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
    use crate::tests::fixtures::app_state::make_app_state;

    async fn execute(schema: &AppSchema, query: &str) -> serde_json::Value {
        let response = schema.execute(query).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn it_should_book_locally_and_report_the_adjusted_balance() {
        let mut backend = InMemoryBackend::with_balance(500.0);
        backend.toggle_offline();
        let (state, _) = make_app_state(InMemoryKeyValueStore::new(), backend);
        let schema = build_schema(state);

        let submitted = execute(
            &schema,
            r#"mutation {
                submitBooking(input: {
                    parkingLotId: "7", lotName: "Grand Plaza", slotLabel: "Slow (L1)",
                    vehicleTag: "CAR-4821", startTime: "2026-10-17T09:00:00Z",
                    endTime: "2026-10-17T11:00:00Z", totalAmount: 40
                }) { booking { id lotName simulated status } remoteError }
            }"#,
        )
        .await;
        assert_eq!(submitted["submitBooking"]["booking"]["simulated"], true);
        assert_eq!(submitted["submitBooking"]["booking"]["lotName"], "Grand Plaza");
        assert_eq!(submitted["submitBooking"]["booking"]["status"], "CONFIRMED");

        let read = execute(
            &schema,
            "{ bookings { id } displayBalance(remoteBalance: 500) transactions { kind amount isLocal } }",
        )
        .await;
        assert_eq!(read["bookings"].as_array().unwrap().len(), 1);
        assert_eq!(read["displayBalance"], 460.0);
        assert_eq!(read["transactions"][0]["kind"], "DEBIT");
        assert_eq!(read["transactions"][0]["isLocal"], true);
    }

    #[tokio::test]
    async fn it_should_cancel_and_top_up_through_mutations() {
        let (state, backend) =
            make_app_state(InMemoryKeyValueStore::new(), InMemoryBackend::with_balance(100.0));
        let schema = build_schema(state);

        let result = execute(
            &schema,
            r#"mutation {
                cancelBooking(id: "remote-1")
                addFunds(amount: 50, upiId: "driver@okaxis")
            }"#,
        )
        .await;

        assert_eq!(result["cancelBooking"], "remote-1");
        assert_eq!(result["addFunds"], 150.0);
        assert_eq!(backend.cancel_requests.read().await.len(), 1);
    }

    #[tokio::test]
    async fn it_should_report_rejected_top_ups_as_errors() {
        let (state, _) = make_app_state(InMemoryKeyValueStore::new(), InMemoryBackend::new());
        let schema = build_schema(state);

        let response = schema
            .execute(r#"mutation { addFunds(amount: 50, upiId: "driver") }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("upi id"));
    }
}
