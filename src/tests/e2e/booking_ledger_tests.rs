use crate::modules::bookings::adapters::outbound::backend_in_memory::InMemoryBackend;
use crate::modules::bookings::adapters::outbound::local_ledger_store::LOCAL_BOOKINGS_KEY;
use crate::modules::bookings::core::booking::{BookingOrigin, BookingStatus};
use crate::modules::bookings::core::wallet::TransactionType;
use crate::shared::infrastructure::key_value_store::file_system::FileSystemKeyValueStore;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::app_state::make_app_state;
use crate::tests::fixtures::bookings::make_booking_record;
use crate::tests::fixtures::commands::submit_booking::SubmitBookingBuilder;
use chrono::DateTime;
use rstest::rstest;
use std::sync::Arc;

fn offline_backend() -> InMemoryBackend {
    let mut backend = InMemoryBackend::new();
    backend.toggle_offline();
    backend
}

fn offline_state() -> AppState {
    make_app_state(InMemoryKeyValueStore::new(), offline_backend()).0
}

async fn book(state: &AppState, id: &str, amount: f64, requested_at_ms: i64) {
    let command = SubmitBookingBuilder::new()
        .booking_id(id)
        .total_amount(amount)
        .requested_at(DateTime::from_timestamp_millis(requested_at_ms).unwrap())
        .build();
    state.submit_booking.handle(command).await.unwrap();
}

#[tokio::test]
async fn falls_back_to_a_local_booking_when_the_backend_is_down() {
    let state = offline_state();

    let result = state
        .submit_booking
        .handle(SubmitBookingBuilder::new().build())
        .await
        .unwrap();

    assert_eq!(result.origin(), BookingOrigin::LocalFallback);
    let bookings = state.list_bookings.handle().await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].origin, BookingOrigin::LocalFallback);
    assert_eq!(bookings[0].status, BookingStatus::Confirmed);
    assert_eq!(bookings[0].lot.name, "Grand Plaza");
    assert_eq!(bookings[0].slot_label(), "Slow (L1)");

    let transactions = state.list_transactions.handle().await.unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].kind, TransactionType::Debit);
    assert_eq!(transactions[0].amount, 40.0);
    assert_eq!(state.display_balance.handle(0.0).await.unwrap(), -40.0);
}

#[tokio::test]
async fn subtracts_a_prior_local_booking_from_the_remote_balance() {
    let state = offline_state();
    book(&state, "b-1", 150.0, 1_000).await;

    assert_eq!(state.display_balance.handle(500.0).await.unwrap(), 350.0);
}

#[tokio::test]
async fn cancelling_a_local_booking_keeps_its_charge() {
    let state = offline_state();
    book(&state, "b-1", 40.0, 1_000).await;

    state.cancel_booking.handle("b-1").await.unwrap();

    let bookings = state.list_bookings.handle().await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].status, BookingStatus::Cancelled);
    assert_eq!(state.display_balance.handle(40.0).await.unwrap(), 0.0);
}

#[tokio::test]
async fn accumulates_two_local_bookings_newest_debit_first() {
    let state = offline_state();
    book(&state, "b-30", 30.0, 1_000).await;
    book(&state, "b-70", 70.0, 2_000).await;

    assert_eq!(state.display_balance.handle(100.0).await.unwrap(), 0.0);
    let transactions = state.list_transactions.handle().await.unwrap();
    let debits: Vec<_> = transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Debit)
        .map(|t| (t.id.as_str(), t.amount))
        .collect();
    assert_eq!(debits, vec![("b-70", 70.0), ("b-30", 30.0)]);
}

#[rstest]
#[case(&[])]
#[case(&[10.0])]
#[case(&[12.5, 40.0, 0.0, 99.99])]
#[tokio::test]
async fn display_balance_is_remote_minus_local_spend(#[case] amounts: &[f64]) {
    let state = offline_state();
    for (i, amount) in amounts.iter().enumerate() {
        book(&state, &format!("b-{i}"), *amount, i as i64).await;
    }

    let spent: f64 = amounts.iter().sum();
    let balance = state.display_balance.handle(1_000.0).await.unwrap();
    assert!((balance - (1_000.0 - spent)).abs() < 1e-9);
    assert_eq!(
        state.list_bookings.handle().await.unwrap().len(),
        amounts.len()
    );
}

#[tokio::test]
async fn a_remote_booking_never_touches_local_storage() {
    let (state, backend) =
        make_app_state(InMemoryKeyValueStore::new(), InMemoryBackend::with_balance(500.0));

    state
        .submit_booking
        .handle(SubmitBookingBuilder::new().build())
        .await
        .unwrap();

    let bookings = state.list_bookings.handle().await.unwrap();
    assert_eq!(bookings, *backend.bookings.read().await);
    assert!(bookings.iter().all(|b| !b.is_local()));
    assert_eq!(state.display_balance.handle(500.0).await.unwrap(), 500.0);
}

#[tokio::test]
async fn cancelling_twice_keeps_a_single_cancelled_record() {
    let state = offline_state();
    book(&state, "b-1", 40.0, 1_000).await;

    state.cancel_booking.handle("b-1").await.unwrap();
    state.cancel_booking.handle("b-1").await.unwrap();

    let bookings = state.list_bookings.handle().await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].status, BookingStatus::Cancelled);
}

#[tokio::test]
async fn lists_bookings_latest_start_first_across_origins() {
    let store = InMemoryKeyValueStore::new();
    let local = vec![
        make_booking_record("local-early", 0, BookingOrigin::LocalFallback),
        make_booking_record("local-late", 4 * 3_600, BookingOrigin::LocalFallback),
    ];
    store
        .seed(LOCAL_BOOKINGS_KEY, &serde_json::to_string(&local).unwrap())
        .await;
    let backend = InMemoryBackend::new();
    *backend.bookings.write().await = vec![
        make_booking_record("remote-mid", 2 * 3_600, BookingOrigin::Remote),
        make_booking_record("remote-latest", 6 * 3_600, BookingOrigin::Remote),
    ];
    let (state, _) = make_app_state(store, backend);

    let bookings = state.list_bookings.handle().await.unwrap();

    let ids: Vec<_> = bookings.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["remote-latest", "local-late", "remote-mid", "local-early"]
    );
}

#[tokio::test]
async fn local_bookings_survive_a_restart_on_disk() {
    let dir = std::env::temp_dir().join(format!("ledger-e2e-{}", uuid::Uuid::now_v7()));

    {
        let store = Arc::new(FileSystemKeyValueStore::open(dir.clone()).await.unwrap());
        let backend = Arc::new(offline_backend());
        let state = AppState::new(store, backend.clone(), backend);
        book(&state, "b-1", 150.0, 1_000).await;
    }

    let store = Arc::new(FileSystemKeyValueStore::open(dir.clone()).await.unwrap());
    let backend = Arc::new(offline_backend());
    let state = AppState::new(store, backend.clone(), backend);

    let bookings = state.list_bookings.handle().await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, "b-1");
    assert_eq!(state.display_balance.handle(500.0).await.unwrap(), 350.0);

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
