use crate::modules::bookings::adapters::outbound::local_ledger_store::LocalLedgerStore;
use crate::modules::bookings::adapters::outbound::remote_bookings::RemoteBookingService;
use crate::modules::bookings::adapters::outbound::remote_wallet::RemoteWalletService;
use crate::modules::bookings::adapters::outbound::session_cancellations::SessionCancellations;
use crate::modules::bookings::use_cases::add_funds::handler::AddFundsHandler;
use crate::modules::bookings::use_cases::cancel_booking::handler::CancelBookingHandler;
use crate::modules::bookings::use_cases::get_display_balance::handler::GetDisplayBalanceHandler;
use crate::modules::bookings::use_cases::list_bookings::handler::ListBookingsHandler;
use crate::modules::bookings::use_cases::list_transactions::handler::ListTransactionsHandler;
use crate::modules::bookings::use_cases::submit_booking::handler::SubmitBookingHandler;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

type Store = dyn KeyValueStore;
type Bookings = dyn RemoteBookingService;
type Wallet = dyn RemoteWalletService;

#[derive(Clone)]
pub struct AppState {
    pub submit_booking: Arc<SubmitBookingHandler<Store, Bookings>>,
    pub list_bookings: Arc<ListBookingsHandler<Store, Bookings>>,
    pub cancel_booking: Arc<CancelBookingHandler<Store, Bookings>>,
    pub display_balance: Arc<GetDisplayBalanceHandler<Store, Wallet>>,
    pub list_transactions: Arc<ListTransactionsHandler<Store, Wallet>>,
    pub add_funds: Arc<AddFundsHandler<Wallet>>,
}

impl AppState {
    /// Wires every handler over one local ledger and one session overlay.
    pub fn new(store: Arc<Store>, bookings: Arc<Bookings>, wallet: Arc<Wallet>) -> Self {
        let local = Arc::new(LocalLedgerStore::new(store));
        let cancellations = Arc::new(SessionCancellations::new());

        Self {
            submit_booking: Arc::new(SubmitBookingHandler::new(local.clone(), bookings.clone())),
            list_bookings: Arc::new(ListBookingsHandler::new(
                local.clone(),
                bookings.clone(),
                cancellations.clone(),
            )),
            cancel_booking: Arc::new(CancelBookingHandler::new(
                local.clone(),
                bookings,
                cancellations,
            )),
            display_balance: Arc::new(GetDisplayBalanceHandler::new(local.clone(), wallet.clone())),
            list_transactions: Arc::new(ListTransactionsHandler::new(local, wallet.clone())),
            add_funds: Arc::new(AddFundsHandler::new(wallet)),
        }
    }
}
