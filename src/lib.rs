pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod key_value_store;
    }
}

pub mod modules {
    pub mod bookings {
        pub mod core {
            pub mod booking;
            pub mod wallet;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod submit_booking {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_bookings {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod cancel_booking {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_display_balance {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_transactions {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod add_funds {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod backend_http;
                pub mod backend_in_memory;
                pub mod local_ledger_store;
                pub mod remote_bookings;
                pub mod remote_wallet;
                pub mod session_cancellations;
            }
        }
    }
}

pub mod shell;
