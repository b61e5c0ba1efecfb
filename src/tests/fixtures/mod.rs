pub mod app_state;
pub mod bookings;
pub mod commands {
    pub mod submit_booking;
}
pub mod wallet;
