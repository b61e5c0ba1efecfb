// Process-lifetime record of remote bookings the driver cancelled.
//
// Remote bookings are never written to local storage, so a cancel that the backend
// did not acknowledge is only remembered here. Lost on restart.

use std::collections::HashSet;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct SessionCancellations {
    ids: RwLock<HashSet<String>>,
}

impl SessionCancellations {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, booking_id: &str) {
        self.ids.write().await.insert(booking_id.to_string());
    }

    pub async fn contains(&self, booking_id: &str) -> bool {
        self.ids.read().await.contains(booking_id)
    }
}
