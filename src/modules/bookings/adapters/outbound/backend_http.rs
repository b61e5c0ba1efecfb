use crate::modules::bookings::adapters::outbound::remote_bookings::{
    NewRemoteBooking, RemoteBookingService, RemoteError,
};
use crate::modules::bookings::adapters::outbound::remote_wallet::{
    AddFundsRequest, RemoteWalletService,
};
use crate::modules::bookings::core::booking::BookingRecord;
use crate::modules::bookings::core::wallet::Transaction;
use crate::shared::core::primitives::string_or_number;
use async_trait::async_trait;
use reqwest::{Client, IntoUrl, Method, RequestBuilder, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

const BOOKINGS_PATH: &str = "/api/driver/bookings";
const DASHBOARD_PATH: &str = "/api/driver/dashboard";
const TRANSACTIONS_PATH: &str = "/api/driver/dashboard/transactions";
const ADD_MONEY_PATH: &str = "/api/driver/dashboard/add-money";

#[derive(Deserialize)]
struct CreatedBooking {
    #[serde(default, deserialize_with = "optional_id")]
    id: Option<String>,
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    string_or_number(deserializer).map(Some)
}

#[derive(Deserialize)]
struct Dashboard {
    #[serde(default)]
    balance: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddFundsResponse {
    new_balance: f64,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the driver endpoints of the backend.
pub struct HttpBackendClient {
    base_url: String,
    auth_token: Option<String>,
    client: Client,
}

impl HttpBackendClient {
    pub fn new(
        base_url: impl Into<String>,
        auth_token: Option<String>,
        request_timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| RemoteError::Unreachable(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token,
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_url(method, format!("{}{}", self.base_url, path))
    }

    fn request_url<U: IntoUrl>(&self, method: Method, url: U) -> RequestBuilder {
        let request = self.client.request(method, url);
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// The id becomes one percent-encoded path segment, so `/` or `..` inside it
    /// cannot reach another endpoint.
    fn booking_url(&self, booking_id: &str) -> Result<Url, RemoteError> {
        if matches!(booking_id.trim(), "" | "." | "..") {
            return Err(RemoteError::Rejected(format!("invalid booking id: {booking_id:?}")));
        }
        let mut url = Url::parse(&format!("{}{}", self.base_url, BOOKINGS_PATH))
            .map_err(|e| RemoteError::Unreachable(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| RemoteError::Unreachable("base url cannot take path segments".into()))?
            .push(booking_id);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, RemoteError> {
        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::Unreachable(e.to_string()))?;
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(error) => Err(RemoteError::Rejected(error.message)),
            Err(_) => Err(RemoteError::Status { status, body }),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RemoteBookingService for HttpBackendClient {
    async fn create_booking(
        &self,
        booking: &NewRemoteBooking,
    ) -> Result<Option<String>, RemoteError> {
        let response = self
            .send(self.request(Method::POST, BOOKINGS_PATH).json(booking))
            .await?;
        // Any 2xx counts as committed, whatever the body looks like.
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str::<CreatedBooking>(&body)
            .ok()
            .and_then(|created| created.id))
    }

    async fn cancel_booking(&self, booking_id: &str) -> Result<(), RemoteError> {
        let url = self.booking_url(booking_id)?;
        self.send(self.request_url(Method::DELETE, url)).await?;
        Ok(())
    }

    /// Records that do not parse are skipped one by one; the rest of the list is kept.
    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, RemoteError> {
        let raw: Vec<serde_json::Value> = self.get_json(BOOKINGS_PATH).await?;
        Ok(raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<BookingRecord>(value) {
                Ok(booking) => Some(booking),
                Err(error) => {
                    tracing::warn!(%error, "skipping unreadable remote booking");
                    None
                }
            })
            .collect())
    }
}

#[async_trait]
impl RemoteWalletService for HttpBackendClient {
    async fn balance(&self) -> Result<f64, RemoteError> {
        let dashboard: Dashboard = self.get_json(DASHBOARD_PATH).await?;
        Ok(dashboard.balance)
    }

    async fn transactions(&self) -> Result<Vec<Transaction>, RemoteError> {
        self.get_json(TRANSACTIONS_PATH).await
    }

    async fn add_funds(&self, request: &AddFundsRequest) -> Result<f64, RemoteError> {
        let response = self
            .send(self.request(Method::POST, ADD_MONEY_PATH).json(request))
            .await?;
        let body: AddFundsResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(body.new_balance)
    }
}
