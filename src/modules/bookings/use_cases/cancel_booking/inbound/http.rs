use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
) -> impl IntoResponse {
    match state.cancel_booking.handle(&booking_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => {
            tracing::error!(%error, booking_id, "cancelling booking failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod cancel_booking_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use tower::ServiceExt;

    use crate::modules::bookings::adapters::outbound::backend_in_memory::InMemoryBackend;
    use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::make_app_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/bookings/{id}", delete(handle))
            .with_state(state)
    }

    fn delete_booking(id: &str) -> Request<Body> {
        Request::delete(format!("/bookings/{id}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_204_even_when_the_backend_is_down() {
        let mut backend = InMemoryBackend::new();
        backend.toggle_offline();
        let (state, backend) = make_app_state(InMemoryKeyValueStore::new(), backend);

        let response = app(state).oneshot(delete_booking("b-1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(backend.cancel_requests.read().await.len(), 1);
    }

    #[tokio::test]
    async fn it_should_return_500_when_local_storage_is_broken() {
        let mut store = InMemoryKeyValueStore::new();
        store.toggle_offline();
        let (state, _) = make_app_state(store, InMemoryBackend::new());

        let response = app(state).oneshot(delete_booking("b-1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
