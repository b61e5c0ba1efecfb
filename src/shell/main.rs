use anyhow::Context as _;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use booking_ledger::modules::bookings::adapters::outbound::backend_http::HttpBackendClient;
use booking_ledger::shared::infrastructure::key_value_store::file_system::FileSystemKeyValueStore;
use booking_ledger::shell::config::AppConfig;
use booking_ledger::shell::graphql::{AppSchema, build_schema};
use booking_ledger::shell::http::{cors_layer, router};
use booking_ledger::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let store = Arc::new(FileSystemKeyValueStore::open(config.store_dir.clone()).await?);
    let backend = Arc::new(HttpBackendClient::new(
        config.api_base_url.clone(),
        config.api_token.clone(),
        config.request_timeout,
    )?);
    tracing::info!(
        store_dir = %store.root().display(),
        api_base_url = %config.api_base_url,
        "ledger configured"
    );

    let state = AppState::new(store, backend.clone(), backend);
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(cors_layer(&config.cors_allow))
        .layer(TraceLayer::new_for_http());

    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
