use std::{net::Ipv4Addr, sync::Arc};

use tracing::info;
use tracing_subscriber::EnvFilter;

use ticklist::{config::Config, create_app, store::MemoryStore, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().expect("reading configuration");

    let store = MemoryStore::named(config.data_source.as_str());
    info!(source = store.name(), "Created in-memory data source");

    let state = AppState {
        store: store.into_pool(),
        base_path: Arc::new(config.base_path),
    };
    let app = create_app(state);
    let addr = (Ipv4Addr::UNSPECIFIED, config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|err| panic!("failed to bind to port {}: {err}", config.port));

    info!("running on {addr:?}");

    axum::serve(listener, app).await.expect("failed serving");
}
