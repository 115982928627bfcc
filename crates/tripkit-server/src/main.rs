mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tripkit_places::PlacesClient;
use tripkit_resolver::PlaceResolver;
use tripkit_store::ItemStore;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = tripkit_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let api_key = config
        .places_api_key
        .clone()
        .ok_or_else(|| tripkit_core::ConfigError::MissingEnvVar("GOOGLE_PLACES_API_KEY".into()))?;
    let client = match &config.places_base_url {
        Some(base_url) => PlacesClient::with_base_url(
            &api_key,
            config.http_timeout_secs,
            &config.http_user_agent,
            base_url,
        )?,
        None => PlacesClient::new(&api_key, config.http_timeout_secs, &config.http_user_agent)?,
    };
    let resolver = PlaceResolver::new(Arc::new(client));

    let store = Arc::new(ItemStore::open(&config.items_path).await?);
    let app = build_app(AppState { store, resolver });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
