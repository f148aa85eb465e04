mod config;
mod error;
mod routes;
mod state;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let conf = get_configuration(Some(config.leptos_config.as_str())).map_err(|e| StartupError::Leptos(e.to_string()))?;

    match config.api_upstream.as_deref() {
        Some(upstream) => tracing::info!(%upstream, "forwarding /api to upstream"),
        None => tracing::warn!("API_UPSTREAM_URL not set; /api requests will return 503"),
    }

    let port = config.port;
    let state = state::AppState::new(config);
    let app = routes::app(state, conf.leptos_options);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%port, "sweetshop listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
