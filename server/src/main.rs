mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let state = state::AppState::new(&config).expect("upstream http client init failed");

    let app = routes::app(state, &config.dist_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(
        port = config.port,
        upstream = %config.api_upstream,
        dist = %config.dist_dir.display(),
        "portal server listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
