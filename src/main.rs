mod config;
mod db;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port = config::port();

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let csrf = services::csrf::CsrfTokens::from_env();
    let _sweeper = services::csrf::spawn_sweep_task(csrf.clone());

    let state = state::AppState::new(pool, csrf, config::base_url(port));

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "quire listening");
    axum::serve(listener, app).await.expect("server failed");
}
