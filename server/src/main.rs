#![recursion_limit = "256"]

mod gate;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let provider = services::provider::ProviderClient::from_env()
        .expect("AUTH_URL and AUTH_API_KEY required");
    let backend = services::backend::BackendClient::from_env().expect("BACKEND_API_URL required");
    let state = state::AppState::new(provider, backend);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "upwatch listening");
    axum::serve(listener, app).await.expect("server failed");
}
