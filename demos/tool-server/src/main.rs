mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use deckofcards_sdk::async_client::AsyncDeckOfCardsBuilder;
use tower_http::cors::CorsLayer;

use state::AppState;

const ADDR_ENV: &str = "TOOL_SERVER_ADDR";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let api = AsyncDeckOfCardsBuilder::from_env()
        .build()
        .await
        .expect("Failed to initialize Deck of Cards client");
    log::info!("Deck of Cards client ready.");

    let state = Arc::new(AppState { api });

    let app = Router::new()
        .route("/tools", get(routes::list_tools))
        .route("/tools/{name}", post(routes::call_tool))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    log::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
