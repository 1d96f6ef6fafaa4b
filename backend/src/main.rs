//! Main entry point for the Customers API backend.
//!
//! This file initializes the Axum web server, sets up the database
//! connection, and registers the authentication routes. The token issuer is
//! built once here and injected into the handlers.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod utils;

use crate::api::common::ApiData;
use crate::utils::jwt::TokenIssuer;
use axum::{Extension, Router, response::Json, routing::get};
use config::Config;
use database::Database;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let db = Database::new(&config).await.unwrap();
    db.migrate().await.unwrap();
    let pool = db.pool().clone();
    let tokens = Arc::new(TokenIssuer::new(&config));

    let app = Router::new()
        .route("/", get(root_handler))
        .merge(auth::routes::auth_router())
        .layer(Extension(pool))
        .layer(Extension(tokens));

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting Customers API server on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}

async fn root_handler() -> Json<ApiData<serde_json::Value>> {
    Json(ApiData::new(serde_json::json!({
        "service": "Customers API",
        "version": "0.1.0"
    })))
}
