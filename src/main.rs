mod app;
mod routes;
mod services;
mod types;
mod utils;

use std::{env, process, sync::Arc};

use services::hotel_store::hotel_store_service::{HotelStoreConfig, HotelStoreService};
use tracing::{error, info};

fn required_env(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("Missing required environment variable {}", name))
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn hotel_store_config_from_env() -> Result<HotelStoreConfig, String> {
    Ok(HotelStoreConfig {
        uri: required_env("MONGODB_URI")?,
        database: env_or("MONGODB_DATABASE", "test"),
        collection: env_or("HOTEL_COLLECTION", "hotels"),
    })
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    let hotel_store_config = hotel_store_config_from_env().unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    let hotel_store = HotelStoreService::connect(hotel_store_config)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to set up hotel store: {}", e);
            process::exit(1);
        });
    let app = app::gen_app(Arc::new(hotel_store));

    let addr = format!("0.0.0.0:{}", env_or("PORT", "3000"));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            process::exit(1);
        }
    };

    info!("Listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        process::exit(1);
    }
}
