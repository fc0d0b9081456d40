//! NeoKeys Store HTTP Server
//!
//! Axum-based server: proxies payment-intent creation to Stripe and serves
//! the built WASM storefront from the `static/` directory.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use store_core::Product;
use store_payments::{PaymentConfig, PaymentIntents, StripeClient};

use crate::handlers::{create_payment_intent, health_check, store_config};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Missing credentials are logged once here; requests answer with an
    // explicit error body instead of crashing.
    let config = PaymentConfig::from_env();
    let intents: Option<Arc<dyn PaymentIntents>> = match config.secret_key.as_deref() {
        Some(key) => Some(Arc::new(StripeClient::new(key))),
        None => {
            tracing::error!("STRIPE_SECRET_KEY environment variable is not set");
            None
        }
    };
    if config.publishable_key.is_none() {
        tracing::warn!("STRIPE_PUBLISHABLE_KEY not set - checkout will show a configuration error");
    }
    if config.missing_vars().is_empty() {
        tracing::info!("✓ Stripe configured");
    }

    let state = AppState {
        intents,
        publishable_key: config.publishable_key,
        product: Product::neokeys_pro(),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/config", get(store_config))
        .route("/api/create-payment-intent", post(create_payment_intent))
        // Static files (WASM frontend)
        .fallback_service(tower_http::services::ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("NeoKeys store server running on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                     - Health check");
    tracing::info!("  GET  /api/config                 - Frontend runtime config");
    tracing::info!("  POST /api/create-payment-intent  - Create Stripe payment intent");

    axum::serve(listener, app).await?;

    Ok(())
}
