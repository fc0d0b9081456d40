//! API Client

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;

/// Runtime configuration served by the backend
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub publishable_key: Option<String>,
    pub secret_configured: bool,
}

/// Fetch the frontend runtime configuration
pub async fn fetch_config() -> Result<StoreConfig, String> {
    let client = reqwest::Client::new();

    let response = client
        .get("/api/config")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    response.json().await.map_err(|e| e.to_string())
}

/// Create a payment intent for `amount` and return its client secret.
///
/// Failures collapse into one generic message; server-side detail stays
/// server-side.
pub async fn create_payment_intent(amount: Decimal) -> Result<String, String> {
    let client = reqwest::Client::new();

    let body = serde_json::json!({
        "amount": amount.to_f64(),
    });

    let response = client
        .post("/api/create-payment-intent")
        .json(&body)
        .send()
        .await
        .map_err(|_| "Failed to initialize payment".to_string())?;

    let data: serde_json::Value = response
        .json()
        .await
        .map_err(|_| "Failed to initialize payment".to_string())?;

    match data["clientSecret"].as_str() {
        Some(secret) => Ok(secret.to_string()),
        None => Err(data["error"]
            .as_str()
            .unwrap_or("Failed to initialize payment")
            .to_string()),
    }
}
