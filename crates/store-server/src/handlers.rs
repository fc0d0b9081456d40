//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use store_payments::{IntentRequest, PaymentError};

use crate::state::AppState;

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    /// Order total in major currency units
    pub amount: f64,

    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "usd".into()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfigResponse {
    pub publishable_key: Option<String>,
    pub secret_configured: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub stripe_configured: bool,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: impl Into<String>) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        stripe_configured: state.intents.is_some(),
    })
}

/// Runtime configuration for the WASM frontend
pub async fn store_config(State(state): State<AppState>) -> Json<StoreConfigResponse> {
    Json(StoreConfigResponse {
        publishable_key: state.publishable_key.clone(),
        secret_configured: state.intents.is_some(),
    })
}

/// Create a Stripe payment intent for the current order total
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(payload): Json<CreateIntentRequest>,
) -> Result<Json<CreateIntentResponse>, HandlerError> {
    let intents = state.intents.as_ref().ok_or_else(|| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Stripe is not configured. Please set STRIPE_SECRET_KEY environment variable.",
        )
    })?;

    let amount = Decimal::from_f64(payload.amount)
        .filter(|amount| *amount > Decimal::ZERO)
        .ok_or_else(|| {
            error_response(StatusCode::BAD_REQUEST, "Amount must be a positive number")
        })?;

    let request = IntentRequest {
        amount,
        currency: payload.currency,
        product: state.product.name.clone(),
    };

    let created = intents.create_intent(request).await.map_err(|e| {
        tracing::error!("Error creating payment intent: {e}");
        let status = match e {
            PaymentError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, e.user_message())
    })?;

    Ok(Json(CreateIntentResponse {
        client_secret: created.client_secret,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use store_core::Product;
    use store_payments::{CreatedIntent, PaymentIntents};

    struct FakeIntents {
        fail: bool,
    }

    #[async_trait]
    impl PaymentIntents for FakeIntents {
        async fn create_intent(
            &self,
            request: IntentRequest,
        ) -> store_payments::Result<CreatedIntent> {
            if self.fail {
                return Err(PaymentError::Stripe("card network unreachable".into()));
            }
            assert_eq!(request.product, "NeoKeys Pro");
            Ok(CreatedIntent {
                client_secret: "pi_123_secret_456".into(),
            })
        }
    }

    fn state_with(intents: Option<Arc<dyn PaymentIntents>>) -> AppState {
        AppState {
            intents,
            publishable_key: Some("pk_test_123".into()),
            product: Product::neokeys_pro(),
        }
    }

    fn request(amount: f64) -> CreateIntentRequest {
        CreateIntentRequest {
            amount,
            currency: "usd".into(),
        }
    }

    #[tokio::test]
    async fn test_create_intent_without_secret_key_is_500() {
        let state = state_with(None);
        let err = create_payment_intent(State(state), Json(request(79.99)))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.1.error.contains("STRIPE_SECRET_KEY"));
    }

    #[tokio::test]
    async fn test_create_intent_success() {
        let state = state_with(Some(Arc::new(FakeIntents { fail: false })));
        let response = create_payment_intent(State(state), Json(request(79.99)))
            .await
            .unwrap();
        assert!(!response.client_secret.is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_is_generic_500() {
        let state = state_with(Some(Arc::new(FakeIntents { fail: true })));
        let err = create_payment_intent(State(state), Json(request(79.99)))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::INTERNAL_SERVER_ERROR);
        // The provider detail must not leak to the client.
        assert_eq!(err.1.error, "Failed to create payment intent");
    }

    #[tokio::test]
    async fn test_invalid_amounts_are_rejected() {
        for amount in [0.0, -1.0, f64::NAN] {
            let state = state_with(Some(Arc::new(FakeIntents { fail: false })));
            let err = create_payment_intent(State(state), Json(request(amount)))
                .await
                .unwrap_err();
            assert_eq!(err.0, StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_store_config_reflects_missing_keys() {
        let response = store_config(State(state_with(None))).await;
        assert_eq!(response.publishable_key.as_deref(), Some("pk_test_123"));
        assert!(!response.secret_configured);
    }

    #[test]
    fn test_currency_defaults_to_usd() {
        let parsed: CreateIntentRequest = serde_json::from_str(r#"{"amount": 79.99}"#).unwrap();
        assert_eq!(parsed.currency, "usd");
    }
}
