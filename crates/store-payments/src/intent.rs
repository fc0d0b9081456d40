//! Stripe PaymentIntent Creation
//!
//! One operation: turn an order total into a PaymentIntent and hand back its
//! client secret. The intent is tagged with the product name so the charge
//! is identifiable in the Stripe dashboard.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use stripe::{Client, CreatePaymentIntent, Currency, PaymentIntent};

use crate::config::{PaymentConfig, SECRET_KEY_VAR};
use crate::error::{PaymentError, Result};

/// Creates payment intents (Strategy pattern)
///
/// `StripeClient` implements this against the live API; tests substitute
/// fakes so handlers can be exercised without network access.
#[async_trait]
pub trait PaymentIntents: Send + Sync {
    async fn create_intent(&self, request: IntentRequest) -> Result<CreatedIntent>;
}

/// Request to create a payment intent
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntentRequest {
    /// Order total in major currency units
    pub amount: Decimal,

    /// ISO currency code, e.g. "usd"
    pub currency: String,

    /// Product label recorded in the intent metadata
    pub product: String,
}

/// Result of creating a payment intent
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatedIntent {
    /// One-time token the client uses to confirm the intent
    pub client_secret: String,
}

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from the environment; fails when the secret key is unset.
    pub fn from_env() -> Result<Self> {
        let config = PaymentConfig::from_env();
        config
            .secret_key
            .as_deref()
            .map(Self::new)
            .ok_or_else(|| PaymentError::Config(format!("{SECRET_KEY_VAR} not set")))
    }
}

#[async_trait]
impl PaymentIntents for StripeClient {
    async fn create_intent(&self, request: IntentRequest) -> Result<CreatedIntent> {
        let amount = to_minor_units(request.amount)?;
        let currency = parse_currency(&request.currency);

        let mut params = CreatePaymentIntent::new(amount, currency);
        params.metadata = Some(HashMap::from([(
            "product".to_string(),
            request.product.clone(),
        )]));

        tracing::info!(amount, currency = %request.currency, "creating payment intent");

        let intent = PaymentIntent::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Stripe(e.to_string()))?;

        let client_secret = intent
            .client_secret
            .ok_or_else(|| PaymentError::Stripe("no client secret returned".into()))?;

        Ok(CreatedIntent { client_secret })
    }
}

/// Convert a major-unit amount to integer minor units (cents).
///
/// Stripe expects integer minor-unit amounts; midpoints round away from
/// zero, so $0.005 becomes one cent.
pub fn to_minor_units(amount: Decimal) -> Result<i64> {
    if amount <= Decimal::ZERO {
        return Err(PaymentError::InvalidAmount(format!(
            "{amount} is not positive"
        )));
    }
    (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| PaymentError::InvalidAmount(format!("{amount} out of range")))
}

/// Map a currency code onto the provider enum; unknown codes fall back to
/// USD.
fn parse_currency(code: &str) -> Currency {
    match code.to_lowercase().as_str() {
        "eur" => Currency::EUR,
        _ => Currency::USD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minor_units_conversion() {
        assert_eq!(to_minor_units(dec!(79.99)).unwrap(), 7999);
        assert_eq!(to_minor_units(dec!(239.97)).unwrap(), 23997);
        assert_eq!(to_minor_units(dec!(10)).unwrap(), 1000);
    }

    #[test]
    fn test_minor_units_midpoint_rounds_away_from_zero() {
        assert_eq!(to_minor_units(dec!(0.005)).unwrap(), 1);
        assert_eq!(to_minor_units(dec!(79.995)).unwrap(), 8000);
    }

    #[test]
    fn test_minor_units_rejects_non_positive() {
        assert!(to_minor_units(Decimal::ZERO).is_err());
        assert!(to_minor_units(dec!(-5)).is_err());
    }

    #[test]
    fn test_currency_fallback() {
        assert_eq!(parse_currency("usd"), Currency::USD);
        assert_eq!(parse_currency("EUR"), Currency::EUR);
        assert_eq!(parse_currency("chf"), Currency::USD);
    }
}
