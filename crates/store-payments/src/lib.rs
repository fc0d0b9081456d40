//! # store-payments
//!
//! Server-side Stripe integration for the NeoKeys storefront.
//!
//! ## Integration approach: Stripe Elements (Embedded)
//!
//! **Flow:** the server creates a PaymentIntent; the embedded card form
//! confirms it directly with Stripe using the returned client secret.
//!
//! ```text
//! ┌─────────────┐  create intent   ┌────────────┐
//! │  Frontend   │─────────────────▶│   Server   │──▶ Stripe API
//! │ (card form) │◀─────────────────│   (axum)   │
//! └──────┬──────┘  client secret   └────────────┘
//!        │
//!        └── confirmCardPayment(secret) ──▶ Stripe API
//! ```
//!
//! Card data is captured by Stripe's hosted widget and never transits this
//! crate; the server only ever sees amounts and opaque identifiers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use store_payments::{IntentRequest, PaymentIntents, StripeClient};
//!
//! let client = StripeClient::from_env()?;
//! let intent = client.create_intent(IntentRequest {
//!     amount: dec!(79.99),
//!     currency: "usd".into(),
//!     product: "NeoKeys Pro".into(),
//! }).await?;
//! // Hand intent.client_secret to the frontend.
//! ```

mod config;
mod error;
mod intent;

pub use config::{PUBLISHABLE_KEY_VAR, PaymentConfig, SECRET_KEY_VAR};
pub use error::{PaymentError, Result};
pub use intent::{CreatedIntent, IntentRequest, PaymentIntents, StripeClient, to_minor_units};
