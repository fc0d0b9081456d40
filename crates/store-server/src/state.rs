//! Application State

use std::sync::Arc;

use store_core::Product;
use store_payments::PaymentIntents;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment-intent creator (None if the secret key is not configured)
    pub intents: Option<Arc<dyn PaymentIntents>>,

    /// Publishable key handed to the frontend (None if not configured)
    pub publishable_key: Option<String>,

    /// The single catalog entry
    pub product: Product,
}
