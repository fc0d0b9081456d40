//! Hosted Card-Input Seam
//!
//! The embedded widget captures card data directly between the browser and
//! the payment provider; application code only ever talks to this trait and
//! never sees a card number.

use async_trait::async_trait;
use thiserror::Error;

/// A confirmation attempt the provider rejected. The message is the
/// provider's own text and is shown to the user verbatim.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct PaymentDecline {
    pub message: String,
}

impl PaymentDecline {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Handle to a hosted card-input widget.
///
/// Production wraps the Stripe card element; tests substitute a fake. The
/// implementation holds the widget reference privately, so the "payment
/// token" never crosses this boundary.
#[async_trait(?Send)]
pub trait CardEntry {
    /// True once the widget is mounted and usable.
    fn is_mounted(&self) -> bool;

    /// Confirm the payment intent identified by `client_secret` using the
    /// card currently captured by the widget.
    async fn confirm(&self, client_secret: &str) -> Result<(), PaymentDecline>;
}
