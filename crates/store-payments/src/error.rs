//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Stripe API error
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Request amount rejected before reaching the provider
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentError::Stripe(_))
    }

    /// User-facing message; provider detail stays in the server logs.
    pub fn user_message(&self) -> &str {
        match self {
            PaymentError::Stripe(_) => "Failed to create payment intent",
            PaymentError::InvalidAmount(_) => "Amount must be a positive number",
            PaymentError::Config(_) => {
                "Stripe is not configured. Please set STRIPE_SECRET_KEY environment variable."
            }
        }
    }
}
