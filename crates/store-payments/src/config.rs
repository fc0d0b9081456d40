//! Environment Configuration
//!
//! Credentials for the payment provider. Absence of either key degrades to
//! explicit configuration-error surfaces instead of a crash: the server
//! answers create-intent calls with a configuration error, and the frontend
//! renders a configuration screen in place of the card form.

/// Server-side secret credential (`sk_...`)
pub const SECRET_KEY_VAR: &str = "STRIPE_SECRET_KEY";

/// Client-side publishable credential (`pk_...`)
pub const PUBLISHABLE_KEY_VAR: &str = "STRIPE_PUBLISHABLE_KEY";

/// Stripe credentials as found in the environment
#[derive(Clone, Debug, Default)]
pub struct PaymentConfig {
    pub secret_key: Option<String>,
    pub publishable_key: Option<String>,
}

impl PaymentConfig {
    /// Read both keys from the environment; empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            secret_key: read_var(SECRET_KEY_VAR),
            publishable_key: read_var(PUBLISHABLE_KEY_VAR),
        }
    }

    /// Names of the unset variables, for the configuration-error screen.
    pub fn missing_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.publishable_key.is_none() {
            missing.push(PUBLISHABLE_KEY_VAR);
        }
        if self.secret_key.is_none() {
            missing.push(SECRET_KEY_VAR);
        }
        missing
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_vars() {
        let config = PaymentConfig::default();
        assert_eq!(
            config.missing_vars(),
            vec![PUBLISHABLE_KEY_VAR, SECRET_KEY_VAR]
        );

        let config = PaymentConfig {
            secret_key: Some("sk_test_123".into()),
            publishable_key: None,
        };
        assert_eq!(config.missing_vars(), vec![PUBLISHABLE_KEY_VAR]);

        let config = PaymentConfig {
            secret_key: Some("sk_test_123".into()),
            publishable_key: Some("pk_test_123".into()),
        };
        assert!(config.missing_vars().is_empty());
    }
}
