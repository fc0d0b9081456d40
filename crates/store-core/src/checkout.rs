//! Checkout State Machine
//!
//! Payment-form lifecycle as an explicit state machine, independent of any
//! rendering concern. The form feeds it `CheckoutEvent`s; events that are
//! not valid for the current phase are dropped.

/// Phase of the checkout form
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutPhase {
    /// Requesting a client secret for the current total.
    Initializing,

    /// Secret in hand, ready to submit. `decline` carries the provider's
    /// message from the last failed attempt, if any.
    Ready {
        client_secret: String,
        decline: Option<String>,
    },

    /// A confirmation request is in flight; submission is locked.
    Submitting { client_secret: String },

    /// Initialization failed. Terminal until checkout is re-entered, which
    /// rebuilds the form and restarts from `Initializing`.
    Failed { message: String },

    /// Payment confirmed by the provider.
    Succeeded,
}

/// Events fed to the machine by the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutEvent {
    /// The create-intent endpoint returned a client secret.
    SecretReceived(String),

    /// The create-intent call failed or returned an error body.
    InitFailed(String),

    /// The user submitted the form and all guards passed.
    SubmitStarted,

    /// The provider declined the confirmation; message is user-facing.
    Declined(String),

    /// The provider confirmed the payment.
    Confirmed,
}

impl CheckoutPhase {
    pub fn new() -> Self {
        Self::Initializing
    }

    /// Whether the submit control may fire. The form additionally requires
    /// Stripe.js to be loaded and the card widget mounted.
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    pub fn client_secret(&self) -> Option<&str> {
        match self {
            Self::Ready { client_secret, .. } | Self::Submitting { client_secret } => {
                Some(client_secret)
            }
            _ => None,
        }
    }

    /// Message for the error panel, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Ready {
                decline: Some(message),
                ..
            }
            | Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Advance the machine. Invalid (phase, event) pairs are dropped; in
    /// particular a stray `Confirmed` outside `Submitting` cannot complete
    /// the order twice.
    pub fn apply(&mut self, event: CheckoutEvent) {
        use CheckoutEvent::{Confirmed, Declined, InitFailed, SecretReceived, SubmitStarted};

        let next = match (&*self, event) {
            (Self::Initializing, SecretReceived(client_secret)) => Self::Ready {
                client_secret,
                decline: None,
            },
            (Self::Initializing, InitFailed(message)) => Self::Failed { message },
            (Self::Ready { client_secret, .. }, SubmitStarted) => Self::Submitting {
                client_secret: client_secret.clone(),
            },
            (Self::Submitting { client_secret }, Declined(message)) => Self::Ready {
                client_secret: client_secret.clone(),
                decline: Some(message),
            },
            (Self::Submitting { .. }, Confirmed) => Self::Succeeded,
            (_, event) => {
                tracing::debug!(?event, "checkout event ignored in current phase");
                return;
            }
        };

        *self = next;
    }
}

impl Default for CheckoutPhase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardEntry, PaymentDecline};
    use async_trait::async_trait;
    use std::cell::RefCell;

    #[test]
    fn test_initialization_paths() {
        let mut phase = CheckoutPhase::new();
        assert!(!phase.can_submit());

        phase.apply(CheckoutEvent::SecretReceived("pi_secret_123".into()));
        assert!(phase.can_submit());
        assert_eq!(phase.client_secret(), Some("pi_secret_123"));

        let mut failed = CheckoutPhase::new();
        failed.apply(CheckoutEvent::InitFailed("Failed to initialize payment".into()));
        assert!(!failed.can_submit());
        assert_eq!(
            failed.error_message(),
            Some("Failed to initialize payment")
        );
    }

    #[test]
    fn test_decline_returns_to_ready_with_message() {
        let mut phase = CheckoutPhase::new();
        phase.apply(CheckoutEvent::SecretReceived("pi_secret_123".into()));
        phase.apply(CheckoutEvent::SubmitStarted);
        assert!(phase.is_submitting());
        assert!(!phase.can_submit());

        phase.apply(CheckoutEvent::Declined("Your card was declined.".into()));
        assert!(phase.can_submit());
        assert_eq!(phase.error_message(), Some("Your card was declined."));
        // Secret survives the decline for resubmission.
        assert_eq!(phase.client_secret(), Some("pi_secret_123"));
    }

    #[test]
    fn test_confirmed_succeeds_exactly_once() {
        let mut phase = CheckoutPhase::new();
        phase.apply(CheckoutEvent::SecretReceived("pi_secret_123".into()));
        phase.apply(CheckoutEvent::SubmitStarted);
        phase.apply(CheckoutEvent::Confirmed);
        assert!(phase.is_succeeded());

        // Further events are dropped.
        phase.apply(CheckoutEvent::SubmitStarted);
        phase.apply(CheckoutEvent::Confirmed);
        assert!(phase.is_succeeded());
    }

    #[test]
    fn test_invalid_events_are_dropped() {
        let mut phase = CheckoutPhase::new();
        phase.apply(CheckoutEvent::Confirmed);
        assert_eq!(phase, CheckoutPhase::Initializing);
        phase.apply(CheckoutEvent::SubmitStarted);
        assert_eq!(phase, CheckoutPhase::Initializing);
    }

    /// Fake widget: declines a scripted number of times, then confirms.
    struct FakeCard {
        declines_left: RefCell<u32>,
    }

    #[async_trait(?Send)]
    impl CardEntry for FakeCard {
        fn is_mounted(&self) -> bool {
            true
        }

        async fn confirm(&self, _client_secret: &str) -> Result<(), PaymentDecline> {
            let mut left = self.declines_left.borrow_mut();
            if *left > 0 {
                *left -= 1;
                Err(PaymentDecline::new("Your card was declined."))
            } else {
                Ok(())
            }
        }
    }

    /// Drive the machine through the card seam the same way the form does.
    async fn submit_once(phase: &mut CheckoutPhase, card: &dyn CardEntry) {
        if !phase.can_submit() || !card.is_mounted() {
            return;
        }
        let secret = phase.client_secret().map(String::from);
        let Some(secret) = secret else { return };
        phase.apply(CheckoutEvent::SubmitStarted);
        match card.confirm(&secret).await {
            Ok(()) => phase.apply(CheckoutEvent::Confirmed),
            Err(decline) => phase.apply(CheckoutEvent::Declined(decline.message)),
        }
    }

    #[tokio::test]
    async fn test_decline_then_success_through_card_seam() {
        let card = FakeCard {
            declines_left: RefCell::new(1),
        };
        let mut phase = CheckoutPhase::new();
        phase.apply(CheckoutEvent::SecretReceived("pi_secret_123".into()));

        submit_once(&mut phase, &card).await;
        assert!(phase.can_submit());
        assert_eq!(phase.error_message(), Some("Your card was declined."));

        submit_once(&mut phase, &card).await;
        assert!(phase.is_succeeded());
    }

    #[tokio::test]
    async fn test_submit_is_noop_before_secret_arrives() {
        let card = FakeCard {
            declines_left: RefCell::new(0),
        };
        let mut phase = CheckoutPhase::new();
        submit_once(&mut phase, &card).await;
        assert_eq!(phase, CheckoutPhase::Initializing);
    }
}
