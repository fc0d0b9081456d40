//! Stripe.js Card Element Interop
//!
//! High-level wrapper over the raw bindings: mount the hosted card input,
//! confirm the payment. `StripeCardEntry` adapts the handles to the
//! `CardEntry` seam so the checkout form never touches a JsValue.

use async_trait::async_trait;
use leptos::prelude::{LocalStorage, SetValue, StoredValue, WithValue};
use serde::Deserialize;
use serde_json::json;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Object, Reflect};

use store_core::{CardEntry, PaymentDecline};

use crate::bindings::{JsCardElement, JsStripe, new_stripe};

/// Whether the Stripe.js script has finished loading.
pub fn stripe_js_loaded() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::get(&window, &"Stripe".into()).ok())
        .is_some_and(|value| value.is_function())
}

/// Process-lifetime Stripe.js handle.
///
/// Owned by the app root and passed down through Leptos context; created
/// lazily on the first checkout entry and reused across form mounts.
#[derive(Clone, Copy)]
pub struct StripeContext(StoredValue<Option<JsStripe>, LocalStorage>);

impl StripeContext {
    pub fn new() -> Self {
        Self(StoredValue::new_local(None))
    }

    /// Get the shared handle, creating it on first use.
    pub fn get_or_init(&self, publishable_key: &str) -> JsStripe {
        if let Some(stripe) = self.0.with_value(Clone::clone) {
            return stripe;
        }
        let stripe = new_stripe(publishable_key);
        self.0.set_value(Some(stripe.clone()));
        stripe
    }
}

impl Default for StripeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Styling for the hosted card input: monospace, theme colors, no postal
/// code field.
fn card_element_options() -> JsValue {
    to_value(&json!({
        "style": {
            "base": {
                "fontSize": "18px",
                "color": "#ffffff",
                "backgroundColor": "transparent",
                "fontFamily": "ui-monospace, SFMono-Regular, 'SF Mono', monospace",
                "lineHeight": "1.5",
                "::placeholder": { "color": "#9ca3af" },
            },
            "invalid": { "color": "#ef4444", "iconColor": "#ef4444" },
            "complete": { "color": "#10b981", "iconColor": "#10b981" },
        },
        "hidePostalCode": true,
    }))
    .unwrap_or(JsValue::UNDEFINED)
}

/// Structured representation of a Stripe.js error.
#[derive(Debug, Deserialize)]
pub struct StripeJsError {
    pub message: String,
}

/// Convert any JS exception or Promise rejection into `StripeJsError`.
fn js_error(value: JsValue) -> StripeJsError {
    from_value::<StripeJsError>(value.clone()).unwrap_or_else(|_| StripeJsError {
        message: value.as_string().unwrap_or_else(|| "Payment failed".into()),
    })
}

/// Mounted card widget plus the Stripe handle that created it.
///
/// Card data lives inside the provider's iframe; this type only ever holds
/// opaque handles.
pub struct StripeCardEntry {
    stripe: JsStripe,
    card: JsCardElement,
}

impl StripeCardEntry {
    /// Build a card element from the shared Stripe handle and mount it onto
    /// the node matching `selector`.
    pub fn mount(stripe: JsStripe, selector: &str) -> Result<Self, StripeJsError> {
        let elements = stripe.elements().map_err(js_error)?;
        let card = elements
            .create_element("card", card_element_options())
            .map_err(js_error)?;
        card.mount(selector).map_err(js_error)?;
        Ok(Self { stripe, card })
    }
}

impl Drop for StripeCardEntry {
    fn drop(&mut self) {
        let _ = self.card.unmount();
    }
}

#[async_trait(?Send)]
impl CardEntry for StripeCardEntry {
    fn is_mounted(&self) -> bool {
        true
    }

    async fn confirm(&self, client_secret: &str) -> Result<(), PaymentDecline> {
        // confirmCardPayment(secret, { payment_method: { card } })
        let payment_method = Object::new();
        Reflect::set(&payment_method, &"card".into(), self.card.as_ref())
            .map_err(|_| PaymentDecline::new("Card element not found"))?;
        let data = Object::new();
        Reflect::set(&data, &"payment_method".into(), &payment_method)
            .map_err(|_| PaymentDecline::new("Card element not found"))?;

        let promise = self
            .stripe
            .confirm_card_payment(client_secret, data.into())
            .map_err(|value| PaymentDecline::new(js_error(value).message))?;

        let result = JsFuture::from(promise)
            .await
            .map_err(|value| PaymentDecline::new(js_error(value).message))?;

        // The promise resolves to `{ error }` on decline and
        // `{ paymentIntent }` on success.
        match Reflect::get(&result, &"error".into()) {
            Ok(error) if !error.is_undefined() && !error.is_null() => {
                let message = Reflect::get(&error, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
                    .unwrap_or_else(|| "Payment failed".into());
                Err(PaymentDecline::new(message))
            }
            _ => Ok(()),
        }
    }
}
