//! Checkout View
//!
//! `CheckoutPage` gates on the runtime configuration, then renders the
//! payment form around the hosted card input. All lifecycle decisions live
//! in `store_core::CheckoutPhase`; this module only wires signals to it.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use store_core::{CardEntry, CheckoutEvent, CheckoutPhase, Product, StoreSession, format_usd};

use crate::api::{self, StoreConfig};
use crate::stripe::{StripeCardEntry, StripeContext, stripe_js_loaded};

#[component]
pub fn CheckoutPage(session: RwSignal<StoreSession>) -> impl IntoView {
    let config = RwSignal::new(None::<Result<StoreConfig, String>>);

    spawn_local(async move {
        config.set(Some(api::fetch_config().await));
    });

    view! {
        <div class="page checkout-page">
            {move || match config.get() {
                None => view! { <p class="muted">"loading checkout..."</p> }.into_any(),
                Some(Ok(StoreConfig { publishable_key: Some(key), .. })) => {
                    view! { <CheckoutForm session publishable_key=key /> }.into_any()
                }
                Some(Ok(partial)) => view! { <ConfigError session config=partial /> }.into_any(),
                Some(Err(_)) => {
                    let unknown = StoreConfig {
                        publishable_key: None,
                        secret_configured: false,
                    };
                    view! { <ConfigError session config=unknown /> }.into_any()
                }
            }}
        </div>
    }
}

/// Static configuration-error screen listing the missing variables.
#[component]
fn ConfigError(session: RwSignal<StoreSession>, config: StoreConfig) -> impl IntoView {
    let mut missing = Vec::new();
    if config.publishable_key.is_none() {
        missing.push("STRIPE_PUBLISHABLE_KEY");
    }
    if !config.secret_configured {
        missing.push("STRIPE_SECRET_KEY");
    }

    view! {
        <header class="page-header error">
            <div class="breadcrumb">"~/store/checkout/error"</div>
            <h1>"Configuration Error"</h1>
        </header>

        <div class="panel centered">
            <h3>"Stripe Not Configured"</h3>
            <p class="muted">
                "Payment processing is not available. Please configure Stripe environment variables."
            </p>
            <div class="terminal-block">
                <div class="prompt-line error">"$ env check"</div>
                <div>
                    {missing
                        .into_iter()
                        .map(|var| view! { <div>{format!("Missing: {var}")}</div> })
                        .collect_view()}
                    <br />
                    "Please add these environment variables and restart the server."
                </div>
            </div>
        </div>

        <button class="btn full-width" on:click=move |_| session.update(|s| s.back())>
            ":back-to-cart"
        </button>
    }
}

#[component]
fn CheckoutForm(session: RwSignal<StoreSession>, publishable_key: String) -> impl IntoView {
    let product = Product::neokeys_pro();
    let quantity = session.with_untracked(StoreSession::cart_quantity);
    let amount = product.line_total(quantity);
    let amount_label = format_usd(amount);
    let pay_label = amount_label.clone();
    let summary = format!("{} × {}", product.name, quantity);

    let phase = RwSignal::new(CheckoutPhase::new());
    let card = StoredValue::new_local(None::<Rc<StripeCardEntry>>);

    // Request the client secret as soon as the form mounts. Overlapping
    // requests are not de-duplicated: the last response to resolve wins.
    spawn_local(async move {
        match api::create_payment_intent(amount).await {
            Ok(secret) => phase.update(|p| p.apply(CheckoutEvent::SecretReceived(secret))),
            Err(message) => phase.update(|p| p.apply(CheckoutEvent::InitFailed(message))),
        }
    });

    // Mount the hosted card input once its host node exists.
    let stripe = expect_context::<StripeContext>();
    let card_host = NodeRef::<leptos::html::Div>::new();
    Effect::new(move |_| {
        if card_host.get().is_none() || !stripe_js_loaded() {
            return;
        }
        if card.with_value(Option::is_some) {
            return;
        }
        let handle = stripe.get_or_init(&publishable_key);
        match StripeCardEntry::mount(handle, "#card-element") {
            Ok(entry) => card.set_value(Some(Rc::new(entry))),
            Err(e) => phase.update(|p| p.apply(CheckoutEvent::InitFailed(e.message))),
        }
    });

    let submit = move |_| {
        // Guards: Stripe.js loaded, widget mounted, secret present and no
        // confirmation already in flight. Anything else is a no-op.
        if !stripe_js_loaded() || !phase.with(CheckoutPhase::can_submit) {
            return;
        }
        let Some(entry) = card.with_value(Clone::clone) else {
            return;
        };
        if !entry.is_mounted() {
            return;
        }
        let Some(secret) = phase.with(|p| p.client_secret().map(String::from)) else {
            return;
        };

        phase.update(|p| p.apply(CheckoutEvent::SubmitStarted));
        spawn_local(async move {
            match entry.confirm(&secret).await {
                Ok(()) => {
                    phase.update(|p| p.apply(CheckoutEvent::Confirmed));
                    session.update(StoreSession::complete_order);
                }
                Err(decline) => {
                    phase.update(|p| p.apply(CheckoutEvent::Declined(decline.message)));
                }
            }
        });
    };

    view! {
        <header class="page-header">
            <div class="breadcrumb">"~/store/checkout/payment"</div>
            <h1>"Payment"</h1>
            <p class="muted">"Secure payment powered by Stripe"</p>
        </header>

        <div class="panel">
            <h3>"Order Summary"</h3>
            <div class="terminal-block">
                <div class="summary-row">
                    <span>{summary}</span>
                    <span class="total">{amount_label.clone()}</span>
                </div>
                <div class="summary-row total-row">
                    <span>"Total:"</span>
                    <span class="total">{amount_label}</span>
                </div>
            </div>

            <label>"Card Details:"</label>
            <div id="card-element" class="card-element" node_ref=card_host></div>
            <p class="hint">"Enter your card number, expiry date, and CVC"</p>

            <Show when=move || phase.with(|p| p.error_message().is_some())>
                <div class="error-panel">
                    {move || {
                        phase.with(|p| {
                            p.error_message()
                                .map(|message| format!("Error: {message}"))
                                .unwrap_or_default()
                        })
                    }}
                </div>
            </Show>

            <div class="actions">
                <button
                    class="btn"
                    disabled=move || phase.with(CheckoutPhase::is_submitting)
                    on:click=move |_| session.update(|s| s.back())
                >
                    ":back"
                </button>
                <button
                    class="btn btn-primary grow"
                    disabled=move || !phase.with(CheckoutPhase::can_submit)
                    on:click=submit
                >
                    {move || {
                        if phase.with(CheckoutPhase::is_submitting) {
                            ":processing...".to_string()
                        } else {
                            format!(":pay {pay_label}")
                        }
                    }}
                </button>
            </div>
        </div>

        <p class="fine-print">
            "Payments are processed securely by Stripe. Your card information never touches our servers."
        </p>
    }
}
