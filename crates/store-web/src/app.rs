//! Main App Component

use leptos::prelude::*;

use store_core::{QuantitySelector, StoreSession, StoreView};

use crate::components::{CommandLine, StatusBar, TabBar};
use crate::pages::{CartPage, CheckoutPage, CompletePage, ProductPage};
use crate::stripe::StripeContext;

/// Root store-shell component: owns the navigation state machine, the
/// product-view quantity selector and the shared Stripe.js handle, and
/// composes the terminal chrome.
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(StoreSession::new());
    let selector = RwSignal::new(QuantitySelector::new());
    provide_context(StripeContext::new());

    view! {
        <div class="store">
            <TabBar />
            <div class="view">
                {move || match session.with(StoreSession::view) {
                    StoreView::Product => view! { <ProductPage session selector /> }.into_any(),
                    StoreView::Cart => view! { <CartPage session /> }.into_any(),
                    StoreView::Checkout => view! { <CheckoutPage session /> }.into_any(),
                    StoreView::Complete => view! { <CompletePage session /> }.into_any(),
                }}
            </div>
            <StatusBar session />
            <CommandLine session />
        </div>
    }
}
