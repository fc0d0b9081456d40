//! Order Complete View

use leptos::prelude::*;
use uuid::Uuid;

use store_core::StoreSession;

/// Display-only order number derived from a fresh UUID.
fn order_number() -> String {
    let id = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("NK-{}", &id[..9])
}

#[component]
pub fn CompletePage(session: RwSignal<StoreSession>) -> impl IntoView {
    let order = order_number();

    view! {
        <div class="page complete-page">
            <header class="page-header">
                <div class="breadcrumb">"~/store/checkout/complete"</div>
                <h1>"Order Complete!"</h1>
            </header>

            <div class="panel centered">
                <h3>"Payment Successful!"</h3>
                <p class="muted">"Your NeoKeys Pro is being prepared for shipment."</p>
                <div class="terminal-block">
                    <div class="prompt-line">"$ order status"</div>
                    <div>
                        {format!("Order #{order}")}
                        <br />
                        "Status: Processing"
                        <br />
                        "Estimated delivery: 3-5 business days"
                        <br />
                        "Payment: Completed via Stripe"
                    </div>
                </div>
            </div>

            <button
                class="btn full-width"
                on:click=move |_| session.update(|s| s.return_to_store())
            >
                ":return-to-store"
            </button>
        </div>
    }
}
