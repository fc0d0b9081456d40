//! Cart View

use leptos::prelude::*;

use store_core::{Product, StoreSession, format_usd};

#[component]
pub fn CartPage(session: RwSignal<StoreSession>) -> impl IntoView {
    let product = Product::neokeys_pro();
    let each = format_usd(product.unit_price);
    let total = {
        let product = product.clone();
        move || session.with(|s| format_usd(product.line_total(s.cart_quantity())))
    };

    view! {
        <div class="page cart-page">
            <header class="page-header">
                <div class="breadcrumb">"~/store/cart"</div>
                <h1>"Shopping Cart"</h1>
            </header>

            <div class="panel cart-line">
                <div class="cart-item">
                    <img src=product.image.clone() alt=product.name.clone() />
                    <div>
                        <h3>{product.name.clone()}</h3>
                        <p class="muted">{format!("{each} each")}</p>
                    </div>
                </div>
                <div class="cart-controls">
                    <div class="quantity-controls">
                        <button on:click=move |_| session.update(|s| s.decrement_cart())>"-"</button>
                        <span class="quantity">
                            {move || session.with(StoreSession::cart_quantity)}
                        </span>
                        <button on:click=move |_| session.update(|s| s.increment_cart())>"+"</button>
                    </div>
                    <span class="line-total">{total.clone()}</span>
                </div>
            </div>

            <div class="panel total-row">
                <span>"Total:"</span>
                <span class="total">{total}</span>
            </div>

            <div class="actions">
                <button class="btn" on:click=move |_| session.update(|s| s.back())>
                    ":back"
                </button>
                <button
                    class="btn btn-primary grow"
                    on:click=move |_| session.update(|s| s.begin_checkout())
                >
                    ":checkout"
                </button>
            </div>
        </div>
    }
}
