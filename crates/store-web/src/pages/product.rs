//! Product View

use leptos::prelude::*;

use store_core::{Product, QuantitySelector, StoreSession, format_usd};

#[component]
pub fn ProductPage(
    session: RwSignal<StoreSession>,
    selector: RwSignal<QuantitySelector>,
) -> impl IntoView {
    let product = Product::neokeys_pro();
    let price = format_usd(product.unit_price);

    let add_to_cart = move |_| {
        let quantity = selector.with(|s| s.get());
        session.update(|s| s.add_to_cart(quantity));
    };

    view! {
        <div class="page product-page">
            <header class="page-header">
                <div class="breadcrumb">"~/store/products"</div>
                <h1>{product.name.clone()}</h1>
                <p class="subtitle">{product.description.clone()}</p>
            </header>

            <div class="product-grid">
                <div class="product-image">
                    <img src=product.image.clone() alt=product.name.clone() />
                    <div class="image-caption">
                        <span class="line-no">"1"</span>
                        " │ product_image.jpg"
                    </div>
                </div>

                <div class="product-details">
                    <div class="panel">
                        <div class="price-row">
                            <span class="price">{price}</span>
                            <span class="badge">"In Stock"</span>
                        </div>

                        <label>"Quantity:"</label>
                        <div class="quantity-controls">
                            <button on:click=move |_| selector.update(|s| s.decrement())>"-"</button>
                            <span class="quantity">{move || selector.with(|s| s.get())}</span>
                            <button on:click=move |_| selector.update(|s| s.increment())>"+"</button>
                        </div>

                        <button class="btn btn-primary" on:click=add_to_cart>
                            ":add-to-cart"
                        </button>
                    </div>

                    <div class="panel">
                        <h3>"Specifications"</h3>
                        <div class="specs">
                            {product
                                .specs
                                .iter()
                                .enumerate()
                                .map(|(index, spec)| view! {
                                    <div class="spec-line">
                                        <span class="line-no">{index + 1}</span>
                                        <span class="gutter">"│"</span>
                                        <span class="spec">{spec.clone()}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
