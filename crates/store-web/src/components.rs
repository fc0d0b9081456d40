//! Chrome Components
//!
//! Visual-flavor pieces of the terminal theme: the window tab bar, the
//! vim-style status bar and the faux command line.

use leptos::prelude::*;

use store_core::{StoreSession, StoreView};

/// Fake terminal window title bar
#[component]
pub fn TabBar() -> impl IntoView {
    view! {
        <div class="tab-bar">
            <span class="tab-title">"NeoVim Store"</span>
            <div class="window-dots">
                <span class="dot dot-red"></span>
                <span class="dot dot-yellow"></span>
                <span class="dot dot-green"></span>
            </div>
        </div>
    }
}

/// Vim-style status bar with the cart item count
#[component]
pub fn StatusBar(session: RwSignal<StoreSession>) -> impl IntoView {
    view! {
        <div class="status-bar">
            <div class="status-left">
                <span>"-- INSERT --"</span>
                <span>"neovim-store.rs"</span>
                <span>"1,1"</span>
            </div>
            <div class="status-right">
                <span>"utf-8"</span>
                <span>"100%"</span>
                <span>{move || format!("{} items", session.with(StoreSession::cart_quantity))}</span>
            </div>
        </div>
    }
}

/// Faux command line tracking the current view
#[component]
pub fn CommandLine(session: RwSignal<StoreSession>) -> impl IntoView {
    let command = move || match session.with(StoreSession::view) {
        StoreView::Product => "browse /store/neokeys-pro",
        StoreView::Cart => "cart show",
        StoreView::Checkout => "checkout --payment-method=stripe",
        StoreView::Complete => "order complete --status=success",
    };

    view! {
        <div class="command-line">
            <span class="prompt">":"</span>
            <span class="command">{command}</span>
            <span class="cursor">"█"</span>
        </div>
    }
}
