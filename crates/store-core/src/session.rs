//! Store Navigation State
//!
//! The view-navigation state machine for the store shell, modeled as an
//! explicit enum with transition methods instead of loose view/flag state.
//! Transitions not listed for the current view are no-ops.
//!
//! ```text
//! Product --add_to_cart--> Cart --begin_checkout--> Checkout
//!    ^                      ^  \                      |   ^
//!    |                      |   `------back-----------'   |
//!    |                      `--back                complete_order
//!    `--------------return_to_store-------------- Complete
//! ```

use serde::{Deserialize, Serialize};

/// Current view of the store shell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreView {
    Product,
    Cart,
    Checkout,
    Complete,
}

/// Quantity selector on the product view.
///
/// Independent of the cart: it keeps its value across view changes and
/// never drops below 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuantitySelector(u32);

impl QuantitySelector {
    pub fn new() -> Self {
        Self(1)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        if self.0 > 1 {
            self.0 -= 1;
        }
    }
}

impl Default for QuantitySelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigation state and cart quantity for one page session.
///
/// Lifetime is the page load; nothing here is persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSession {
    view: StoreView,
    cart_quantity: u32,
}

impl StoreSession {
    pub fn new() -> Self {
        Self {
            view: StoreView::Product,
            cart_quantity: 0,
        }
    }

    pub fn view(&self) -> StoreView {
        self.view
    }

    pub fn cart_quantity(&self) -> u32 {
        self.cart_quantity
    }

    /// Product -> Cart. The cart quantity becomes exactly the selector
    /// value; repeated adds overwrite rather than accumulate.
    pub fn add_to_cart(&mut self, quantity: u32) {
        if self.view == StoreView::Product {
            self.cart_quantity = quantity.max(1);
            self.view = StoreView::Cart;
        }
    }

    pub fn increment_cart(&mut self) {
        if self.view == StoreView::Cart {
            self.cart_quantity = self.cart_quantity.saturating_add(1);
        }
    }

    /// Once items exist the cart never drops below one unit.
    pub fn decrement_cart(&mut self) {
        if self.view == StoreView::Cart && self.cart_quantity > 1 {
            self.cart_quantity -= 1;
        }
    }

    /// Cart -> Product, Checkout -> Cart. A completed order has no back
    /// edge; `return_to_store` is the only way out.
    pub fn back(&mut self) {
        self.view = match self.view {
            StoreView::Cart => StoreView::Product,
            StoreView::Checkout => StoreView::Cart,
            other => other,
        };
    }

    pub fn begin_checkout(&mut self) {
        if self.view == StoreView::Cart {
            self.view = StoreView::Checkout;
        }
    }

    /// Payment success callback; only a pending checkout can complete.
    pub fn complete_order(&mut self) {
        if self.view == StoreView::Checkout {
            self.view = StoreView::Complete;
        }
    }

    /// Complete -> Product with an empty cart.
    pub fn return_to_store(&mut self) {
        if self.view == StoreView::Complete {
            self.view = StoreView::Product;
            self.cart_quantity = 0;
        }
    }
}

impl Default for StoreSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_never_below_one() {
        let mut selector = QuantitySelector::new();
        assert_eq!(selector.get(), 1);
        selector.decrement();
        assert_eq!(selector.get(), 1);
        selector.increment();
        selector.increment();
        assert_eq!(selector.get(), 3);
        selector.decrement();
        assert_eq!(selector.get(), 2);
    }

    #[test]
    fn test_add_to_cart_sets_exact_quantity() {
        let mut session = StoreSession::new();
        session.add_to_cart(3);
        assert_eq!(session.view(), StoreView::Cart);
        assert_eq!(session.cart_quantity(), 3);

        // A second add with a different selector value overwrites.
        session.back();
        session.add_to_cart(2);
        assert_eq!(session.cart_quantity(), 2);
    }

    #[test]
    fn test_cart_decrement_clamps_at_one() {
        let mut session = StoreSession::new();
        session.add_to_cart(2);
        session.decrement_cart();
        assert_eq!(session.cart_quantity(), 1);
        session.decrement_cart();
        assert_eq!(session.cart_quantity(), 1);
    }

    #[test]
    fn test_checkout_round_trip() {
        let mut session = StoreSession::new();
        session.add_to_cart(1);
        session.begin_checkout();
        assert_eq!(session.view(), StoreView::Checkout);
        session.back();
        assert_eq!(session.view(), StoreView::Cart);
    }

    #[test]
    fn test_complete_order_only_from_checkout() {
        let mut session = StoreSession::new();
        session.complete_order();
        assert_eq!(session.view(), StoreView::Product);

        session.add_to_cart(1);
        session.begin_checkout();
        session.complete_order();
        assert_eq!(session.view(), StoreView::Complete);

        // No back edge out of a completed order.
        session.back();
        assert_eq!(session.view(), StoreView::Complete);
    }

    #[test]
    fn test_return_to_store_resets_cart() {
        let mut session = StoreSession::new();
        session.add_to_cart(4);
        session.begin_checkout();
        session.complete_order();
        session.return_to_store();
        assert_eq!(session.view(), StoreView::Product);
        assert_eq!(session.cart_quantity(), 0);

        // Next add from quantity 1 yields quantity 1.
        session.add_to_cart(1);
        assert_eq!(session.cart_quantity(), 1);
    }

    #[test]
    fn test_unlisted_transitions_are_noops() {
        let mut session = StoreSession::new();
        session.begin_checkout();
        assert_eq!(session.view(), StoreView::Product);
        session.increment_cart();
        assert_eq!(session.cart_quantity(), 0);
        session.return_to_store();
        assert_eq!(session.view(), StoreView::Product);
    }
}
