//! Product Catalog
//!
//! The store sells exactly one product, defined at startup. All monetary
//! values use `rust_decimal::Decimal` - never use f64 for money!

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The product on sale
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name
    pub name: String,

    /// One-line description
    pub description: String,

    /// Unit price in USD, major units
    pub unit_price: Decimal,

    /// Image path, served from the static bundle
    pub image: String,

    /// Ordered specification lines
    pub specs: Vec<String>,
}

impl Product {
    /// The single catalog entry.
    pub fn neokeys_pro() -> Self {
        Self {
            name: "NeoKeys Pro".into(),
            description: "The ultimate mechanical keyboard for vim enthusiasts".into(),
            unit_price: dec!(79.99),
            image: "/placeholder.svg".into(),
            specs: vec![
                "Cherry MX Blue switches".into(),
                "RGB backlighting with vim colorschemes".into(),
                "Programmable macro keys".into(),
                "USB-C connectivity".into(),
                "Aluminum frame construction".into(),
            ],
        }
    }

    /// Price for `quantity` units, rounded to cents.
    pub fn line_total(&self, quantity: u32) -> Decimal {
        (self.unit_price * Decimal::from(quantity)).round_dp(2)
    }
}

/// Format a USD amount with two decimal places, e.g. `$79.99`.
pub fn format_usd(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let product = Product::neokeys_pro();
        assert_eq!(product.line_total(1), dec!(79.99));
        assert_eq!(product.line_total(3), dec!(239.97));
    }

    #[test]
    fn test_line_total_is_rounded_to_cents() {
        let product = Product {
            unit_price: dec!(0.333),
            ..Product::neokeys_pro()
        };
        assert_eq!(product.line_total(3), dec!(1.00));
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(dec!(79.99)), "$79.99");
        assert_eq!(format_usd(dec!(80)), "$80.00");
    }
}
