//! Product and cart item records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product as listed on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier; cart entries merge on this.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Optional short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One line of the cart, persisted under the `cart` store key.
///
/// The collection is keyed by product id: adding a product that is already
/// present increments its quantity instead of appending a second entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The product this line holds.
    #[serde(flatten)]
    pub product: Product,
    /// Units of the product; at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Create a cart line for one unit of `product`.
    #[must_use]
    pub const fn one(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }
}
