//! Cart commands.

use std::str::FromStr;

use rust_decimal::Decimal;

use panda_pantry_core::{Product, ProductId};
use panda_pantry_storefront::controllers::{CartController, HomeController};

use super::OpenError;

/// Errors that can occur during cart commands.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// Application state could not be opened.
    #[error(transparent)]
    Open(#[from] OpenError),

    /// The price argument is not a valid decimal.
    #[error("invalid price: {0}")]
    InvalidPrice(String),
}

/// Add one unit of a product to the cart.
#[allow(clippy::print_stdout)]
pub fn add(id: i64, name: &str, price: &str) -> Result<(), CartError> {
    let price =
        Decimal::from_str(price).map_err(|_| CartError::InvalidPrice(price.to_owned()))?;

    let app = super::open_app()?;
    let mut home = HomeController::attach(&app);

    home.add_to_cart(&Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price,
        description: None,
        image: None,
    });

    println!("Added {name}. Cart now holds {} item(s)", home.cart_count());
    Ok(())
}

/// Show the cart contents and count.
#[allow(clippy::print_stdout)]
pub fn show() -> Result<(), CartError> {
    let app = super::open_app()?;
    let cart = CartController::attach(&app);

    if cart.items().is_empty() {
        println!("Cart is empty");
        return Ok(());
    }

    for item in cart.items() {
        println!(
            "{:>4} x {} ({}) @ {}",
            item.quantity, item.product.name, item.product.id, item.product.price
        );
    }
    println!("total items: {}", cart.count());
    Ok(())
}
