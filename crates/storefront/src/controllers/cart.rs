//! Cart collection operations and the cart view controller.
//!
//! The cart is one serialized collection under the `cart` key. Reads
//! tolerate absent or malformed data by treating it as empty; writes
//! replace the whole collection (last write wins across tabs).

use panda_pantry_core::{CartItem, Product};
use panda_pantry_store::{SessionState, StoreHandle, codec, keys};

use crate::state::AppState;

/// Load the cart collection; absent or malformed data is an empty cart.
#[must_use]
pub fn items(tab: &StoreHandle) -> Vec<CartItem> {
    codec::decode_or_default(tab.get(keys::CART).as_deref())
}

/// Sum of quantities over the persisted collection; 0 when the data is
/// absent or malformed.
#[must_use]
pub fn count(tab: &StoreHandle) -> u32 {
    items(tab).iter().map(|item| item.quantity).sum()
}

/// Add one unit of `product` to the cart.
///
/// Merge-on-add: if the product id is already present its quantity is
/// incremented, otherwise a new entry with quantity 1 is appended. The
/// whole collection is persisted back.
pub fn add(tab: &StoreHandle, product: &Product) {
    let mut cart = items(tab);
    if let Some(existing) = cart.iter_mut().find(|item| item.product.id == product.id) {
        existing.quantity += 1;
    } else {
        cart.push(CartItem::one(product.clone()));
    }
    tab.set(keys::CART, codec::encode(&cart));
}

/// The cart view: the persisted collection plus the session banner state.
pub struct CartController {
    tab: StoreHandle,
    session: SessionState,
    items: Vec<CartItem>,
}

impl CartController {
    /// Attach the cart view in a fresh tab.
    #[must_use]
    pub fn attach(app: &AppState) -> Self {
        Self::attach_tab(app.open_tab())
    }

    /// Attach the cart view in an existing tab.
    #[must_use]
    pub fn attach_tab(tab: StoreHandle) -> Self {
        let session = SessionState::read(&tab);
        let items = items(&tab);
        Self {
            tab,
            session,
            items,
        }
    }

    /// The session banner state read at attach.
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// The cart lines read at attach (or the last reload).
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of quantities over the in-memory lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Re-read the persisted collection.
    pub fn reload(&mut self) {
        self.items = items(&self.tab);
    }
}
