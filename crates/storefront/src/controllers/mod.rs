//! View controllers.
//!
//! One controller per storefront view. Each initializes its in-memory
//! state from the store when attached, mutates the store on user actions,
//! and (where the view subscribes) reconciles with other tabs' changes via
//! its synchronizer's `sync()`.

pub mod cart;
mod home;
mod profile;
mod tracking;

pub use cart::CartController;
pub use home::HomeController;
pub use profile::ProfileController;
pub use tracking::{TrackOutcome, TrackingController};
