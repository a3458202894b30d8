//! Panda Pantry Storefront - customer-facing views.
//!
//! Each view of the storefront is a controller that initializes its state
//! from the shared store on attach, mutates the store on user actions, and
//! reconciles with change notifications from other tabs:
//!
//! - [`controllers::HomeController`] - landing page: login, logout, cart
//! - [`controllers::ProfileController`] - registration, login, purchases
//! - [`controllers::TrackingController`] - order tracking against the
//!   remote order document
//! - [`controllers::cart`] - the cart collection operations shared by views
//!
//! The admin panel lives in the separate `panda-pantry-admin` crate; only
//! that crate holds the write-capable remote client.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod controllers;
mod error;
pub mod remote;
pub mod services;
mod state;

pub use config::{ConfigError, StorefrontConfig};
pub use error::{AppError, Result};
pub use panda_pantry_core::View;
pub use state::AppState;
