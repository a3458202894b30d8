//! Panda Pantry Core - Shared types library.
//!
//! This crate provides common types used across all Panda Pantry components:
//! - `store` - Shared key-value store with cross-tab change notifications
//! - `storefront` - Customer-facing view controllers
//! - `admin` - Order and user administration panel
//! - `cli` - Command-line driver for the storefront flows
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and tracking
//!   numbers, plus the record types shared by the store and the remote bucket
//! - [`auth`] - The injected credential-check capability
//! - [`forms`] - Registration/login form validation
//! - [`navigation`] - The named views reachable by path

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod forms;
pub mod navigation;
pub mod types;

pub use navigation::View;
pub use types::*;
