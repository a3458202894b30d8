//! Panda Pantry Store - shared key-value persistence with change notifications.
//!
//! This crate models the storefront's only durable state: a key-value store
//! shared by every open view of the application. A [`SharedStore`] hands out
//! [`StoreHandle`]s - one per "tab" - and every write through a handle is
//! published as a [`StoreChange`] to the other handles' subscriptions. The
//! writing handle does not observe its own writes; a tab that needs to react
//! to a write it made itself calls [`StoreHandle::announce`] to publish a
//! synthetic change that reaches every subscriber.
//!
//! # Modules
//!
//! - [`keys`] - the persisted key names
//! - [`codec`] - encode/decode helpers that degrade to defaults instead of
//!   failing
//! - [`session`] - session-state derivation and the cross-tab synchronizer
//!
//! # Consistency model
//!
//! Notifications are best-effort: they reach subscriptions that exist at the
//! time of the write, and a slow subscriber that falls behind loses the
//! oldest notifications (reported via a warning, then skipped). Writes to a
//! whole serialized collection are last-write-wins across handles; nothing
//! here provides read-modify-write atomicity.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod codec;
mod error;
pub mod keys;
pub mod session;
mod store;

pub use error::StoreError;
pub use session::{SessionState, SessionSynchronizer, SyncPolicy};
pub use store::{ChangeOrigin, HandleId, SharedStore, StoreChange, StoreHandle, StoreSubscription};
