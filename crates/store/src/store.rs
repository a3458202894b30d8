//! The shared key-value store and its change-notification channel.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::error::StoreError;

/// Buffered notifications per subscription before lag sets in.
const CHANNEL_CAPACITY: usize = 64;

/// Identifier of a [`StoreHandle`] ("tab").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleId(Uuid);

impl HandleId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for HandleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a change notification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// A write performed through the identified handle. Not delivered to
    /// that handle's own subscriptions.
    Handle(HandleId),
    /// A synthetic notification published via [`StoreHandle::announce`].
    /// Delivered to every subscription, including the announcing handle's.
    Synthetic,
}

/// A change to one store key, as delivered to subscriptions.
#[derive(Debug, Clone)]
pub struct StoreChange {
    /// The key that changed.
    pub key: String,
    /// The value after the change; `None` when the key was removed.
    pub new_value: Option<String>,
    /// Who caused the change.
    pub origin: ChangeOrigin,
}

/// The process-wide store shared by every open view.
///
/// Cheaply cloneable; all clones and every [`StoreHandle`] see the same
/// data. With [`SharedStore::open`] the contents also survive process
/// restarts via a JSON backing file (write-through on every mutation).
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    values: RwLock<HashMap<String, String>>,
    changes: broadcast::Sender<StoreChange>,
    file: Option<PathBuf>,
}

impl SharedStore {
    /// Create a store whose contents live only as long as the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_values(HashMap::new(), None)
    }

    /// Open a store backed by a JSON file at `path`.
    ///
    /// A missing file starts the store empty; a malformed file is discarded
    /// with a warning (stored data must never produce a fatal error). Every
    /// later mutation writes the whole map back through to the file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReadFile`] if the file exists but cannot be
    /// read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "discarding malformed store file"
                    );
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(source) => return Err(StoreError::ReadFile { path, source }),
        };
        Ok(Self::with_values(values, Some(path)))
    }

    fn with_values(values: HashMap<String, String>, file: Option<PathBuf>) -> Self {
        let (changes, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(StoreInner {
                values: RwLock::new(values),
                changes,
                file,
            }),
        }
    }

    /// Open a new handle on the store - one per "tab".
    ///
    /// Each handle has its own identity for the same-document exclusion
    /// rule: a handle's subscriptions never see that handle's own writes.
    #[must_use]
    pub fn handle(&self) -> StoreHandle {
        StoreHandle {
            inner: Arc::clone(&self.inner),
            id: HandleId::generate(),
        }
    }
}

impl StoreInner {
    fn publish(&self, change: StoreChange) {
        // No live subscriptions is fine; notifications are best-effort.
        let _ = self.changes.send(change);
    }

    /// Write the whole map through to the backing file, if any.
    ///
    /// Called with the write lock held so the file always reflects some
    /// consistent map state. Failures are logged and dropped; the in-memory
    /// state stays authoritative.
    fn persist(&self, values: &HashMap<String, String>) {
        let Some(path) = &self.file else {
            return;
        };
        let json = match serde_json::to_string_pretty(values) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(error = %err, "failed to encode store file");
                return;
            }
        };
        if let Err(err) = std::fs::write(path, json) {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "failed to write store file"
            );
        }
    }
}

/// One tab's view of the [`SharedStore`].
///
/// Clones share the same identity; open a fresh handle via
/// [`SharedStore::handle`] to model a separate tab.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<StoreInner>,
    id: HandleId,
}

impl StoreHandle {
    /// This handle's identity.
    #[must_use]
    pub const fn id(&self) -> HandleId {
        self.id
    }

    /// Read a key's value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner
            .values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Write a key, notifying every other handle's subscriptions.
    pub fn set(&self, key: &str, value: impl Into<String>) {
        let value = value.into();
        {
            let mut values = self
                .inner
                .values
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            values.insert(key.to_owned(), value.clone());
            self.inner.persist(&values);
        }
        self.inner.publish(StoreChange {
            key: key.to_owned(),
            new_value: Some(value),
            origin: ChangeOrigin::Handle(self.id),
        });
    }

    /// Remove a key, notifying every other handle's subscriptions.
    pub fn remove(&self, key: &str) {
        {
            let mut values = self
                .inner
                .values
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            values.remove(key);
            self.inner.persist(&values);
        }
        self.inner.publish(StoreChange {
            key: key.to_owned(),
            new_value: None,
            origin: ChangeOrigin::Handle(self.id),
        });
    }

    /// Publish a synthetic change notification for `key` carrying its
    /// current value.
    ///
    /// The platform never delivers a handle's own writes back to it, so a
    /// tab that wants its own subscribers to reconcile after a write calls
    /// this immediately afterwards.
    pub fn announce(&self, key: &str) {
        self.inner.publish(StoreChange {
            key: key.to_owned(),
            new_value: self.get(key),
            origin: ChangeOrigin::Synthetic,
        });
    }

    /// Subscribe to change notifications.
    ///
    /// The subscription only yields changes made by *other* handles (plus
    /// synthetic announcements). Dropping it tears the subscription down;
    /// holding one past a view's lifetime would stack handlers on later
    /// notifications.
    #[must_use]
    pub fn subscribe(&self) -> StoreSubscription {
        StoreSubscription {
            rx: self.inner.changes.subscribe(),
            own: self.id,
        }
    }
}

/// A scoped subscription to store change notifications.
pub struct StoreSubscription {
    rx: broadcast::Receiver<StoreChange>,
    own: HandleId,
}

impl StoreSubscription {
    /// Take the next pending notification, if any, without blocking.
    pub fn try_next(&mut self) -> Option<StoreChange> {
        loop {
            match self.rx.try_recv() {
                Ok(change) => {
                    if change.origin == ChangeOrigin::Handle(self.own) {
                        continue;
                    }
                    return Some(change);
                }
                Err(broadcast::error::TryRecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "store subscription lagged; notifications lost");
                }
                Err(
                    broadcast::error::TryRecvError::Empty
                    | broadcast::error::TryRecvError::Closed,
                ) => return None,
            }
        }
    }

    /// Wait for the next notification. Returns `None` once the store is
    /// gone.
    pub async fn recv(&mut self) -> Option<StoreChange> {
        loop {
            match self.rx.recv().await {
                Ok(change) => {
                    if change.origin == ChangeOrigin::Handle(self.own) {
                        continue;
                    }
                    return Some(change);
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "store subscription lagged; notifications lost");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
