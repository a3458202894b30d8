//! Session state derivation and cross-tab synchronization.

use panda_pantry_core::UserRecord;

use crate::store::{StoreChange, StoreHandle, StoreSubscription};
use crate::{codec, keys};

/// The session state a view derives from the store at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    /// Raw value of the session flag (`sesionActiva == "true"`).
    pub active: bool,
    /// Display name of the logged-in user; `Some` only when a user record
    /// is present *and* the session flag is set.
    pub username: Option<String>,
    /// Whether an admin session is present. Tracked independently of
    /// `active`; admin login does not set the regular session flag.
    pub is_admin: bool,
}

impl SessionState {
    /// Derive session state from the store, exactly as every view does on
    /// load.
    #[must_use]
    pub fn read(handle: &StoreHandle) -> Self {
        let active = handle.get(keys::SESSION_ACTIVE).as_deref() == Some("true");
        let user: Option<UserRecord> = codec::decode_opt(handle.get(keys::USER_DATA).as_deref());
        let is_admin = handle.get(keys::IS_ADMIN_LOGGED_IN).as_deref() == Some("true");

        let username = if active {
            user.map(|u| u.full_name)
        } else {
            None
        };

        Self {
            active,
            username,
            is_admin,
        }
    }

    /// Whether a regular user is logged in from this view's perspective.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    /// Eagerly log this view out: clear the username and the session flag
    /// without consulting the store. The admin flag is left alone.
    pub fn clear(&mut self) {
        self.active = false;
        self.username = None;
    }
}

/// How a view reacts to change notifications for session keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPolicy {
    /// React only to the session flag going false/absent, by eagerly
    /// clearing the view's session state. Used by views that only need to
    /// follow logouts.
    LogoutOnly,
    /// Additionally re-derive the full [`SessionState`] from the store
    /// whenever the session flag or the user record changes.
    Resync,
}

/// Subscribes to store change notifications and reconciles a view's
/// [`SessionState`] with them.
///
/// Create one when a view becomes active and drop it when the view goes
/// away; the subscription lives exactly as long as the synchronizer.
pub struct SessionSynchronizer {
    handle: StoreHandle,
    subscription: StoreSubscription,
    policy: SyncPolicy,
}

impl SessionSynchronizer {
    /// Subscribe `handle` to session-key changes under `policy`.
    #[must_use]
    pub fn new(handle: &StoreHandle, policy: SyncPolicy) -> Self {
        Self {
            handle: handle.clone(),
            subscription: handle.subscribe(),
            policy,
        }
    }

    /// Drain pending notifications and apply them to `state`.
    ///
    /// Returns whether `state` changed.
    pub fn poll(&mut self, state: &mut SessionState) -> bool {
        let mut changed = false;
        while let Some(change) = self.subscription.try_next() {
            changed |= self.apply(&change, state);
        }
        changed
    }

    fn apply(&self, change: &StoreChange, state: &mut SessionState) -> bool {
        match change.key.as_str() {
            // A false or absent session flag always wins over whatever the
            // other keys say: log this view out without re-reading the
            // store, so stale user data cannot resurrect the session.
            keys::SESSION_ACTIVE if change.new_value.as_deref() != Some("true") => {
                let was_logged_in = state.is_logged_in() || state.active;
                state.clear();
                was_logged_in
            }
            keys::SESSION_ACTIVE | keys::USER_DATA if self.policy == SyncPolicy::Resync => {
                let next = SessionState::read(&self.handle);
                let changed = next != *state;
                *state = next;
                changed
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use panda_pantry_core::{Email, Role, UserRecord};

    use crate::SharedStore;

    use super::*;

    fn sample_user() -> UserRecord {
        UserRecord {
            full_name: "Ana Reyes".to_owned(),
            username: "anar".to_owned(),
            email: Email::parse("ana@example.com").unwrap(),
            password: "secret1".to_owned(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 14).unwrap(),
            role: Role::Customer,
            address: None,
        }
    }

    fn store_with_user(active: bool) -> SharedStore {
        let store = SharedStore::in_memory();
        let tab = store.handle();
        tab.set(keys::USER_DATA, codec::encode(&sample_user()));
        tab.set(keys::SESSION_ACTIVE, if active { "true" } else { "false" });
        store
    }

    #[test]
    fn test_read_empty_store() {
        let store = SharedStore::in_memory();
        let state = SessionState::read(&store.handle());
        assert_eq!(state, SessionState::default());
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_read_logged_in() {
        let store = store_with_user(true);
        let state = SessionState::read(&store.handle());
        assert!(state.active);
        assert_eq!(state.username.as_deref(), Some("Ana Reyes"));
        assert!(!state.is_admin);
    }

    #[test]
    fn test_read_inactive_session_hides_user() {
        let store = store_with_user(false);
        let state = SessionState::read(&store.handle());
        assert!(!state.active);
        assert_eq!(state.username, None);
    }

    #[test]
    fn test_read_flag_without_user_record() {
        let store = SharedStore::in_memory();
        store.handle().set(keys::SESSION_ACTIVE, "true");
        let state = SessionState::read(&store.handle());
        assert!(state.active);
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_admin_flag_is_independent() {
        let store = SharedStore::in_memory();
        store.handle().set(keys::IS_ADMIN_LOGGED_IN, "true");
        let state = SessionState::read(&store.handle());
        assert!(state.is_admin);
        assert!(!state.active);
    }

    #[test]
    fn test_cross_tab_logout_clears_state() {
        let store = store_with_user(true);
        let tab_a = store.handle();
        let tab_b = store.handle();

        let mut state_b = SessionState::read(&tab_b);
        let mut sync_b = SessionSynchronizer::new(&tab_b, SyncPolicy::LogoutOnly);
        assert!(state_b.is_logged_in());

        tab_a.set(keys::SESSION_ACTIVE, "false");

        assert!(sync_b.poll(&mut state_b));
        assert!(!state_b.is_logged_in());
        assert_eq!(state_b.username, None);
    }

    #[test]
    fn test_false_flag_wins_over_stale_user_data() {
        // userData stays behind after logout by design; the eager clear
        // must not consult it.
        let store = store_with_user(true);
        let tab_a = store.handle();
        let tab_b = store.handle();

        let mut state_b = SessionState::read(&tab_b);
        let mut sync_b = SessionSynchronizer::new(&tab_b, SyncPolicy::Resync);

        tab_a.set(keys::SESSION_ACTIVE, "false");
        sync_b.poll(&mut state_b);

        assert!(!state_b.is_logged_in());
        assert_eq!(tab_b.get(keys::USER_DATA), Some(codec::encode(&sample_user())));
    }

    #[test]
    fn test_logout_only_ignores_user_data_changes() {
        let store = store_with_user(true);
        let tab_a = store.handle();
        let tab_b = store.handle();

        let mut state_b = SessionState::read(&tab_b);
        let mut sync_b = SessionSynchronizer::new(&tab_b, SyncPolicy::LogoutOnly);

        let mut other = sample_user();
        other.full_name = "Benita Rojas".to_owned();
        tab_a.set(keys::USER_DATA, codec::encode(&other));

        assert!(!sync_b.poll(&mut state_b));
        assert_eq!(state_b.username.as_deref(), Some("Ana Reyes"));
    }

    #[test]
    fn test_resync_follows_user_data_changes() {
        let store = store_with_user(true);
        let tab_a = store.handle();
        let tab_b = store.handle();

        let mut state_b = SessionState::read(&tab_b);
        let mut sync_b = SessionSynchronizer::new(&tab_b, SyncPolicy::Resync);

        let mut other = sample_user();
        other.full_name = "Benita Rojas".to_owned();
        tab_a.set(keys::USER_DATA, codec::encode(&other));

        assert!(sync_b.poll(&mut state_b));
        assert_eq!(state_b.username.as_deref(), Some("Benita Rojas"));
    }

    #[test]
    fn test_resync_follows_login_in_other_tab() {
        let store = store_with_user(false);
        let tab_a = store.handle();
        let tab_b = store.handle();

        let mut state_b = SessionState::read(&tab_b);
        let mut sync_b = SessionSynchronizer::new(&tab_b, SyncPolicy::Resync);
        assert!(!state_b.is_logged_in());

        tab_a.set(keys::SESSION_ACTIVE, "true");

        assert!(sync_b.poll(&mut state_b));
        assert!(state_b.is_logged_in());
    }

    #[test]
    fn test_synthetic_announce_reconciles_own_tab() {
        // The writing tab does not see its own writes; announce lets its
        // own synchronizer converge after a login performed in this tab.
        let store = store_with_user(false);
        let tab = store.handle();

        let mut state = SessionState::read(&tab);
        let mut sync = SessionSynchronizer::new(&tab, SyncPolicy::Resync);

        tab.set(keys::SESSION_ACTIVE, "true");
        assert!(!sync.poll(&mut state), "own write must not be delivered");

        tab.announce(keys::SESSION_ACTIVE);
        assert!(sync.poll(&mut state));
        assert!(state.is_logged_in());
    }
}
