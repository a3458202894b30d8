//! User profile view controller.
//!
//! Registration, login against the stored record (no admin shortcut in
//! this flow), purchase history, and full session re-sync on cross-tab
//! changes to the session flag or the user record.

use chrono::NaiveDate;

use panda_pantry_core::forms::{
    RegistrationInput, Touched, validate_login, validate_registration,
};
use panda_pantry_core::{PurchaseRecord, View};
use panda_pantry_store::{SessionState, SessionSynchronizer, StoreHandle, SyncPolicy, codec, keys};

use crate::error::Result;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// The profile page controller.
pub struct ProfileController {
    tab: StoreHandle,
    auth: AuthService,
    synchronizer: SessionSynchronizer,
    session: SessionState,
    purchases: Vec<PurchaseRecord>,
    cart_count: u32,
    registration_touched: Touched,
    login_touched: Touched,
}

impl ProfileController {
    /// Attach the view in a fresh tab.
    #[must_use]
    pub fn attach(app: &AppState) -> Self {
        Self::attach_tab(app, app.open_tab())
    }

    /// Attach the view in an existing tab.
    #[must_use]
    pub fn attach_tab(app: &AppState, tab: StoreHandle) -> Self {
        let auth = AuthService::new(tab.clone(), app.credential_check());
        let synchronizer = SessionSynchronizer::new(&tab, SyncPolicy::Resync);
        let session = SessionState::read(&tab);
        let purchases = codec::decode_or_default(tab.get(keys::PURCHASES).as_deref());
        let cart_count = super::cart::count(&tab);
        Self {
            tab,
            auth,
            synchronizer,
            session,
            purchases,
            cart_count,
            registration_touched: Touched::default(),
            login_touched: Touched::default(),
        }
    }

    /// Apply pending change notifications from other tabs.
    pub fn sync(&mut self) -> bool {
        self.synchronizer.poll(&mut self.session)
    }

    /// Current session banner state.
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// Purchase history loaded from the local `purchases` collection.
    #[must_use]
    pub fn purchases(&self) -> &[PurchaseRecord] {
        &self.purchases
    }

    /// Re-read the purchase history.
    pub fn reload_purchases(&mut self) {
        self.purchases = codec::decode_or_default(self.tab.get(keys::PURCHASES).as_deref());
    }

    /// The cart count computed at attach (or the last reload).
    #[must_use]
    pub const fn cart_count(&self) -> u32 {
        self.cart_count
    }

    /// Recompute the cart count from the persisted collection.
    pub fn load_cart_count(&mut self) {
        self.cart_count = super::cart::count(&self.tab);
    }

    /// Touched flags of the registration form.
    #[must_use]
    pub const fn registration_touched(&self) -> &Touched {
        &self.registration_touched
    }

    /// Touched flags of the login form.
    #[must_use]
    pub const fn login_touched(&self) -> &Touched {
        &self.login_touched
    }

    /// Submit the registration form.
    ///
    /// On success the record overwrites any previously registered user
    /// (the single-record store, by design) and the view navigates home.
    /// Registration does not log the user in.
    ///
    /// # Errors
    ///
    /// On any validation failure every field is marked touched and nothing
    /// is persisted.
    pub fn register(&mut self, input: &RegistrationInput, today: NaiveDate) -> Result<View> {
        match validate_registration(input, today) {
            Ok(record) => {
                self.auth.register(&record);
                Ok(View::Home)
            }
            Err(errors) => {
                self.registration_touched.mark_all();
                Err(errors.into())
            }
        }
    }

    /// Submit the login form. This flow checks only the stored record.
    ///
    /// # Errors
    ///
    /// Validation failures mark every field touched; credential failures
    /// surface the generic auth message.
    pub fn submit_login(&mut self, identifier: &str, password: &str) -> Result<View> {
        if let Err(errors) = validate_login(identifier, password) {
            self.login_touched.mark_all();
            return Err(errors.into());
        }

        let username = self.auth.login_stored(identifier, password)?;
        self.session.active = true;
        self.session.username = Some(username);
        Ok(View::Home)
    }

    /// Log out and return the view to land on.
    pub fn logout(&mut self) -> View {
        self.auth.logout();
        self.session.clear();
        self.session.is_admin = false;
        View::Home
    }
}
