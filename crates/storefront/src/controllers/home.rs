//! Home (landing) view controller.
//!
//! Login with the admin email-alias shortcut, logout, cart adds with a
//! running count, and a guard on profile navigation. Follows logouts from
//! other tabs but never re-syncs a login (the view only subscribes to the
//! session flag going false).

use panda_pantry_core::forms::{Touched, validate_login};
use panda_pantry_core::{Product, View};
use panda_pantry_store::{SessionState, SessionSynchronizer, StoreHandle, SyncPolicy};

use crate::error::{AppError, Result};
use crate::services::auth::{AuthService, LoginOutcome};
use crate::state::AppState;

/// The landing page controller.
pub struct HomeController {
    tab: StoreHandle,
    auth: AuthService,
    synchronizer: SessionSynchronizer,
    session: SessionState,
    cart_count: u32,
    login_touched: Touched,
}

impl HomeController {
    /// Attach the view in a fresh tab.
    #[must_use]
    pub fn attach(app: &AppState) -> Self {
        Self::attach_tab(app, app.open_tab())
    }

    /// Attach the view in an existing tab (the tab the user navigated in).
    #[must_use]
    pub fn attach_tab(app: &AppState, tab: StoreHandle) -> Self {
        let auth = AuthService::new(tab.clone(), app.credential_check());
        let synchronizer = SessionSynchronizer::new(&tab, SyncPolicy::LogoutOnly);
        let session = SessionState::read(&tab);
        let cart_count = super::cart::count(&tab);
        Self {
            tab,
            auth,
            synchronizer,
            session,
            cart_count,
            login_touched: Touched::default(),
        }
    }

    /// Apply pending change notifications from other tabs.
    ///
    /// Returns whether the session state changed.
    pub fn sync(&mut self) -> bool {
        self.synchronizer.poll(&mut self.session)
    }

    /// Current session banner state.
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// The running cart count.
    #[must_use]
    pub const fn cart_count(&self) -> u32 {
        self.cart_count
    }

    /// Touched flags of the login form.
    #[must_use]
    pub const fn login_touched(&self) -> &Touched {
        &self.login_touched
    }

    /// Submit the login form.
    ///
    /// The admin shortcut (email alias) is consulted first; otherwise the
    /// stored user record decides. Returns the view to navigate to.
    ///
    /// # Errors
    ///
    /// Validation failures mark every field touched and abort; credential
    /// failures surface the generic auth message. Neither mutates session
    /// state.
    pub fn submit_login(&mut self, identifier: &str, password: &str) -> Result<View> {
        if let Err(errors) = validate_login(identifier, password) {
            self.login_touched.mark_all();
            return Err(errors.into());
        }

        match self.auth.login(identifier, password)? {
            LoginOutcome::AdminSession { username } => {
                self.session.username = Some(username);
                self.session.is_admin = true;
                Ok(View::Admin)
            }
            LoginOutcome::UserSession { username } => {
                self.session.active = true;
                self.session.username = Some(username);
                Ok(View::Home)
            }
        }
    }

    /// Log out and return the view to land on.
    pub fn logout(&mut self) -> View {
        self.auth.logout();
        self.session.clear();
        self.session.is_admin = false;
        View::Home
    }

    /// Add one unit of `product` to the cart.
    ///
    /// The running count is bumped by one instead of recomputed from the
    /// persisted collection, so it can drift if another tab changed the
    /// cart concurrently; [`HomeController::load_cart_count`] reconciles.
    pub fn add_to_cart(&mut self, product: &Product) {
        super::cart::add(&self.tab, product);
        self.cart_count += 1;
    }

    /// Recompute the cart count from the persisted collection.
    pub fn load_cart_count(&mut self) {
        self.cart_count = super::cart::count(&self.tab);
    }

    /// Navigate to the profile, guarded on a logged-in session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotLoggedIn`] when no user is logged in.
    pub fn go_to_profile(&self) -> Result<View> {
        if self.session.is_logged_in() {
            Ok(View::UserProfile)
        } else {
            Err(AppError::NotLoggedIn)
        }
    }
}
