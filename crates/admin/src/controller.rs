//! Admin panel controller.
//!
//! Admin sessions are tracked under their own keys (`isAdminLoggedIn`,
//! `loggedInUser`), independent of the regular session flag. Status
//! updates operate on the locally persisted `purchases` collection, not
//! the remote order document; the two sources can disagree and nothing
//! reconciles them.

use std::sync::Arc;

use chrono::NaiveDate;

use panda_pantry_core::auth::CredentialCheck;
use panda_pantry_core::forms::{
    Field, FieldError, RegistrationInput, Touched, ValidationErrors, validate_login,
    validate_registration,
};
use panda_pantry_core::{PurchaseRecord, Role, TrackingNumber, UserRecord, View};
use panda_pantry_store::{StoreHandle, codec, keys};

use crate::error::AdminError;

/// Admin display name recorded under `loggedInUser`.
const ADMIN_DISPLAY_NAME: &str = "Admin";

/// Result of an order status update. A missing tracking number is a
/// normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The order was found and its status persisted.
    Updated,
    /// No order matched; the collection is unchanged.
    NotFound,
}

/// The admin panel controller.
pub struct AdminController {
    tab: StoreHandle,
    admin_check: Arc<dyn CredentialCheck>,
    admin_user: Option<String>,
    purchases: Vec<PurchaseRecord>,
    login_touched: Touched,
    register_touched: Touched,
    tracking_touched: Touched,
}

impl AdminController {
    /// Attach the admin view in `tab`, deriving any existing admin
    /// session and loading the local purchase collection.
    #[must_use]
    pub fn attach(tab: StoreHandle, admin_check: Arc<dyn CredentialCheck>) -> Self {
        let admin_user = (tab.get(keys::IS_ADMIN_LOGGED_IN).as_deref() == Some("true")).then(|| {
            tab.get(keys::LOGGED_IN_USER)
                .unwrap_or_else(|| ADMIN_DISPLAY_NAME.to_owned())
        });
        let purchases = codec::decode_or_default(tab.get(keys::PURCHASES).as_deref());
        Self {
            tab,
            admin_check,
            admin_user,
            purchases,
            login_touched: Touched::default(),
            register_touched: Touched::default(),
            tracking_touched: Touched::default(),
        }
    }

    /// Display name of the logged-in admin, if an admin session exists.
    #[must_use]
    pub fn admin_user(&self) -> Option<&str> {
        self.admin_user.as_deref()
    }

    /// The local purchase collection as loaded at attach (or the last
    /// update).
    #[must_use]
    pub fn purchases(&self) -> &[PurchaseRecord] {
        &self.purchases
    }

    /// Re-read the local purchase collection.
    pub fn reload_purchases(&mut self) {
        self.purchases = codec::decode_or_default(self.tab.get(keys::PURCHASES).as_deref());
    }

    /// Touched flags of the login form.
    #[must_use]
    pub const fn login_touched(&self) -> &Touched {
        &self.login_touched
    }

    /// Touched flags of the registration form.
    #[must_use]
    pub const fn register_touched(&self) -> &Touched {
        &self.register_touched
    }

    /// Touched flags of the tracking form.
    #[must_use]
    pub const fn tracking_touched(&self) -> &Touched {
        &self.tracking_touched
    }

    /// Submit the admin login form.
    ///
    /// Grants an admin session via the injected credential check. The
    /// regular session flag is not touched.
    ///
    /// # Errors
    ///
    /// Empty fields are a validation error (all fields marked touched);
    /// a rejected pair is [`AdminError::InvalidCredentials`].
    pub fn login(&mut self, username: &str, password: &str) -> Result<View, AdminError> {
        if let Err(errors) = validate_login(username, password) {
            self.login_touched.mark_all();
            return Err(errors.into());
        }

        if self.admin_check.authenticate(username, password) != Some(Role::Admin) {
            return Err(AdminError::InvalidCredentials);
        }

        self.tab.set(keys::IS_ADMIN_LOGGED_IN, "true");
        self.tab.set(keys::LOGGED_IN_USER, ADMIN_DISPLAY_NAME);
        self.admin_user = Some(ADMIN_DISPLAY_NAME.to_owned());
        tracing::info!("admin session granted");
        Ok(View::Admin)
    }

    /// Register a user through the admin path.
    ///
    /// Appends to the `usuarios` directory; the customer path's single
    /// `userData` record is never touched by this flow (the two stores
    /// are kept separate on purpose).
    ///
    /// # Errors
    ///
    /// On validation failure every field is marked touched and nothing is
    /// persisted.
    pub fn register_user(
        &mut self,
        input: &RegistrationInput,
        today: NaiveDate,
    ) -> Result<(), AdminError> {
        let record = match validate_registration(input, today) {
            Ok(record) => record,
            Err(errors) => {
                self.register_touched.mark_all();
                return Err(errors.into());
            }
        };

        let mut users: Vec<UserRecord> =
            codec::decode_or_default(self.tab.get(keys::REGISTERED_USERS).as_deref());
        users.push(record);
        self.tab.set(keys::REGISTERED_USERS, codec::encode(&users));
        tracing::info!(role = %input.role, "user registered via admin path");
        Ok(())
    }

    /// Update one order's status in the local purchase collection.
    ///
    /// Exact match on the tracking number; on a match the status is
    /// mutated in place and the whole collection persisted back.
    ///
    /// # Errors
    ///
    /// Empty fields are a validation error (all fields marked touched).
    pub fn update_order_status(
        &mut self,
        tracking_number: &str,
        new_status: &str,
    ) -> Result<UpdateOutcome, AdminError> {
        let mut errors = Vec::new();
        let number = match TrackingNumber::parse(tracking_number) {
            Ok(number) => Some(number),
            Err(_) => {
                errors.push(FieldError::Required(Field::TrackingNumber));
                None
            }
        };
        if new_status.trim().is_empty() {
            errors.push(FieldError::Required(Field::OrderStatus));
        }
        let Some(number) = number.filter(|_| errors.is_empty()) else {
            self.tracking_touched.mark_all();
            return Err(ValidationErrors(errors).into());
        };

        let mut purchases: Vec<PurchaseRecord> =
            codec::decode_or_default(self.tab.get(keys::PURCHASES).as_deref());
        let Some(order) = purchases
            .iter_mut()
            .find(|order| order.tracking_number == number)
        else {
            return Ok(UpdateOutcome::NotFound);
        };

        order.status = new_status.trim().to_owned();
        self.tab.set(keys::PURCHASES, codec::encode(&purchases));
        self.purchases = purchases;
        tracing::info!(tracking_number = %number, status = new_status, "order status updated");
        Ok(UpdateOutcome::Updated)
    }

    /// Drop the admin session (the regular session flag, if any, is left
    /// alone) and return the view to land on.
    pub fn logout(&mut self) -> View {
        self.tab.remove(keys::IS_ADMIN_LOGGED_IN);
        self.tab.remove(keys::LOGGED_IN_USER);
        self.admin_user = None;
        tracing::info!("admin session closed");
        View::Home
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use panda_pantry_core::auth::StaticAdminCredentials;
    use panda_pantry_store::SharedStore;

    use super::*;

    fn admin_check() -> Arc<dyn CredentialCheck> {
        Arc::new(StaticAdminCredentials::new("admin", "admin", "admin"))
    }

    fn controller() -> (SharedStore, AdminController) {
        let store = SharedStore::in_memory();
        let controller = AdminController::attach(store.handle(), admin_check());
        (store, controller)
    }

    fn seed_purchases(store: &SharedStore) {
        store.handle().set(
            keys::PURCHASES,
            r#"[
                {"trackingNumber": "PP-1042", "status": "preparing", "courier": "Starken"},
                {"trackingNumber": "PP-1043", "status": "preparing"}
            ]"#,
        );
    }

    fn registration_input() -> RegistrationInput {
        RegistrationInput {
            full_name: "Benita Rojas".to_owned(),
            username: "benita".to_owned(),
            email: "benita@example.com".to_owned(),
            password: "secret1".to_owned(),
            confirm_password: "secret1".to_owned(),
            birth_date: "1995-03-02".to_owned(),
            address: String::new(),
            role: Role::Admin,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_login_grants_admin_session_only() {
        let (store, mut admin) = controller();

        let view = admin.login("admin", "admin").unwrap();
        assert_eq!(view, View::Admin);
        assert_eq!(admin.admin_user(), Some("Admin"));

        let tab = store.handle();
        assert_eq!(tab.get(keys::IS_ADMIN_LOGGED_IN), Some("true".to_owned()));
        // The regular session flag is tracked independently.
        assert_eq!(tab.get(keys::SESSION_ACTIVE), None);
    }

    #[test]
    fn test_login_rejects_wrong_pair() {
        let (_store, mut admin) = controller();
        let err = admin.login("admin", "wrong").unwrap_err();
        assert!(matches!(err, AdminError::InvalidCredentials));
        assert_eq!(admin.admin_user(), None);
    }

    #[test]
    fn test_attach_recovers_existing_session() {
        let store = SharedStore::in_memory();
        store.handle().set(keys::IS_ADMIN_LOGGED_IN, "true");
        store.handle().set(keys::LOGGED_IN_USER, "Admin");

        let admin = AdminController::attach(store.handle(), admin_check());
        assert_eq!(admin.admin_user(), Some("Admin"));
    }

    #[test]
    fn test_register_appends_to_directory_not_user_data() {
        let (store, mut admin) = controller();

        admin.register_user(&registration_input(), today()).unwrap();
        let mut second = registration_input();
        second.username = "carla".to_owned();
        admin.register_user(&second, today()).unwrap();

        let tab = store.handle();
        let users: Vec<UserRecord> =
            codec::decode_or_default(tab.get(keys::REGISTERED_USERS).as_deref());
        assert_eq!(users.len(), 2);
        assert_eq!(users.first().unwrap().role, Role::Admin);
        // The single-record customer store is untouched by this path.
        assert_eq!(tab.get(keys::USER_DATA), None);
    }

    #[test]
    fn test_register_validation_failure_persists_nothing() {
        let (store, mut admin) = controller();

        let mut input = registration_input();
        input.email = "not-an-email".to_owned();
        let err = admin.register_user(&input, today()).unwrap_err();

        assert!(matches!(err, AdminError::Validation(_)));
        assert!(admin.register_touched().contains(Field::Email));
        assert_eq!(store.handle().get(keys::REGISTERED_USERS), None);
    }

    #[test]
    fn test_update_order_status_in_place() {
        let (store, _) = controller();
        seed_purchases(&store);
        let mut admin = AdminController::attach(store.handle(), admin_check());

        let outcome = admin.update_order_status("PP-1042", "shipped").unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated);

        let purchases: Vec<PurchaseRecord> =
            codec::decode_or_default(store.handle().get(keys::PURCHASES).as_deref());
        let updated = purchases
            .iter()
            .find(|o| o.tracking_number.as_str() == "PP-1042")
            .unwrap();
        assert_eq!(updated.status, "shipped");
        // Unmodelled fields survive the read-modify-write.
        assert_eq!(
            updated.extra.get("courier").and_then(|v| v.as_str()),
            Some("Starken")
        );
        // The other order is untouched.
        assert!(purchases.iter().any(|o| o.status == "preparing"));
    }

    #[test]
    fn test_update_unknown_number_changes_nothing() {
        let (store, _) = controller();
        seed_purchases(&store);
        let before = store.handle().get(keys::PURCHASES);
        let mut admin = AdminController::attach(store.handle(), admin_check());

        let outcome = admin.update_order_status("PP-9999", "shipped").unwrap();
        assert_eq!(outcome, UpdateOutcome::NotFound);
        assert_eq!(store.handle().get(keys::PURCHASES), before);
    }

    #[test]
    fn test_update_requires_both_fields() {
        let (_store, mut admin) = controller();
        let err = admin.update_order_status("", "").unwrap_err();
        assert!(matches!(err, AdminError::Validation(_)));
        assert!(admin.tracking_touched().contains(Field::TrackingNumber));
    }

    #[test]
    fn test_logout_leaves_regular_session_alone() {
        let (store, mut admin) = controller();
        store.handle().set(keys::SESSION_ACTIVE, "true");
        admin.login("admin", "admin").unwrap();

        let view = admin.logout();
        assert_eq!(view, View::Home);
        assert_eq!(admin.admin_user(), None);

        let tab = store.handle();
        assert_eq!(tab.get(keys::IS_ADMIN_LOGGED_IN), None);
        assert_eq!(tab.get(keys::SESSION_ACTIVE), Some("true".to_owned()));
    }
}
