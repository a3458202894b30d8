//! Order tracking view controller.
//!
//! Tracks orders against the remote order document, not the local
//! `purchases` collection (the two are distinct sources by design). This
//! view never subscribes to store changes; its session banner is whatever
//! was read at attach.

use panda_pantry_core::forms::{Field, FieldError, ValidationErrors};
use panda_pantry_core::{PurchaseRecord, TrackingNumber, View};
use panda_pantry_store::{SessionState, StoreHandle};

use crate::error::{AppError, Result};
use crate::remote::RemoteClient;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Result of a tracking lookup. Fetch failures are errors, a missing
/// order is not.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackOutcome {
    /// Exactly one order matched the tracking number.
    Found(PurchaseRecord),
    /// The fetch succeeded but no order matched.
    NotFound,
}

/// The order-tracking page controller.
pub struct TrackingController {
    tab: StoreHandle,
    auth: AuthService,
    remote: RemoteClient,
    session: SessionState,
    cart_count: u32,
    orders: Vec<PurchaseRecord>,
    search_result: Option<PurchaseRecord>,
}

impl TrackingController {
    /// Attach the view in a fresh tab.
    #[must_use]
    pub fn attach(app: &AppState) -> Self {
        Self::attach_tab(app, app.open_tab())
    }

    /// Attach the view in an existing tab.
    #[must_use]
    pub fn attach_tab(app: &AppState, tab: StoreHandle) -> Self {
        let auth = AuthService::new(tab.clone(), app.credential_check());
        let session = SessionState::read(&tab);
        let cart_count = super::cart::count(&tab);
        Self {
            tab,
            auth,
            remote: app.remote().clone(),
            session,
            cart_count,
            orders: Vec::new(),
            search_result: None,
        }
    }

    /// Session banner state read at attach.
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// The cart count read at attach (or the last reload).
    #[must_use]
    pub const fn cart_count(&self) -> u32 {
        self.cart_count
    }

    /// Recompute the cart count from the persisted collection.
    pub fn load_cart_count(&mut self) {
        self.cart_count = super::cart::count(&self.tab);
    }

    /// The last lookup's result, if any.
    #[must_use]
    pub const fn search_result(&self) -> Option<&PurchaseRecord> {
        self.search_result.as_ref()
    }

    /// Look up an order by tracking number against the remote document.
    ///
    /// Concurrent calls race; whichever response is applied last wins
    /// (there is no request token to discard stale results).
    ///
    /// # Errors
    ///
    /// An empty tracking number is rejected locally as a validation error.
    /// A failed fetch surfaces as [`AppError::Remote`] and leaves the
    /// previous search result in place; "no order matched" is the
    /// [`TrackOutcome::NotFound`] outcome, not an error.
    pub async fn track_order(&mut self, input: &str) -> Result<TrackOutcome> {
        let Ok(number) = TrackingNumber::parse(input) else {
            self.search_result = None;
            return Err(AppError::Validation(ValidationErrors(vec![
                FieldError::Required(Field::TrackingNumber),
            ])));
        };

        let orders = self.remote.fetch_orders().await?;
        self.orders = orders;

        let matched = self
            .orders
            .iter()
            .find(|order| order.tracking_number == number)
            .cloned();
        self.search_result.clone_from(&matched);

        Ok(matched.map_or(TrackOutcome::NotFound, TrackOutcome::Found))
    }

    /// Log out and return the view to land on.
    pub fn logout(&mut self) -> View {
        self.auth.logout();
        self.session.clear();
        self.session.is_admin = false;
        View::Home
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use panda_pantry_store::SharedStore;
    use secrecy::SecretString;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::{AdminCredentialConfig, StorefrontConfig};

    use super::*;

    fn app_against(server: &MockServer) -> AppState {
        let config = StorefrontConfig {
            bucket_url: Url::parse(&server.uri()).unwrap(),
            bucket_token: SecretString::from("test-token"),
            store_file: "unused.json".into(),
            admin: AdminCredentialConfig {
                username: "admin".to_owned(),
                email_alias: "admin@gmail.com".to_owned(),
                password: SecretString::from("admin"),
            },
        };
        AppState::new(config, SharedStore::in_memory())
    }

    async fn serve_orders(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/carrito.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected_locally() {
        let server = MockServer::start().await;
        let app = app_against(&server);
        let mut tracking = TrackingController::attach(&app);

        let err = tracking.track_order("   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(tracking.search_result().is_none());
    }

    #[tokio::test]
    async fn test_exact_match_is_found() {
        let server = MockServer::start().await;
        serve_orders(
            &server,
            serde_json::json!([
                {"trackingNumber": "PP-1042", "status": "preparing"},
                {"trackingNumber": "PP-1043", "status": "shipped"}
            ]),
        )
        .await;

        let app = app_against(&server);
        let mut tracking = TrackingController::attach(&app);

        let outcome = tracking.track_order("PP-1043").await.unwrap();
        let TrackOutcome::Found(order) = outcome else {
            panic!("expected a match");
        };
        assert_eq!(order.status, "shipped");
        assert_eq!(
            tracking.search_result().unwrap().tracking_number.as_str(),
            "PP-1043"
        );
    }

    #[tokio::test]
    async fn test_unknown_number_is_not_found_not_an_error() {
        let server = MockServer::start().await;
        serve_orders(
            &server,
            serde_json::json!([{"trackingNumber": "PP-1042", "status": "preparing"}]),
        )
        .await;

        let app = app_against(&server);
        let mut tracking = TrackingController::attach(&app);

        let outcome = tracking.track_order("PP-9999").await.unwrap();
        assert_eq!(outcome, TrackOutcome::NotFound);
        assert!(tracking.search_result().is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_distinct_from_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/carrito.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let app = app_against(&server);
        let mut tracking = TrackingController::attach(&app);

        let err = tracking.track_order("PP-1042").await.unwrap_err();
        assert!(matches!(err, AppError::Remote(_)));
        assert_eq!(err.user_message(), "Could not load data from the server.");
    }

    #[tokio::test]
    async fn test_last_lookup_wins() {
        let server = MockServer::start().await;
        serve_orders(
            &server,
            serde_json::json!([
                {"trackingNumber": "PP-1042", "status": "preparing"},
                {"trackingNumber": "PP-1043", "status": "shipped"}
            ]),
        )
        .await;

        let app = app_against(&server);
        let mut tracking = TrackingController::attach(&app);

        tracking.track_order("PP-1042").await.unwrap();
        tracking.track_order("PP-1043").await.unwrap();
        assert_eq!(
            tracking.search_result().unwrap().tracking_number.as_str(),
            "PP-1043"
        );
    }
}
