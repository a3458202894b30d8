//! Cross-tab session properties and the end-to-end account scenario.

#![allow(clippy::unwrap_used)]

use panda_pantry_integration_tests::TestContext;
use panda_pantry_store::{SessionState, keys};
use panda_pantry_storefront::View;
use panda_pantry_storefront::controllers::{HomeController, ProfileController};

#[test]
fn end_to_end_register_login_logout() {
    // Empty store: no record, no session.
    let ctx = TestContext::new();
    let tab = ctx.app.open_tab();
    assert_eq!(tab.get(keys::USER_DATA), None);

    // Register: succeeds and navigates home, without logging in.
    let mut profile = ProfileController::attach(&ctx.app);
    let view = profile
        .register(&TestContext::registration_input(), TestContext::today())
        .unwrap();
    assert_eq!(view, View::Home);
    assert!(!profile.session().is_logged_in());

    // Login with the registered credentials: session becomes active.
    let view = profile.submit_login("ana@example.com", "secret1").unwrap();
    assert_eq!(view, View::Home);
    assert!(profile.session().is_logged_in());
    assert_eq!(profile.session().username.as_deref(), Some("Ana Reyes"));
    assert_eq!(tab.get(keys::SESSION_ACTIVE), Some("true".to_owned()));

    // Logout: the flag goes false but the record stays.
    profile.logout();
    assert!(!profile.session().is_logged_in());
    assert_eq!(tab.get(keys::SESSION_ACTIVE), Some("false".to_owned()));
    assert!(tab.get(keys::USER_DATA).is_some());
}

#[test]
fn registered_record_holds_submitted_values_exactly() {
    let ctx = TestContext::new();
    let mut profile = ProfileController::attach(&ctx.app);
    profile
        .register(&TestContext::registration_input(), TestContext::today())
        .unwrap();

    let stored = panda_pantry_store::codec::decode_opt::<panda_pantry_core::UserRecord>(
        ctx.app.open_tab().get(keys::USER_DATA).as_deref(),
    )
    .unwrap();
    assert_eq!(stored, TestContext::sample_user());
}

#[test]
fn logout_in_one_tab_is_observed_by_the_other() {
    let ctx = TestContext::new();
    ctx.seed_user();
    ctx.app.open_tab().set(keys::SESSION_ACTIVE, "true");

    // Tab B attaches while the session is active and never reads the
    // store again directly.
    let mut tab_b = HomeController::attach(&ctx.app);
    assert!(tab_b.session().is_logged_in());

    // Tab A logs out.
    let mut tab_a = HomeController::attach(&ctx.app);
    tab_a.logout();

    // Tab B's synchronizer picks the change up.
    assert!(tab_b.sync());
    assert!(!tab_b.session().is_logged_in());
    assert_eq!(tab_b.session().username, None);
}

#[test]
fn stale_user_data_does_not_resurrect_a_closed_session() {
    let ctx = TestContext::new();
    ctx.seed_user();
    ctx.app.open_tab().set(keys::SESSION_ACTIVE, "true");

    let mut tab_b = ProfileController::attach(&ctx.app);
    let mut tab_a = HomeController::attach(&ctx.app);
    tab_a.logout();
    tab_b.sync();

    // userData is still present, but the view is logged out.
    assert!(ctx.app.open_tab().get(keys::USER_DATA).is_some());
    assert!(!tab_b.session().is_logged_in());

    // A fresh view derives the same answer.
    assert!(!SessionState::read(&ctx.app.open_tab()).is_logged_in());
}

#[test]
fn login_in_one_tab_reaches_resync_views_only() {
    let ctx = TestContext::new();
    ctx.seed_user();

    let mut home_b = HomeController::attach(&ctx.app);
    let mut profile_b = ProfileController::attach(&ctx.app);

    let mut tab_a = HomeController::attach(&ctx.app);
    tab_a.submit_login("ana@example.com", "secret1").unwrap();

    // The profile view re-derives; the home view only follows logouts.
    assert!(profile_b.sync());
    assert!(profile_b.session().is_logged_in());
    assert!(!home_b.sync());
    assert!(!home_b.session().is_logged_in());
}

#[test]
fn wrong_credentials_leave_every_tab_unchanged() {
    let ctx = TestContext::new();
    ctx.seed_user();

    let mut other = ProfileController::attach(&ctx.app);
    let mut home = HomeController::attach(&ctx.app);

    assert!(home.submit_login("ana@example.com", "wrong").is_err());
    assert!(home.submit_login("nobody@example.com", "secret1").is_err());

    assert!(!home.session().is_logged_in());
    assert!(!other.sync());
    assert_eq!(ctx.app.open_tab().get(keys::SESSION_ACTIVE), None);
}
