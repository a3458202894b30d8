//! Persisted store key names.
//!
//! These are the exact key strings of the deployed storefront's storage
//! schema; renaming any of them would orphan existing data.

/// Key for the session-active flag, `"true"` or `"false"`.
///
/// Logout writes `"false"` here; it never removes [`USER_DATA`].
pub const SESSION_ACTIVE: &str = "sesionActiva";

/// Key for the single registered user record (JSON `UserRecord`).
pub const USER_DATA: &str = "userData";

/// Key for the admin-session flag, `"true"` when an admin is logged in.
///
/// Tracked independently of [`SESSION_ACTIVE`]; an admin session does not
/// set the regular session flag.
pub const IS_ADMIN_LOGGED_IN: &str = "isAdminLoggedIn";

/// Key for the display name of the logged-in admin.
pub const LOGGED_IN_USER: &str = "loggedInUser";

/// Key for the admin-registered user directory (JSON list of `UserRecord`).
///
/// Distinct from [`USER_DATA`]: the admin registration path appends here and
/// never touches the single-record key. The two are not reconciled.
pub const REGISTERED_USERS: &str = "usuarios";

/// Key for the cart collection (JSON list of `CartItem`).
pub const CART: &str = "cart";

/// Key for the locally persisted order collection (JSON list of
/// `PurchaseRecord`). Distinct from the remote order document.
pub const PURCHASES: &str = "purchases";
