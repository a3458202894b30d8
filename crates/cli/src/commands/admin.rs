//! Admin panel commands.

use chrono::Local;

use panda_pantry_admin::config::AdminConfigError;
use panda_pantry_admin::{AdminConfig, AdminController, AdminError, UpdateOutcome};
use panda_pantry_core::Role;
use panda_pantry_core::forms::RegistrationInput;
use panda_pantry_store::{SharedStore, StoreError};

/// Errors that can occur during admin commands.
#[derive(Debug, thiserror::Error)]
pub enum AdminCmdError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] AdminConfigError),

    /// The store file exists but could not be read.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The operation itself failed; the message is the one the panel
    /// would show.
    #[error("{}", .0.user_message())]
    Admin(#[from] AdminError),

    /// The role argument is not a known role.
    #[error("invalid role: {0}. Valid roles: customer, admin")]
    InvalidRole(String),
}

fn open_controller() -> Result<AdminController, AdminCmdError> {
    dotenvy::dotenv().ok();
    let config = AdminConfig::from_env()?;
    let store = SharedStore::open(&config.store_file)?;
    Ok(AdminController::attach(
        store.handle(),
        config.credential_check(),
    ))
}

/// Log in as admin.
#[allow(clippy::print_stdout)]
pub fn login(username: &str, password: &str) -> Result<(), AdminCmdError> {
    let mut admin = open_controller()?;
    let view = admin.login(username, password)?;
    println!("Admin session granted. Continue at {view}");
    Ok(())
}

/// Update an order's status in the local purchase collection.
#[allow(clippy::print_stdout)]
pub fn update_status(number: &str, status: &str) -> Result<(), AdminCmdError> {
    let mut admin = open_controller()?;
    match admin.update_order_status(number, status)? {
        UpdateOutcome::Updated => println!("Order {number} updated to \"{status}\""),
        UpdateOutcome::NotFound => println!("Tracking number {number} not found"),
    }
    Ok(())
}

/// Register a user into the admin directory (`usuarios`).
#[allow(clippy::print_stdout)]
pub fn register(
    full_name: &str,
    username: &str,
    email: &str,
    password: &str,
    birth_date: &str,
    role: &str,
) -> Result<(), AdminCmdError> {
    let role: Role = role
        .parse()
        .map_err(|_| AdminCmdError::InvalidRole(role.to_owned()))?;

    let mut admin = open_controller()?;
    let input = RegistrationInput {
        full_name: full_name.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: password.to_owned(),
        birth_date: birth_date.to_owned(),
        address: String::new(),
        role,
    };

    admin.register_user(&input, Local::now().date_naive())?;
    println!("User {username} registered with role {role}");
    Ok(())
}

/// Drop the admin session.
#[allow(clippy::print_stdout)]
pub fn logout() -> Result<(), AdminCmdError> {
    let mut admin = open_controller()?;
    let view = admin.logout();
    println!("Admin session closed. Continue at {view}");
    Ok(())
}
