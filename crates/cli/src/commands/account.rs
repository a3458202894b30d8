//! Registration, login, logout, and session inspection.

use chrono::Local;

use panda_pantry_core::Role;
use panda_pantry_core::forms::RegistrationInput;
use panda_pantry_store::SessionState;
use panda_pantry_storefront::AppError;
use panda_pantry_storefront::controllers::{HomeController, ProfileController};

use super::OpenError;

/// Errors that can occur during account commands.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Application state could not be opened.
    #[error(transparent)]
    Open(#[from] OpenError),

    /// The operation itself failed; the message is the one the view
    /// would show.
    #[error("{}", .0.user_message())]
    App(#[from] AppError),
}

/// Register a user, overwriting any previously registered record.
#[allow(clippy::print_stdout, clippy::too_many_arguments)]
pub fn register(
    full_name: &str,
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    birth_date: &str,
    address: Option<&str>,
) -> Result<(), AccountError> {
    let app = super::open_app()?;
    let mut profile = ProfileController::attach(&app);

    let input = RegistrationInput {
        full_name: full_name.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm_password.to_owned(),
        birth_date: birth_date.to_owned(),
        address: address.unwrap_or_default().to_owned(),
        role: Role::Customer,
    };

    let view = profile.register(&input, Local::now().date_naive())?;
    println!("Registered {username}. Continue at {view}");
    Ok(())
}

/// Log in with an email (or the admin alias) and password.
#[allow(clippy::print_stdout)]
pub fn login(identifier: &str, password: &str) -> Result<(), AccountError> {
    let app = super::open_app()?;
    let mut home = HomeController::attach(&app);

    let view = home.submit_login(identifier, password)?;
    match home.session().username.as_deref() {
        Some(username) => println!("Logged in as {username}. Continue at {view}"),
        None => println!("Logged in. Continue at {view}"),
    }
    Ok(())
}

/// Log out; the registered record is kept.
#[allow(clippy::print_stdout)]
pub fn logout() -> Result<(), AccountError> {
    let app = super::open_app()?;
    let mut home = HomeController::attach(&app);

    let view = home.logout();
    println!("Session closed. Continue at {view}");
    Ok(())
}

/// Show the session state as every view derives it on load.
#[allow(clippy::print_stdout)]
pub fn session() -> Result<(), AccountError> {
    let app = super::open_app()?;
    let state = SessionState::read(&app.open_tab());

    println!("session active: {}", state.active);
    println!(
        "logged in as:   {}",
        state.username.as_deref().unwrap_or("-")
    );
    println!("admin session:  {}", state.is_admin);
    Ok(())
}
