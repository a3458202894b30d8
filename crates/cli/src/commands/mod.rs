//! CLI command implementations.

pub mod account;
pub mod admin;
pub mod cart;
pub mod persons;
pub mod track;

use panda_pantry_storefront::{AppState, ConfigError, StorefrontConfig};
use panda_pantry_store::{SharedStore, StoreError};

/// Errors opening the shared application state.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The store file exists but could not be read.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Load env config and open the file-backed store - the CLI's "browser
/// profile".
pub(crate) fn open_app() -> Result<AppState, OpenError> {
    dotenvy::dotenv().ok();
    let config = StorefrontConfig::from_env()?;
    let store = SharedStore::open(&config.store_file)?;
    Ok(AppState::new(config, store))
}
