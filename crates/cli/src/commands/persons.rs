//! Remote person directory commands.

use panda_pantry_admin::config::AdminConfigError;
use panda_pantry_admin::remote::AdminRemoteClient;
use panda_pantry_admin::{AdminConfig, AdminError, PersonDirectory};
use panda_pantry_core::PersonRecord;

/// Errors that can occur during person directory commands.
#[derive(Debug, thiserror::Error)]
pub enum PersonsError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] AdminConfigError),

    /// The remote operation failed.
    #[error("{}", .0.user_message())]
    Admin(#[from] AdminError),
}

fn open_directory() -> Result<PersonDirectory, PersonsError> {
    dotenvy::dotenv().ok();
    let config = AdminConfig::from_env()?;
    Ok(PersonDirectory::new(AdminRemoteClient::new(&config)))
}

/// List the remote person directory.
#[allow(clippy::print_stdout)]
pub async fn list() -> Result<(), PersonsError> {
    let mut directory = open_directory()?;
    directory.load().await?;

    if directory.persons().is_empty() {
        println!("Person directory is empty");
        return Ok(());
    }
    for person in directory.persons() {
        match &person.email {
            Some(email) => println!("{} <{email}>", person.name),
            None => println!("{}", person.name),
        }
    }
    Ok(())
}

/// Append a person and overwrite the remote document.
#[allow(clippy::print_stdout)]
pub async fn add(name: &str, email: Option<&str>) -> Result<(), PersonsError> {
    let mut directory = open_directory()?;
    directory.load().await?;

    directory.push(PersonRecord {
        name: name.to_owned(),
        email: email.map(ToOwned::to_owned),
        extra: serde_json::Map::new(),
    });
    directory.publish().await?;

    println!(
        "Published {} person(s) to the remote directory",
        directory.persons().len()
    );
    Ok(())
}
