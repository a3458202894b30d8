//! The remote person directory.
//!
//! The person list lives only in the remote document; there is no local
//! copy to fall back on. Publishing overwrites the whole document with
//! the in-memory list, so a concurrent editor's changes are lost (last
//! write wins - the same model as the local store's collections).

use panda_pantry_core::PersonRecord;

use crate::error::AdminError;
use crate::remote::AdminRemoteClient;

/// The person-list view backing state.
pub struct PersonDirectory {
    remote: AdminRemoteClient,
    persons: Vec<PersonRecord>,
}

impl PersonDirectory {
    /// Create an empty directory over `remote`.
    #[must_use]
    pub const fn new(remote: AdminRemoteClient) -> Self {
        Self {
            remote,
            persons: Vec::new(),
        }
    }

    /// The in-memory list (as of the last [`PersonDirectory::load`] plus
    /// local edits).
    #[must_use]
    pub fn persons(&self) -> &[PersonRecord] {
        &self.persons
    }

    /// Replace the in-memory list with the remote document.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Remote`] if the fetch fails; the in-memory
    /// list is left unchanged in that case.
    pub async fn load(&mut self) -> Result<(), AdminError> {
        self.persons = self.remote.fetch_persons().await?;
        Ok(())
    }

    /// Append a person to the in-memory list (not yet published).
    pub fn push(&mut self, person: PersonRecord) {
        self.persons.push(person);
    }

    /// Overwrite the whole remote document with the in-memory list.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Remote`] if the write fails.
    pub async fn publish(&self) -> Result<(), AdminError> {
        self.remote.overwrite_persons(&self.persons).await?;
        Ok(())
    }
}
