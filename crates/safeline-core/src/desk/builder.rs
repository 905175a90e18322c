//! Builder for creating and configuring Desk instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Desk;
use crate::{
    accounts::{find_user, DEFAULT_USERNAME},
    db::Database,
    error::{Result, SafelineError},
};

/// Builder for creating and configuring Desk instances.
#[derive(Debug, Clone)]
pub struct DeskBuilder {
    database_path: Option<PathBuf>,
    username: Option<String>,
}

impl DeskBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            username: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/safeline/safeline.db` or
    /// `~/.local/share/safeline/safeline.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Acts as the built-in account `username` instead of the default one.
    pub fn with_user<S: Into<String>>(mut self, username: Option<S>) -> Self {
        if let Some(username) = username {
            self.username = Some(username.into());
        }
        self
    }

    /// Builds the configured desk.
    ///
    /// # Errors
    ///
    /// Returns `SafelineError::UnknownUser` if the username is not a built-in
    /// account.
    /// Returns `SafelineError::FileSystem` if the database directory cannot be
    /// created.
    /// Returns `SafelineError::Database` if database initialization fails.
    pub async fn build(self) -> Result<Desk> {
        let user = find_user(self.username.as_deref().unwrap_or(DEFAULT_USERNAME))?;

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SafelineError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), SafelineError>(())
        })
        .await
        .map_err(|e| SafelineError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        log::debug!("desk ready for {} at {}", user.username, db_path.display());
        Ok(Desk::new(db_path, user))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("safeline")
            .place_data_file("safeline.db")
            .map_err(|e| SafelineError::XdgDirectory(e.to_string()))
    }
}

impl Default for DeskBuilder {
    fn default() -> Self {
        Self::new()
    }
}
