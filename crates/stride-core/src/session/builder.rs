//! Builder for creating and configuring Session instances.

use std::{
    env,
    path::{Path, PathBuf},
};

use log::debug;
use tokio::task;

use super::Session;
use crate::{
    db::Database,
    error::{Result, StrideError},
    loader::PlanCatalog,
};

/// Environment variable that overrides the default plans directory.
pub const PLANS_DIR_ENV: &str = "STRIDE_PLANS_DIR";

const XDG_PREFIX: &str = "stride";

/// Builder for creating and configuring Session instances.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    database_path: Option<PathBuf>,
    plans_dir: Option<PathBuf>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/stride/stride.db` or `~/.local/share/stride/stride.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the directory plan templates are read from.
    ///
    /// If not specified, uses `$STRIDE_PLANS_DIR`, falling back to
    /// `$XDG_DATA_HOME/stride/plans`.
    pub fn with_plans_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.plans_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured session.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::XdgDirectory` if a default path cannot be
    /// resolved, `StrideError::FileSystem` if the database directory cannot
    /// be created and `StrideError::Database` if initialization fails.
    pub async fn build(self) -> Result<Session> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };
        let plans_dir = match self.plans_dir {
            Some(path) => path,
            None => Self::default_plans_dir()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StrideError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(|_| ()))
            .await
            .map_err(StrideError::join)??;

        debug!(
            "Session ready: database {}, plans {}",
            db_path.display(),
            plans_dir.display()
        );
        Ok(Session::new(db_path, PlanCatalog::new(plans_dir)))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX)
            .place_data_file("stride.db")
            .map_err(|e| StrideError::XdgDirectory(e.to_string()))
    }

    fn default_plans_dir() -> Result<PathBuf> {
        if let Some(dir) = env::var_os(PLANS_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        xdg::BaseDirectories::with_prefix(XDG_PREFIX)
            .get_data_home()
            .map(|home| home.join("plans"))
            .ok_or_else(|| {
                StrideError::XdgDirectory("cannot determine the data home directory".to_string())
            })
    }
}
