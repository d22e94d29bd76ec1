//! Session lifecycle: configuration, persistence and plan loading.
//!
//! A [`Session`] ties a [`PlanStore`](crate::store::PlanStore) to the outside
//! world. It knows where the database lives and which directory plan
//! templates are read from, and it provides the two persistence points the
//! store needs:
//!
//! - [`Session::restore`] at startup
//! - [`Session::persist`] after every change
//!
//! Database access runs on the blocking thread pool so sessions can be used
//! from async handlers.
//!
//! # Usage
//!
//! ```rust,no_run
//! use jiff::civil::date;
//! use stride_core::SessionBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = SessionBuilder::new()
//!     .with_database_path(Some("/tmp/stride.db"))
//!     .with_plans_dir(Some("./plans"))
//!     .build()
//!     .await?;
//!
//! let mut store = session.restore().await?;
//! store.set_plan_id("pfitz_18_55_4th");
//! session.load_plan(&mut store).await;
//! store.set_race_date(Some(date(2026, 4, 20)))?;
//! session.persist(&store).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::loader::PlanCatalog;

pub mod builder;
pub mod plan_ops;
pub mod state_ops;

pub use builder::SessionBuilder;

/// Configured access to the database and plan catalog.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) db_path: PathBuf,
    catalog: PlanCatalog,
}

impl Session {
    pub(crate) fn new(db_path: PathBuf, catalog: PlanCatalog) -> Self {
        Self { db_path, catalog }
    }

    /// Path of the SQLite database.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Catalog of plan templates.
    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }
}
