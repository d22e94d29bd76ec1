//! Persisted state operations for the Session.

use log::{debug, info};
use tokio::task;

use super::Session;
use crate::{
    db::Database,
    error::{Result, StrideError},
    store::PlanStore,
};

impl Session {
    /// Loads the saved store, or a default one if nothing has been saved.
    pub async fn restore(&self) -> Result<PlanStore> {
        let db_path = self.db_path.clone();

        let snapshot = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.load_state()
        })
        .await
        .map_err(StrideError::join)??;

        Ok(match snapshot {
            Some(snapshot) => {
                debug!("Restored state for plan '{}'", snapshot.selected_plan_id);
                PlanStore::from_snapshot(snapshot)
            }
            None => {
                info!("No saved state, starting with defaults");
                PlanStore::new()
            }
        })
    }

    /// Saves the current store.
    pub async fn persist(&self, store: &PlanStore) -> Result<()> {
        let db_path = self.db_path.clone();
        let snapshot = store.snapshot();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_state(&snapshot)
        })
        .await
        .map_err(StrideError::join)?
    }

    /// Deletes the saved state. Returns whether anything was saved.
    pub async fn reset(&self) -> Result<bool> {
        let db_path = self.db_path.clone();

        let cleared = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.clear_state()
        })
        .await
        .map_err(StrideError::join)??;

        if cleared {
            info!("Cleared saved state");
        }
        Ok(cleared)
    }
}
