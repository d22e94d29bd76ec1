//! Load, save and clear the persisted user state row.

use jiff::{civil::Date, Timestamp};
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{RenderedPlan, Units},
    store::StoreSnapshot,
};

const SELECT_STATE_SQL: &str = "SELECT selected_plan_id, race_date, units, goal_time, current_schedule FROM user_state WHERE id = 1";
const UPSERT_STATE_SQL: &str = "INSERT INTO user_state (id, selected_plan_id, race_date, units, goal_time, current_schedule, created_at, updated_at)
     VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?6)
     ON CONFLICT(id) DO UPDATE SET
         selected_plan_id = excluded.selected_plan_id,
         race_date = excluded.race_date,
         units = excluded.units,
         goal_time = excluded.goal_time,
         current_schedule = excluded.current_schedule,
         updated_at = excluded.updated_at";
#[cfg(test)]
const SELECT_UPDATED_AT_SQL: &str = "SELECT updated_at FROM user_state WHERE id = 1";
const DELETE_STATE_SQL: &str = "DELETE FROM user_state";

fn conversion_error(
    column: usize,
    error: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(error))
}

impl super::Database {
    /// Reads the saved state, or `None` if nothing has been saved yet.
    pub fn load_state(&self) -> Result<Option<StoreSnapshot>> {
        let row = self
            .connection
            .query_row(SELECT_STATE_SQL, [], |row| {
                let race_date = row
                    .get::<_, Option<String>>(1)?
                    .map(|s| s.parse::<Date>())
                    .transpose()
                    .map_err(|e| conversion_error(1, e))?;

                let units_str: String = row.get(2)?;
                let units = units_str.parse::<Units>().map_err(|reason| {
                    conversion_error(
                        2,
                        std::io::Error::new(std::io::ErrorKind::InvalidData, reason),
                    )
                })?;

                Ok((
                    row.get::<_, String>(0)?,
                    race_date,
                    units,
                    row.get::<_, String>(3)?,
                    row.get::<_, Option<String>>(4)?,
                ))
            })
            .optional()
            .db_context("Failed to query user state")?;

        let Some((selected_plan_id, race_date, units, goal_time, schedule_json)) = row else {
            return Ok(None);
        };

        let current_schedule = schedule_json
            .map(|json| serde_json::from_str::<RenderedPlan>(&json))
            .transpose()?;

        Ok(Some(StoreSnapshot {
            selected_plan_id,
            race_date,
            units,
            goal_time,
            current_schedule,
        }))
    }

    /// Writes `snapshot` as the saved state, replacing any previous one.
    pub fn save_state(&mut self, snapshot: &StoreSnapshot) -> Result<()> {
        let schedule_json = snapshot
            .current_schedule
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let race_date = snapshot.race_date.map(|date| date.to_string());
        let now_str = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_STATE_SQL,
            params![
                &snapshot.selected_plan_id,
                race_date.as_deref(),
                snapshot.units.as_str(),
                &snapshot.goal_time,
                schedule_json.as_deref(),
                &now_str
            ],
        )
        .db_context("Failed to save user state")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Saved user state for plan '{}'", snapshot.selected_plan_id);

        Ok(())
    }

    /// When the state was last saved.
    #[cfg(test)]
    pub(crate) fn state_updated_at(&self) -> Result<Option<Timestamp>> {
        self.connection
            .query_row(SELECT_UPDATED_AT_SQL, [], |row| {
                row.get::<_, String>(0)?
                    .parse::<Timestamp>()
                    .map_err(|e| conversion_error(0, e))
            })
            .optional()
            .db_context("Failed to query state timestamp")
    }

    /// Deletes the saved state. Returns whether a row existed.
    pub fn clear_state(&mut self) -> Result<bool> {
        let rows_affected = self
            .connection
            .execute(DELETE_STATE_SQL, [])
            .db_context("Failed to clear user state")?;
        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::super::{migrations::SCHEMA_VERSION, Database};
    use crate::{
        schedule::compute_schedule,
        store::{PlanStore, DEFAULT_GOAL_TIME},
        test_utils::sample_plan,
    };

    #[test]
    fn test_empty_database_has_no_state() {
        let db = Database::in_memory().unwrap();
        assert!(db.load_state().unwrap().is_none());
        assert!(db.state_updated_at().unwrap().is_none());
        assert_eq!(db.schema_version().unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_save_and_load_defaults() {
        let mut db = Database::in_memory().unwrap();
        let snapshot = PlanStore::new().snapshot();

        db.save_state(&snapshot).unwrap();
        let loaded = db.load_state().unwrap().unwrap();
        assert_eq!(loaded, snapshot);
        assert_eq!(loaded.goal_time, DEFAULT_GOAL_TIME);
        assert!(db.state_updated_at().unwrap().is_some());
    }

    #[test]
    fn test_save_overwrites_single_row() {
        let mut db = Database::in_memory().unwrap();
        let mut snapshot = PlanStore::new().snapshot();
        db.save_state(&snapshot).unwrap();

        let schedule = compute_schedule(&sample_plan(), date(2026, 4, 20)).unwrap();
        snapshot.selected_plan_id = "sample".to_string();
        snapshot.race_date = Some(date(2026, 4, 20));
        snapshot.current_schedule = Some(schedule);
        db.save_state(&snapshot).unwrap();

        let rows: i64 = db
            .connection
            .query_row("SELECT COUNT(*) FROM user_state", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(db.load_state().unwrap(), Some(snapshot));
    }

    #[test]
    fn test_clear_state() {
        let mut db = Database::in_memory().unwrap();
        assert!(!db.clear_state().unwrap());

        db.save_state(&PlanStore::new().snapshot()).unwrap();
        assert!(db.clear_state().unwrap());
        assert!(db.load_state().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_race_date_is_reported() {
        let mut db = Database::in_memory().unwrap();
        db.save_state(&PlanStore::new().snapshot()).unwrap();
        db.connection
            .execute("UPDATE user_state SET race_date = 'someday'", [])
            .unwrap();

        assert!(matches!(
            db.load_state(),
            Err(crate::error::StrideError::Database { .. })
        ));
    }
}
