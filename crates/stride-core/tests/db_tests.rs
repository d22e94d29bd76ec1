use jiff::civil::date;
use stride_core::{loader::parse_plan, models::Units, Database, PlanStore};
use tempfile::TempDir;

mod common;

#[test]
fn test_state_persists_across_connections() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("state.db");

    let mut store = PlanStore::new();
    store
        .set_plan(parse_plan(common::THREE_WEEK_PLAN).unwrap())
        .unwrap();
    store.set_race_date(Some(date(2026, 10, 11))).unwrap();
    store.move_workout(2, 6, 2, 0);

    {
        let mut db = Database::new(&db_path).unwrap();
        db.save_state(&store.snapshot()).unwrap();
    }

    let db = Database::new(&db_path).unwrap();
    let snapshot = db.load_state().unwrap().expect("state should be saved");
    assert_eq!(snapshot, store.snapshot());

    let schedule = snapshot.current_schedule.unwrap();
    assert!(schedule.weeks[2].workouts[0].workout.is_race());
    assert_eq!(schedule.weeks[2].workouts[0].date, date(2026, 10, 5));
}

#[test]
fn test_reopening_keeps_schema_version_and_state() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("reopen.db");

    let mut store = PlanStore::new();
    store.set_units(Units::Miles);
    store.set_goal_time("3:30:00");

    {
        let mut db = Database::new(&db_path).unwrap();
        assert_eq!(db.schema_version().unwrap(), 1);
        db.save_state(&store.snapshot()).unwrap();
    }

    let db = Database::new(&db_path).unwrap();
    assert_eq!(db.schema_version().unwrap(), 1);

    let snapshot = db.load_state().unwrap().unwrap();
    assert_eq!(snapshot.units, Units::Miles);
    assert_eq!(snapshot.goal_time, "3:30:00");
    assert!(snapshot.race_date.is_none());
    assert!(snapshot.current_schedule.is_none());
}
