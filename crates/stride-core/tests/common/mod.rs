#![allow(dead_code)]

use std::path::Path;

use stride_core::{Session, SessionBuilder};
use tempfile::TempDir;

/// Three-week template written into every test plans directory.
pub const THREE_WEEK_PLAN: &str = r#"
id: three_week
name: Three Week Taper
description: "Sharpening block, up to {40:64} per week"
type: Marathon
units: mi
source: Test fixtures
schedule:
  - description: Peak week
    workouts:
      - { title: Rest or cross-training, tags: [Rest] }
      - { title: "Lactate threshold {8:13} w/ 4 mi @ LT", distance: 8 }
      - { title: Recovery, distance: 5 }
      - { title: "Medium-long run", distance: [10, 11] }
      - { title: Rest or cross-training, tags: [Rest] }
      - { title: "Recovery + speed", distance: 6, description: "10 x 100m strides" }
      - { title: "Long run {16:26}", distance: 16, tags: [Long Run] }
  - workouts:
      - { title: Rest, tags: [Rest] }
      - { title: "VO2max 5 x 600m", distance: 7 }
      - { title: Recovery, distance: 5 }
      - { title: "Marathon pace run", distance: 10 }
      - { title: Rest, tags: [Rest] }
      - { title: Recovery, distance: 4 }
      - { title: "Long run", distance: 13, tags: [Long Run] }
  - description: Race week
    workouts:
      - { title: Rest, tags: [Rest] }
      - { title: "Dress rehearsal w/ 2 mi @ MP", distance: 7 }
      - { title: Recovery, distance: 5 }
      - { title: Rest, tags: [Rest] }
      - { title: "Recovery + speed", distance: 4 }
      - { title: Rest, tags: [Rest] }
      - { title: Goal Marathon, distance: 26.2, tags: [Race] }
"#;

/// Writes `yaml` as `<id>.yaml` into `dir`.
pub fn write_plan(dir: &Path, id: &str, yaml: &str) {
    std::fs::create_dir_all(dir).expect("Failed to create plans dir");
    std::fs::write(dir.join(format!("{id}.yaml")), yaml).expect("Failed to write plan");
}

/// Session over a fresh database and a plans directory holding
/// `three_week.yaml`.
pub async fn create_test_session() -> (TempDir, Session) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let plans_dir = temp_dir.path().join("plans");
    write_plan(&plans_dir, "three_week", THREE_WEEK_PLAN);

    let session = SessionBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_plans_dir(Some(&plans_dir))
        .build()
        .await
        .expect("Failed to create session");
    (temp_dir, session)
}
