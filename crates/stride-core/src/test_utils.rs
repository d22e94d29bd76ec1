//! Shared fixtures for unit tests.

use crate::models::{Distance, Plan, PlanType, Units, Week, Workout};

/// A realistic week of marathon training, `n` weeks out from race day.
fn training_week(n: usize) -> Week {
    let long = 14.0 + n as f64;
    Week {
        description: Some(format!("Build week {n}")),
        distance: None,
        workouts: vec![
            Workout::new("Rest or cross-training").with_tag("Rest"),
            Workout::new(format!("Lactate threshold {{8:13}} w/ {n} mi @ LT"))
                .with_distance(Distance::Single(8.0)),
            Workout::new("Recovery").with_distance(Distance::Single(5.0)),
            Workout::new(format!("Medium-long run week {n}"))
                .with_distance(Distance::Range(11.0, 12.0)),
            Workout::new("Rest or cross-training").with_tag("Rest"),
            Workout::new("Recovery + speed")
                .with_distance(Distance::Single(6.0))
                .with_description("10 x 100m strides"),
            Workout::new(format!("Long run {long}"))
                .with_distance(Distance::Single(long))
                .with_tag("Long Run"),
        ],
    }
}

/// A plan with `weeks` distinct training weeks.
pub(crate) fn sample_plan_with_weeks(weeks: usize) -> Plan {
    Plan {
        id: "sample".to_string(),
        name: "Sample Marathon Plan".to_string(),
        description: Some("Fixture plan".to_string()),
        plan_type: PlanType::Marathon,
        units: Units::Miles,
        source: None,
        schedule: (0..weeks).map(training_week).collect(),
    }
}

/// Three-week fixture used by most schedule tests.
pub(crate) fn sample_plan() -> Plan {
    sample_plan_with_weeks(3)
}

/// YAML text of a valid two-week template.
pub(crate) const SAMPLE_YAML: &str = r#"
id: two_week_sample
name: Two Week Sample
description: A short plan for tests
type: Marathon
units: mi
schedule:
  - workouts:
      - { title: Rest, tags: [Rest] }
      - { title: "General aerobic {8:13}", distance: 8 }
      - { title: Recovery, distance: 5 }
      - { title: "Lactate threshold", distance: [8, 9] }
      - { title: Rest, tags: [Rest] }
      - { title: Recovery, distance: 5 }
      - { title: Long run, distance: 16, tags: [Long Run] }
  - description: Race week
    workouts:
      - { title: Rest, tags: [Rest] }
      - { title: "Dress rehearsal w/ 2 mi @ MP", distance: 7 }
      - { title: Recovery, distance: 5 }
      - { title: Rest, tags: [Rest] }
      - { title: Recovery + speed, distance: 4 }
      - { title: Rest, tags: [Rest] }
      - { title: Goal Marathon, distance: 26.2, tags: [Race] }
"#;
