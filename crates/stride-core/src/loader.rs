//! Plan template loading, validation and discovery.
//!
//! Templates are YAML documents, one per plan, named `<id>.yaml` (or
//! `.yml`) inside a plans directory. A template is validated in full before
//! it is returned, so the schedule calculator never sees a malformed one.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::{
    error::{Result, StrideError},
    models::{Distance, Plan, PlanType, DAYS_PER_WEEK},
};

const TEMPLATE_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Parses and validates a YAML plan template.
///
/// # Errors
///
/// Returns `StrideError::Yaml` for documents that do not match the template
/// structure and `StrideError::Validation` for structurally valid documents
/// that break a template rule.
pub fn parse_plan(yaml: &str) -> Result<Plan> {
    let plan: Plan = serde_yaml::from_str(yaml)?;
    validate_plan(&plan)?;
    Ok(plan)
}

/// Checks the rules a template must satisfy before it can be scheduled.
///
/// - `id` and `name` are non-empty
/// - the schedule has at least one week
/// - every week has exactly seven workouts, each with a title
/// - distances are finite and non-negative, ranges ordered low to high
pub fn validate_plan(plan: &Plan) -> Result<()> {
    if plan.id.trim().is_empty() {
        return Err(StrideError::validation("id", "must not be empty"));
    }
    if plan.name.trim().is_empty() {
        return Err(StrideError::validation("name", "must not be empty"));
    }
    if plan.schedule.is_empty() {
        return Err(StrideError::validation("schedule", "must contain at least one week"));
    }

    for (week_index, week) in plan.schedule.iter().enumerate() {
        if week.workouts.len() != DAYS_PER_WEEK {
            return Err(StrideError::validation(
                format!("schedule[{week_index}].workouts"),
                format!(
                    "expected {DAYS_PER_WEEK} workouts, found {}",
                    week.workouts.len()
                ),
            ));
        }

        for (day_index, workout) in week.workouts.iter().enumerate() {
            let field = format!("schedule[{week_index}].workouts[{day_index}]");
            if workout.title.trim().is_empty() {
                return Err(StrideError::validation(
                    format!("{field}.title"),
                    "must not be empty",
                ));
            }
            if let Some(distance) = &workout.distance {
                validate_distance(distance)
                    .map_err(|reason| StrideError::validation(format!("{field}.distance"), reason))?;
            }
        }
    }

    Ok(())
}

fn validate_distance(distance: &Distance) -> std::result::Result<(), String> {
    let valid = |value: f64| value.is_finite() && value >= 0.0;
    match *distance {
        Distance::Single(value) if !valid(value) => {
            Err(format!("{value} is not a non-negative distance"))
        }
        Distance::Range(low, high) if !valid(low) || !valid(high) => {
            Err(format!("[{low}, {high}] is not a non-negative range"))
        }
        Distance::Range(low, high) if low > high => {
            Err(format!("range low {low} exceeds high {high}"))
        }
        _ => Ok(()),
    }
}

/// Reads, parses and validates the template at `path`.
///
/// # Errors
///
/// Returns `StrideError::PlanLoad` if the file cannot be read, otherwise the
/// errors of [`parse_plan`].
pub async fn fetch_plan(path: impl AsRef<Path>) -> Result<Plan> {
    let path = path.as_ref();
    debug!("Fetching plan template {}", path.display());

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| StrideError::PlanLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    parse_plan(&text)
}

/// Summary of a template found in a plans directory.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub id: String,
    pub name: String,
    pub plan_type: PlanType,
    pub weeks: usize,
    pub path: PathBuf,
}

/// Directory of plan templates addressed by id.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    dir: PathBuf,
}

impl PlanCatalog {
    /// Creates a catalog over `dir`. The directory is read lazily.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the catalog reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves the template file for `id`.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::PlanNotFound` if no `<id>.yaml` or `<id>.yml`
    /// exists, and `StrideError::InvalidInput` for ids containing path
    /// separators.
    pub fn path_for(&self, id: &str) -> Result<PathBuf> {
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(StrideError::invalid_input("plan_id").with_reason(format!(
                "'{id}' is not a valid plan id"
            )));
        }

        TEMPLATE_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{id}.{ext}")))
            .find(|path| path.is_file())
            .ok_or_else(|| StrideError::PlanNotFound { id: id.to_string() })
    }

    /// Loads and validates the template for `id`.
    ///
    /// # Errors
    ///
    /// See [`PlanCatalog::path_for`] and [`fetch_plan`].
    pub async fn load(&self, id: &str) -> Result<Plan> {
        let path = self.path_for(id)?;
        fetch_plan(path).await
    }

    /// Lists every valid template in the directory, sorted by id.
    ///
    /// Files that fail to parse or validate are skipped with a warning. A
    /// missing directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::FileSystem` if the directory exists but cannot
    /// be read.
    pub async fn entries(&self) -> Result<Vec<PlanEntry>> {
        let mut dir = match tokio::fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Plans directory {} does not exist", self.dir.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StrideError::FileSystem {
                    path: self.dir.clone(),
                    source: e,
                })
            }
        };

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(|e| StrideError::FileSystem {
            path: self.dir.clone(),
            source: e,
        })? {
            let path = entry.path();
            let is_template = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext));
            if !is_template {
                continue;
            }

            match fetch_plan(&path).await {
                Ok(plan) => entries.push(PlanEntry {
                    weeks: plan.total_weeks(),
                    id: plan.id,
                    name: plan.name,
                    plan_type: plan.plan_type,
                    path,
                }),
                Err(e) => warn!("Skipping invalid plan template {}: {e}", path.display()),
            }
        }

        entries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Units, test_utils::SAMPLE_YAML};

    #[test]
    fn test_parse_sample_yaml() {
        let plan = parse_plan(SAMPLE_YAML).unwrap();
        assert_eq!(plan.id, "two_week_sample");
        assert_eq!(plan.units, Units::Miles);
        assert_eq!(plan.total_weeks(), 2);
        assert_eq!(plan.schedule[0].workouts[3].distance, Some(Distance::Range(8.0, 9.0)));
        assert!(plan.schedule[1].workouts[6].is_race());
        assert_eq!(plan.schedule[1].description.as_deref(), Some("Race week"));
    }

    #[test]
    fn test_rejects_short_week() {
        let yaml = SAMPLE_YAML.replace("      - { title: Long run, distance: 16, tags: [Long Run] }\n", "");
        let err = parse_plan(&yaml).unwrap_err();
        assert!(
            matches!(err, StrideError::Validation { ref field, .. } if field == "schedule[0].workouts"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_rejects_empty_schedule() {
        let yaml = "id: empty\nname: Empty\ntype: Base\nunits: mi\nschedule: []\n";
        let err = parse_plan(yaml).unwrap_err();
        assert!(matches!(err, StrideError::Validation { ref field, .. } if field == "schedule"));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let yaml = SAMPLE_YAML.replace("distance: [8, 9]", "distance: [9, 8]");
        let err = parse_plan(&yaml).unwrap_err();
        assert!(
            matches!(err, StrideError::Validation { ref field, .. } if field == "schedule[0].workouts[3].distance")
        );
    }

    #[test]
    fn test_rejects_unknown_plan_type() {
        let yaml = SAMPLE_YAML.replace("type: Marathon", "type: Triathlon");
        assert!(matches!(parse_plan(&yaml), Err(StrideError::Yaml { .. })));
    }

    #[test]
    fn test_rejects_missing_title() {
        let yaml = SAMPLE_YAML.replace("{ title: Recovery, distance: 5 }", "{ title: \"\", distance: 5 }");
        let err = parse_plan(&yaml).unwrap_err();
        assert!(
            matches!(err, StrideError::Validation { ref field, .. } if field == "schedule[0].workouts[2].title")
        );
    }

    #[test]
    fn test_catalog_rejects_path_like_ids() {
        let catalog = PlanCatalog::new("/nonexistent");
        assert!(matches!(
            catalog.path_for("../secrets"),
            Err(StrideError::InvalidInput { .. })
        ));
        assert!(matches!(
            catalog.path_for("missing"),
            Err(StrideError::PlanNotFound { .. })
        ));
    }
}
