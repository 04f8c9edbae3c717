use tempfile::TempDir;

use super::*;
use crate::{
    error::ScheduleError,
    models::{NoOp, Outcome},
    params::{AddCourse, ApplyTemplate, RemoveCourse, SearchCatalog, SetCurrentVisible},
};

async fn create_test_planner() -> (Planner, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let state_path = temp_dir.path().join("plan.json");
    let planner = PlannerBuilder::new()
        .with_state_path(Some(&state_path))
        .build()
        .await
        .unwrap();
    (planner, temp_dir)
}

fn add(code: &str, group: u32) -> AddCourse {
    AddCourse {
        code: code.to_string(),
        group,
    }
}

#[tokio::test]
async fn test_builder_defaults_to_demo_catalog() {
    let (planner, _dir) = create_test_planner().await;
    assert_eq!(planner.catalog().term, "I-2025");
    assert!(!planner.state_path().exists());
}

#[tokio::test]
async fn test_add_course_persists() {
    let (planner, _dir) = create_test_planner().await;

    let result = planner.add_course(&add("ic6200", 1)).await.unwrap();
    assert_eq!(result.outcome, Outcome::Applied);
    assert_eq!(result.view.entries.len(), 1);
    assert!(result.view.updated_at.is_some());
    assert!(planner.state_path().exists());

    let view = planner.schedule().await.unwrap();
    assert_eq!(view.entries[0].code, "IC6200");
    assert_eq!(view.updated_at, result.view.updated_at);
}

#[tokio::test]
async fn test_rejected_mutation_does_not_touch_state_file() {
    let (planner, _dir) = create_test_planner().await;

    let first = planner.add_course(&add("IC6200", 1)).await.unwrap();
    let second = planner.add_course(&add("IC6200", 2)).await.unwrap();

    assert_eq!(
        second.outcome,
        Outcome::unchanged(NoOp::AlreadyPlanned {
            code: "IC6200".to_string()
        })
    );
    assert_eq!(second.view.updated_at, first.view.updated_at);
    assert_eq!(second.view.entries.len(), 1);
}

#[tokio::test]
async fn test_lookup_failures_are_errors() {
    let (planner, _dir) = create_test_planner().await;

    let err = planner.add_course(&add("XX0000", 1)).await.unwrap_err();
    assert!(matches!(err, ScheduleError::CourseNotFound { .. }));

    let err = planner.add_course(&add("IC7841", 2)).await.unwrap_err();
    assert!(matches!(err, ScheduleError::GroupNotFound { group: 2, .. }));
    assert!(err.is_not_found());

    let err = planner
        .apply_template(&ApplyTemplate {
            id: "weekend".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleError::TemplateNotFound { .. }));

    let err = planner
        .remove_course(&RemoveCourse { id: "  ".to_string() })
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidInput { .. }));

    assert!(!planner.state_path().exists());
}

#[tokio::test]
async fn test_remove_by_displayed_id() {
    let (planner, _dir) = create_test_planner().await;

    let added = planner.add_course(&add("AE4208", 2)).await.unwrap();
    let id = added.view.entries[0].id.to_string();

    let removed = planner.remove_course(&RemoveCourse { id: id.clone() }).await.unwrap();
    assert!(removed.is_applied());
    assert!(removed.view.entries.is_empty());

    let again = planner.remove_course(&RemoveCourse { id }).await.unwrap();
    assert!(!again.is_applied());
}

#[tokio::test]
async fn test_template_and_visibility() {
    let (planner, _dir) = create_test_planner().await;

    let result = planner
        .apply_template(&ApplyTemplate {
            id: "compact".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(result.view.entries.len(), 4);

    let hidden = planner
        .set_current_visible(&SetCurrentVisible { visible: false })
        .await
        .unwrap();
    assert!(hidden.is_applied());
    assert!(!hidden.view.show_current);

    let again = planner
        .set_current_visible(&SetCurrentVisible { visible: false })
        .await
        .unwrap();
    assert!(!again.is_applied());
    assert!(!planner.schedule().await.unwrap().show_current);
}

#[tokio::test]
async fn test_reset_forgets_everything() {
    let (planner, _dir) = create_test_planner().await;
    planner.add_course(&add("IC7602", 1)).await.unwrap();

    let view = planner.reset().await.unwrap();
    assert!(view.entries.is_empty());
    assert!(!planner.state_path().exists());
    assert!(planner.schedule().await.unwrap().entries.is_empty());
}

#[tokio::test]
async fn test_catalog_queries() {
    let (planner, _dir) = create_test_planner().await;

    let results = planner.search_catalog(&SearchCatalog {
        query: "redes".to_string(),
    });
    assert_eq!(results.len(), 1);
    assert_eq!(planner.search_catalog(&SearchCatalog::default()).len(), 4);
    assert_eq!(planner.templates().0.len(), 3);
}
