use std::path::PathBuf;

use tempfile::TempDir;
use timetable_core::{Planner, PlannerBuilder};

/// Helper function to create a test planner over the demo catalog
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let state_path = state_path(&temp_dir);
    let planner = PlannerBuilder::new()
        .with_state_path(Some(&state_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

pub fn state_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("plan.json")
}

/// Enrolled-term payload in the wire shape served by the schedule API.
pub const CURRENT_TERM_JSON: &str = r#"[
  {
    "code": "IC5701",
    "name": "Compiladores e intérpretes",
    "professor": "Allan Rodríguez Dávila",
    "section": "01",
    "term": "II-2024",
    "location": "B3-1",
    "meetings": [
      { "day": "Lunes", "startTime": "09:00", "endTime": "10:00" },
      { "day": "Jueves", "startTime": "09:00", "endTime": "10:00" }
    ]
  },
  {
    "code": "IC6831",
    "name": "Aseguramiento de la calidad del software",
    "professor": null,
    "section": "02",
    "term": "II-2024",
    "location": "",
    "meetings": [
      { "day": "Martes", "startTime": "15:00", "endTime": "16:50" }
    ]
  }
]"#;
