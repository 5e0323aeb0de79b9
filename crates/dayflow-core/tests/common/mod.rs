use jiff::civil::{date, DateTime};
use tempfile::TempDir;

/// Fixed "now" used by the integration tests.
pub fn monday_morning() -> DateTime {
    date(2024, 3, 4).at(7, 0, 0, 0)
}

/// Helper function to create a test planner backed by a temp snapshot file.
pub fn create_test_planner() -> (TempDir, dayflow_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("snapshot.json");
    let planner = dayflow_core::PlannerBuilder::new()
        .with_snapshot_path(Some(&path))
        .build(monday_morning())
        .expect("Failed to create planner");
    (temp_dir, planner)
}
