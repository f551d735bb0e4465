#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use studypal_core::{
    params::{CreateSubject, Credentials},
    PlanGenerator, Result, StudyError, StudyPlanner, StudyPlannerBuilder,
};
use tempfile::TempDir;

/// Generator that always answers with the same text, or the same error.
pub struct FixedGenerator(pub std::result::Result<&'static str, &'static str>);

#[async_trait]
impl PlanGenerator for FixedGenerator {
    fn name(&self) -> &str {
        "fixed"
    }

    fn is_configured(&self) -> bool {
        true
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.0
            .map(str::to_string)
            .map_err(StudyError::generation)
    }
}

/// Helper function to create a test planner
pub async fn create_test_planner(generator: FixedGenerator) -> (TempDir, StudyPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = StudyPlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_generator(Arc::new(generator))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Signs up a fresh user and adds one subject.
pub async fn signed_in_with_subject(planner: &StudyPlanner) {
    planner
        .sign_up(&Credentials {
            email: "student@example.com".to_string(),
            password: "revision!".to_string(),
        })
        .await
        .expect("Failed to sign up");
    planner
        .add_subject(&CreateSubject {
            name: "Physics".to_string(),
            exam_date: "2025-06-10".parse().expect("valid date"),
        })
        .await
        .expect("Failed to add subject");
}
