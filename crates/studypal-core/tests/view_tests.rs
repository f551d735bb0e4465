mod common;

use common::{create_test_planner, signed_in_with_subject, FixedGenerator};
use jiff::civil::date;
use studypal_core::{
    params::{CreateSubject, SubjectId, UpdateSubject},
    view::revision_plan::NO_SUBJECTS_MESSAGE,
    AuthView, Credentials, RevisionPlanState, RevisionPlanView, SubjectView,
};

const REPLY: &str = "\
**Day 1: Mon (9 days until first exam)**
Morning Session:
• Physics - Waves
  - Practice questions
";

#[tokio::test]
async fn test_plan_view_success_and_toggle() {
    let (_temp_dir, planner) = create_test_planner(FixedGenerator(Ok(REPLY))).await;
    signed_in_with_subject(&planner).await;

    let mut view = RevisionPlanView::new(planner);
    assert_eq!(view.state(), &RevisionPlanState::Loading);

    let state = view.generate_plan_on(date(2025, 6, 1)).await;
    let days = state.plan().expect("Plan should be loaded").to_vec();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].tasks.len(), 2);

    view.toggle_task_completion("Day 1: Mon (9 days until first exam)", "2");
    let toggled = view.state().plan().unwrap();
    assert!(!toggled[0].tasks[0].is_completed);
    assert!(toggled[0].tasks[1].is_completed);
}

#[tokio::test]
async fn test_plan_view_without_subjects() {
    let (_temp_dir, planner) = create_test_planner(FixedGenerator(Ok(REPLY))).await;
    planner
        .sign_up(&Credentials {
            email: "new@example.com".to_string(),
            password: "password1".to_string(),
        })
        .await
        .unwrap();

    let mut view = RevisionPlanView::new(planner);
    let state = view.generate_plan_on(date(2025, 6, 1)).await;
    assert_eq!(state.error(), Some(NO_SUBJECTS_MESSAGE));

    // Toggling outside the success state does nothing
    view.toggle_task_completion("Day 1", "1");
    assert_eq!(view.state().error(), Some(NO_SUBJECTS_MESSAGE));
}

#[tokio::test]
async fn test_plan_view_generator_error() {
    let (_temp_dir, planner) =
        create_test_planner(FixedGenerator(Err("model overloaded"))).await;
    signed_in_with_subject(&planner).await;

    let mut view = RevisionPlanView::new(planner);
    let state = view.generate_plan_on(date(2025, 6, 1)).await;
    assert_eq!(
        state,
        &RevisionPlanState::Error("Error generating revision plan: model overloaded".to_string())
    );
}

#[tokio::test]
async fn test_plan_view_signed_out() {
    let (_temp_dir, planner) = create_test_planner(FixedGenerator(Ok(REPLY))).await;
    let mut view = RevisionPlanView::new(planner);
    let state = view.generate_plan_on(date(2025, 6, 1)).await;
    assert_eq!(state.error(), Some("User not authenticated"));
}

#[tokio::test]
async fn test_subject_view_requires_sign_in() {
    let (_temp_dir, planner) = create_test_planner(FixedGenerator(Ok(REPLY))).await;
    let mut view = SubjectView::new(planner);

    let state = view.load_subjects().await;
    assert_eq!(state.error.as_deref(), Some("Please sign in to view subjects"));
    assert!(!state.is_loading);

    let state = view
        .add_subject(&CreateSubject {
            name: "Maths".to_string(),
            exam_date: date(2025, 6, 10),
        })
        .await;
    assert_eq!(state.error.as_deref(), Some("Please sign in to save subjects"));

    let state = view
        .update_subject(&UpdateSubject {
            id: "x".to_string(),
            ..UpdateSubject::default()
        })
        .await;
    assert_eq!(state.error.as_deref(), Some("Please sign in to update subjects"));

    let state = view.delete_subject(&SubjectId { id: "x".to_string() }).await;
    assert_eq!(state.error.as_deref(), Some("Please sign in to delete subjects"));

    view.clear_error();
    assert!(view.state().error.is_none());
}

#[tokio::test]
async fn test_subject_view_mutations_reload() {
    let (_temp_dir, planner) = create_test_planner(FixedGenerator(Ok(REPLY))).await;
    signed_in_with_subject(&planner).await;
    let mut view = SubjectView::new(planner);

    let state = view
        .add_subject(&CreateSubject {
            name: "Chemistry".to_string(),
            exam_date: date(2025, 6, 5),
        })
        .await;
    assert!(state.error.is_none());
    let names: Vec<&str> = state.subjects.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Chemistry", "Physics"]);

    let physics_id = state.subjects[1].id.clone();
    let state = view
        .update_subject(&UpdateSubject {
            id: physics_id.clone(),
            name: Some("Applied Physics".to_string()),
            exam_date: None,
        })
        .await;
    assert_eq!(state.subjects[1].name, "Applied Physics");

    let state = view.delete_subject(&SubjectId { id: physics_id }).await;
    assert_eq!(state.subjects.len(), 1);

    let state = view
        .delete_subject(&SubjectId {
            id: "missing".to_string(),
        })
        .await;
    assert_eq!(
        state.error.as_deref(),
        Some("Subject with ID missing not found")
    );
    // A failed mutation keeps the last loaded list
    assert_eq!(state.subjects.len(), 1);
}

fn credentials(password: &str) -> Credentials {
    Credentials {
        email: "auth@example.com".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_auth_view_sign_up_and_out() {
    let (_temp_dir, planner) = create_test_planner(FixedGenerator(Ok(REPLY))).await;
    let mut view = AuthView::new(planner.clone());

    let state = view.check_auth_state().await;
    assert!(state.user.is_none());
    assert!(state.error.is_none());

    let state = view.sign_up(&credentials("secret1")).await;
    assert!(!state.is_loading);
    assert_eq!(
        state.user.as_ref().map(|u| u.email.as_str()),
        Some("auth@example.com")
    );

    // A fresh view picks the session up again
    let mut other = AuthView::new(planner);
    let state = other.check_auth_state().await;
    assert_eq!(
        state.user.as_ref().map(|u| u.email.as_str()),
        Some("auth@example.com")
    );

    let state = view.sign_out().await;
    assert!(state.user.is_none());
    assert!(other.check_auth_state().await.user.is_none());
}

#[tokio::test]
async fn test_auth_view_keeps_failures_as_messages() {
    let (_temp_dir, planner) = create_test_planner(FixedGenerator(Ok(REPLY))).await;
    let mut view = AuthView::new(planner);

    let state = view.sign_in(&credentials("secret1")).await;
    assert_eq!(
        state.error.as_deref(),
        Some("Authentication failed: Invalid email or password")
    );
    assert!(state.user.is_none());
    assert!(!state.is_loading);

    view.clear_error();
    let state = view.sign_up(&credentials("short")).await;
    assert!(state
        .error
        .as_deref()
        .is_some_and(|e| e.contains("at least 6 characters")));

    view.clear_error();
    assert!(view.state().error.is_none());
}

#[tokio::test]
async fn test_regenerate_replaces_saved_plan() {
    let (_temp_dir, planner) = create_test_planner(FixedGenerator(Ok(REPLY))).await;
    signed_in_with_subject(&planner).await;

    let saved = studypal_core::toggle_task_completion(
        &studypal_core::fallback_plan(),
        "Day 1 (10 days until first exam)",
        "1",
    );
    let mut view = RevisionPlanView::with_plan(planner, saved.clone());
    assert_eq!(view.state().plan(), Some(saved.as_slice()));

    let days = view.regenerate_plan().await.plan().expect("Plan should be loaded");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date, "Day 1: Mon (9 days until first exam)");
    assert!(days[0].tasks.iter().all(|t| !t.is_completed));
}

#[tokio::test]
async fn test_regenerate_failure_reports_error() {
    let (_temp_dir, planner) = create_test_planner(FixedGenerator(Err("offline"))).await;
    signed_in_with_subject(&planner).await;

    let mut view = RevisionPlanView::with_plan(planner, studypal_core::fallback_plan());
    let state = view.regenerate_plan().await;
    assert_eq!(state.error(), Some("Error generating revision plan: offline"));
}
