//! Tests for the models module.

use jiff::{civil::date, Timestamp};

use super::*;

fn sample_days() -> Vec<PlanDay> {
    vec![
        PlanDay {
            date: "Day 1: Mon (4 days until exam)".to_string(),
            tasks: vec![
                PlanTask::new("1", "Algebra drills"),
                PlanTask::new("2", "Flashcards"),
            ],
        },
        PlanDay {
            date: "Day 2: Tue (3 days until exam)".to_string(),
            tasks: vec![PlanTask::new("3", "Past paper")],
        },
    ]
}

#[test]
fn test_toggle_flips_only_target() {
    let days = sample_days();
    let updated = toggle_task_completion(&days, "Day 1: Mon (4 days until exam)", "2");

    assert!(!updated[0].tasks[0].is_completed);
    assert!(updated[0].tasks[1].is_completed);
    assert!(!updated[1].tasks[0].is_completed);
    assert_eq!(updated[0].completed_count(), 1);
}

#[test]
fn test_toggle_twice_restores() {
    let days = sample_days();
    let once = toggle_task_completion(&days, "Day 2: Tue (3 days until exam)", "3");
    let twice = toggle_task_completion(&once, "Day 2: Tue (3 days until exam)", "3");
    assert_eq!(twice, days);
}

#[test]
fn test_toggle_requires_matching_day() {
    let days = sample_days();
    // Task 3 lives on day 2, so addressing it through day 1 changes nothing
    let updated = toggle_task_completion(&days, "Day 1: Mon (4 days until exam)", "3");
    assert_eq!(updated, days);

    let unknown = toggle_task_completion(&days, "Day 9", "1");
    assert_eq!(unknown, days);
}

#[test]
fn test_plan_day_serde_defaults() {
    let json = r#"{"date":"Day 1","tasks":[{"id":"1","description":"Read"}]}"#;
    let day: PlanDay = serde_json::from_str(json).expect("Failed to deserialize day");
    assert_eq!(day.tasks.len(), 1);
    assert!(!day.tasks[0].is_completed);
}

#[test]
fn test_subject_serializes_iso_date() {
    let subject = Subject {
        id: "abc".to_string(),
        name: "Physics".to_string(),
        exam_date: date(2025, 6, 12),
        user_id: "u1".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    };
    let json = serde_json::to_string(&subject).expect("Failed to serialize subject");
    assert!(json.contains("\"exam_date\":\"2025-06-12\""));
}

#[test]
fn test_saved_plan_keeps_completion() {
    let days = toggle_task_completion(&sample_days(), "Day 2: Tue (3 days until exam)", "3");
    let json = plan_to_json(&days).unwrap();
    assert!(json.contains("\"is_completed\": true"));
    assert_eq!(plan_from_json(&json).unwrap(), days);
}

#[test]
fn test_malformed_plan_json() {
    let err = plan_from_json("{\"date\": 1}").unwrap_err();
    assert!(matches!(err, crate::error::StudyError::Serialization { .. }));
}
