//! Sample schedule returned when generated text has no recognisable days.

use crate::models::{PlanDay, PlanTask};

const FALLBACK_DAYS: [(&str, &[&str]); 2] = [
    (
        "Day 1 (10 days until first exam)",
        &[
            "[Morning Session] Review basic concepts",
            "[Morning Session] Practice problems",
            "[Afternoon Session] Advanced topics",
            "[Evening Review] Mock exam",
        ],
    ),
    (
        "Day 2 (9 days until first exam)",
        &[
            "[Morning Session] Review previous topics",
            "[Afternoon Session] Practice questions",
            "[Evening Review] Final review",
        ],
    ),
];

/// Builds the fixed two-day sample plan. Task ids run from `"1"` to `"7"`.
pub fn fallback_plan() -> Vec<PlanDay> {
    let mut next_id = 1u64;
    FALLBACK_DAYS
        .iter()
        .map(|(date, tasks)| PlanDay {
            date: (*date).to_string(),
            tasks: tasks
                .iter()
                .map(|description| {
                    let task = PlanTask::new(next_id.to_string(), *description);
                    next_id += 1;
                    task
                })
                .collect(),
        })
        .collect()
}
