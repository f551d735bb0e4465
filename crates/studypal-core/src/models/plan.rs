//! Revision plan records produced by the plan text parser.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One day of a revision plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanDay {
    /// Day header text exactly as extracted from the generated plan
    pub date: String,

    /// Tasks in the order they appeared under the header
    #[serde(default)]
    pub tasks: Vec<PlanTask>,
}

/// A single task within a plan day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanTask {
    /// Sequential identifier, unique across the whole parsed plan
    pub id: String,

    /// Task text, optionally prefixed with `[<session>] `
    pub description: String,

    /// Whether the user has ticked the task off
    #[serde(default)]
    pub is_completed: bool,
}

impl PlanTask {
    /// Creates an incomplete task.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            is_completed: false,
        }
    }
}

impl PlanDay {
    /// Number of completed tasks in this day.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed).count()
    }
}

/// Returns a copy of `days` with the completion flag of the task identified
/// by `date` and `task_id` flipped. Unknown targets yield an identical copy.
pub fn toggle_task_completion(days: &[PlanDay], date: &str, task_id: &str) -> Vec<PlanDay> {
    days.iter()
        .map(|day| {
            if day.date != date {
                return day.clone();
            }
            PlanDay {
                date: day.date.clone(),
                tasks: day
                    .tasks
                    .iter()
                    .map(|task| {
                        if task.id == task_id {
                            PlanTask {
                                is_completed: !task.is_completed,
                                ..task.clone()
                            }
                        } else {
                            task.clone()
                        }
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Serializes a plan for saving, pretty-printed.
pub fn plan_to_json(days: &[PlanDay]) -> Result<String> {
    Ok(serde_json::to_string_pretty(days)?)
}

/// Reads a plan saved with [`plan_to_json`].
pub fn plan_from_json(json: &str) -> Result<Vec<PlanDay>> {
    Ok(serde_json::from_str(json)?)
}
