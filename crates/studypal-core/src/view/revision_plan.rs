//! Revision plan screen state.

use jiff::{civil::Date, Zoned};
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::{
    models::{toggle_task_completion, PlanDay},
    StudyPlanner,
};

/// Message shown when the user has not added any subjects yet.
pub const NO_SUBJECTS_MESSAGE: &str = "No subjects found. Please add subjects first.";

/// State of the revision plan screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevisionPlanState {
    Loading,
    Success(Vec<PlanDay>),
    Error(String),
}

impl RevisionPlanState {
    /// The plan, when one is loaded.
    pub fn plan(&self) -> Option<&[PlanDay]> {
        match self {
            Self::Success(days) => Some(days),
            _ => None,
        }
    }

    /// The error message, when generation failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Holds the revision plan state and the actions the screen offers.
pub struct RevisionPlanView {
    planner: StudyPlanner,
    state: RevisionPlanState,
}

impl RevisionPlanView {
    /// Creates a view in the `Loading` state. Call [`Self::generate_plan`]
    /// to fill it.
    pub fn new(planner: StudyPlanner) -> Self {
        Self {
            planner,
            state: RevisionPlanState::Loading,
        }
    }

    /// Creates a view already showing `days`, such as a saved plan.
    pub fn with_plan(planner: StudyPlanner, days: Vec<PlanDay>) -> Self {
        Self {
            planner,
            state: RevisionPlanState::Success(days),
        }
    }

    /// Current state.
    pub fn state(&self) -> &RevisionPlanState {
        &self.state
    }

    /// Generates a plan from the user's subjects as of today.
    pub async fn generate_plan(&mut self) -> &RevisionPlanState {
        self.generate_plan_on(Zoned::now().date()).await
    }

    /// Generates a plan from the user's subjects as of `today`.
    pub async fn generate_plan_on(&mut self, today: Date) -> &RevisionPlanState {
        self.state = RevisionPlanState::Loading;
        self.state = self.load(today).await;
        &self.state
    }

    /// Discards the current plan, including task progress, and asks for a
    /// new one.
    pub async fn regenerate_plan(&mut self) -> &RevisionPlanState {
        self.generate_plan().await
    }

    async fn load(&self, today: Date) -> RevisionPlanState {
        let subjects = match self.planner.list_subjects().await {
            Ok(subjects) => subjects,
            Err(e) => {
                error!("Error loading subjects: {e}");
                return RevisionPlanState::Error(e.to_string());
            }
        };

        if subjects.is_empty() {
            error!("No subjects found");
            return RevisionPlanState::Error(NO_SUBJECTS_MESSAGE.to_string());
        }

        match self.planner.generate_plan_text(&subjects, today).await {
            Ok(text) => {
                let days = crate::parser::parse_plan(&text);
                info!("Generated plan with {} days", days.len());
                RevisionPlanState::Success(days)
            }
            Err(e) => {
                error!("Error generating plan: {e}");
                RevisionPlanState::Error(e.to_string())
            }
        }
    }

    /// Flips a task's completion flag. Does nothing unless a plan is loaded.
    pub fn toggle_task_completion(&mut self, date: &str, task_id: &str) {
        if let RevisionPlanState::Success(days) = &self.state {
            self.state = RevisionPlanState::Success(toggle_task_completion(days, date, task_id));
        }
    }
}
