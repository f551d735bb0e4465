//! Subject list screen state.

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::{
    error::StudyError,
    models::Subject,
    params::{CreateSubject, SubjectId, UpdateSubject},
    StudyPlanner,
};

/// State of the subject list screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectState {
    pub subjects: Vec<Subject>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Which action failed, used to word the sign-in prompt.
#[derive(Debug, Clone, Copy)]
enum Action {
    Save,
    Update,
    Delete,
    View,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Save => "save",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::View => "view",
        }
    }
}

fn user_message(action: Action, err: &StudyError) -> String {
    if err.is_unauthenticated() {
        format!("Please sign in to {} subjects", action.verb())
    } else {
        err.to_string()
    }
}

/// Holds the subject list and the actions the screen offers.
pub struct SubjectView {
    planner: StudyPlanner,
    state: SubjectState,
}

impl SubjectView {
    /// Creates an empty view. Call [`Self::load_subjects`] to fill it.
    pub fn new(planner: StudyPlanner) -> Self {
        Self {
            planner,
            state: SubjectState::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &SubjectState {
        &self.state
    }

    fn fail(&mut self, action: Action, err: &StudyError) {
        error!("Subject {} failed: {err}", action.verb());
        self.state.error = Some(user_message(action, err));
        self.state.is_loading = false;
    }

    /// Adds a subject and reloads the list.
    pub async fn add_subject(&mut self, params: &CreateSubject) -> &SubjectState {
        self.state.is_loading = true;
        match self.planner.add_subject(params).await {
            Ok(_) => self.load_subjects().await,
            Err(e) => {
                self.fail(Action::Save, &e);
                &self.state
            }
        }
    }

    /// Updates a subject and reloads the list.
    pub async fn update_subject(&mut self, params: &UpdateSubject) -> &SubjectState {
        self.state.is_loading = true;
        match self.planner.update_subject(params).await {
            Ok(_) => self.load_subjects().await,
            Err(e) => {
                self.fail(Action::Update, &e);
                &self.state
            }
        }
    }

    /// Deletes a subject and reloads the list.
    pub async fn delete_subject(&mut self, params: &SubjectId) -> &SubjectState {
        self.state.is_loading = true;
        match self.planner.delete_subject(params).await {
            Ok(_) => self.load_subjects().await,
            Err(e) => {
                self.fail(Action::Delete, &e);
                &self.state
            }
        }
    }

    /// Reloads the subject list, clearing any previous error.
    pub async fn load_subjects(&mut self) -> &SubjectState {
        match self.planner.list_subjects().await {
            Ok(subjects) => {
                debug!("Loaded {} subjects", subjects.len());
                self.state = SubjectState {
                    subjects,
                    is_loading: false,
                    error: None,
                };
            }
            Err(e) => self.fail(Action::View, &e),
        }
        &self.state
    }

    /// Dismisses the current error message.
    pub fn clear_error(&mut self) {
        self.state.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_unauthenticated() {
        let err = StudyError::Unauthenticated;
        assert_eq!(
            user_message(Action::Save, &err),
            "Please sign in to save subjects"
        );
        assert_eq!(
            user_message(Action::View, &err),
            "Please sign in to view subjects"
        );
    }

    #[test]
    fn test_user_message_passes_other_errors_through() {
        let err = StudyError::Unauthorized {
            id: "abc".to_string(),
        };
        assert_eq!(
            user_message(Action::Delete, &err),
            "Unauthorized access to subject abc"
        );
    }
}
