//! Account screen state.

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::{error::Result, models::User, params::Credentials, StudyPlanner};

/// State of the account screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    /// Signed-in user, if any
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Holds the signed-in user and the sign-in/out actions.
pub struct AuthView {
    planner: StudyPlanner,
    state: AuthState,
}

impl AuthView {
    /// Creates a view with no user loaded. Call [`Self::check_auth_state`]
    /// to pick up an existing session.
    pub fn new(planner: StudyPlanner) -> Self {
        Self {
            planner,
            state: AuthState::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    fn settle(&mut self, action: &str, result: Result<Option<User>>) -> &AuthState {
        self.state.is_loading = false;
        match result {
            Ok(user) => {
                info!("{action} succeeded");
                self.state.user = user;
            }
            Err(e) => {
                error!("{action} failed: {e}");
                self.state.error = Some(e.to_string());
            }
        }
        &self.state
    }

    /// Loads the user of the stored session.
    pub async fn check_auth_state(&mut self) -> &AuthState {
        self.state.is_loading = true;
        let result = self.planner.current_user().await;
        self.settle("Session check", result)
    }

    /// Signs in; on failure the previous user stays and `error` is set.
    pub async fn sign_in(&mut self, params: &Credentials) -> &AuthState {
        self.state.is_loading = true;
        let result = self.planner.sign_in(params).await.map(Some);
        self.settle("Sign in", result)
    }

    /// Creates an account and signs it in.
    pub async fn sign_up(&mut self, params: &Credentials) -> &AuthState {
        self.state.is_loading = true;
        let result = self.planner.sign_up(params).await.map(Some);
        self.settle("Sign up", result)
    }

    /// Ends the session and resets the state.
    pub async fn sign_out(&mut self) -> &AuthState {
        match self.planner.sign_out().await {
            Ok(()) => {
                info!("Sign out succeeded");
                self.state = AuthState::default();
            }
            Err(e) => {
                error!("Sign out failed: {e}");
                self.state.error = Some(e.to_string());
            }
        }
        &self.state
    }

    /// Dismisses the current error message.
    pub fn clear_error(&mut self) {
        self.state.error = None;
    }
}
