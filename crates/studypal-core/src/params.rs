//! Parameter structures for StudyPal operations
//!
//! Shared parameter structures used by the planner and by interface layers
//! such as the CLI. They carry no framework-specific derives; interface
//! layers define their own argument types and convert into these with
//! `From` implementations.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│  StudyPlanner   │
//! │  (clap derives) │    │ (minimal deps)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Email/password pair for sign-in and sign-up.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email address
    pub email: String,
    /// Plain-text password; only ever hashed, never stored
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Parameters for adding a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubject {
    /// Subject name
    pub name: String,
    /// Exam date
    pub exam_date: Date,
}

/// Parameters for updating a subject. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSubject {
    /// ID of the subject to update
    pub id: String,
    /// New name
    pub name: Option<String>,
    /// New exam date
    pub exam_date: Option<Date>,
}

/// Generic parameters for operations requiring just a subject ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectId {
    /// The ID of the subject to operate on
    pub id: String,
}

/// Identifies a task within a parsed plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleTask {
    /// Day header text of the day holding the task
    pub date: String,
    /// Task ID within the plan
    pub task_id: String,
}
