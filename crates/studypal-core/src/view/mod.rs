//! View-state holders for interface layers.
//!
//! Views wrap a [`crate::StudyPlanner`] and never return errors: failures
//! are caught and stored as user-facing messages in the view state, the
//! same way a screen would show them.

pub mod auth;
pub mod revision_plan;
pub mod subjects;

pub use auth::{AuthState, AuthView};
pub use revision_plan::{RevisionPlanState, RevisionPlanView};
pub use subjects::{SubjectState, SubjectView};
