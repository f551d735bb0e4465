//! Data models for subjects, users and revision plans.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that the data structures stay free of
//! presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use studypal_core::models::{toggle_task_completion, PlanDay, PlanTask};
//!
//! let days = vec![PlanDay {
//!     date: "Day 1: Mon (3 days until exam)".to_string(),
//!     tasks: vec![PlanTask::new("1", "Read chapter 4")],
//! }];
//!
//! let updated = toggle_task_completion(&days, "Day 1: Mon (3 days until exam)", "1");
//! assert!(updated[0].tasks[0].is_completed);
//! assert!(!days[0].tasks[0].is_completed);
//! ```

pub mod plan;
pub mod subject;
pub mod user;

#[cfg(test)]
mod tests;

pub use plan::{plan_from_json, plan_to_json, toggle_task_completion, PlanDay, PlanTask};
pub use subject::Subject;
pub use user::User;
