//! Core library for the StudyPal revision planner.
//!
//! Users register subjects with exam dates, a generative language model
//! drafts a day-by-day revision schedule, and [`parser::parse_plan`] turns
//! that free text into [`PlanDay`] and [`PlanTask`] records.
//!
//! # Layout
//!
//! - [`parser`]: the plan text parser and its fallback schedule
//! - [`prompt`]: the prompt sent to the generative service
//! - [`generator`]: the [`PlanGenerator`] seam and the Gemini client
//! - [`db`]: SQLite storage for users, the session and subjects
//! - [`planner`]: async [`StudyPlanner`] facade over storage and generation
//! - [`view`]: view-state holders that turn failures into messages
//! - [`display`]: markdown formatting for models and collections
//!
//! # Quick Start
//!
//! ```rust
//! use studypal_core::parse_plan;
//!
//! let text = "\
//! **Day 1: Monday (10 days until first exam)**
//! Morning Session (9:00 AM - 12:00 PM):
//! • Maths - Algebra
//!   - Practice questions
//! ";
//!
//! let days = parse_plan(text);
//! assert_eq!(days[0].date, "Day 1: Monday (10 days until first exam)");
//! assert_eq!(days[0].tasks.len(), 2);
//! assert_eq!(days[0].tasks[1].id, "2");
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod parser;
pub mod planner;
pub mod prompt;
pub mod view;

// Re-export commonly used types
pub use db::Database;
pub use display::{OperationStatus, RevisionPlan, Subjects};
pub use error::{Result, StudyError};
pub use generator::{GeminiConfig, GeminiGenerator, PlanGenerator};
pub use models::{
    plan_from_json, plan_to_json, toggle_task_completion, PlanDay, PlanTask, Subject, User,
};
pub use params::{CreateSubject, Credentials, SubjectId, ToggleTask, UpdateSubject};
pub use parser::{fallback_plan, parse_plan};
pub use planner::{StudyPlanner, StudyPlannerBuilder};
pub use view::{
    AuthState, AuthView, RevisionPlanState, RevisionPlanView, SubjectState, SubjectView,
};
