//! Display formatting for domain models and collections.
//!
//! Models implement [`std::fmt::Display`] (see [`models`]) and produce
//! markdown; collection newtypes in [`collections`] add headings and empty
//! collection handling. The CLI renders the markdown with termimad or prints
//! it as plain text.
//!
//! ```rust
//! use studypal_core::{display::RevisionPlan, parser::fallback_plan};
//!
//! let output = RevisionPlan(fallback_plan()).to_string();
//! assert!(output.contains("## Day 1 (10 days until first exam)"));
//! assert!(output.contains("- ○ 1. [Morning Session] Review basic concepts"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::{RevisionPlan, Subjects};
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
