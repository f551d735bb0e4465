//! High-level planner API for subjects, sessions and revision plans.
//!
//! [`StudyPlanner`] coordinates the SQLite store and the generative text
//! service. Database work runs on tokio's blocking pool; each call opens its
//! own connection, so a planner can be cloned freely and shared between
//! tasks.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Views / CLI   │───▶│  StudyPlanner   │───▶│    Database     │
//! │                 │    │ (session_ops,   │    │   (via db/)     │
//! │                 │    │  subject_ops,   │───▶│  PlanGenerator  │
//! │                 │    │  plan_ops)      │    │ (via generator/)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`builder`]: Factory for creating [`StudyPlanner`] instances
//! - [`session_ops`]: Sign-up, sign-in, sign-out and current user
//! - [`subject_ops`]: Subject CRUD for the signed-in user
//! - [`plan_ops`]: Prompt building and the generator call
//!
//! # Example
//!
//! ```rust,no_run
//! use studypal_core::{
//!     params::{CreateSubject, Credentials},
//!     RevisionPlanView, StudyPlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = StudyPlannerBuilder::new()
//!     .with_database_path(Some("study.db"))
//!     .build()
//!     .await?;
//!
//! planner
//!     .sign_up(&Credentials {
//!         email: "sam@example.com".to_string(),
//!         password: "hunter22".to_string(),
//!     })
//!     .await?;
//! planner
//!     .add_subject(&CreateSubject {
//!         name: "Maths".to_string(),
//!         exam_date: "2025-06-10".parse()?,
//!     })
//!     .await?;
//!
//! let mut view = RevisionPlanView::new(planner);
//! if let Some(days) = view.generate_plan().await.plan() {
//!     println!("{} days planned", days.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::{
    db::Database,
    error::{join_error, Result},
    generator::PlanGenerator,
};

pub mod builder;
pub mod plan_ops;
pub mod session_ops;
pub mod subject_ops;


pub use builder::StudyPlannerBuilder;

/// Main planner interface.
#[derive(Clone)]
pub struct StudyPlanner {
    pub(crate) db_path: PathBuf,
    pub(crate) generator: Arc<dyn PlanGenerator>,
}

impl StudyPlanner {
    /// Creates a new planner with the specified database path and generator.
    pub(crate) fn new(db_path: PathBuf, generator: Arc<dyn PlanGenerator>) -> Self {
        Self { db_path, generator }
    }

    /// Path of the SQLite database backing this planner.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `f` against a fresh database connection on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(join_error)?
    }
}
