//! Builder for creating and configuring StudyPlanner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::{debug, warn};
use tokio::task;

use super::StudyPlanner;
use crate::{
    db::Database,
    error::{join_error, Result, StudyError},
    generator::{gemini::API_KEY_ENV, GeminiConfig, GeminiGenerator, PlanGenerator},
};

/// Builder for creating and configuring StudyPlanner instances.
#[derive(Clone, Default)]
pub struct StudyPlannerBuilder {
    database_path: Option<PathBuf>,
    generator: Option<Arc<dyn PlanGenerator>>,
    model: Option<String>,
}

impl StudyPlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/studypal/studypal.db` or
    /// `~/.local/share/studypal/studypal.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses `generator` instead of the Gemini client.
    pub fn with_generator(mut self, generator: Arc<dyn PlanGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Overrides the Gemini model name. Ignored with a custom generator.
    pub fn with_model<S: Into<String>>(mut self, model: Option<S>) -> Self {
        if let Some(model) = model {
            self.model = Some(model.into());
        }
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::FileSystem` if the database directory cannot be
    /// created. Returns `StudyError::Database` if database initialization
    /// fails.
    pub async fn build(self) -> Result<StudyPlanner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StudyError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), StudyError>(())
        })
        .await
        .map_err(join_error)??;

        let generator = match self.generator {
            Some(generator) => generator,
            None => {
                let mut config = GeminiConfig::from_env();
                if let Some(model) = self.model {
                    config = config.with_model(model);
                }
                let generator = GeminiGenerator::new(config);
                debug!("Using Gemini model {}", generator.config().model);
                if !generator.is_configured() {
                    warn!("{API_KEY_ENV} is not set; plan generation will fail");
                }
                Arc::new(generator)
            }
        };

        Ok(StudyPlanner::new(db_path, generator))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("studypal")
            .place_data_file("studypal.db")
            .map_err(|e| StudyError::XdgDirectory(e.to_string()))
    }
}
