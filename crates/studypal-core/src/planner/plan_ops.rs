//! Revision plan generation for the StudyPlanner.

use jiff::civil::Date;
use log::info;

use super::StudyPlanner;
use crate::{
    error::Result,
    models::Subject,
    prompt::{build_revision_prompt, PromptSubject},
};

impl StudyPlanner {
    /// Name of the configured generator.
    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Asks the generator for raw plan text covering `subjects`.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidInput` for an empty subject list and
    /// `StudyError::Generation` when the service fails.
    pub async fn generate_plan_text(&self, subjects: &[Subject], today: Date) -> Result<String> {
        let prompt_subjects: Vec<PromptSubject> = subjects.iter().map(Into::into).collect();
        let prompt = build_revision_prompt(&prompt_subjects, today)?;

        info!(
            "Generating plan for {} subjects with {}",
            subjects.len(),
            self.generator.name()
        );
        self.generator.generate(&prompt).await
    }
}
