//! Generative text service used to draft revision plans.
//!
//! [`PlanGenerator`] is the seam between the planner and whatever model
//! writes the plan text. [`GeminiGenerator`] talks to the Gemini REST API;
//! tests substitute their own implementations.

use async_trait::async_trait;

use crate::error::Result;

pub mod gemini;

pub use gemini::{GeminiConfig, GeminiGenerator};

/// A service that turns a prompt into free-text plan output.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Whether the generator has the credentials it needs.
    fn is_configured(&self) -> bool;

    /// Sends `prompt` and returns the completion text.
    ///
    /// Failures are reported as `StudyError::Generation`.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
