//! Command-line argument definitions using clap
//!
//! Argument structs carry the clap derives and convert into the
//! framework-free parameter types from `studypal_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → StudyPlanner
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dialoguer::Password;
use jiff::civil::Date;
use studypal_core::params::*;

/// Email and password for an account
#[derive(Args)]
pub struct CredentialsArgs {
    /// Account email address
    pub email: String,
    /// Account password (at least 6 characters). Prompted for when omitted
    #[arg(short, long, env = "STUDYPAL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl CredentialsArgs {
    /// Converts into core credentials, asking on the terminal when no
    /// password was given. `confirm` asks twice, for new accounts.
    pub fn into_credentials(self, confirm: bool) -> Result<Credentials> {
        let password = match self.password {
            Some(password) => password,
            None => {
                let mut prompt = Password::new().with_prompt("Password");
                if confirm {
                    prompt = prompt.with_confirmation("Repeat password", "Passwords do not match");
                }
                prompt.interact().context("Failed to read password")?
            }
        };
        Ok(Credentials {
            email: self.email,
            password,
        })
    }
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account and sign in
    SignUp(CredentialsArgs),
    /// Sign in to an existing account
    #[command(alias = "login")]
    SignIn(CredentialsArgs),
    /// Sign out
    #[command(alias = "logout")]
    SignOut,
    /// Show the signed-in account
    Whoami,
}

/// Add a subject
#[derive(Args)]
pub struct AddSubjectArgs {
    /// Subject name
    pub name: String,
    /// Exam date (YYYY-MM-DD)
    pub exam_date: Date,
}

impl From<AddSubjectArgs> for CreateSubject {
    fn from(val: AddSubjectArgs) -> Self {
        CreateSubject {
            name: val.name,
            exam_date: val.exam_date,
        }
    }
}

/// Update a subject's name or exam date
#[derive(Args)]
pub struct UpdateSubjectArgs {
    #[arg(help = "ID of the subject to update")]
    pub id: String,
    #[arg(short, long, help = "New subject name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New exam date (YYYY-MM-DD)")]
    pub exam_date: Option<Date>,
}

impl From<UpdateSubjectArgs> for UpdateSubject {
    fn from(val: UpdateSubjectArgs) -> Self {
        UpdateSubject {
            id: val.id,
            name: val.name,
            exam_date: val.exam_date,
        }
    }
}

/// Delete a subject
#[derive(Args)]
pub struct DeleteSubjectArgs {
    #[arg(help = "ID of the subject to delete")]
    pub id: String,
}

impl From<DeleteSubjectArgs> for SubjectId {
    fn from(val: DeleteSubjectArgs) -> Self {
        SubjectId { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum SubjectCommands {
    /// Add a subject with its exam date
    #[command(alias = "a")]
    Add(AddSubjectArgs),
    /// List your subjects, earliest exam first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Update a subject
    #[command(alias = "u")]
    Update(UpdateSubjectArgs),
    /// Delete a subject
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteSubjectArgs),
}

/// Generate a plan from your subjects
#[derive(Args)]
pub struct GeneratePlanArgs {
    /// Gemini model to use instead of the configured one
    #[arg(short, long)]
    pub model: Option<String>,
    /// Save the parsed plan as JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Replace a saved plan with a freshly generated one
#[derive(Args)]
pub struct RegeneratePlanArgs {
    /// Saved plan JSON file, rewritten on success
    pub file: PathBuf,
    /// Gemini model to use instead of the configured one
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Parse plan text produced elsewhere
#[derive(Args)]
pub struct ParsePlanArgs {
    /// File holding the plan text. Reads stdin when omitted
    pub file: Option<PathBuf>,
    /// Save the parsed plan as JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Show a saved plan
#[derive(Args)]
pub struct ShowPlanArgs {
    /// Saved plan JSON file
    pub file: PathBuf,
}

/// Tick or untick a task in a saved plan
#[derive(Args)]
pub struct TogglePlanTaskArgs {
    /// Saved plan JSON file
    pub file: PathBuf,
    /// Day header text, exactly as shown
    pub day: String,
    /// Task number
    pub task_id: String,
}

impl From<&TogglePlanTaskArgs> for ToggleTask {
    fn from(val: &TogglePlanTaskArgs) -> Self {
        ToggleTask {
            date: val.day.clone(),
            task_id: val.task_id.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a revision plan with Gemini
    #[command(alias = "g")]
    Generate(GeneratePlanArgs),
    /// Generate a new plan over a saved one
    #[command(alias = "r")]
    Regenerate(RegeneratePlanArgs),
    /// Parse plan text into days and tasks
    Parse(ParsePlanArgs),
    /// Show a saved plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Flip a task's completion in a saved plan
    #[command(alias = "t")]
    Toggle(TogglePlanTaskArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_given_password_skips_prompt() {
        let args = CredentialsArgs {
            email: "student@example.com".to_string(),
            password: Some("revision!".to_string()),
        };
        let credentials = args.into_credentials(true).unwrap();
        assert_eq!(credentials.email, "student@example.com");
        assert_eq!(credentials.password, "revision!");
    }
}
