use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AuthCommands, PlanCommands, SubjectCommands};

/// Exam revision planner
///
/// Register the subjects you are sitting with their exam dates, then ask a
/// generative model for a day-by-day revision schedule. Generated plans can
/// be saved as JSON and ticked off task by task.
#[derive(Parser)]
#[command(version, about, name = "studypal")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/studypal/studypal.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the StudyPal CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Sign up, sign in and out
    #[command(alias = "a")]
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Manage subjects and exam dates
    #[command(alias = "s")]
    Subject {
        #[command(subcommand)]
        command: SubjectCommands,
    },
    /// Generate and track revision plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}
