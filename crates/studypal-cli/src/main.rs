//! StudyPal CLI Application
//!
//! Command-line interface for the StudyPal exam revision planner.

mod args;
mod cli;
mod commands;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::PlanCommands;
use commands::Handler;
use log::info;
use renderer::TerminalRenderer;
use studypal_core::StudyPlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let model = match &command {
        Some(Plan {
            command: PlanCommands::Generate(args),
        }) => args.model.clone(),
        Some(Plan {
            command: PlanCommands::Regenerate(args),
        }) => args.model.clone(),
        _ => None,
    };

    let planner = StudyPlannerBuilder::new()
        .with_database_path(database_file)
        .with_model(model)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let handler = Handler::new(planner, TerminalRenderer::new(!no_color));

    info!("StudyPal started");

    match command {
        Some(Auth { command }) => handler.handle_auth_command(command).await,
        Some(Subject { command }) => handler.handle_subject_command(command).await,
        Some(Plan { command }) => handler.handle_plan_command(command).await,
        None => handler.list_subjects().await,
    }
}
