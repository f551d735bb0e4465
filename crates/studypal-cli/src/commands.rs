//! Command handlers. Each handler drives a planner operation or view and
//! renders the result as markdown.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{bail, Context, Result};
use log::debug;
use studypal_core::{
    params::{SubjectId, ToggleTask},
    parse_plan, plan_from_json, plan_to_json, toggle_task_completion, AuthView, OperationStatus,
    PlanDay, RevisionPlan, RevisionPlanState, RevisionPlanView, StudyPlanner, SubjectView,
    Subjects,
};

use crate::{
    cli::{
        AuthCommands, GeneratePlanArgs, ParsePlanArgs, PlanCommands, RegeneratePlanArgs,
        ShowPlanArgs, SubjectCommands, TogglePlanTaskArgs,
    },
    renderer::TerminalRenderer,
};

pub struct Handler {
    planner: StudyPlanner,
    renderer: TerminalRenderer,
}

fn read_plan_file(path: &Path) -> Result<Vec<PlanDay>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    plan_from_json(&json).with_context(|| format!("Invalid plan file {}", path.display()))
}

fn write_plan_file(path: &Path, days: &[PlanDay]) -> Result<()> {
    let json = plan_to_json(days)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write plan file {}", path.display()))?;
    debug!("Saved {} days to {}", days.len(), path.display());
    Ok(())
}

/// Turns a view's error slot into a status line, or into an error the
/// binary reports with exit code 1.
fn checked_status(error: Option<&str>, success_message: &str) -> Result<OperationStatus> {
    let status = OperationStatus::from_view_error(error, success_message);
    if !status.success {
        bail!("{}", status.message);
    }
    Ok(status)
}

fn plan_from_state(state: &RevisionPlanState) -> Result<Vec<PlanDay>> {
    match state {
        RevisionPlanState::Success(days) => Ok(days.clone()),
        RevisionPlanState::Error(message) => bail!("{message}"),
        RevisionPlanState::Loading => bail!("Plan generation did not finish"),
    }
}

impl Handler {
    pub fn new(planner: StudyPlanner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_auth_command(&self, command: AuthCommands) -> Result<()> {
        let mut view = AuthView::new(self.planner.clone());
        let (state, message) = match command {
            AuthCommands::SignUp(args) => {
                let credentials = args.into_credentials(true)?;
                (view.sign_up(&credentials).await, "Account created")
            }
            AuthCommands::SignIn(args) => {
                let credentials = args.into_credentials(false)?;
                (view.sign_in(&credentials).await, "Signed in")
            }
            AuthCommands::SignOut => (view.sign_out().await, "Signed out"),
            AuthCommands::Whoami => {
                let state = view.check_auth_state().await;
                checked_status(state.error.as_deref(), "")?;
                match &state.user {
                    Some(user) => self.renderer.render(&user.to_string()),
                    None => self.renderer.render("Not signed in.\n"),
                }
                return Ok(());
            }
        };

        let status = checked_status(state.error.as_deref(), message)?;
        self.renderer.render(&status.to_string());
        if let Some(user) = &state.user {
            self.renderer.render(&user.to_string());
        }
        Ok(())
    }

    pub async fn handle_subject_command(&self, command: SubjectCommands) -> Result<()> {
        let mut view = SubjectView::new(self.planner.clone());
        let (state, message) = match command {
            SubjectCommands::Add(args) => (view.add_subject(&args.into()).await, "Subject added"),
            SubjectCommands::Update(args) => {
                (view.update_subject(&args.into()).await, "Subject updated")
            }
            SubjectCommands::Delete(args) => {
                let params: SubjectId = args.into();
                let state = view.delete_subject(&params).await;
                let message = format!("Deleted subject {}", params.id);
                let status = checked_status(state.error.as_deref(), &message)?;
                self.renderer.render(&status.to_string());
                return Ok(());
            }
            SubjectCommands::List => {
                let state = view.load_subjects().await;
                checked_status(state.error.as_deref(), "")?;
                self.renderer.render(&Subjects(state.subjects.clone()).to_string());
                return Ok(());
            }
        };

        let status = checked_status(state.error.as_deref(), message)?;
        self.renderer.render(&status.to_string());
        self.renderer.render(&Subjects(state.subjects.clone()).to_string());
        Ok(())
    }

    pub async fn list_subjects(&self) -> Result<()> {
        self.handle_subject_command(SubjectCommands::List).await
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Generate(args) => self.generate_plan(args).await,
            PlanCommands::Regenerate(args) => self.regenerate_plan(args).await,
            PlanCommands::Parse(args) => self.parse_plan(args),
            PlanCommands::Show(args) => self.show_plan(args),
            PlanCommands::Toggle(args) => self.toggle_task(args),
        }
    }

    async fn generate_plan(&self, args: GeneratePlanArgs) -> Result<()> {
        debug!("Generating plan with {}", self.planner.generator_name());
        let mut view = RevisionPlanView::new(self.planner.clone());
        let days = plan_from_state(view.generate_plan().await)?;

        if let Some(path) = &args.output {
            write_plan_file(path, &days)?;
        }
        self.renderer.render(&RevisionPlan(days).to_string());
        Ok(())
    }

    /// Replaces a saved plan with a fresh one. The file is left alone when
    /// generation fails.
    async fn regenerate_plan(&self, args: RegeneratePlanArgs) -> Result<()> {
        let saved = read_plan_file(&args.file)?;
        let mut view = RevisionPlanView::with_plan(self.planner.clone(), saved);
        let days = plan_from_state(view.regenerate_plan().await)?;

        write_plan_file(&args.file, &days)?;
        self.renderer.render(&RevisionPlan(days).to_string());
        Ok(())
    }

    fn parse_plan(&self, args: ParsePlanArgs) -> Result<()> {
        let text = match &args.file {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read plan text from stdin")?;
                text
            }
        };

        let days = parse_plan(&text);
        if let Some(path) = &args.output {
            write_plan_file(path, &days)?;
        }
        self.renderer.render(&RevisionPlan(days).to_string());
        Ok(())
    }

    fn show_plan(&self, args: ShowPlanArgs) -> Result<()> {
        let days = read_plan_file(&args.file)?;
        self.renderer.render(&RevisionPlan(days).to_string());
        Ok(())
    }

    fn toggle_task(&self, args: TogglePlanTaskArgs) -> Result<()> {
        let ToggleTask { date, task_id } = ToggleTask::from(&args);
        let days = read_plan_file(&args.file)?;

        let toggled = toggle_task_completion(&days, &date, &task_id);
        if toggled == days {
            bail!("Task {task_id} not found on '{date}'");
        }

        write_plan_file(&args.file, &toggled)?;
        self.renderer.render(&RevisionPlan(toggled).to_string());
        Ok(())
    }
}
