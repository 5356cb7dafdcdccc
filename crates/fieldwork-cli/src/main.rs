//! Fieldwork CLI Application
//!
//! Command-line console for the field-survey operations platform.
//! Parses arguments, builds the API client against the configured
//! backend origin, and dispatches to the command handlers.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use fieldwork_core::ApiClient;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_url,
        token,
        session_file,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    // Session management works on the token store alone; no client needed.
    let command = match command {
        Commands::Session { command } => {
            return cli::handle_session_command(command, session_file, &renderer);
        }
        other => other,
    };

    let mut builder = ApiClient::builder();
    if let Some(url) = api_url.or_else(|| std::env::var("FIELDWORK_API_URL").ok()) {
        builder = builder.with_base_url(url);
    }
    if let Some(token) = token.or_else(|| std::env::var("FIELDWORK_TOKEN").ok()) {
        builder = builder.with_token(token);
    }
    if let Some(path) = session_file {
        builder = builder.with_session_file(path);
    }
    let api = builder.build().context("Failed to initialize API client")?;

    info!("Fieldwork console started against {}", api.base_url());

    match command {
        Commands::Employee { command } => {
            Cli::new(api, renderer).handle_employee_command(command).await
        }
        Commands::Hr { command } => Cli::new(api, renderer).handle_hr_command(command).await,
        Commands::Study { command } => Cli::new(api, renderer).handle_study_command(command).await,
        Commands::Task { command } => Cli::new(api, renderer).handle_task_command(command).await,
        Commands::Questionnaire { command } => {
            Cli::new(api, renderer)
                .handle_questionnaire_command(command)
                .await
        }
        Commands::Schedule { command } => {
            Cli::new(api, renderer).handle_schedule_command(command).await
        }
        Commands::Session { .. } => Ok(()),
    }
}
