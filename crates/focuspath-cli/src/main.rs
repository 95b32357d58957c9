mod cli;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use focuspath_core::{AppConfig, ClassifierSettings};
use focuspath_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("FOCUSPATH_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let settings = classifier_settings(&cli);

    match cli.command {
        None => {
            let mut app = App::new(focuspath_ai::create_classifier(&settings));
            app.run().await?;
        }
        Some(Commands::Analyze(args)) => {
            handlers::analyze::handle(&settings, args).await?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "focuspath", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Config file settings with command-line overrides applied.
fn classifier_settings(cli: &Cli) -> ClassifierSettings {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let mut settings = config.classifier;
    if let Some(model) = &cli.model {
        settings.model = model.clone();
    }
    if let Some(endpoint) = &cli.endpoint {
        settings.endpoint = endpoint.clone();
    }
    tracing::debug!("Using model {} at {}", settings.model, settings.endpoint);
    settings
}
