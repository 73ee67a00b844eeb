mod script;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use plotpad_config::AppConfig;
use plotpad_core::Editor;

/// Replays edit scripts through the change-tracking undo history.
#[derive(Parser, Debug)]
#[command(name = "plotpad", version, about)]
struct Cli {
    /// Config file (defaults to `plotpad.json` next to the executable).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a JSON edit script and print the state after each step.
    Replay {
        /// Script file: a JSON array of steps.
        script: PathBuf,

        /// File to open before the first step.
        #[arg(long)]
        initial: Option<PathBuf>,

        /// Print one JSON object per step instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_or_create(&config_path);

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting plotpad");

    match cli.command {
        Command::Replay {
            script,
            initial,
            json,
        } => {
            let steps = script::load(&script)?;
            let mut editor = Editor::new(&config.history);
            if let Some(path) = initial {
                editor.open(&path)?;
            }

            let reports = script::run(&mut editor, &steps)?;
            for report in &reports {
                if json {
                    println!("{}", serde_json::to_string(report)?);
                } else {
                    let marker = if report.modified { "*" } else { " " };
                    println!(
                        "{marker} [{}] {:<28} count={}",
                        report.step, report.action, report.count
                    );
                    println!("    {:?}", report.text);
                }
            }
        }
    }

    Ok(())
}
