use anyhow::{Context, Result};
use calcpro::calculator::{AngleMode, CalcResult, calculate};
use calcpro::config::Config;
use calcpro::input::parse_line;
use calcpro::session::{Session, SessionHandle};
use calcpro::ui::TerminalSurface;
use calcpro::ui::terminal::render_lines;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calcpro", version, about = "Scientific calculator")]
struct Cli {
    /// Path to the config file (defaults to ~/.config/calcpro/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start in radians mode instead of the configured angle mode
    #[arg(long, global = true)]
    radians: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate an expression once and print the result
    Eval {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        #[arg(required = true)]
        expression: Vec<String>,
    },
    /// Replay key presses and action names, then print the display
    Keys {
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

#[derive(Serialize)]
struct EvalReport<'a> {
    expression: &'a str,
    result: Option<&'a str>,
    error: Option<&'a str>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("calcpro=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.radians {
        config.angle_mode = AngleMode::Radians;
    }

    match cli.command {
        None => run_interactive(&config).await,
        Some(Command::Eval { json, expression }) => run_eval(&config, &expression.join(" "), json),
        Some(Command::Keys { keys }) => run_keys(&config, &keys.join(" ")),
    }
}

async fn run_interactive(config: &Config) -> Result<()> {
    info!(mode = ?config.angle_mode, "starting calculator session");

    let surface = Arc::new(TerminalSurface::new(std::io::stdout()));
    let handle = SessionHandle::new(
        Session::new(config.angle_mode, config.reset_delay()),
        surface,
    );
    handle.render().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let line = line.trim();
        if line == "quit" || line == "exit" {
            break;
        }
        match parse_line(line) {
            Ok(inputs) => handle.dispatch_all(inputs).await,
            Err(err) => warn!(error = %err, "ignoring input line"),
        }
    }

    Ok(())
}

fn run_eval(config: &Config, expression: &str, json: bool) -> Result<()> {
    let result = calculate(expression, config.angle_mode);

    if json {
        let report = match &result {
            CalcResult::Success { display_result, .. } => EvalReport {
                expression: result.expression(),
                result: Some(display_result.as_str()),
                error: None,
            },
            CalcResult::Error { message, .. } => EvalReport {
                expression: result.expression(),
                result: None,
                error: Some(message.as_str()),
            },
        };
        println!("{}", serde_json::to_string(&report)?);
        if !result.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    match result {
        CalcResult::Success { .. } => {
            println!("{} = {}", result.expression(), result.display());
            Ok(())
        }
        CalcResult::Error { .. } => anyhow::bail!("{}", result.display()),
    }
}

fn run_keys(config: &Config, keys: &str) -> Result<()> {
    let inputs = parse_line(keys).context("Invalid key sequence")?;
    let mut session = Session::new(config.angle_mode, config.reset_delay());
    for input in inputs {
        session.apply(input);
    }

    for line in render_lines(&session.snapshot()) {
        println!("{}", line);
    }
    Ok(())
}
