use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use keycalc::calculator::{
    self, CalcResult, Keypad, ResultStyle, evaluate_expression, looks_like_expression, parse_keys,
    spawn_evaluation,
};
use keycalc::config::{Config, load_config};

#[derive(Parser)]
#[command(
    version,
    about = "Keypad calculator for flat + - * / x expressions",
    after_help = "Exit status: 0 on success, 1 if any evaluation failed, 2 on usage, config or I/O errors."
)]
struct Cli {
    /// Expression to evaluate, e.g. "2+3x4"
    expression: Option<String>,

    /// Replay keypad presses instead (digits, operators, '.', '<' DEL, 'c' AC, '=')
    #[arg(short, long, conflicts_with = "expression")]
    keys: Option<String>,

    /// How results are displayed
    #[arg(short, long, value_enum)]
    style: Option<ResultStyle>,

    /// Copy successful results to the clipboard (failures are only logged)
    #[arg(long)]
    copy: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

struct Settings {
    style: ResultStyle,
    copy: bool,
}

impl Settings {
    fn new(cli: &Cli, config: Config) -> Self {
        Self {
            style: cli.style.unwrap_or(config.style),
            copy: cli.copy || config.copy_result,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("keycalc: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns `Ok(false)` when the last evaluation produced an error result.
fn run(cli: &Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::new(cli, config);

    if let Some(expression) = &cli.expression {
        let result = evaluate_expression(expression, settings.style);
        println!("{}", result.display());
        finish(&result, &settings);
        return Ok(result.is_success());
    }

    if let Some(keys) = &cli.keys {
        let mut keypad = Keypad::new();
        let ok = replay(&mut keypad, keys, &settings)?;
        println!("{}", keypad.screen());
        return Ok(ok);
    }

    interactive(&settings)
}

/// Feed stdin lines to one keypad. A line that is a plain expression is
/// evaluated as a whole; any other line is replayed as key presses.
///
/// Returns `Ok(false)` if any line failed, even when later lines succeed.
fn interactive(settings: &Settings) -> Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut keypad = Keypad::new();
    let mut ok = true;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let outcome = if looks_like_expression(line) {
            evaluate_on(&mut keypad, line.to_string(), settings)
        } else {
            replay(&mut keypad, line, settings)
        };

        match outcome {
            Ok(line_ok) => ok &= line_ok,
            Err(e) => {
                tracing::warn!("{e:#}");
                ok = false;
            }
        }
        writeln!(stdout, "{}", keypad.screen()).context("Failed to write stdout")?;
    }

    Ok(ok)
}

/// Press every key in `keys`. Each `=` is evaluated off this thread.
fn replay(keypad: &mut Keypad, keys: &str, settings: &Settings) -> Result<bool> {
    let keys = parse_keys(keys)?;
    let mut ok = true;

    for key in keys {
        if let Some(expression) = keypad.press(key) {
            ok &= evaluate_on(keypad, expression, settings)?;
        }
    }

    Ok(ok)
}

/// Evaluate off this thread and put the outcome on the keypad screen.
fn evaluate_on(keypad: &mut Keypad, expression: String, settings: &Settings) -> Result<bool> {
    let result = spawn_evaluation(expression, settings.style)
        .recv()
        .context("Evaluation thread exited without a result")?;
    keypad.show_result(&result);
    finish(&result, settings);
    Ok(result.is_success())
}

fn finish(result: &CalcResult, settings: &Settings) {
    if !settings.copy {
        return;
    }
    if let Err(e) = calculator::copy_result(result) {
        tracing::warn!("{e:#}");
    }
}
