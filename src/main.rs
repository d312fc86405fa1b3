use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use zcalc::calculator::{Calculator, ERROR_TOKEN, Outputs, copy_to_clipboard, parse_line};
use zcalc::config::Config;
use zcalc::ui::{PanelOptions, render_panel};

#[derive(Parser)]
#[command(name = "zcalc")]
#[command(about = "A keypad-driven scientific calculator")]
#[command(version)]
struct Cli {
    /// Button tokens to press, e.g. `5 + 3 =`. Reads from stdin when empty.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Start on the scientific keypad
    #[arg(long)]
    scientific: bool,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Copy the final result to the clipboard
    #[arg(long)]
    copy: bool,

    /// Print outputs as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    info!(?config, "Loaded config");

    let mut calc = Calculator::with_scientific_mode(cli.scientific || config.scientific);
    let options = PanelOptions {
        group_digits: config.group_digits,
    };

    let outputs = if cli.keys.is_empty() {
        run_interactive(&mut calc, options, cli.json)?
    } else {
        let events = parse_line(&cli.keys.join(" ")).context("Invalid input")?;
        let outputs = calc.handle_all(events);
        print_outputs(&outputs, options, cli.json)?;
        outputs
    };

    if (cli.copy || config.copy_result)
        && outputs.display != ERROR_TOKEN
        && let Err(e) = copy_to_clipboard(&outputs.display)
    {
        warn!("{}", e);
    }

    Ok(())
}

/// Read button tokens line by line until EOF or `quit`.
fn run_interactive(calc: &mut Calculator, options: PanelOptions, json: bool) -> Result<Outputs> {
    let stdin = std::io::stdin();
    let mut outputs = calc.state().outputs();
    print_outputs(&outputs, options, json)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let trimmed = line.trim();
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        match parse_line(trimmed) {
            Ok(events) => {
                outputs = calc.handle_all(events);
                print_outputs(&outputs, options, json)?;
            }
            Err(e) => {
                warn!(line = trimmed, "Rejected input");
                eprintln!("{}", e);
            }
        }
    }

    Ok(outputs)
}

fn print_outputs(outputs: &Outputs, options: PanelOptions, json: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer(&mut stdout, outputs).context("Failed to encode outputs")?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", render_panel(outputs, options))?;
    }
    stdout.flush()?;
    Ok(())
}
