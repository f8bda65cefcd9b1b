use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use zcalc::config::Config;
use zcalc::input::{Command, decode_token, tokenize};
use zcalc::logging;
use zcalc::session::Session;

/// Keyboard-driven calculator with exact decimal arithmetic.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Path to a config file (defaults to ~/.config/zcalc/config.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Apply these keys and print the final display instead of reading stdin.
    #[arg(short, long, num_args = 1..)]
    keys: Vec<String>,

    /// Print the calculation history before exiting.
    #[arg(long)]
    show_history: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    logging::init(level);

    let mut session = Session::new(&config.engine);
    let width = config.display.width;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.keys.is_empty() {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("Failed to read input")?;
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                break;
            }
            run_line(&mut session, &line, &mut out)?;
            writeln!(out, "{}", session.snapshot().line(width))?;
        }
    } else {
        run_line(&mut session, &cli.keys.join(" "), &mut out)?;
        writeln!(out, "{}", session.snapshot().display)?;
    }

    if cli.show_history || config.display.show_history {
        print_history(&session, &mut out)?;
    }

    Ok(())
}

fn run_line(session: &mut Session, line: &str, out: &mut impl Write) -> Result<()> {
    for token in tokenize(line) {
        let Some(command) = decode_token(&token) else {
            tracing::debug!("Ignoring unknown key {:?}", token);
            continue;
        };

        session.apply(&command);

        if command == Command::ShowHistory {
            print_history(session, out)?;
        }
        if let Some(message) = session.snapshot().error {
            writeln!(out, "Error: {message}")?;
        }
    }
    Ok(())
}

fn print_history(session: &Session, out: &mut impl Write) -> Result<()> {
    for record in session.history() {
        writeln!(out, "  {record}")?;
    }
    Ok(())
}
