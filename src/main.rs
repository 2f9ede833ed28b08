use anyhow::Context;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use zcalc::calculator::{CalculatorEngine, Keypad, PercentKey, copy_to_clipboard, parse_keys};
use zcalc::config::Config;

#[derive(Parser)]
#[command(name = "zcalc", version, about = "An immediate-execution calculator")]
struct Cli {
    /// Key sequences to apply in order, e.g. "3+4=" or "12 DEL 5".
    /// Reads lines from stdin when omitted.
    keys: Vec<String>,

    /// What the % key dispatches
    #[arg(long, value_enum)]
    percent_key: Option<PercentKey>,

    /// Copy the final result to the clipboard
    #[arg(long)]
    copy: bool,

    /// Print the final state as JSON instead of the display
    #[arg(long, requires = "keys")]
    json: bool,

    /// Print the keypad layout
    #[arg(long)]
    keypad: bool,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(percent_key) = cli.percent_key {
        config.percent_key = percent_key;
    }
    config.copy_result |= cli.copy;
    config.show_keypad |= cli.keypad;
    tracing::debug!(?config, "loaded config");

    if config.show_keypad {
        println!("{}\n", Keypad::new(config.percent_key).render());
    }

    let mut engine = CalculatorEngine::new();
    if cli.keys.is_empty() {
        run_interactive(&mut engine, &config)?;
    } else {
        for keys in &cli.keys {
            let intents = parse_keys(keys, config.percent_key)
                .with_context(|| format!("invalid key sequence '{}'", keys))?;
            engine.dispatch_all(intents);
        }
        if cli.json {
            println!("{}", serde_json::to_string_pretty(engine.state())?);
        } else {
            print_display(&engine);
        }
    }

    if config.copy_result
        && let Some(result) = engine.state().current()
    {
        copy_to_clipboard(result)?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "zcalc=debug" } else { "zcalc=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Read key sequences line by line until EOF or `quit`.
fn run_interactive(engine: &mut CalculatorEngine, config: &Config) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    print_display(engine);
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        match line.trim() {
            "quit" | "exit" | "q" => break,
            "keypad" => println!("{}", Keypad::new(config.percent_key).render()),
            keys => match parse_keys(keys, config.percent_key) {
                Ok(intents) => {
                    engine.dispatch_all(intents);
                    print_display(engine);
                }
                Err(e) => eprintln!("{}", e),
            },
        }
        prompt(&mut stdout)?;
    }

    Ok(())
}

fn prompt(stdout: &mut std::io::Stdout) -> anyhow::Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}

fn print_display(engine: &CalculatorEngine) {
    let display = engine.display();
    println!("{:>24}", display.previous);
    println!("{:>24}", display.current);
}
