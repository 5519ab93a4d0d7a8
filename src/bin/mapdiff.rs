//! mapdiff - Structural diff of two JSON/YAML documents.
//!
//! Exits 0 when the documents are identical, 1 when they differ and 2 on
//! error, like diff(1).

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use map_diff::value;
use map_diff::{compare, Patch};

#[derive(Debug, Parser)]
#[command(name = "mapdiff", version, about = "Structural diff of two JSON/YAML documents")]
struct Cli {
    /// The old document (.json, .yaml or .yml)
    old: PathBuf,

    /// The new document (.json, .yaml or .yml)
    new: PathBuf,

    /// Output representation
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output location. Use '-' for stdout
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Print nothing; report the result through the exit code only
    #[arg(short, long)]
    quiet: bool,

    /// Raise the log level (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the documents were identical.
fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let old = value::load(&cli.old)?;
    let new = value::load(&cli.new)?;

    let patch = compare(&old, &new);
    info!(old = %cli.old.display(), new = %cli.new.display(), verdict = %patch.kind(), "compared documents");

    if !cli.quiet {
        // Nothing is written unless rendering succeeds.
        let mut rendered = Vec::new();
        render(&patch, cli.format, &mut rendered)?;
        write_output(&cli.output, &rendered)?;
    }

    Ok(patch.is_equal())
}

fn write_output(location: &str, bytes: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    if location == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()?;
    } else {
        fs::write(location, bytes)
            .map_err(|e| format!("Failed to write output file {:?}: {}", location, e))?;
    }
    Ok(())
}

fn render(
    patch: &Patch,
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => {
            let summary = patch.summary();
            if summary.is_same() {
                writeln!(output, "Objects are identical")?;
            } else {
                writeln!(output, "Objects differ:")?;
                writeln!(output, "{}", summary)?;
            }
        }
        OutputFormat::Json => {
            writeln!(output, "{}", serde_json::to_string_pretty(patch)?)?;
        }
        OutputFormat::Yaml => {
            write!(output, "{}", serde_yaml::to_string(patch)?)?;
        }
    }
    Ok(())
}
