//! Command line entry point for mkenv.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{LevelFilter, info};
use mkenv::{config::Config, emit, orchestrator, package_map::PackageMap};

/// Fallback interpreter version when neither the command line nor the
/// configuration file names one.
const DEFAULT_PYTHON_VERSION: &str = "3.8";

#[derive(Debug, Parser)]
#[command(
    name = "mkenv",
    version,
    about = "Generate a conda environment.yml from the imports of a Python source tree",
    long_about = "Scans DIRECTORY recursively for .py files, statically collects the names \
                  referenced by import statements, maps them to installable package names, and \
                  prints a conda-compatible environment.yml document to stdout. Redirect the \
                  output to a file, or pass --output."
)]
struct Cli {
    /// Directory to scan for Python files
    directory: PathBuf,

    /// Name of the conda environment (prompted for when omitted)
    #[arg(long, value_name = "NAME")]
    env_name: Option<String>,

    /// Desired Python version, e.g. 3.8 [default: 3.8]
    #[arg(long, value_name = "VERSION")]
    python_version: Option<String>,

    /// Path to an mkenv.toml configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the document to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref(), &cli.directory)?;

    let env_name = match cli.env_name.or_else(|| config.env_name.clone()) {
        Some(name) => name,
        None => prompt_env_name()?,
    };
    let python_version = cli
        .python_version
        .or_else(|| config.python_version.clone())
        .unwrap_or_else(|| DEFAULT_PYTHON_VERSION.to_string());

    let package_map = PackageMap::with_overrides(&python_version, &config.package_map);
    let outcome = orchestrator::scan(&cli.directory, &env_name, &python_version, &package_map)?;
    if !outcome.failures.is_empty() {
        info!(
            "{} file(s) skipped, see warnings above",
            outcome.failures.len()
        );
    }

    let document = emit::render_environment_yml(&outcome.spec);
    match &cli.output {
        Some(path) => fs::write(path, &document)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout().write_all(document.as_bytes())?,
    }
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Ask for the environment name on stderr so stdout stays clean for the
/// document itself even when it is being redirected.
fn prompt_env_name() -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "Enter the environment name: ")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        bail!("environment name must not be empty");
    }
    Ok(name.to_string())
}
