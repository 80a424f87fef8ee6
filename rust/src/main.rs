use anyhow::{Context, Result};
use clap::Parser;
use code_extractor::{search_with, write_json, SearchConfig};
use colored::Colorize;
use std::io;
use std::path::PathBuf;

const USAGE: &str = "code-extractor [OPTIONS] <ROOT> <NAME>";

#[derive(Parser, Debug)]
#[command(
    name = "code-extractor",
    version,
    about = "Find a Rust function or type definition under a directory and print it as JSON"
)]
struct Cli {
    /// Root directory of Rust sources
    #[arg(value_name = "ROOT")]
    root: PathBuf,

    /// Function or type name, optionally qualified (`point.Point`, `Point::new`)
    #[arg(value_name = "NAME")]
    name: String,

    /// Directory name to skip while walking (repeatable)
    #[arg(long, value_name = "DIR")]
    exclude: Vec<String>,

    /// Follow symbolic links
    #[arg(long)]
    follow_links: bool,

    /// Report skipped files on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(error) if !error.use_stderr() => {
            let _ = error.print();
            std::process::exit(0);
        }
        Err(error) => {
            eprintln!(
                "{} {}; usage: {USAGE}",
                "Error:".red().bold(),
                usage_message(&error)
            );
            std::process::exit(1);
        }
    };

    if let Err(error) = run(cli) {
        eprintln!("{} {error:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

// clap's message on one line, without its own prefix and usage block.
fn usage_message(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let message = rendered
        .lines()
        .take_while(|line| !line.starts_with("Usage:"))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    message
        .strip_prefix("error: ")
        .unwrap_or(&message)
        .to_string()
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.quiet, cli.verbose)?;

    let cfg = SearchConfig {
        root: cli.root,
        exclude: cli.exclude,
        follow_links: cli.follow_links,
    };
    let found = search_with(&cfg, &cli.name)?;

    let mut out = io::stdout().lock();
    write_json(&found, &mut out).context("Failed to write result")?;
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CODE_EXTRACTOR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
