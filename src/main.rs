//! CLI entry point: one-shot fetch, extract and serialize run.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use underdoc::fetch::{self, DEFAULT_DOCS_URL};
use underdoc::report::Reporter;
use underdoc::sink::{self, OutputMode};

#[derive(Parser)]
#[command(
    name = "underdoc",
    version,
    about = "Parses the latest Underscore documentation into JSON",
    group = ArgGroup::new("sink").required(true)
)]
struct Cli {
    /// URL of the documentation page to fetch
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Read the documentation HTML from a local file instead of fetching
    #[arg(short, long, value_name = "FILE", conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Write the JSON to this file
    #[arg(short, long, value_name = "PATH", group = "sink")]
    output: Option<PathBuf>,

    /// Write raw JSON to stdout (disables progress output)
    #[arg(short, long, group = "sink")]
    stream: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mode = match &cli.output {
        Some(path) => OutputMode::File(path.clone()),
        None => OutputMode::Stream,
    };

    // Progress output only decorates file-writing runs; stream mode keeps
    // stdout reserved for the JSON itself.
    let reporter = Reporter::new(
        matches!(mode, OutputMode::File(_)),
        !cli.no_color,
    );

    match run(&cli, &mode, &reporter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            reporter.error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, mode: &OutputMode, reporter: &Reporter) -> anyhow::Result<()> {
    reporter.title("Underscore.js Documentation Parser");

    let html = match &cli.input {
        Some(path) => {
            reporter.step(&format!(
                "Reading documentation from {}...",
                reporter.highlight(&path.display().to_string())
            ));
            fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let url = cli.url.as_deref().unwrap_or(DEFAULT_DOCS_URL);
            reporter.step(&format!(
                "Fetching documentation from {}...",
                reporter.highlight(url)
            ));
            let body = fetch::fetch_docs(url).await?;
            reporter.done("Received documentation HTML\n");
            body
        }
    };

    reporter.step("Parsing HTML to JSON...");
    let entries = underdoc::parse_docs(&html)?;

    let names = entries
        .iter()
        .map(|entry| reporter.accent(&entry.name))
        .collect::<Vec<_>>()
        .join(", ");
    reporter.done(&format!(
        "{} documented methods parsed into JSON\n\n{names}\n",
        reporter.accent(&entries.len().to_string())
    ));

    if let OutputMode::File(path) = mode {
        reporter.step(&format!(
            "Writing JSON to {}...",
            reporter.highlight(&path.display().to_string())
        ));
    }
    sink::write_entries(&entries, mode)?;
    if matches!(mode, OutputMode::File(_)) {
        reporter.done("File saved. Bye.");
    }

    Ok(())
}
