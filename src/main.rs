use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use pmid_checker::checker::{CheckError, CheckInput, Checker};
use pmid_checker::config::{find_config_file, load_config, Config};
use pmid_checker::ui::{self, print_status, render_report, ReportFormat, Status};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// PMID Checker - Validate a PubMed search string against known-good PMIDs
#[derive(Parser, Debug)]
#[command(name = "pmid-checker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "hongkongkiwi")]
#[command(about = "Validate a PubMed search string against known-good PMIDs", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Maximum number of identifiers to retrieve per search
    #[arg(long, short, global = true)]
    max_results: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one check and exit
    #[command(alias = "c")]
    Check {
        /// Search query string, in PubMed query syntax
        query: String,

        /// Known PMIDs (comma-separated)
        #[arg(long, short)]
        known: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("pmid_checker={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        Config::default()
    };

    let checker = Checker::new(&config)?;
    let format = resolve_format(cli.output);

    match cli.command {
        Some(Commands::Check { query, known }) => {
            let mut input = CheckInput::new(query, known);
            if let Some(max) = cli.max_results {
                input = input.max_results(max);
            }

            match checker.run(&input).await {
                Ok(report) => {
                    println!("{}", render_report(&report, format));
                }
                Err(CheckError::Input(msg)) => {
                    print_status(Status::Warning, &msg);
                    std::process::exit(2);
                }
                Err(e) => {
                    print_status(Status::Error, &format!("An error occurred: {}", e));
                    std::process::exit(1);
                }
            }
        }

        None => {
            run_interactive(&checker, format, cli.max_results, cli.quiet).await?;
        }
    }

    Ok(())
}

/// Resolve the Auto format against the terminal
fn resolve_format(format: OutputFormat) -> ReportFormat {
    match format {
        OutputFormat::Auto => {
            if ui::is_terminal() {
                ReportFormat::Table
            } else {
                ReportFormat::Json
            }
        }
        OutputFormat::Table => ReportFormat::Table,
        OutputFormat::Json => ReportFormat::Json,
        OutputFormat::Plain => ReportFormat::Plain,
    }
}

/// Interactive prompt loop: read the two form fields, run the check, render,
/// repeat. Errors are rendered inline and never end the loop.
async fn run_interactive(
    checker: &Checker,
    format: ReportFormat,
    max_results: Option<usize>,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        println!();
        println!("{}", "PubMed Search String Checker".bold());
        println!("Enter a query and the PMIDs it should retrieve.");
        println!("Type 'quit' or press Ctrl-D to exit.");
        println!();
    }

    loop {
        let Some(query) = prompt("Search query")? else {
            break;
        };
        if matches!(query.as_str(), "quit" | "exit") {
            break;
        }

        let Some(known) = prompt("Known PMIDs (comma-separated)")? else {
            break;
        };

        let mut input = CheckInput::new(query, known);
        if let Some(max) = max_results {
            input = input.max_results(max);
        }

        match checker.run(&input).await {
            Ok(report) => {
                println!("{}", render_report(&report, format));
                if report.comparison.is_complete() {
                    print_status(Status::Success, "The search retrieves every known PMID.");
                }
            }
            Err(CheckError::Input(msg)) => {
                print_status(Status::Warning, &msg);
            }
            Err(e) => {
                print_status(Status::Error, &format!("An error occurred: {}", e));
            }
        }
        println!();
    }

    Ok(())
}

/// Read one line from stdin with a prompt. Returns `None` on EOF.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}: ", label.bold());
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
