//! imgref - Image reference checker for content projects
//!
//! This is the CLI entry point over the imgref-core library. It verifies
//! that every image path referenced by a content data file exists under an
//! asset root, optionally with byte-for-byte case matching to catch
//! references that only resolve on case-insensitive filesystems.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use imgref_core::{extract_image_references, run_check, CheckConfig, CheckMode};

/// Image reference checker - verifies content data references against
/// on-disk assets
#[derive(Parser)]
#[command(name = "imgref")]
#[command(
    version,
    about = "Verify image references in a content data file against on-disk assets",
    long_about = "
Verify image references in a content data file against on-disk assets

Examples:
  imgref check --source src/data/recipes.ts --root public
  imgref check --source src/data/recipes.ts --root public --exact-case
  imgref list --source src/data/recipes.ts
  imgref check --source src/data/recipes.ts --root public --output json

The plain check accepts a wrong-case reference on case-insensitive
filesystems (macOS, Windows); --exact-case compares every path segment
byte-for-byte against the actual directory listing and catches those
before they break a case-sensitive deployment target.

Check outcome does not affect the exit status; only a failure to read
the source file exits non-zero. Use --output json for a machine-readable
result.
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Output format for reports
    #[arg(long, global = true, value_enum, default_value = "human")]
    output: OutputFormatArg,
}

/// Available output formats
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutputFormatArg {
    /// Human-readable format with colors (default)
    Human,
    /// JSON format for tooling integration
    Json,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Check that every referenced image exists under the asset root
    Check {
        /// Source data file to scan for `image: '...'` references
        #[arg(long, short)]
        source: PathBuf,

        /// Asset root directory references resolve against
        #[arg(long, short)]
        root: PathBuf,

        /// Require a byte-for-byte case match for every path segment
        #[arg(long)]
        exact_case: bool,
    },

    /// List the image references extracted from the source file
    List {
        /// Source data file to scan for `image: '...'` references
        #[arg(long, short)]
        source: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let use_colors = should_use_colors(&cli.output);
    if !use_colors {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Check {
            source,
            root,
            exact_case,
        } => {
            let mode = if exact_case {
                CheckMode::ExactCase
            } else {
                CheckMode::Existence
            };

            let human = matches!(cli.output, OutputFormatArg::Human);
            if cli.verbose && human {
                println!(
                    "{} Checking {} against {} ({} mode)",
                    "🔍".bright_blue(),
                    source.display(),
                    root.display(),
                    mode
                );
            }

            let config = CheckConfig::new(source, root)
                .with_mode(mode)
                .with_verbose(cli.verbose && human);

            let report = run_check(&config).context("Check run failed")?;

            match cli.output {
                OutputFormatArg::Human => report.print_human(),
                OutputFormatArg::Json => {
                    let json = serde_json::to_string_pretty(&report)
                        .context("Failed to serialize report")?;
                    println!("{}", json);
                },
            }
        },

        Commands::List { source } => {
            let content = std::fs::read_to_string(&source)
                .with_context(|| format!("Failed to read {}", source.display()))?;
            let references =
                extract_image_references(&content).context("Reference extraction failed")?;

            match cli.output {
                OutputFormatArg::Human => {
                    println!(
                        "{} Found {} image references",
                        "🔍".bright_blue(),
                        references.len()
                    );
                    for reference in &references {
                        println!("  - {}", reference);
                    }
                },
                OutputFormatArg::Json => {
                    let json = serde_json::to_string_pretty(&references)
                        .context("Failed to serialize references")?;
                    println!("{}", json);
                },
            }
        },
    }

    Ok(())
}

/// Colors only for human output on a terminal
fn should_use_colors(output_format: &OutputFormatArg) -> bool {
    match output_format {
        OutputFormatArg::Human => atty::is(atty::Stream::Stdout),
        OutputFormatArg::Json => false,
    }
}
