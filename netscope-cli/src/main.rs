use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use netscope::{search, SearchConfig, SearchMatch};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod highlight;

/// Search NETCONF XML and YANG model files for a term.
///
/// Supported file types: .xml (NETCONF XML configuration files),
/// .yang (YANG model files), .yin (YANG in XML format).
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Term to search for (literal, case-insensitive)
    term: String,

    /// Root directory to search in
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(short, long)]
    ignore: Vec<String>,

    /// Show only statistics, not matches
    #[arg(short, long)]
    stats: bool,

    /// Number of search workers
    #[arg(short = 'j', long, default_value = "8")]
    workers: NonZeroUsize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Path to a YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cli_config = SearchConfig {
        term: cli.term,
        root_path: cli.directory,
        ignore_patterns: cli.ignore,
        stats_only: cli.stats,
        worker_count: cli.workers,
        log_level: cli.log_level,
    };

    let config = SearchConfig::load_from(cli.config.as_deref())
        .context("Failed to load configuration")?
        .merge_with_cli(cli_config);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    let results = search(&config)
        .with_context(|| format!("Search failed under {}", config.root_path.display()))?;
    tracing::debug!("Search returned {} results", results.len());

    if results.is_empty() {
        println!("No matches found for '{}'", config.term);
        return Ok(());
    }

    if config.stats_only {
        print_stats(&results, &config.term);
    } else {
        print_results(&results, &config.term);
    }

    Ok(())
}

/// Prints matches grouped by file, with the term highlighted in each line.
fn print_results(results: &[SearchMatch], term: &str) {
    println!("Found {} matches for '{}':\n", results.len(), term);

    let mut current_file: Option<&PathBuf> = None;
    for result in results {
        if current_file != Some(&result.file_path) {
            if current_file.is_some() {
                println!();
            }
            println!("=== {} ===", result.file_path.display().to_string().cyan());
            current_file = Some(&result.file_path);
        }

        let highlighted = highlight::highlight_term(&result.line_content, term);
        println!("{:4} | {}", result.line_number, highlighted);
    }
}

/// Prints only the match and file counts.
fn print_stats(results: &[SearchMatch], term: &str) {
    let mut files: Vec<&PathBuf> = results.iter().map(|r| &r.file_path).collect();
    files.sort();
    files.dedup();
    println!(
        "Found {} matches for '{}' in {} files",
        results.len(),
        term,
        files.len()
    );
}
