//! lookalike - find files with similar names and compare them.
//!
//! Usage:
//!   lka [PATH]               Scan a directory and browse groups in the TUI
//!   lka list [PATH]          Print groups without launching the TUI
//!   lka --suffix '-\d{1,2}'  Only consider version-suffixed files
//!   lka --help               Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, eyre};

use lookalike_core::{
    MatchConfig, MatchReport, PrefixMatcher, ScanConfig, SuffixFilter, SuffixPattern,
};
use lookalike_diff::DiffRunner;
use lookalike_scan::DirScanner;

#[derive(Parser)]
#[command(
    name = "lookalike",
    version,
    about = "Find files with similar names and compare them side by side",
    long_about = "lookalike scans a directory for files whose names look like\n\
                  variants of each other (report.txt, report-1.txt), groups them,\n\
                  and lets you diff any pair interactively."
)]
struct Cli {
    /// Directory to scan (defaults to the current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Minimum prefix length for grouping files
    #[arg(short = 'p', long, default_value_t = lookalike_core::DEFAULT_MIN_PREFIX_LEN)]
    min_prefix: usize,

    /// Only consider files whose stem ends with this regex, plus their base files
    #[arg(short, long)]
    suffix: Option<String>,

    /// Override the diff command used for comparisons (default: diff)
    #[arg(short, long)]
    diff_tool: Option<String>,

    /// Skip hidden files (starting with .)
    #[arg(long)]
    skip_hidden: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print groups of similar files without launching the TUI
    List {
        /// Directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Minimum prefix length for grouping files
        #[arg(short = 'p', long, default_value_t = lookalike_core::DEFAULT_MIN_PREFIX_LEN)]
        min_prefix: usize,

        /// Only consider files whose stem ends with this regex, plus their base files
        #[arg(short, long)]
        suffix: Option<String>,

        /// Skip hidden files (starting with .)
        #[arg(long)]
        skip_hidden: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Command::List {
            path,
            min_prefix,
            suffix,
            skip_hidden,
            format,
        }) => run_list(&path, min_prefix, suffix.as_deref(), skip_hidden, format),
        None => run_tui(
            &cli.path,
            cli.min_prefix,
            cli.suffix.as_deref(),
            cli.skip_hidden,
            cli.diff_tool,
        ),
    }
}

/// Scan, filter, and group: the shared front half of every command.
///
/// Returns `None` when fewer than two files survive filtering, which the
/// callers render as a "nothing to compare" message rather than an error.
fn collect_groups(
    path: &PathBuf,
    min_prefix: usize,
    suffix: Option<&str>,
    skip_hidden: bool,
) -> Result<Option<MatchReport>> {
    if min_prefix < 1 {
        return Err(eyre!("--min-prefix must be at least 1"));
    }

    // Compile the pattern up front so a bad regex is reported before any
    // scanning happens.
    let filter = suffix
        .map(|src| SuffixPattern::new(src).map(SuffixFilter::new))
        .transpose()
        .context("Invalid suffix pattern")?;

    let scan_config = ScanConfig::builder()
        .root(path.clone())
        .include_hidden(!skip_hidden)
        .build()
        .map_err(|e| eyre!("{e}"))?;

    let outcome = DirScanner::new()
        .scan(&scan_config)
        .context("Failed to scan directory")?;

    if !outcome.warnings.is_empty() {
        eprintln!("{} warning(s) during scan", outcome.warnings.len());
    }

    let files = match &filter {
        Some(filter) => filter.filter(&outcome.files),
        None => outcome.files,
    };

    if files.len() < 2 {
        return Ok(None);
    }

    let config = MatchConfig::builder()
        .min_prefix_len(min_prefix)
        .build()
        .map_err(|e| eyre!("{e}"))?;

    Ok(Some(PrefixMatcher::with_config(config).group_files(&files)))
}

/// Scan and launch the interactive browser.
fn run_tui(
    path: &PathBuf,
    min_prefix: usize,
    suffix: Option<&str>,
    skip_hidden: bool,
    diff_tool: Option<String>,
) -> Result<()> {
    let Some(report) = collect_groups(path, min_prefix, suffix, skip_hidden)? else {
        println!("Not enough files found to compare (need at least 2).");
        return Ok(());
    };

    if !report.has_groups() {
        println!("No groups of similar files found.");
        return Ok(());
    }

    lookalike_tui::run(report.groups, DiffRunner::new(diff_tool))
}

/// Print groups without the TUI.
fn run_list(
    path: &PathBuf,
    min_prefix: usize,
    suffix: Option<&str>,
    skip_hidden: bool,
    format: OutputFormat,
) -> Result<()> {
    let report = match collect_groups(path, min_prefix, suffix, skip_hidden)? {
        Some(report) => report,
        None => {
            println!("Not enough files found to compare (need at least 2).");
            return Ok(());
        }
    };

    match format {
        OutputFormat::Text => {
            if !report.has_groups() {
                println!("No groups of similar files found.");
                return Ok(());
            }

            println!();
            println!("{}", "─".repeat(70));
            println!(
                " {} group(s) among {} file(s)",
                report.group_count, report.files_considered
            );
            println!("{}", "─".repeat(70));
            println!();

            for (i, group) in report.groups.iter().enumerate() {
                println!(" Group {} ({} files)", i + 1, group.count());
                for path in &group.paths {
                    println!("   {}", path.display());
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
