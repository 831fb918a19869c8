//! Command implementation for the flight statistics CLI
//!
//! This module contains the command execution logic, progress reporting and
//! the printed summary.

use crate::AnalysisOutcome;
use crate::analyze_with_config;
use crate::cli::args::Args;
use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Main command runner
///
/// 1. Set up logging and validate arguments
/// 2. Load, analyse and write the report behind a spinner
/// 3. Print the summary and the completion notice
pub fn run(args: Args) -> Result<AnalysisOutcome> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = args.to_config();
    let output_dir = args.output_dir();
    info!(
        "Analysing {} into {}",
        args.input.display(),
        output_dir.display()
    );

    let progress_bar = if args.show_progress() {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .context("Invalid progress template")?,
        );
        pb.set_message(format!("Analysing {}...", args.input.display()));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = analyze_with_config(&args.input, &output_dir, &config)
        .with_context(|| format!("Failed to analyse {}", args.input.display()));

    if let Some(pb) = &progress_bar {
        match &result {
            Ok(_) => pb.finish_with_message("Analysis complete"),
            Err(_) => pb.abandon_with_message("Analysis failed"),
        }
    }
    let outcome = result?;

    if !args.quiet {
        print_summary(&args.input, &outcome, start_time.elapsed());
    }
    println!("{}", completion_notice(&outcome.report_path));

    Ok(outcome)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flight_stats={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

fn print_summary(input: &Path, outcome: &AnalysisOutcome, elapsed: Duration) {
    let stats = &outcome.load_stats;

    println!("\n{}", "Analysis Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Input file:".bright_cyan(),
        input.display().to_string().bright_white()
    );
    if stats.read_failed {
        println!(
            "  {} {}",
            "Input unreadable:".bright_red(),
            "every question answered with a no-information notice".bright_red()
        );
    }
    println!(
        "  {} {}",
        "Rows read:".bright_cyan(),
        stats.total_records.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Completed flights:".bright_cyan(),
        stats.completed.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Cancelled flights:".bright_cyan(),
        stats.cancelled.to_string().bright_white()
    );
    if stats.discarded > 0 {
        println!(
            "  {} {}",
            "Discarded rows:".bright_yellow(),
            stats.discarded.to_string().bright_yellow()
        );
    }
    println!(
        "  {} {}/{}",
        "Questions answered:".bright_cyan(),
        (outcome.answers.len() - outcome.fallback_count())
            .to_string()
            .bright_white(),
        outcome.answers.len()
    );
    println!(
        "  {} {}",
        "Report:".bright_cyan(),
        outcome.report_path.display().to_string().bright_white()
    );
    println!(
        "  {} {}ms\n",
        "Time elapsed:".bright_cyan(),
        elapsed.as_millis().to_string().bright_white()
    );
}

/// Message shown once the report has been written
pub fn completion_notice(report_path: &Path) -> String {
    let file_name = report_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let folder = report_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    format!(
        "Data analysis completed. The results of the analysis are recorded in the file '{}' in the folder '{}'.",
        file_name,
        folder.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_notice() {
        let notice = completion_notice(Path::new("data/2017/answers.txt"));
        assert_eq!(
            notice,
            "Data analysis completed. The results of the analysis are recorded in the file \
             'answers.txt' in the folder 'data/2017'."
        );
    }

    #[test]
    fn test_completion_notice_without_folder() {
        let notice = completion_notice(Path::new("report.txt"));
        assert!(notice.contains("'report.txt'"));
        assert!(notice.ends_with("in the folder '.'."));
    }
}
