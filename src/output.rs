//! Spinners, colored output, and summary formatting.
//!
//! This module provides visual feedback while repositories are pulled,
//! including the discovered repository list, per-repository reports and
//! the closing summary.

use crate::config::Config;
use crate::constants::{PROGRESS_TICK_MS, SECTION_WIDTH};
use crate::repo::{
    PullFailure, PullSuccess, SyncCallbacks, SyncOutcome, SyncResult, SyncStep, UnknownBranch,
};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const NO_REPOS_MESSAGE: &str = "No Git repositories found";

/// No-op callbacks for when progress tracking is not needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpCallbacks;

impl SyncCallbacks for NoOpCallbacks {
    fn on_step(&self, _step: &SyncStep) {}
    fn on_complete(&self, _result: &SyncResult) {}
}

/// Callbacks driving the console while repositories are processed one by one.
///
/// Shows a spinner in normal mode, step lines in verbose mode, and the
/// per-repository report unless quiet.
pub struct ConsoleCallbacks {
    config: Config,
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleCallbacks {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            spinner: RefCell::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl SyncCallbacks for ConsoleCallbacks {
    fn on_sync_start(&self, path: &Path) {
        if self.config.is_quiet() {
            return;
        }
        println!(
            "\n{} {}",
            "Processing".cyan(),
            path.display().to_string().white().bold()
        );
        if self.config.shows_progress() {
            *self.spinner.borrow_mut() = Some(create_spinner());
        }
    }

    fn on_step(&self, step: &SyncStep) {
        if let Some(spinner) = self.spinner.borrow().as_ref() {
            spinner.set_message(format_step_message(step));
        }
        print_step(&self.config, step);
    }

    fn on_complete(&self, result: &SyncResult) {
        self.clear_spinner();
        print_outcome(&self.config, result);
    }
}

fn create_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
    spinner
}

/// Prints a step progress message in verbose mode.
pub fn print_step(config: &Config, step: &SyncStep) {
    if !config.is_verbose() {
        return;
    }
    eprintln!("  {}...", step.to_string().dimmed());
}

/// Reports a single repository's outcome as soon as it is known.
pub fn print_outcome(config: &Config, result: &SyncResult) {
    if config.is_quiet() {
        return;
    }
    let path = &result.path;
    match &result.outcome {
        SyncOutcome::Pulled(success) => {
            println!(
                "{} {}",
                "✓".green(),
                format_pull_success(path, &success.branch).green()
            );
            if !success.stdout.is_empty() {
                print!("{}", success.stdout);
                if !success.stdout.ends_with('\n') {
                    println!();
                }
            }
        }
        SyncOutcome::Failed(failure) => {
            println!(
                "{} {}",
                "✗".red(),
                format_pull_failure(path, &failure.branch, &failure.error).red()
            );
        }
        SyncOutcome::Skipped(unknown) => {
            if let UnknownBranch::QueryFailed { error } = unknown {
                println!("{} {}", "✗".red(), format_branch_error(path, error).red());
            }
            println!("{} {}", "-".yellow(), format_skip(path).yellow());
        }
    }
}

/// Warns about an unreadable directory entry (verbose mode only).
pub fn print_discovery_warning(config: &Config, error: &walkdir::Error) {
    if !config.is_verbose() {
        return;
    }
    eprintln!("  {} {}", "warning:".yellow().bold(), error);
}

pub fn print_working_dir(path: &Path, config: &Config) {
    if config.is_quiet() {
        return;
    }
    println!(
        "{} {}",
        "Scanning:".cyan(),
        path.display().to_string().white().bold()
    )
}

pub fn print_no_repos() {
    println!("{}", NO_REPOS_MESSAGE.yellow().bold())
}

pub fn print_repo_list(repos: &[PathBuf], config: &Config) {
    if config.is_quiet() {
        return;
    }
    println!("{}", format_found(repos.len()).bold());
    for repo in repos {
        println!(" - {}", repo.display());
    }
    println!("\n{}", "Starting pull operations...".dimmed());
}

pub fn print_summary(results: &[SyncResult], duration: Duration, config: &Config) {
    if config.is_quiet() {
        print_quiet_summary(results);
    } else {
        print_normal_summary(results, duration);
    }
}

fn print_quiet_summary(results: &[SyncResult]) {
    let pulled = results
        .iter()
        .filter(|r| matches!(r.outcome, SyncOutcome::Pulled(_)))
        .count();

    // Always print count to stdout
    println!("{}/{} repositories pulled", pulled, results.len());

    // Failures and skips go to stderr
    for result in results {
        if let Some(message) = problem_message(&result.outcome) {
            eprintln!("error: {}: {}", result.path.display(), message);
        }
    }
}

fn print_normal_summary(results: &[SyncResult], duration: Duration) {
    print_section("Summary");

    let mut pulled = Vec::new();
    let mut skipped = Vec::new();
    let mut failed = Vec::new();
    for result in results {
        match &result.outcome {
            SyncOutcome::Pulled(success) => pulled.push((result, success)),
            SyncOutcome::Skipped(unknown) => skipped.push((result, unknown)),
            SyncOutcome::Failed(failure) => failed.push((result, failure)),
        }
    }

    print_pulled(&pulled);
    print_skipped(&skipped);
    print_failed(&failed);

    println!(
        "{}: {}/{} repos pulled in {}",
        "Total".white().bold(),
        pulled.len(),
        results.len(),
        format_duration(duration)
    );
}

fn print_pulled(pulled: &[(&SyncResult, &PullSuccess)]) {
    if pulled.is_empty() {
        return;
    }
    println!("{}", format!("Pulled ({}):", pulled.len()).green().bold());
    for (result, success) in pulled {
        println!(
            "  {} {} {} in {}",
            "OK".green().bold(),
            result.path.display().to_string().white(),
            format!("({})", success.branch).cyan(),
            format_duration(result.duration).dimmed(),
        );
    }
    println!();
}

fn print_skipped(skipped: &[(&SyncResult, &UnknownBranch)]) {
    if skipped.is_empty() {
        return;
    }
    println!("{}", format!("Skipped ({}):", skipped.len()).yellow().bold());
    for (result, unknown) in skipped {
        println!(
            "  {} {} {}",
            "SKIP".yellow().bold(),
            result.path.display().to_string().white(),
            first_line(&describe_unknown(unknown)).yellow(),
        );
    }
    println!();
}

fn print_failed(failed: &[(&SyncResult, &PullFailure)]) {
    if failed.is_empty() {
        return;
    }
    println!("{}", format!("Failed ({}):", failed.len()).red().bold());
    for (result, failure) in failed {
        println!(
            "  {} {} {} in {}",
            "FAIL".red().bold(),
            result.path.display().to_string().white(),
            format!("({}): {}", failure.branch, first_line(&failure.error)).red(),
            format_duration(result.duration).dimmed(),
        );
    }
    println!();
}

fn print_section(title: &str) {
    let line = "=".repeat(SECTION_WIDTH).cyan().dimmed();
    let padding = SECTION_WIDTH.saturating_sub(title.len()) / 2;
    let centered = format!("{:>width$}", title, width = padding + title.len());
    println!("\n{}\n{}\n{}\n", line, centered.cyan().bold(), line);
}

fn problem_message(outcome: &SyncOutcome) -> Option<String> {
    match outcome {
        SyncOutcome::Pulled(_) => None,
        SyncOutcome::Skipped(unknown) => Some(describe_unknown(unknown)),
        SyncOutcome::Failed(failure) => Some(format!(
            "pull {} failed: {}",
            failure.branch,
            failure.error.trim()
        )),
    }
}

fn describe_unknown(unknown: &UnknownBranch) -> String {
    match unknown {
        UnknownBranch::Detached => "detached HEAD, no current branch".to_string(),
        UnknownBranch::QueryFailed { error } => {
            format!("couldn't determine current branch: {}", error.trim())
        }
    }
}

fn first_line(text: &str) -> &str {
    text.trim().lines().next().unwrap_or_default()
}

fn format_found(count: usize) -> String {
    format!("Found {} repositories:", count)
}

fn format_pull_success(path: &Path, branch: &str) -> String {
    format!("Successfully pulled {} ({})", path.display(), branch)
}

fn format_pull_failure(path: &Path, branch: &str, error: &str) -> String {
    format!("Error pulling {} ({}): {}", path.display(), branch, error)
}

fn format_branch_error(path: &Path, error: &str) -> String {
    format!("Error getting branch for {}: {}", path.display(), error)
}

fn format_skip(path: &Path) -> String {
    format!("Skipping {} - couldn't determine current branch", path.display())
}

fn format_duration(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f32())
}

fn format_step_message(step: &SyncStep) -> &'static str {
    match step {
        SyncStep::Started => "Starting...",
        SyncStep::DetectingBranch => "Detecting current branch...",
        SyncStep::Pulling { .. } => "Pulling changes from origin...",
        SyncStep::Completed => "Completed",
    }
}
