//! Git command wrappers.
//!
//! This module provides a thin wrapper around git CLI commands,
//! handling command execution and error formatting.

use anyhow::Context;
use colored::Colorize;
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Callback invoked with the repository and arguments before each git command.
pub type GitLogger = fn(&Path, &[&str]);

/// Prints the git command about to run.
pub fn verbose_logger(repo: &Path, args: &[&str]) {
    eprintln!(
        "    {} git {} {}",
        "$".dimmed(),
        args.join(" "),
        format!("({})", repo.display()).dimmed()
    );
}

pub fn no_op_logger(_repo: &Path, _args: &[&str]) {}

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to execute git {args}: {source}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },
    #[error("git {args} failed ({status}): {stderr}")]
    Failed {
        args: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("invalid branch name: {0:?}")]
    InvalidBranch(String),
}

impl GitError {
    /// Diagnostic text to show the operator: git's own stderr when the command
    /// ran, otherwise the error description.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        match self {
            GitError::Failed { stderr, .. } if !stderr.trim().is_empty() => stderr.clone(),
            other => other.to_string(),
        }
    }
}

/// Runs git in `repo` and returns its untrimmed stdout.
fn execute(repo: &Path, args: &[&str], logger: GitLogger) -> Result<String, GitError> {
    logger(repo, args);

    let output = Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .map_err(|source| GitError::Spawn {
            args: args.join(" "),
            source,
        })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(GitError::Failed {
            args: args.join(" "),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Runs an arbitrary git command and returns its trimmed stdout.
pub fn run_git(repo: &Path, args: &[&str]) -> anyhow::Result<String> {
    let stdout = execute(repo, args, no_op_logger)
        .with_context(|| format!("git {} failed in {}", args.join(" "), repo.display()))?;
    Ok(stdout.trim().to_string())
}

fn validate_branch_name(branch: &str) -> Result<(), GitError> {
    if branch.contains('\0') || branch.contains('\n') || branch.is_empty() {
        return Err(GitError::InvalidBranch(branch.to_string()));
    }
    Ok(())
}

/// Returns the checked-out branch, or an empty string when HEAD is detached.
pub fn current_branch(repo: &Path, logger: GitLogger) -> Result<String, GitError> {
    let stdout = execute(repo, &["branch", "--show-current"], logger)?;
    Ok(stdout.trim().to_string())
}

/// Pulls `branch` from `remote`, returning git's stdout verbatim.
pub fn pull(
    repo: &Path,
    remote: &str,
    branch: &str,
    logger: GitLogger,
) -> Result<String, GitError> {
    validate_branch_name(branch)?;
    execute(repo, &["pull", remote, branch], logger)
}
