// Repository discovery, branch detection, pull logic, result types

use crate::config::Config;
use crate::constants::{GIT_DIR, REMOTE};
use crate::git::{self, GitLogger};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStep {
    Started,
    DetectingBranch,
    Pulling { branch: String },
    Completed,
}

impl fmt::Display for SyncStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStep::Started => write!(f, "Starting"),
            SyncStep::DetectingBranch => write!(f, "Detecting current branch"),
            SyncStep::Pulling { branch } => write!(f, "Pulling {} from {}", branch, REMOTE),
            SyncStep::Completed => write!(f, "Completed"),
        }
    }
}

/// Why a repository has no usable branch name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownBranch {
    /// HEAD is not on a named branch.
    Detached,
    /// The branch query itself failed; `error` is git's diagnostic output.
    QueryFailed { error: String },
}

#[derive(Debug)]
pub struct SyncResult {
    pub path: PathBuf,
    pub outcome: SyncOutcome,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullSuccess {
    pub branch: String,
    pub stdout: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullFailure {
    pub branch: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Pulled(PullSuccess),
    Skipped(UnknownBranch),
    Failed(PullFailure),
}

/// Hooks for reporting progress while repositories are processed.
pub trait SyncCallbacks {
    fn on_sync_start(&self, _path: &Path) {}
    fn on_step(&self, step: &SyncStep);
    fn on_complete(&self, result: &SyncResult);
}

pub fn is_git_repo(path: &Path) -> bool {
    path.join(GIT_DIR).is_dir()
}

fn is_git_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == GIT_DIR
}

/// Finds every directory at or below `root` holding a `.git` directory.
///
/// Entries that cannot be read are skipped silently.
pub fn find_git_repos(root: &Path) -> Vec<PathBuf> {
    find_git_repos_with(root, |_| {})
}

/// Like [`find_git_repos`], but hands every traversal error to `on_error`
/// before skipping the offending entry.
///
/// `.git` directories are never descended into. Repositories nested inside
/// another working tree are reported on their own. Results are canonical
/// absolute paths, ordered by a file-name-sorted depth-first walk.
pub fn find_git_repos_with<F>(root: &Path, mut on_error: F) -> Vec<PathBuf>
where
    F: FnMut(&walkdir::Error),
{
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_git_dir(e))
        .filter_map(|e| e.map_err(|err| on_error(&err)).ok())
        .filter(|e| e.file_type().is_dir() && is_git_repo(e.path()))
        .map(|e| std::fs::canonicalize(e.path()).unwrap_or_else(|_| e.path().to_path_buf()))
        .collect()
}

/// Looks up the branch `path` has checked out.
pub fn detect_branch(path: &Path, logger: GitLogger) -> Result<String, UnknownBranch> {
    match git::current_branch(path, logger) {
        Ok(branch) if branch.is_empty() => Err(UnknownBranch::Detached),
        Ok(branch) => Ok(branch),
        Err(e) => Err(UnknownBranch::QueryFailed {
            error: e.diagnostic(),
        }),
    }
}

/// Pulls `branch` from `origin`. Every failure becomes `SyncOutcome::Failed`.
pub fn pull_branch(path: &Path, branch: &str, logger: GitLogger) -> SyncOutcome {
    match git::pull(path, REMOTE, branch, logger) {
        Ok(stdout) => SyncOutcome::Pulled(PullSuccess {
            branch: branch.to_string(),
            stdout,
        }),
        Err(e) => SyncOutcome::Failed(PullFailure {
            branch: branch.to_string(),
            error: e.diagnostic(),
        }),
    }
}

pub fn sync<C>(path: &Path, callbacks: &C, config: &Config) -> SyncResult
where
    C: SyncCallbacks + ?Sized,
{
    let start = Instant::now();
    let logger = config.git_logger();

    callbacks.on_sync_start(path);
    callbacks.on_step(&SyncStep::Started);

    callbacks.on_step(&SyncStep::DetectingBranch);
    let outcome = match detect_branch(path, logger) {
        Ok(branch) => {
            callbacks.on_step(&SyncStep::Pulling {
                branch: branch.clone(),
            });
            pull_branch(path, &branch, logger)
        }
        Err(unknown) => SyncOutcome::Skipped(unknown),
    };

    callbacks.on_step(&SyncStep::Completed);

    let result = SyncResult {
        path: path.to_path_buf(),
        outcome,
        duration: start.elapsed(),
    };
    callbacks.on_complete(&result);
    result
}

/// Processes each repository in order. One repository's failure never stops
/// the rest.
pub fn sync_all<C>(repos: &[PathBuf], callbacks: &C, config: &Config) -> Vec<SyncResult>
where
    C: SyncCallbacks + ?Sized,
{
    repos
        .iter()
        .map(|path| sync(path, callbacks, config))
        .collect()
}
