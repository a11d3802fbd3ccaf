//! Test infrastructure for git-auto-pull integration tests.
#![allow(dead_code)]

use anyhow::Result;
use git_auto_pull::config::Config;
use git_auto_pull::git::run_git;
use git_auto_pull::repo::{SyncCallbacks, SyncResult, SyncStep};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn test_config() -> Config {
    Config::default()
}

/// Initializes a repository at `path` with one commit on `branch`.
pub fn init_repo(path: &Path, branch: &str) -> Result<()> {
    std::fs::create_dir_all(path)?;
    run_git(path, &["init", "-b", branch])?;
    run_git(path, &["config", "user.email", "test@example.com"])?;
    run_git(path, &["config", "user.name", "Test User"])?;
    run_git(path, &["config", "commit.gpgsign", "false"])?;

    std::fs::write(path.join("README.md"), "# Test Repo\n")?;
    run_git(path, &["add", "README.md"])?;
    run_git(path, &["commit", "-m", "Initial commit"])?;
    Ok(())
}

/// Creates a bare repository and registers it as `origin` of `repo`,
/// pushing `branch` to it.
pub fn attach_remote(repo: &Path, remote: &Path, branch: &str) -> Result<()> {
    std::fs::create_dir_all(remote)?;
    run_git(remote, &["init", "--bare"])?;
    run_git(repo, &["remote", "add", "origin", remote.to_str().unwrap()])?;
    run_git(repo, &["push", "-u", "origin", branch])?;
    Ok(())
}

/// A temporary git repository for testing.
/// Automatically cleaned up when dropped.
pub struct TestRepo {
    _temp_dir: TempDir,
    _remote_dir: Option<TempDir>,
    path: PathBuf,
}

impl TestRepo {
    /// Creates a new test repository with an initial commit on the master branch.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("repo");
        init_repo(&path, "master")?;

        Ok(Self {
            _temp_dir: temp_dir,
            _remote_dir: None,
            path,
        })
    }

    /// Creates a test repository whose `origin` is a local bare repository.
    pub fn with_remote(branch: Option<&str>) -> Result<Self> {
        let branch = branch.unwrap_or("master");
        let temp_dir = TempDir::new()?;
        let remote_dir = TempDir::new()?;
        let path = temp_dir.path().join("repo");

        init_repo(&path, branch)?;
        attach_remote(&path, &remote_dir.path().join("origin.git"), branch)?;

        Ok(Self {
            _temp_dir: temp_dir,
            _remote_dir: Some(remote_dir),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn detach_head(&self) -> Result<()> {
        run_git(&self.path, &["checkout", "--detach"])?;
        Ok(())
    }

    pub fn create_branch(&self, name: &str) -> Result<()> {
        run_git(&self.path, &["branch", name])?;
        Ok(())
    }
}

/// A scan root plus a separate directory holding each repository's remote,
/// so remotes never show up during discovery.
pub struct Workspace {
    root: TempDir,
    remotes: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            root: TempDir::new()?,
            remotes: TempDir::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Adds a repository at `relative` (under the root) tracking its own remote.
    pub fn add_repo(&self, relative: &str, branch: &str) -> Result<PathBuf> {
        let path = self.root.path().join(relative);
        init_repo(&path, branch)?;
        let remote = self
            .remotes
            .path()
            .join(format!("{}.git", relative.replace('/', "_")));
        attach_remote(&path, &remote, branch)?;
        Ok(path)
    }

    /// Adds a repository at `relative` with no remote configured.
    pub fn add_local_repo(&self, relative: &str, branch: &str) -> Result<PathBuf> {
        let path = self.root.path().join(relative);
        init_repo(&path, branch)?;
        Ok(path)
    }

    pub fn canonical(&self, relative: &str) -> PathBuf {
        std::fs::canonicalize(self.root.path().join(relative)).unwrap()
    }
}

/// Records every callback in order.
#[derive(Default)]
pub struct RecordingCallbacks {
    pub started: RefCell<Vec<PathBuf>>,
    pub steps: RefCell<Vec<SyncStep>>,
    pub completed: RefCell<Vec<PathBuf>>,
}

impl SyncCallbacks for RecordingCallbacks {
    fn on_sync_start(&self, path: &Path) {
        self.started.borrow_mut().push(path.to_path_buf());
    }

    fn on_step(&self, step: &SyncStep) {
        self.steps.borrow_mut().push(step.clone());
    }

    fn on_complete(&self, result: &SyncResult) {
        self.completed.borrow_mut().push(result.path.clone());
    }
}
