//! Application-wide constants.
//!
//! Centralized configuration values to avoid magic numbers throughout the codebase.

/// Git directory name used to detect repositories.
pub const GIT_DIR: &str = ".git";

/// Remote every repository is pulled from.
pub const REMOTE: &str = "origin";

/// Root used when the operator leaves the prompt blank.
pub const CURRENT_DIR: &str = ".";

/// Text shown when asking for the root directory.
pub const ROOT_PROMPT: &str = "Enter root directory path (default: current dir)";

/// Progress spinner tick interval in milliseconds.
pub const PROGRESS_TICK_MS: u64 = 80;

/// Width of the summary section banner.
pub const SECTION_WIDTH: usize = 50;
