//! Command-line arguments.

use crate::config::{Config, Verbosity};
use clap::Parser;
use std::path::PathBuf;

/// Pull the current branch of every git repository under a directory.
#[derive(Debug, Parser)]
#[command(name = "git-auto-pull", version, about)]
pub struct Cli {
    /// Root directory to scan. Prompts for one when omitted.
    pub root: Option<PathBuf>,

    /// Only print the final count and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print every git command and step
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn config(&self) -> Config {
        let verbosity = if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Config { verbosity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_prompts_in_normal_mode() {
        let cli = Cli::try_parse_from(["git-auto-pull"]).unwrap();
        assert!(cli.root.is_none());
        assert_eq!(cli.config().verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_root_and_verbosity_flags() {
        let cli = Cli::try_parse_from(["git-auto-pull", "-v", "/src"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/src")));
        assert_eq!(cli.config().verbosity, Verbosity::Verbose);

        let cli = Cli::try_parse_from(["git-auto-pull", "--quiet"]).unwrap();
        assert_eq!(cli.config().verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["git-auto-pull", "-q", "-v"]).is_err());
    }
}
