//! Interactive root directory prompt.

use crate::constants::{CURRENT_DIR, ROOT_PROMPT};
use anyhow::Context;
use dialoguer::Input;
use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;

/// Asks the operator which directory to scan.
///
/// Uses an interactive prompt on a terminal and reads a single line when
/// stdin is piped.
pub fn ask_root_dir() -> anyhow::Result<PathBuf> {
    let stdin = std::io::stdin();
    let answer = if stdin.is_terminal() {
        Input::<String>::new()
            .with_prompt(ROOT_PROMPT)
            .default(CURRENT_DIR.to_string())
            .show_default(false)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read root directory")?
    } else {
        eprint!("{}: ", ROOT_PROMPT);
        let mut line = String::new();
        stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read root directory from stdin")?;
        line
    };

    Ok(resolve_root(&answer))
}

/// Maps the operator's answer to a path; blank means the current directory.
#[must_use]
pub fn resolve_root(answer: &str) -> PathBuf {
    match answer.trim() {
        "" => PathBuf::from(CURRENT_DIR),
        path => PathBuf::from(path),
    }
}
