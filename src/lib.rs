//! Bulk git pull library.
//!
//! This crate provides functionality to keep many local repositories current by:
//! - Discovering every git working copy beneath a root directory
//! - Detecting the checked-out branch of each repository
//! - Pulling that branch from `origin`
//! - Reporting per-repository outcomes without aborting the batch

pub mod cli;
pub mod config;
pub mod constants;
pub mod git;
pub mod output;
pub mod prompt;
pub mod repo;
