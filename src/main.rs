use clap::Parser;
use git_auto_pull::cli::Cli;
use git_auto_pull::{output, prompt, repo};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    let root = match cli.root {
        Some(root) => root,
        None => prompt::ask_root_dir()?,
    };
    output::print_working_dir(&root, &config);

    let repos = repo::find_git_repos_with(&root, |err| {
        output::print_discovery_warning(&config, err)
    });
    if repos.is_empty() {
        output::print_no_repos();
        return Ok(());
    }

    output::print_repo_list(&repos, &config);

    let start = Instant::now();
    let callbacks = output::ConsoleCallbacks::new(config);
    let results = repo::sync_all(&repos, &callbacks, &config);
    output::print_summary(&results, start.elapsed(), &config);

    Ok(())
}
