use anyhow::{Context, Result};
use clap::Parser;

use pd_cli::cli::handlers::{
    CommandContext, handle_check, handle_create_milestone, handle_create_project, handle_init,
    handle_init_labels,
};
use pd_cli::cli::{Cli, Commands, InitTarget, RepoAction};
use pd_cli::config::PdConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    pd_cli::logging::init(cli.verbose, cli.log_file.clone());

    let config = PdConfig::load(cli.config.as_deref())
        .and_then(|config| config.with_api_url(cli.api_url.clone()))
        .context("Failed to load pd configuration")?;

    let Commands::Repo(repo) = cli.command;
    let ctx = CommandContext::new(config, repo.ghtoken, cli.quiet);

    match repo.action {
        RepoAction::Init {
            target,
            milestone,
            project,
            with_project,
            due,
        } => handle_init(
            &ctx,
            target,
            InitTarget::from_flags(milestone, project, with_project, due),
        ),
        RepoAction::InitLabels { target } => handle_init_labels(&ctx, target),
        RepoAction::CreateMilestone {
            target,
            milestone,
            due,
        } => handle_create_milestone(&ctx, target, milestone, due),
        RepoAction::CreateProject {
            target,
            project,
            description,
        } => handle_create_project(&ctx, target, project, description),
        RepoAction::Check {
            check,
            target,
            strict,
        } => handle_check(&ctx, check, target, strict),
    }
}
