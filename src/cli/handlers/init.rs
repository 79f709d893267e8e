use crate::cli::commands::{InitTarget, TargetArgs};
use crate::error::Result as PdResult;
use crate::output::Reporter;
use crate::rules::{ensure_labels, ensure_milestone, ensure_project};
use crate::session::Session;
use anyhow::Result;

use super::CommandContext;

pub fn handle_init(ctx: &CommandContext, target: TargetArgs, init: InitTarget) -> Result<()> {
    let mut out = ctx.reporter();
    let result = ctx
        .connect(&target, &mut out)
        .and_then(|session| run_init(&session, init, &mut out));

    // Flush first so failing runs still log their summary.
    out.flush();
    Ok(result?)
}

/// Labels first, then the milestone or project; stops at the first hard failure.
fn run_init(session: &Session, init: InitTarget, out: &mut Reporter<'_>) -> PdResult<()> {
    // Label failures are reported per label and never stop the run.
    ensure_labels(session, out);

    match init {
        InitTarget::Milestone {
            title,
            due,
            with_project,
        } => {
            ensure_milestone(session, &title, due, out)?;
            // The board shares the milestone's title.
            if with_project {
                ensure_project(session, &title, None, out)?;
            }
        }
        InitTarget::Project { title } => {
            ensure_project(session, &title, None, out)?;
        }
    }
    Ok(())
}

pub fn handle_init_labels(ctx: &CommandContext, target: TargetArgs) -> Result<()> {
    let mut out = ctx.reporter();
    let result = ctx
        .connect(&target, &mut out)
        .map(|session| ensure_labels(&session, &mut out));

    out.flush();
    result?;
    Ok(())
}
