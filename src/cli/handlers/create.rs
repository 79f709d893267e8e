use crate::cli::commands::TargetArgs;
use crate::rules::{ensure_milestone, ensure_project};
use anyhow::Result;
use chrono::NaiveDate;

use super::CommandContext;

pub fn handle_create_milestone(
    ctx: &CommandContext,
    target: TargetArgs,
    title: String,
    due: Option<NaiveDate>,
) -> Result<()> {
    let mut out = ctx.reporter();
    let result = ctx
        .connect(&target, &mut out)
        .and_then(|session| ensure_milestone(&session, &title, due, &mut out));

    // Flush first so failing runs still log their summary.
    out.flush();
    result?;
    Ok(())
}

pub fn handle_create_project(
    ctx: &CommandContext,
    target: TargetArgs,
    title: String,
    description: Option<String>,
) -> Result<()> {
    let mut out = ctx.reporter();
    let result = ctx.connect(&target, &mut out).and_then(|session| {
        ensure_project(&session, &title, description.as_deref(), &mut out)
    });

    out.flush();
    result?;
    Ok(())
}
