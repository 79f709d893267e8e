use crate::cli::commands::{CheckArg, TargetArgs};
use crate::rules::{CheckOptions, run_check};
use anyhow::Result;

use super::CommandContext;

pub fn handle_check(
    ctx: &CommandContext,
    check: CheckArg,
    target: TargetArgs,
    strict: bool,
) -> Result<()> {
    let mut out = ctx.reporter();
    let result = ctx.connect(&target, &mut out).and_then(|session| {
        run_check(check.into(), &session, CheckOptions { strict }, &mut out)
    });

    // Flush first so failing runs still log their summary.
    out.flush();
    Ok(result?)
}
