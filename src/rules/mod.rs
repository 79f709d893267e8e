//! Conformance checks and the init actions that fix what they flag.

pub mod actions;
pub mod checks;
pub mod reconcile;

pub use actions::{LabelSync, ensure_labels, ensure_milestone, ensure_project};
pub use checks::{
    check_labels, check_milestones, check_projects, check_topic, check_unassigned,
    check_unlabeled,
};

use std::fmt;

use crate::error::{PdError, Result};
use crate::output::Reporter;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    All,
    Topic,
    Labels,
    Unassigned,
    Unlabeled,
    Milestones,
    Projects,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::All => write!(f, "all"),
            Check::Topic => write!(f, "topic"),
            Check::Labels => write!(f, "labels"),
            Check::Unassigned => write!(f, "unassigned"),
            Check::Unlabeled => write!(f, "unlabeled"),
            Check::Milestones => write!(f, "milestones"),
            Check::Projects => write!(f, "projects"),
        }
    }
}

/// Rules run by `check all`, in order.
pub const RUN_ALL: [Check; 5] = [
    Check::Topic,
    Check::Labels,
    Check::Unassigned,
    Check::Unlabeled,
    Check::Milestones,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Fail the label check on any mismatch instead of only reporting it.
    pub strict: bool,
}

pub fn run_check(
    check: Check,
    session: &Session,
    options: CheckOptions,
    out: &mut Reporter<'_>,
) -> Result<()> {
    tracing::debug!(%check, repo = %session.target(), "running check");
    match check {
        Check::All => check_all(session, options, out),
        Check::Topic => check_topic(session, out),
        Check::Labels => check_labels(session, options.strict, out),
        Check::Unassigned => check_unassigned(session, out),
        Check::Unlabeled => check_unlabeled(session, out),
        Check::Milestones => check_milestones(session, out),
        Check::Projects => check_projects(session, out),
    }
}

/// Runs [`RUN_ALL`] in order, stopping at the first rule that fails.
pub fn check_all(session: &Session, options: CheckOptions, out: &mut Reporter<'_>) -> Result<()> {
    if session.repository().full_name.is_none() {
        out.fail(&format!(
            "[{}] does not have a FullName entry",
            session.name()
        ));
        return Err(PdError::NoFullName(session.target().to_string()));
    }

    for check in RUN_ALL {
        run_check(check, session, options, out)?;
    }
    Ok(())
}
