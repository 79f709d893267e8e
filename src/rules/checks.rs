use std::collections::HashMap;

use tracing::debug;

use super::reconcile::{Entry, reconcile};
use crate::error::{PdError, Result};
use crate::github::{MilestoneState, Project};
use crate::model::{REQUIRED_COLUMNS, STANDARD_LABELS, canonical_column};
use crate::output::Reporter;
use crate::session::Session;

/// Checks that the configured topic (default `product-delivery`) is set.
pub fn check_topic(session: &Session, out: &mut Reporter<'_>) -> Result<()> {
    let topic = session.standards().topic.as_str();
    out.heading(&format!("Checking for [{}] topic", topic));

    let topics = session
        .github()
        .list_topics(session.owner(), session.name())
        .inspect_err(|e| out.error(&e.to_string()))?;

    if topics.iter().any(|t| t == topic) {
        out.ok(&format!("Found {} topic", topic));
        return Ok(());
    }

    let message = format!("{} topic not set", topic);
    out.error(&message);
    Err(PdError::CheckFailed(message))
}

/// Compares the repository's labels against the standard table.
///
/// Mismatches are always reported; they only fail the check when `strict`.
pub fn check_labels(session: &Session, strict: bool, out: &mut Reporter<'_>) -> Result<()> {
    out.heading("Checking Labels");

    let labels = session
        .github()
        .list_labels(session.owner(), session.name())
        .inspect_err(|e| out.error(&e.to_string()))?;
    let catchall = session.standards().catchall_color.as_str();

    let result = reconcile(&STANDARD_LABELS, &labels, |s| s.name, |l| l.name.as_str());
    let mut mismatches = 0;

    for entry in &result.entries {
        match entry {
            Entry::Matched { expected, observed } => {
                if observed.color == expected.color {
                    out.ok(&format!("[{}] verified", observed.name));
                } else {
                    mismatches += 1;
                    out.error(&format!(
                        "standard label [{}] should have color #{}",
                        observed.name, expected.color
                    ));
                }
            }
            Entry::Unexpected(observed) => {
                if observed.color == catchall {
                    out.ok(&format!("[{}] verified", observed.name));
                } else {
                    mismatches += 1;
                    out.error(&format!(
                        "[{}] should have color #{}",
                        observed.name, catchall
                    ));
                }
            }
        }
    }

    for missing in &result.missing {
        mismatches += 1;
        out.error(&format!("missing {} ({})", missing.name, missing.color));
    }

    debug!(mismatches, strict, "label check finished");
    if strict && mismatches > 0 {
        return Err(PdError::CheckFailed(format!(
            "{} label problems found",
            mismatches
        )));
    }
    Ok(())
}

/// Fails when open P1 issues have nobody assigned.
pub fn check_unassigned(session: &Session, out: &mut Reporter<'_>) -> Result<()> {
    out.heading("Checking Unassigned Issues");
    check_search(
        session,
        "is:open no:assignee label:P1",
        "All P1 issues assigned",
        |count| format!("{} unassigned P1 issues", count),
        out,
    )
}

/// Fails when open issues carry no label at all.
pub fn check_unlabeled(session: &Session, out: &mut Reporter<'_>) -> Result<()> {
    out.heading("Checking Unlabeled Issues");
    check_search(
        session,
        "is:open no:label is:issue",
        "All issues are labeled",
        |count| format!("{} issues unlabeled", count),
        out,
    )
}

fn check_search(
    session: &Session,
    qualifiers: &str,
    ok_message: &str,
    summary: impl Fn(u64) -> String,
    out: &mut Reporter<'_>,
) -> Result<()> {
    let query = format!("repo:{} {}", session.target(), qualifiers);
    let results = session
        .github()
        .search_issues(&query)
        .inspect_err(|e| out.error(&e.to_string()))?;

    if results.total_count == 0 {
        out.ok(ok_message);
        return Ok(());
    }

    let message = summary(results.total_count);
    out.error(&message);
    for issue in &results.items {
        out.detail(&format!("   #{:<4} {}", issue.number, issue.title));
    }
    let listed = results.items.len() as u64;
    if results.total_count > listed {
        out.detail(&format!("   ... and {} more", results.total_count - listed));
    }
    if results.incomplete_results {
        out.detail("   (search timed out, counts may be incomplete)");
    }
    Err(PdError::CheckFailed(message))
}

/// Requires a same-titled tracking project with the standard columns for
/// every open milestone. Everything is scanned before the check concludes.
pub fn check_milestones(session: &Session, out: &mut Reporter<'_>) -> Result<()> {
    out.heading("Checking Milestones");
    let github = session.github();

    let milestones = github
        .list_milestones(session.owner(), session.name(), MilestoneState::Open)
        .inspect_err(|e| out.error(&format!("Fetching milestones, {}", e)))?;
    let projects = github
        .list_projects(session.owner(), session.name())
        .inspect_err(|e| out.error(&format!("Fetching projects, {}", e)))?;

    let by_name: HashMap<&str, &Project> =
        projects.iter().map(|p| (p.name.as_str(), p)).collect();

    let mut problems = 0;
    for milestone in &milestones {
        match by_name.get(milestone.title.as_str()) {
            Some(project) => problems += verify_columns(session, project, out)?,
            None => {
                problems += 1;
                out.error(&format!(
                    "{} does not have a matching project",
                    milestone.title
                ));
            }
        }
    }

    conclude(problems, "Milestones verified", "milestone", out)
}

/// Validates every project's columns and warns on empty descriptions.
pub fn check_projects(session: &Session, out: &mut Reporter<'_>) -> Result<()> {
    out.heading("Checking Projects");

    let projects = session
        .github()
        .list_projects(session.owner(), session.name())
        .inspect_err(|e| out.error(&format!("Fetching projects, {}", e)))?;

    let mut problems = 0;
    for project in &projects {
        if !project.has_description() {
            out.warn(&format!("Project \"{}\" has no description", project.name));
        }
        problems += verify_columns(session, project, out)?;
    }

    conclude(problems, "Projects verified", "project", out)
}

fn conclude(problems: usize, ok_message: &str, kind: &str, out: &mut Reporter<'_>) -> Result<()> {
    if problems == 0 {
        out.ok(ok_message);
        Ok(())
    } else {
        Err(PdError::CheckFailed(format!(
            "{} {} problems found",
            problems, kind
        )))
    }
}

/// Reports unexpected and missing columns; returns how many were reported.
fn verify_columns(session: &Session, project: &Project, out: &mut Reporter<'_>) -> Result<usize> {
    let columns = session
        .github()
        .list_project_columns(project.id)
        .inspect_err(|e| out.error(&format!("Fetching project columns, {}", e)))?;

    let result = reconcile(&REQUIRED_COLUMNS, &columns, |c| *c, |c| c.name.as_str());
    let mut problems = 0;

    for entry in &result.entries {
        if let Entry::Unexpected(column) = entry {
            problems += 1;
            match canonical_column(&column.name) {
                Some(canonical) => out.error(&format!(
                    "Project \"{}\" has unexpected column {} (did you mean \"{}\"?)",
                    project.name, column.name, canonical
                )),
                None => out.error(&format!(
                    "Project \"{}\" has unexpected column {}",
                    project.name, column.name
                )),
            }
        }
    }

    for missing in &result.missing {
        problems += 1;
        out.error(&format!(
            "Project \"{}\" missing \"{}\" column",
            project.name, missing
        ));
    }

    Ok(problems)
}
