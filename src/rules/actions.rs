use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{PdError, Result};
use crate::github::{Milestone, MilestoneState, Project};
use crate::model::{REQUIRED_COLUMNS, STANDARD_LABELS};
use crate::output::Reporter;
use crate::session::Session;
use crate::validation::validate_title;

/// Outcome of [`ensure_labels`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LabelSync {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl LabelSync {
    pub fn changed(&self) -> usize {
        self.created + self.updated
    }
}

/// Creates missing standard labels and recolors drifted ones.
///
/// Each label is handled on its own: a failed lookup, create or edit is
/// reported and the batch moves on.
pub fn ensure_labels(session: &Session, out: &mut Reporter<'_>) -> LabelSync {
    out.heading(&format!("Initializing labels on {}", session.target()));
    let github = session.github();
    let (owner, repo) = (session.owner(), session.name());
    let mut sync = LabelSync::default();

    for spec in &STANDARD_LABELS {
        match github.get_label(owner, repo, spec.name) {
            Ok(label) if label.color == spec.color => {
                debug!(label = spec.name, "label already conforms");
                sync.unchanged += 1;
            }
            Ok(_) => match github.edit_label(owner, repo, spec.name, spec.color) {
                Ok(_) => {
                    sync.updated += 1;
                    out.note(&format!(
                        "Changed color for label {} to {}",
                        spec.name, spec.color
                    ));
                }
                Err(e) => {
                    sync.failed += 1;
                    out.error(&format!("Changing color for {}: {}", spec.name, e));
                }
            },
            Err(e) if e.is_not_found() => {
                match github.create_label(owner, repo, spec.name, spec.color) {
                    Ok(_) => {
                        sync.created += 1;
                        out.note(&format!("Created label {}", spec.name));
                    }
                    Err(e) => {
                        sync.failed += 1;
                        out.error(&format!("Creating label {}: {}", spec.name, e));
                    }
                }
            }
            Err(e) => {
                sync.failed += 1;
                out.error(&format!("Looking up label {}: {}", spec.name, e));
            }
        }
    }

    info!(
        created = sync.created,
        updated = sync.updated,
        unchanged = sync.unchanged,
        failed = sync.failed,
        "labels initialized"
    );
    out.note(&format!(
        "{} created, {} updated, {} unchanged, {} failed",
        sync.created, sync.updated, sync.unchanged, sync.failed
    ));
    sync
}

/// Creates a milestone unless one with the same title exists, open or closed.
pub fn ensure_milestone(
    session: &Session,
    title: &str,
    due: Option<NaiveDate>,
    out: &mut Reporter<'_>,
) -> Result<Milestone> {
    validate_title(title)?;
    out.heading(&format!("Creating Milestone: {}", title));
    let github = session.github();

    let milestones = github
        .list_milestones(session.owner(), session.name(), MilestoneState::All)
        .inspect_err(|e| out.error(&format!("Could not list milestones: {}", e)))?;

    if milestones.iter().any(|m| m.title == title) {
        out.error(&format!("Milestone [{}] already exists", title));
        return Err(PdError::Duplicate {
            kind: "milestone",
            title: title.to_string(),
        });
    }

    let due_on = due
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc());
    let milestone = github
        .create_milestone(session.owner(), session.name(), title, due_on)
        .inspect_err(|e| out.error(&format!("Creating milestone {}: {}", title, e)))?;

    info!(title, number = milestone.number, "milestone created");
    out.note(&format!("Created milestone {}", title));
    Ok(milestone)
}

/// Creates a project with the standard columns unless the title is taken.
///
/// Column failures are reported one by one and do not fail the action.
pub fn ensure_project(
    session: &Session,
    title: &str,
    description: Option<&str>,
    out: &mut Reporter<'_>,
) -> Result<Project> {
    validate_title(title)?;
    let github = session.github();

    let projects = github
        .list_projects(session.owner(), session.name())
        .inspect_err(|e| out.error(&format!("Fetching projects, {}", e)))?;

    if projects.iter().any(|p| p.name == title) {
        out.error(&format!("Project [{}] already exists", title));
        return Err(PdError::Duplicate {
            kind: "project",
            title: title.to_string(),
        });
    }

    out.heading(&format!("Creating Project {}", title));
    let project = github
        .create_project(session.owner(), session.name(), title, description)
        .inspect_err(|e| out.error(&format!("Creating Project {}: {}", title, e)))?;
    out.note(&format!("Created project {}", title));

    for column in REQUIRED_COLUMNS {
        if let Err(e) = github.create_project_column(project.id, column) {
            warn!(project = title, column, error = %e, "column creation failed");
            out.error(&format!("Creating Project Column [{}]: {}", column, e));
        }
    }

    info!(title, id = project.id, "project created");
    Ok(project)
}
