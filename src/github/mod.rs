//! GitHub REST API access.
//!
//! The [`GitHub`] trait is the seam every rule and action talks through;
//! [`OctocrabClient`] implements it with `octocrab`.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod fake;
mod types;

pub use client::{DEFAULT_API_URL, OctocrabClient};
pub use error::{ApiError, Result};
pub use types::{
    Issue, IssueSearch, Label, Milestone, MilestoneState, Project, ProjectColumn, Repository,
};

use chrono::{DateTime, Utc};

/// The subset of the GitHub API this tool needs.
pub trait GitHub {
    fn get_repo(&self, owner: &str, repo: &str) -> Result<Repository>;

    fn list_topics(&self, owner: &str, repo: &str) -> Result<Vec<String>>;

    fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>>;

    /// Returns [`ApiError::NotFound`] when the label does not exist.
    fn get_label(&self, owner: &str, repo: &str, name: &str) -> Result<Label>;

    fn create_label(&self, owner: &str, repo: &str, name: &str, color: &str) -> Result<Label>;

    fn edit_label(&self, owner: &str, repo: &str, name: &str, color: &str) -> Result<Label>;

    /// Runs an issue search. `query` is the raw search string, qualifiers included.
    fn search_issues(&self, query: &str) -> Result<IssueSearch>;

    fn list_milestones(
        &self,
        owner: &str,
        repo: &str,
        state: MilestoneState,
    ) -> Result<Vec<Milestone>>;

    fn create_milestone(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        due_on: Option<DateTime<Utc>>,
    ) -> Result<Milestone>;

    fn list_projects(&self, owner: &str, repo: &str) -> Result<Vec<Project>>;

    fn create_project(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        body: Option<&str>,
    ) -> Result<Project>;

    fn list_project_columns(&self, project_id: u64) -> Result<Vec<ProjectColumn>>;

    fn create_project_column(&self, project_id: u64, name: &str) -> Result<ProjectColumn>;
}
