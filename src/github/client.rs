use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use chrono::{DateTime, Utc};
use octocrab::{Octocrab, Page, models};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;
use tracing::debug;

use super::GitHub;
use super::error::Result;
use super::types::{
    Issue, IssueSearch, Label, LabelColor, Milestone, MilestoneState, NewColumn, NewMilestone,
    NewProject, Project, ProjectColumn, Repository,
};
use crate::config::GithubSettings;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

static CRYPTO_PROVIDER: Once = Once::new();

/// Query string for list endpoints.
#[derive(Serialize)]
struct ListParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a str>,
    per_page: u8,
}

#[derive(Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    per_page: u8,
}

/// [`GitHub`] over `octocrab`, driven from a current-thread runtime.
pub struct OctocrabClient {
    octocrab: Octocrab,
    runtime: Runtime,
    per_page: u8,
}

impl OctocrabClient {
    pub fn new(token: &str, settings: &GithubSettings) -> Result<Self> {
        CRYPTO_PROVIDER.call_once(|| {
            let _ = rustls::crypto::ring::default_provider().install_default();
        });

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        // The connector is created here, so it must see the runtime.
        let _guard = runtime.enter();

        let timeout = Some(Duration::from_secs(settings.timeout_secs));
        let octocrab = Octocrab::builder()
            .base_uri(settings.api_url.as_str())?
            .personal_token(token.to_string())
            .set_connect_timeout(timeout)
            .set_read_timeout(timeout)
            .set_write_timeout(timeout)
            .build()?;

        Ok(Self {
            octocrab,
            runtime,
            per_page: settings.per_page,
        })
    }

    fn block_on<T>(&self, operation: &str, future: impl Future<Output = Result<T>>) -> Result<T> {
        debug!(operation, "github request");
        self.runtime
            .block_on(future)
            .inspect_err(|e| debug!(operation, error = %e, "github request failed"))
    }

    fn list_params<'a>(&self, state: Option<&'a str>) -> ListParams<'a> {
        ListParams {
            state,
            per_page: self.per_page,
        }
    }

    /// Fetches the first page of `route`, then every page after it.
    async fn get_all<T: DeserializeOwned>(
        &self,
        route: String,
        params: &ListParams<'_>,
    ) -> Result<Vec<T>> {
        let first: Page<T> = self.octocrab.get(route, Some(params)).await?;
        // Follows the `next` links until a page comes back without one.
        Ok(self.octocrab.all_pages(first).await?)
    }
}

impl From<models::Label> for Label {
    fn from(label: models::Label) -> Self {
        Self {
            name: label.name,
            color: label.color,
            description: label.description,
        }
    }
}

impl From<models::Repository> for Repository {
    fn from(repo: models::Repository) -> Self {
        Self {
            id: repo.id.0,
            name: repo.name,
            full_name: repo.full_name,
            // Unknown visibility counts as private.
            private: repo.private.unwrap_or(true),
        }
    }
}

impl GitHub for OctocrabClient {
    fn get_repo(&self, owner: &str, repo: &str) -> Result<Repository> {
        self.block_on("get_repo", async {
            Ok(self.octocrab.repos(owner, repo).get().await?.into())
        })
    }

    fn list_topics(&self, owner: &str, repo: &str) -> Result<Vec<String>> {
        // Topics ride along on the repository payload.
        self.block_on("list_topics", async {
            let repository = self.octocrab.repos(owner, repo).get().await?;
            Ok(repository.topics.unwrap_or_default())
        })
    }

    fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>> {
        self.block_on("list_labels", async {
            let first = self
                .octocrab
                .issues(owner, repo)
                .list_labels_for_repo()
                .per_page(self.per_page)
                .send()
                .await?;
            let labels = self.octocrab.all_pages(first).await?;
            Ok(labels.into_iter().map(Label::from).collect())
        })
    }

    fn get_label(&self, owner: &str, repo: &str, name: &str) -> Result<Label> {
        self.block_on("get_label", async {
            Ok(self.octocrab.issues(owner, repo).get_label(name).await?.into())
        })
    }

    fn create_label(&self, owner: &str, repo: &str, name: &str, color: &str) -> Result<Label> {
        self.block_on("create_label", async {
            let label = self
                .octocrab
                .issues(owner, repo)
                .create_label(name, color, "")
                .await?;
            Ok(label.into())
        })
    }

    fn edit_label(&self, owner: &str, repo: &str, name: &str, color: &str) -> Result<Label> {
        let route = format!("/repos/{owner}/{repo}/labels/{name}");
        self.block_on("edit_label", async {
            let label: models::Label = self
                .octocrab
                .patch(route, Some(&LabelColor { color }))
                .await?;
            Ok(label.into())
        })
    }

    fn search_issues(&self, query: &str) -> Result<IssueSearch> {
        let params = SearchParams {
            q: query,
            per_page: self.per_page,
        };
        // One page is enough: the check reports the total and lists what came back.
        self.block_on("search_issues", async {
            let page: Page<Issue> =
                self.octocrab.get("/search/issues", Some(&params)).await?;
            Ok(IssueSearch {
                // A missing total means everything fit on this page.
                total_count: page.total_count.unwrap_or(page.items.len() as u64),
                incomplete_results: page.incomplete_results.unwrap_or(false),
                items: page.items,
            })
        })
    }

    fn list_milestones(
        &self,
        owner: &str,
        repo: &str,
        state: MilestoneState,
    ) -> Result<Vec<Milestone>> {
        let params = self.list_params(Some(state.as_str()));
        self.block_on(
            "list_milestones",
            self.get_all(format!("/repos/{owner}/{repo}/milestones"), &params),
        )
    }

    fn create_milestone(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        due_on: Option<DateTime<Utc>>,
    ) -> Result<Milestone> {
        let route = format!("/repos/{owner}/{repo}/milestones");
        self.block_on("create_milestone", async {
            Ok(self
                .octocrab
                .post(route, Some(&NewMilestone { title, due_on }))
                .await?)
        })
    }

    fn list_projects(&self, owner: &str, repo: &str) -> Result<Vec<Project>> {
        let params = self.list_params(None);
        self.block_on(
            "list_projects",
            self.get_all(format!("/repos/{owner}/{repo}/projects"), &params),
        )
    }

    fn create_project(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        body: Option<&str>,
    ) -> Result<Project> {
        let route = format!("/repos/{owner}/{repo}/projects");
        self.block_on("create_project", async {
            Ok(self
                .octocrab
                .post(route, Some(&NewProject { name, body }))
                .await?)
        })
    }

    fn list_project_columns(&self, project_id: u64) -> Result<Vec<ProjectColumn>> {
        let params = self.list_params(None);
        self.block_on(
            "list_project_columns",
            self.get_all(format!("/projects/{project_id}/columns"), &params),
        )
    }

    fn create_project_column(&self, project_id: u64, name: &str) -> Result<ProjectColumn> {
        let route = format!("/projects/{project_id}/columns");
        self.block_on("create_project_column", async {
            Ok(self
                .octocrab
                .post(route, Some(&NewColumn { name }))
                .await?)
        })
    }
}
