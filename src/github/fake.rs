//! In-memory [`GitHub`] for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use chrono::{DateTime, Utc};

use super::GitHub;
use super::error::{ApiError, Result};
use super::types::{
    Issue, IssueSearch, Label, Milestone, MilestoneState, Project, ProjectColumn, Repository,
};

#[derive(Default)]
struct State {
    repo: Option<Repository>,
    topics: Vec<String>,
    labels: Vec<Label>,
    searches: HashMap<String, Vec<Issue>>,
    search_totals: HashMap<String, u64>,
    incomplete_search: bool,
    milestones: Vec<Milestone>,
    projects: Vec<Project>,
    columns: HashMap<u64, Vec<ProjectColumn>>,
    failing: HashSet<String>,
    calls: Vec<String>,
    next_id: u64,
}

/// Clones share state, so a test can keep a handle after boxing one into a session.
#[derive(Clone)]
pub struct FakeGitHub {
    state: Rc<RefCell<State>>,
}

impl FakeGitHub {
    /// A fake hosting `owner/repo` with nothing configured.
    pub fn new(owner: &str, repo: &str) -> Self {
        let state = State {
            repo: Some(Repository {
                id: 1,
                name: repo.to_string(),
                full_name: Some(format!("{}/{}", owner, repo)),
                private: false,
            }),
            next_id: 100,
            ..Default::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn without_repo(self) -> Self {
        self.state.borrow_mut().repo = None;
        self
    }

    pub fn with_repo(self, repo: Repository) -> Self {
        self.state.borrow_mut().repo = Some(repo);
        self
    }

    pub fn with_topics(self, topics: &[&str]) -> Self {
        self.state.borrow_mut().topics = topics.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_labels(self, labels: &[(&str, &str)]) -> Self {
        self.state.borrow_mut().labels = labels
            .iter()
            .map(|(name, color)| Label {
                name: name.to_string(),
                color: color.to_string(),
                description: None,
            })
            .collect();
        self
    }

    /// Registers the issues returned for a search whose query contains `needle`.
    pub fn with_search(self, needle: &str, issues: &[(u64, &str)]) -> Self {
        let issues = issues
            .iter()
            .map(|(number, title)| Issue {
                number: *number,
                title: title.to_string(),
            })
            .collect();
        self.state
            .borrow_mut()
            .searches
            .insert(needle.to_string(), issues);
        self
    }

    /// Reports `total` matches for `needle`, more than the issues listed.
    pub fn with_search_total(self, needle: &str, total: u64) -> Self {
        self.state
            .borrow_mut()
            .search_totals
            .insert(needle.to_string(), total);
        self
    }

    pub fn with_incomplete_search(self) -> Self {
        self.state.borrow_mut().incomplete_search = true;
        self
    }

    pub fn with_milestone(self, title: &str) -> Self {
        {
            let mut state = self.state.borrow_mut();
            let number = state.milestones.len() as u64 + 1;
            state.milestones.push(Milestone {
                number,
                title: title.to_string(),
                state: Some("open".to_string()),
                due_on: None,
            });
        }
        self
    }

    pub fn with_closed_milestone(self, title: &str) -> Self {
        {
            let mut state = self.state.borrow_mut();
            let number = state.milestones.len() as u64 + 1;
            state.milestones.push(Milestone {
                number,
                title: title.to_string(),
                state: Some("closed".to_string()),
                due_on: None,
            });
        }
        self
    }

    pub fn with_project(self, name: &str, body: Option<&str>, columns: &[&str]) -> Self {
        {
            let mut state = self.state.borrow_mut();
            let id = state.allocate_id();
            state.projects.push(Project {
                id,
                name: name.to_string(),
                body: body.map(str::to_string),
            });
            let columns = columns
                .iter()
                .map(|c| {
                    let column_id = state.allocate_id();
                    ProjectColumn {
                        id: column_id,
                        name: c.to_string(),
                    }
                })
                .collect();
            state.columns.insert(id, columns);
        }
        self
    }

    /// Makes the named operation fail. Keys are `op` or `op:argument`,
    /// e.g. `list_labels` or `create_label:bug`.
    pub fn failing(self, key: &str) -> Self {
        self.state.borrow_mut().failing.insert(key.to_string());
        self
    }

    pub fn labels(&self) -> Vec<Label> {
        self.state.borrow().labels.clone()
    }

    pub fn milestones(&self) -> Vec<Milestone> {
        self.state.borrow().milestones.clone()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.state.borrow().projects.clone()
    }

    pub fn columns_of(&self, project: &str) -> Vec<String> {
        let state = self.state.borrow();
        state
            .projects
            .iter()
            .find(|p| p.name == project)
            .and_then(|p| state.columns.get(&p.id))
            .map(|cols| cols.iter().map(|c| c.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Mutating calls made so far, as `op:argument`.
    pub fn writes(&self) -> Vec<String> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| c.starts_with("create_") || c.starts_with("edit_"))
            .cloned()
            .collect()
    }

    fn call(&self, op: &str, arg: Option<&str>) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let key = match arg {
            Some(arg) => format!("{}:{}", op, arg),
            None => op.to_string(),
        };
        state.calls.push(key.clone());
        if state.failing.contains(op) || state.failing.contains(&key) {
            return Err(ApiError::Api {
                status: 500,
                message: format!("{} failed", key),
            });
        }
        Ok(())
    }
}

impl State {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl GitHub for FakeGitHub {
    fn get_repo(&self, _owner: &str, _repo: &str) -> Result<Repository> {
        self.call("get_repo", None)?;
        self.state
            .borrow()
            .repo
            .clone()
            .ok_or_else(|| ApiError::NotFound("Not Found".to_string()))
    }

    fn list_topics(&self, _owner: &str, _repo: &str) -> Result<Vec<String>> {
        self.call("list_topics", None)?;
        Ok(self.state.borrow().topics.clone())
    }

    fn list_labels(&self, _owner: &str, _repo: &str) -> Result<Vec<Label>> {
        self.call("list_labels", None)?;
        Ok(self.labels())
    }

    fn get_label(&self, _owner: &str, _repo: &str, name: &str) -> Result<Label> {
        self.call("get_label", Some(name))?;
        self.state
            .borrow()
            .labels
            .iter()
            .find(|l| l.name == name)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Not Found".to_string()))
    }

    fn create_label(&self, _owner: &str, _repo: &str, name: &str, color: &str) -> Result<Label> {
        self.call("create_label", Some(name))?;
        let label = Label {
            name: name.to_string(),
            color: color.to_string(),
            description: None,
        };
        self.state.borrow_mut().labels.push(label.clone());
        Ok(label)
    }

    fn edit_label(&self, _owner: &str, _repo: &str, name: &str, color: &str) -> Result<Label> {
        self.call("edit_label", Some(name))?;
        let mut state = self.state.borrow_mut();
        let label = state
            .labels
            .iter_mut()
            .find(|l| l.name == name)
            .ok_or_else(|| ApiError::NotFound("Not Found".to_string()))?;
        label.color = color.to_string();
        Ok(label.clone())
    }

    fn search_issues(&self, query: &str) -> Result<IssueSearch> {
        self.call("search_issues", Some(query))?;
        let state = self.state.borrow();
        let items = state
            .searches
            .iter()
            .find(|(needle, _)| query.contains(needle.as_str()))
            .map(|(_, issues)| issues.clone())
            .unwrap_or_default();
        let total_count = state
            .search_totals
            .iter()
            .find(|(needle, _)| query.contains(needle.as_str()))
            .map_or(items.len() as u64, |(_, total)| *total);
        Ok(IssueSearch {
            total_count,
            incomplete_results: state.incomplete_search,
            items,
        })
    }

    fn list_milestones(
        &self,
        _owner: &str,
        _repo: &str,
        state: MilestoneState,
    ) -> Result<Vec<Milestone>> {
        self.call("list_milestones", Some(state.as_str()))?;
        Ok(self
            .milestones()
            .into_iter()
            .filter(|m| state == MilestoneState::All || m.state.as_deref() == Some("open"))
            .collect())
    }

    fn create_milestone(
        &self,
        _owner: &str,
        _repo: &str,
        title: &str,
        due_on: Option<DateTime<Utc>>,
    ) -> Result<Milestone> {
        self.call("create_milestone", Some(title))?;
        let mut state = self.state.borrow_mut();
        let milestone = Milestone {
            number: state.milestones.len() as u64 + 1,
            title: title.to_string(),
            state: Some("open".to_string()),
            due_on,
        };
        state.milestones.push(milestone.clone());
        Ok(milestone)
    }

    fn list_projects(&self, _owner: &str, _repo: &str) -> Result<Vec<Project>> {
        self.call("list_projects", None)?;
        Ok(self.projects())
    }

    fn create_project(
        &self,
        _owner: &str,
        _repo: &str,
        name: &str,
        body: Option<&str>,
    ) -> Result<Project> {
        self.call("create_project", Some(name))?;
        let mut state = self.state.borrow_mut();
        let project = Project {
            id: state.allocate_id(),
            name: name.to_string(),
            body: body.map(str::to_string),
        };
        state.projects.push(project.clone());
        state.columns.insert(project.id, Vec::new());
        Ok(project)
    }

    fn list_project_columns(&self, project_id: u64) -> Result<Vec<ProjectColumn>> {
        self.call("list_project_columns", Some(&project_id.to_string()))?;
        Ok(self
            .state
            .borrow()
            .columns
            .get(&project_id)
            .cloned()
            .unwrap_or_default())
    }

    fn create_project_column(&self, project_id: u64, name: &str) -> Result<ProjectColumn> {
        self.call("create_project_column", Some(name))?;
        let mut state = self.state.borrow_mut();
        let column = ProjectColumn {
            id: state.allocate_id(),
            name: name.to_string(),
        };
        state
            .columns
            .entry(project_id)
            .or_default()
            .push(column.clone());
        Ok(column)
    }
}
