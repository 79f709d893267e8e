//! Per-run API session and preflight checks.

use tracing::{debug, info};

use crate::config::{PdConfig, StandardsSettings};
use crate::error::{PdError, Result};
use crate::github::{GitHub, OctocrabClient, Repository};
use crate::model::RepoRef;
use crate::output::Reporter;

const SCOPE_HINT: &str =
    "  !!! Is this a private repo? Make sure your GH Token has the full Repo scope !!!";

/// Where a command points: a positional `owner/repo` path, or discrete flags.
#[derive(Debug, Clone, Default)]
pub struct TargetSpec<'a> {
    pub path: Option<&'a str>,
    pub owner: Option<&'a str>,
    pub repo: Option<&'a str>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Resolves the access token and the target repository.
///
/// Every absent value gets its own error line before the error is returned;
/// nothing here talks to the network.
pub fn preflight(
    token: Option<&str>,
    target: &TargetSpec<'_>,
    out: &mut Reporter<'_>,
) -> Result<(String, RepoRef)> {
    let mut missing = Vec::new();

    let token = present(token);
    if token.is_none() {
        out.fail("github access token required");
        missing.push("ghtoken");
    }

    let repo_ref = match present(target.path) {
        Some(path) => match path.parse::<RepoRef>() {
            Ok(r) => Some(r),
            Err(e) => {
                out.fail(&e.to_string());
                return Err(e);
            }
        },
        None => {
            let owner = present(target.owner);
            let repo = present(target.repo);
            if owner.is_none() {
                out.fail("repository owner required (--owner or owner/repo)");
                missing.push("owner");
            }
            if repo.is_none() {
                out.fail("repository name required (--repo or owner/repo)");
                missing.push("repo");
            }
            owner.zip(repo).map(|(o, r)| RepoRef::new(o, r))
        }
    };

    match (token, repo_ref) {
        (Some(token), Some(repo_ref)) if missing.is_empty() => Ok((token.to_string(), repo_ref)),
        _ => Err(PdError::MissingFlag(missing.join(", "))),
    }
}

/// Authenticated handle plus the repository every rule in the run targets.
pub struct Session {
    github: Box<dyn GitHub>,
    target: RepoRef,
    repository: Repository,
    standards: StandardsSettings,
}

impl Session {
    /// Builds the API client once and looks up the target repository.
    pub fn open(
        config: &PdConfig,
        token: &str,
        target: RepoRef,
        out: &mut Reporter<'_>,
    ) -> Result<Self> {
        debug!(api_url = %config.github.api_url, "creating github client");
        let client = OctocrabClient::new(token, &config.github)?;
        Self::connect(Box::new(client), target, config.standards.clone(), out)
    }

    /// Fetches `target` through `github`, failing fast when it is unreachable.
    pub fn connect(
        github: Box<dyn GitHub>,
        target: RepoRef,
        standards: StandardsSettings,
        out: &mut Reporter<'_>,
    ) -> Result<Self> {
        match github.get_repo(target.owner(), target.name()) {
            Ok(repository) => {
                info!(repo = %target, private = repository.private, "repository found");
                Ok(Self {
                    github,
                    target,
                    repository,
                    standards,
                })
            }
            Err(e) => {
                out.fail(&e.to_string());
                if e.is_not_found() {
                    out.detail(SCOPE_HINT);
                }
                Err(e.into())
            }
        }
    }

    pub fn github(&self) -> &dyn GitHub {
        self.github.as_ref()
    }

    pub fn target(&self) -> &RepoRef {
        &self.target
    }

    pub fn owner(&self) -> &str {
        self.target.owner()
    }

    pub fn name(&self) -> &str {
        self.target.name()
    }

    /// The repository as returned by the initial lookup.
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn standards(&self) -> &StandardsSettings {
        &self.standards
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fake::FakeGitHub;
    use crate::output::capture;

    #[test]
    fn test_preflight_with_path() {
        let (mut out, _, error) = capture::reporter(false);
        let target = TargetSpec {
            path: Some("mozilla/widget"),
            ..Default::default()
        };
        let (token, repo) = preflight(Some("tok"), &target, &mut out).unwrap();
        assert_eq!(token, "tok");
        assert_eq!(repo, RepoRef::new("mozilla", "widget"));
        assert!(error.contents().is_empty());
    }

    #[test]
    fn test_preflight_with_flags() {
        let (mut out, _, _) = capture::reporter(false);
        let target = TargetSpec {
            owner: Some("mozilla"),
            repo: Some("widget"),
            ..Default::default()
        };
        let (_, repo) = preflight(Some("tok"), &target, &mut out).unwrap();
        assert_eq!(repo.to_string(), "mozilla/widget");
    }

    #[test]
    fn test_preflight_reports_every_missing_value() {
        let (mut out, _, error) = capture::reporter(false);
        let result = preflight(None, &TargetSpec::default(), &mut out);

        match result {
            Err(PdError::MissingFlag(names)) => assert_eq!(names, "ghtoken, owner, repo"),
            other => panic!("unexpected: {:?}", other.map(|(t, _)| t)),
        }
        let lines = error.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Error: github access token required");
    }

    #[test]
    fn test_preflight_empty_token_is_missing() {
        let (mut out, _, _) = capture::reporter(false);
        let target = TargetSpec {
            path: Some("mozilla/widget"),
            ..Default::default()
        };
        assert!(matches!(
            preflight(Some(""), &target, &mut out),
            Err(PdError::MissingFlag(_))
        ));
    }

    #[test]
    fn test_preflight_invalid_path() {
        let (mut out, _, error) = capture::reporter(false);
        let target = TargetSpec {
            path: Some("widget"),
            ..Default::default()
        };
        assert!(matches!(
            preflight(Some("tok"), &target, &mut out),
            Err(PdError::InvalidRepoPath(_))
        ));
        assert!(error.contents().contains("expect: owner/reponame"));
    }

    #[test]
    fn test_connect_missing_repo_prints_scope_hint() {
        let (mut out, _, error) = capture::reporter(false);
        let fake = FakeGitHub::new("mozilla", "widget").without_repo();
        let result = Session::connect(
            Box::new(fake),
            RepoRef::new("mozilla", "widget"),
            StandardsSettings::default(),
            &mut out,
        );
        assert!(matches!(result, Err(PdError::Api(_))));
        assert!(error.contents().contains("404 Not Found"));
        assert!(error.contents().contains("full Repo scope"));
    }

    #[test]
    fn test_connect_other_error_has_no_hint() {
        let (mut out, _, error) = capture::reporter(false);
        let fake = FakeGitHub::new("mozilla", "widget").failing("get_repo");
        let result = Session::connect(
            Box::new(fake),
            RepoRef::new("mozilla", "widget"),
            StandardsSettings::default(),
            &mut out,
        );
        assert!(result.is_err());
        assert!(!error.contents().contains("full Repo scope"));
    }
}
