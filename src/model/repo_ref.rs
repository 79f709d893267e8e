use crate::error::{PdError, Result};
use std::{fmt, str::FromStr};

/// An `owner/name` pair identifying a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    owner: String,
    name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = PdError;

    /// Takes the last two `/`-separated segments, so full URLs resolve too.
    /// Segments are kept verbatim: no trimming, no case folding, and empty
    /// segments are not rejected.
    fn from_str(path: &str) -> Result<Self> {
        let parts: Vec<&str> = path.split('/').collect();
        match parts.as_slice() {
            [.., owner, name] => Ok(Self::new(*owner, *name)),
            _ => Err(PdError::InvalidRepoPath(path.to_string())),
        }
    }
}
