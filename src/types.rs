use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::StarRunnerError;

/// Status GitHub returns when a repository is now (or already was) starred.
pub const STATUS_STARRED: u16 = 204;

/// Repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn parse(s: &str) -> Result<Self, StarRunnerError> {
        s.parse()
    }
}

impl FromStr for RepoId {
    type Err = StarRunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(StarRunnerError::InvalidRepoName(format!(
                "expected owner/name, got: {}",
                s
            )));
        }

        Ok(RepoId {
            owner: parts[0].to_string(),
            name: parts[1].to_string(),
        })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Raw outcome of a single star request: whatever status and body the
/// server sent back.
#[derive(Debug, Clone)]
pub struct StarResponse {
    pub status: u16,
    pub body: String,
}

/// Per-repository outcome of a bulk star run.
///
/// `status` is the HTTP status code, or 0 when the request failed before
/// producing one (DNS failure, refused connection, timeout).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    pub repo: RepoId,
    pub succeeded: bool,
    pub status: u16,
    pub message: String,
}

impl ActionResult {
    pub fn starred(repo: RepoId) -> Self {
        ActionResult {
            repo,
            succeeded: true,
            status: STATUS_STARRED,
            message: "starred".to_string(),
        }
    }

    pub fn failed(repo: RepoId, status: u16, message: String) -> Self {
        ActionResult {
            repo,
            succeeded: false,
            status,
            message,
        }
    }
}
