use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, StarRunnerError};
use crate::types::RepoId;

/// Repositories starred when no list is supplied on the command line.
const DEFAULT_REPOS: &[&str] = &[
    "torvalds/linux",
    "octocat/Hello-World",
    "github/gitignore",
    "microsoft/vscode",
    "facebook/react",
    "vuejs/vue",
    "angular/angular",
    "tensorflow/tensorflow",
    "twbs/bootstrap",
    "ohmyzsh/ohmyzsh",
    "freeCodeCamp/freeCodeCamp",
    "sindresorhus/awesome",
    "kamranahmedse/developer-roadmap",
    "EbookFoundation/free-programming-books",
    "jwasham/coding-interview-university",
    "donnemartin/system-design-primer",
];

/// Resolve the repository list from positional arguments, a list file, or
/// the built-in default, in that priority order. Supplying both arguments
/// and a file is rejected.
pub fn load_repos(args: &[String], repos_file: Option<&Path>) -> Result<Vec<RepoId>> {
    match (args.is_empty(), repos_file) {
        (false, Some(_)) => Err(StarRunnerError::ConfigError(
            "pass repositories as arguments or via --repos-file, not both".to_string(),
        )),
        (false, None) => parse_repo_list(args.iter().map(String::as_str)),
        (true, Some(path)) => {
            debug!("loading repository list from {}", path.display());
            let contents = fs::read_to_string(path)?;
            parse_repo_list(
                contents
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#')),
            )
        }
        (true, None) => parse_repo_list(DEFAULT_REPOS.iter().copied()),
    }
}

fn parse_repo_list<'a, I>(items: I) -> Result<Vec<RepoId>>
where
    I: IntoIterator<Item = &'a str>,
{
    items.into_iter().map(RepoId::parse).collect()
}
