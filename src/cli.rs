use std::path::PathBuf;

use clap::Parser;

use crate::github;

#[derive(Parser)]
#[command(name = "github-star-runner")]
#[command(about = "Stars a list of GitHub repositories and reports per-repository success or failure")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Repositories to star, as owner/name pairs
    #[arg(value_name = "OWNER/NAME")]
    pub repos: Vec<String>,

    /// File with one owner/name repository per line (blank lines and # comments skipped)
    #[arg(long, value_name = "PATH", conflicts_with = "repos")]
    pub repos_file: Option<PathBuf>,

    /// GitHub username (prompted for when omitted)
    #[arg(long, env = "GITHUB_USERNAME")]
    pub username: Option<String>,

    /// Personal access token with public_repo scope (prompted for, hidden, when omitted)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = github::DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = github::DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Print results as a JSON array instead of per-line output
    #[arg(long, short = 'j')]
    pub json: bool,
}
