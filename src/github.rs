use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::credentials::Credential;
use crate::error::Result;
use crate::types::{RepoId, StarResponse};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("github-star-runner/", env!("CARGO_PKG_VERSION"));

pub struct StarClient {
    client: Client,
    token: String,
    api_base: Url,
}

impl StarClient {
    pub fn new(credential: &Credential, api_url: &str, timeout: Duration) -> Result<Self> {
        let api_base = Url::parse(api_url)?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(StarClient {
            client,
            token: credential.token.clone(),
            api_base,
        })
    }

    /// Issue one idempotent star request for `repo`.
    ///
    /// Every HTTP status comes back as `Ok`; status-code policy belongs to
    /// the caller. `Err` means the request never produced a status line
    /// (DNS failure, refused connection, timeout). Exactly one attempt.
    pub async fn star(&self, repo: &RepoId) -> Result<StarResponse> {
        let url = self.star_url(repo);
        debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .header("Accept", ACCEPT_HEADER)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(StarResponse { status, body })
    }

    fn star_url(&self, repo: &RepoId) -> String {
        format!(
            "{}/user/starred/{}/{}",
            self.api_base.as_str().trim_end_matches('/'),
            repo.owner,
            repo.name
        )
    }
}
