use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use github_star_runner::credentials::Credential;
use github_star_runner::github::StarClient;

pub const TEST_USERNAME: &str = "octocat";
pub const TEST_TOKEN: &str = "test-token";

/// Client pointed at a mock server, with a short timeout so transport
/// failures surface quickly.
pub fn test_client(api_url: &str) -> anyhow::Result<StarClient> {
    let credential = Credential::new(TEST_USERNAME.to_string(), TEST_TOKEN.to_string())?;
    Ok(StarClient::new(&credential, api_url, Duration::from_secs(5))?)
}

/// Mount a PUT /user/starred/{owner}/{name} expectation returning the
/// given status and body.
pub async fn mock_star_endpoint(
    server: &MockServer,
    owner: &str,
    name: &str,
    status: u16,
    body: &str,
) {
    Mock::given(method("PUT"))
        .and(path(format!("/user/starred/{}/{}", owner, name)))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}
