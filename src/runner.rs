use tracing::warn;

use crate::github::StarClient;
use crate::types::{ActionResult, RepoId, StarResponse, STATUS_STARRED};

/// Star every repository in order, one attempt each, collecting one result
/// per repository. Individual failures never stop the remaining loop;
/// transport-level failures are recorded with status 0 and the loop
/// continues. Empty input yields empty output.
///
/// `on_result` observes each result as it is produced, before the next
/// request starts.
pub async fn run_bulk_star<F>(
    client: &StarClient,
    repos: &[RepoId],
    mut on_result: F,
) -> Vec<ActionResult>
where
    F: FnMut(&ActionResult),
{
    let mut results = Vec::with_capacity(repos.len());

    for repo in repos {
        let result = match client.star(repo).await {
            Ok(response) => result_from_response(repo.clone(), response),
            Err(e) => {
                warn!("transport failure for {}: {}", repo, e);
                ActionResult::failed(repo.clone(), 0, e.to_string())
            }
        };

        on_result(&result);
        results.push(result);
    }

    results
}

fn result_from_response(repo: RepoId, response: StarResponse) -> ActionResult {
    if response.status == STATUS_STARRED {
        ActionResult::starred(repo)
    } else {
        ActionResult::failed(repo, response.status, failure_message(&response.body))
    }
}

// GitHub error bodies are JSON objects with a `message` field; anything
// else passes through verbatim.
fn failure_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
