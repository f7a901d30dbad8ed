use github_star_runner::error::StarRunnerError;
use github_star_runner::types::{ActionResult, RepoId};

#[test]
fn repo_id_parses_owner_and_name() {
    let repo: RepoId = "octocat/Hello-World".parse().unwrap();
    assert_eq!(repo.owner, "octocat");
    assert_eq!(repo.name, "Hello-World");
}

#[test]
fn repo_id_display_round_trips() {
    for s in ["torvalds/linux", "EbookFoundation/free-programming-books"] {
        let repo: RepoId = s.parse().unwrap();
        assert_eq!(repo.to_string(), s);
    }
}

#[test]
fn repo_id_rejects_malformed_names() {
    for s in ["no-slash", "owner/", "/name", "a/b/c", "", "/"] {
        let result = RepoId::parse(s);
        match result {
            Err(StarRunnerError::InvalidRepoName(msg)) => {
                assert!(msg.contains(s), "error {:?} should name the input {:?}", msg, s);
            }
            other => panic!("expected InvalidRepoName for {:?}, got: {:?}", s, other),
        }
    }
}

#[test]
fn starred_result_is_204_success() {
    let repo: RepoId = "octocat/Hello-World".parse().unwrap();
    let result = ActionResult::starred(repo.clone());

    assert_eq!(result.repo, repo);
    assert!(result.succeeded);
    assert_eq!(result.status, 204);
}

#[test]
fn failed_result_carries_status_and_message() {
    let repo: RepoId = "nonexistent/repo".parse().unwrap();
    let result = ActionResult::failed(repo, 404, "Not Found".to_string());

    assert!(!result.succeeded);
    assert_eq!(result.status, 404);
    assert_eq!(result.message, "Not Found");
}

#[test]
fn action_result_serializes_repo_fields() {
    let repo: RepoId = "octocat/Hello-World".parse().unwrap();
    let result = ActionResult::starred(repo);

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"owner\":\"octocat\""));
    assert!(json.contains("\"name\":\"Hello-World\""));
    assert!(json.contains("\"succeeded\":true"));
    assert!(json.contains("\"status\":204"));
}
