use std::fmt;
use std::io::{self, BufRead, Write};

use crate::error::{Result, StarRunnerError};

/// GitHub username plus personal access token. Read once at startup and
/// held only in process memory.
#[derive(Clone)]
pub struct Credential {
    pub username: String,
    pub token: String,
}

impl Credential {
    pub fn new(username: String, token: String) -> Result<Self> {
        if username.trim().is_empty() {
            return Err(StarRunnerError::CredentialError(
                "username must not be empty".to_string(),
            ));
        }
        if token.trim().is_empty() {
            return Err(StarRunnerError::CredentialError(
                "token must not be empty".to_string(),
            ));
        }

        Ok(Credential { username, token })
    }
}

// The token must never appear in logs or debug output.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Resolve credentials from flag/env values, prompting interactively for
/// whatever is missing. The token prompt does not echo.
pub fn acquire(username: Option<String>, token: Option<String>) -> Result<Credential> {
    let username = match username {
        Some(username) => username,
        None => prompt_visible("GitHub username: ")?,
    };

    let token = match token {
        Some(token) => token,
        None => prompt_secret("Personal access token (with public_repo scope): ")?,
    };

    Credential::new(username, token)
}

fn prompt_visible(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_secret(prompt: &str) -> Result<String> {
    let token = rpassword::prompt_password(prompt)?;
    Ok(token.trim().to_string())
}
