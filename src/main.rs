mod cli;
mod config;
mod credentials;
mod error;
mod github;
mod report;
mod runner;
mod types;

use clap::Parser;
use cli::Cli;
use colored::*;
use error::Result;
use github::StarClient;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Resolve and validate the repository list before touching credentials
    // or the network.
    let repos = config::load_repos(&cli.repos, cli.repos_file.as_deref())?;
    if repos.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    let credential = credentials::acquire(cli.username.clone(), cli.token.clone())?;

    if !cli.json {
        println!(
            "{}",
            format!("Starring repositories for user: {}", credential.username)
                .bold()
                .green()
        );
    }

    let client = StarClient::new(
        &credential,
        &cli.api_url,
        Duration::from_secs(cli.timeout_secs),
    )?;

    let results = runner::run_bulk_star(&client, &repos, |result| {
        if !cli.json {
            report::print_result(result);
        }
    })
    .await;

    if cli.json {
        report::print_json(&results)?;
    } else {
        report::print_summary(&results);
    }

    if results.iter().all(|r| r.succeeded) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
