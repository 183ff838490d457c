//! Command execution: validation, credential wiring, and dispatch.

use std::time::Duration;

use log::debug;

use crate::cli::{Args, Command, OutputManager};
use crate::error::{ReleaseError, Result};
use crate::github::GitHubClient;
use crate::release;
use crate::repo::RepoRef;

/// Execute the parsed command and map its outcome to an exit code.
///
/// Argument and credential problems are reported on stderr and return 2
/// without any client being built; operation failures are reported on stdout
/// and return 1.
pub async fn execute_command(args: Args) -> Result<i32> {
    let output = OutputManager::new();

    if let Err(validation_error) = args.validate() {
        output.error(&validation_error.to_string());
        return Ok(2);
    }

    let repo: RepoRef = match args.command.repo().parse() {
        Ok(repo) => repo,
        Err(repo_error) => {
            output.error(&repo_error.to_string());
            return Ok(2);
        }
    };

    let Some(token) = token_from_env() else {
        output.error(&ReleaseError::MissingToken.to_string());
        return Ok(2);
    };

    match run_operation(&args, &repo, &token).await {
        Ok(done) => {
            output.success(done);
            Ok(0)
        }
        Err(e) => {
            debug!("command '{}' failed: {e}", args.command.name());
            output.failure(&e.to_string());
            Ok(e.exit_code())
        }
    }
}

/// Build the client and run the matching operation, yielding its status line
async fn run_operation(args: &Args, repo: &RepoRef, token: &str) -> Result<&'static str> {
    let client = GitHubClient::with_token(token, Duration::from_secs(args.timeout))
        .map_err(ReleaseError::ClientBuild)?;

    match &args.command {
        Command::Create {
            tag, name, body, ..
        } => {
            let created = release::create_release(&client, repo, tag, name, body).await?;
            debug!("created release {} for tag {}", created.id, created.tag_name);
            Ok("Release created successfully!")
        }
        Command::Upload {
            tag,
            file,
            asset_name,
            ..
        } => {
            release::upload_asset(&client, repo, tag, file, asset_name).await?;
            Ok("Release uploaded successfully!")
        }
        Command::Delete { tag, .. } => {
            release::delete_release(&client, repo, tag).await?;
            Ok("Release deleted successfully!")
        }
    }
}

/// Bearer token from the environment: `GH_TOKEN` first, then `GITHUB_TOKEN`.
/// Empty values count as unset.
fn token_from_env() -> Option<String> {
    ["GH_TOKEN", "GITHUB_TOKEN"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|value| !value.is_empty()))
}
