//! Error types for release_maker operations.
//!
//! Every remote call has its own wrap variant so a failure names the exact
//! step that died; argument problems stay in [`CliError`] and map to a
//! different exit code than operation failures.

use thiserror::Error;

use crate::github::GitHubError;

/// Result type alias for release_maker operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all release_maker operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// CLI argument errors
    #[error(transparent)]
    Cli(#[from] CliError),

    /// No bearer token in the environment
    #[error("GitHub token not provided. Set GH_TOKEN or GITHUB_TOKEN")]
    MissingToken,

    /// The authenticated client could not be constructed
    #[error("failed to build GitHub client: {0}")]
    ClientBuild(#[source] GitHubError),

    /// The create-release call failed
    #[error("failed to create release: {0}")]
    CreateRelease(#[source] GitHubError),

    /// The release lookup by tag failed or matched nothing
    #[error("failed to get release by tag: {0}")]
    GetReleaseByTag(#[source] GitHubError),

    /// The local asset file could not be read
    #[error("failed to open file: {0}")]
    OpenFile(#[source] std::io::Error),

    /// The asset listing call failed
    #[error("failed to list release assets: {0}")]
    ListAssets(#[source] GitHubError),

    /// Deleting a same-named asset failed
    #[error("failed to delete existing asset: {0}")]
    DeleteAsset(#[source] GitHubError),

    /// The asset upload call failed
    #[error("failed to upload asset: {0}")]
    UploadAsset(#[source] GitHubError),

    /// The delete-release call failed
    #[error("failed to delete release: {0}")]
    DeleteRelease(#[source] GitHubError),
}

/// CLI-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Malformed owner/repo token
    #[error("Invalid owner/repo argument: {input}")]
    InvalidRepo {
        /// The token as given on the command line
        input: String,
    },
}

impl ReleaseError {
    /// Process exit code for this error.
    ///
    /// Argument and credential problems are caught before any remote call
    /// and exit 2; operation failures exit 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReleaseError::Cli(_) | ReleaseError::MissingToken => 2,
            _ => 1,
        }
    }
}
