//! GitHub release API: the collaborator boundary and its reqwest client.

mod api;
mod client;
mod error;
mod models;

pub use api::{CreateFailure, ReleaseApi};
pub use client::GitHubClient;
pub use error::GitHubError;
pub use models::{NewRelease, Release, ReleaseAsset};
