//! Release API collaborator boundary.
//!
//! This trait is the seam between the three release operations and the
//! hosted backend. The production implementation is
//! [`GitHubClient`](super::GitHubClient); tests script it with a recording
//! double.

use std::future::Future;

use bytes::Bytes;

use super::error::GitHubError;
use super::models::{NewRelease, Release, ReleaseAsset};

/// Failure from the create-release call.
///
/// Some backends hand back a body describing the record they made alongside
/// an error status; its ID is what lets the caller clean up.
#[derive(Debug)]
pub struct CreateFailure {
    /// Partially created release recovered from the error response, if any
    pub partial: Option<Release>,
    /// The underlying API error
    pub error: GitHubError,
}

impl From<GitHubError> for CreateFailure {
    fn from(error: GitHubError) -> Self {
        CreateFailure {
            partial: None,
            error,
        }
    }
}

/// Remote release-management capability.
///
/// One method per backend call the tool issues; owner and repo ride along on
/// every call because the backend scopes records by repository, not by
/// client handle.
pub trait ReleaseApi {
    /// Create a release from `new_release`
    fn create_release(
        &self,
        owner: &str,
        repo: &str,
        new_release: &NewRelease,
    ) -> impl Future<Output = Result<Release, CreateFailure>>;

    /// Look up the release anchored to `tag`
    fn get_release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> impl Future<Output = Result<Release, GitHubError>>;

    /// Delete a release by its ID
    fn delete_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
    ) -> impl Future<Output = Result<(), GitHubError>>;

    /// List the assets attached to a release
    fn list_assets(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
    ) -> impl Future<Output = Result<Vec<ReleaseAsset>, GitHubError>>;

    /// Delete an asset by its ID
    fn delete_asset(
        &self,
        owner: &str,
        repo: &str,
        asset_id: u64,
    ) -> impl Future<Output = Result<(), GitHubError>>;

    /// Upload `content` as a new asset named `name` on a release
    fn upload_asset(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
        name: &str,
        content: Bytes,
    ) -> impl Future<Output = Result<ReleaseAsset, GitHubError>>;
}
