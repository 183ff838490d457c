//! Release deletion.

use crate::error::{ReleaseError, Result};
use crate::github::ReleaseApi;
use crate::repo::RepoRef;

/// Delete the release anchored to `tag`.
///
/// Resolve by tag, then delete by ID. Destructive by design, so there is
/// nothing to compensate.
pub async fn delete_release<A: ReleaseApi>(api: &A, repo: &RepoRef, tag: &str) -> Result<()> {
    let release = api
        .get_release_by_tag(repo.owner(), repo.name(), tag)
        .await
        .map_err(ReleaseError::GetReleaseByTag)?;

    api.delete_release(repo.owner(), repo.name(), release.id)
        .await
        .map_err(ReleaseError::DeleteRelease)?;
    Ok(())
}
