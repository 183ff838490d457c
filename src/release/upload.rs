//! Asset upload with replace-on-conflict semantics.

use std::path::Path;

use bytes::Bytes;
use log::debug;

use crate::error::{ReleaseError, Result};
use crate::github::ReleaseApi;
use crate::repo::RepoRef;

/// Upload the file at `file_path` as an asset named `asset_name` on the
/// release anchored to `tag`, replacing any same-named asset first.
///
/// Sequence: resolve the release by tag, read the file, list the release's
/// assets, delete the first one whose name matches, upload. Each step is its
/// own failure point and aborts the rest; completed steps are not rolled
/// back, so a delete that lands before a failed upload stays deleted. The
/// list, delete, and upload are three separate calls with no transactional
/// guarantee against concurrent writers.
pub async fn upload_asset<A: ReleaseApi>(
    api: &A,
    repo: &RepoRef,
    tag: &str,
    file_path: &Path,
    asset_name: &str,
) -> Result<()> {
    // Lookup first: a missing release short-circuits before the filesystem
    // is touched.
    let release = api
        .get_release_by_tag(repo.owner(), repo.name(), tag)
        .await
        .map_err(ReleaseError::GetReleaseByTag)?;

    let content = tokio::fs::read(file_path)
        .await
        .map(Bytes::from)
        .map_err(ReleaseError::OpenFile)?;

    let assets = api
        .list_assets(repo.owner(), repo.name(), release.id)
        .await
        .map_err(ReleaseError::ListAssets)?;

    // First match only. The backend does not enforce name uniqueness, so a
    // degenerate release with duplicates keeps all but the first-listed one.
    if let Some(existing) = assets.iter().find(|asset| asset.name == asset_name) {
        debug!(
            "replacing asset {asset_name} (id {}) on release {}",
            existing.id, release.id
        );
        api.delete_asset(repo.owner(), repo.name(), existing.id)
            .await
            .map_err(ReleaseError::DeleteAsset)?;
    }

    api.upload_asset(repo.owner(), repo.name(), release.id, asset_name, content)
        .await
        .map_err(ReleaseError::UploadAsset)?;
    Ok(())
}
