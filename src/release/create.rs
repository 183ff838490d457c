//! Release creation with a compensating delete on partial failure.

use log::warn;

use crate::error::{ReleaseError, Result};
use crate::github::{NewRelease, Release, ReleaseApi};
use crate::repo::RepoRef;

/// Create a full (non-prerelease) release anchored to `tag`.
///
/// A single create call. If the backend reports an error but still hands
/// back the record it made, a best-effort delete of that partial release is
/// issued so no zombie release with no intended content is left behind. The
/// cleanup outcome is logged either way; the error returned is always the
/// original creation failure.
pub async fn create_release<A: ReleaseApi>(
    api: &A,
    repo: &RepoRef,
    tag: &str,
    name: &str,
    body: &str,
) -> Result<Release> {
    let spec = NewRelease::new(tag, name, body);

    match api.create_release(repo.owner(), repo.name(), &spec).await {
        Ok(release) => Ok(release),
        Err(failure) => {
            if let Some(partial) = failure.partial {
                match api.delete_release(repo.owner(), repo.name(), partial.id).await {
                    Ok(()) => warn!(
                        "create of {repo}@{tag} failed; partial release {} was cleaned up",
                        partial.id
                    ),
                    Err(cleanup) => warn!(
                        "create of {repo}@{tag} failed and cleanup of partial release {} \
                         also failed ({cleanup}); the release may remain",
                        partial.id
                    ),
                }
            }
            Err(ReleaseError::CreateRelease(failure.error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::testing::{Call, RecordingApi};

    fn repo() -> RepoRef {
        "acme/widgets".parse().unwrap()
    }

    #[tokio::test]
    async fn returns_the_created_release() {
        let api = RecordingApi::default();

        let release = create_release(&api, &repo(), "v1.0", "Widgets v1", "first release")
            .await
            .unwrap();

        assert_eq!(release.tag_name, "v1.0");
        assert_eq!(
            api.calls(),
            vec![Call::CreateRelease {
                tag: "v1.0".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn partial_failure_deletes_the_partial_release_once() {
        let api = RecordingApi {
            fail_create: true,
            create_partial: Some(RecordingApi::release(55, "v1.0")),
            ..Default::default()
        };

        let err = create_release(&api, &repo(), "v1.0", "Widgets v1", "first release")
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("failed to create release"));
        let deletes: Vec<_> = api
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::DeleteRelease { .. }))
            .collect();
        assert_eq!(deletes, vec![Call::DeleteRelease { release_id: 55 }]);
    }

    #[tokio::test]
    async fn failure_without_a_partial_issues_no_delete() {
        let api = RecordingApi {
            fail_create: true,
            ..Default::default()
        };

        let err = create_release(&api, &repo(), "v1.0", "Widgets v1", "first release")
            .await
            .unwrap_err();

        assert!(matches!(err, ReleaseError::CreateRelease(_)));
        assert!(
            !api.calls()
                .iter()
                .any(|c| matches!(c, Call::DeleteRelease { .. }))
        );
    }

    #[tokio::test]
    async fn cleanup_failure_still_reports_the_creation_error() {
        let api = RecordingApi {
            fail_create: true,
            create_partial: Some(RecordingApi::release(55, "v1.0")),
            fail_delete_release: true,
            ..Default::default()
        };

        let err = create_release(&api, &repo(), "v1.0", "Widgets v1", "first release")
            .await
            .unwrap_err();

        // The cleanup outcome never replaces the primary error.
        assert!(err.to_string().contains("Validation Failed"));
    }
}
