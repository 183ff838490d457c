//! Authenticated GitHub client over reqwest.

use std::time::Duration;

use bytes::Bytes;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode};
use url::Url;

use super::api::{CreateFailure, ReleaseApi};
use super::error::GitHubError;
use super::models::{NewRelease, Release, ReleaseAsset};

/// Cap on connection setup; requests carry their own deadline
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// REST endpoint, overridable via `GITHUB_API_URL`
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Asset upload endpoint, overridable via `GITHUB_UPLOAD_URL`
const DEFAULT_UPLOAD_BASE: &str = "https://uploads.github.com";

/// Media type the REST API speaks
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Authenticated handle to the GitHub release API.
///
/// Construction wires in the bearer token and resolves the endpoint bases;
/// the token itself is only ever checked by the backend, on the first call.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_base: Url,
    upload_base: Url,
}

impl GitHubClient {
    /// Build an authenticated client from a bearer token.
    ///
    /// Connection setup is capped at 30 seconds and every request carries
    /// `request_timeout` as its deadline.
    pub fn with_token(token: &str, request_timeout: Duration) -> Result<Self, GitHubError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| GitHubError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let http = reqwest::Client::builder()
            .user_agent(concat!("release_maker/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            http,
            api_base: endpoint_base("GITHUB_API_URL", DEFAULT_API_BASE)?,
            upload_base: endpoint_base("GITHUB_UPLOAD_URL", DEFAULT_UPLOAD_BASE)?,
        })
    }
}

impl ReleaseApi for GitHubClient {
    async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        new_release: &NewRelease,
    ) -> Result<Release, CreateFailure> {
        let url = endpoint(&self.api_base, &["repos", owner, repo, "releases"]);
        debug!("POST {url}");

        let response = self
            .http
            .post(url.clone())
            .json(new_release)
            .send()
            .await
            .map_err(GitHubError::from)?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<Release>()
                .await
                .map_err(|e| GitHubError::from(e).into());
        }

        // A failed create can still hand back the record it made; recover
        // its ID so the caller can clean up.
        let body = response.text().await.unwrap_or_default();
        let partial = serde_json::from_str::<Release>(&body).ok();
        debug!("{status} from {url}");
        Err(CreateFailure {
            partial,
            error: GitHubError::Api {
                status,
                message: body_message(status, &body),
            },
        })
    }

    async fn get_release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> Result<Release, GitHubError> {
        let url = endpoint(
            &self.api_base,
            &["repos", owner, repo, "releases", "tags", tag],
        );
        debug!("GET {url}");

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
    ) -> Result<(), GitHubError> {
        let id = release_id.to_string();
        let url = endpoint(&self.api_base, &["repos", owner, repo, "releases", &id]);
        debug!("DELETE {url}");

        let response = self.http.delete(url).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(())
    }

    async fn list_assets(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
    ) -> Result<Vec<ReleaseAsset>, GitHubError> {
        // One call at the maximum page size; a release holding more assets
        // than one page truncates here.
        let id = release_id.to_string();
        let url = endpoint(
            &self.api_base,
            &["repos", owner, repo, "releases", &id, "assets"],
        );
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .query(&[("per_page", "100")])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete_asset(
        &self,
        owner: &str,
        repo: &str,
        asset_id: u64,
    ) -> Result<(), GitHubError> {
        let id = asset_id.to_string();
        let url = endpoint(
            &self.api_base,
            &["repos", owner, repo, "releases", "assets", &id],
        );
        debug!("DELETE {url}");

        let response = self.http.delete(url).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(())
    }

    async fn upload_asset(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
        name: &str,
        content: Bytes,
    ) -> Result<ReleaseAsset, GitHubError> {
        let id = release_id.to_string();
        let url = endpoint(
            &self.upload_base,
            &["repos", owner, repo, "releases", &id, "assets"],
        );
        debug!("POST {url} ({} bytes)", content.len());

        let response = self
            .http
            .post(url)
            .query(&[("name", name)])
            .header(CONTENT_TYPE, content_type_for(name))
            .body(content)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }
}

/// Resolve an endpoint base: environment override when set non-empty,
/// default otherwise. Validated up front so a bad override fails at
/// construction instead of on the first call.
fn endpoint_base(var: &str, default: &str) -> Result<Url, GitHubError> {
    let raw = match std::env::var(var) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    };
    normalize_base(&raw)
}

/// Parse a base URL, trimming trailing slashes and requiring http(s)
fn normalize_base(raw: &str) -> Result<Url, GitHubError> {
    let base = raw.trim_end_matches('/');
    let url = Url::parse(base).map_err(|source| GitHubError::BadEndpoint {
        url: base.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(GitHubError::NonHttpEndpoint {
            url: base.to_string(),
        });
    }
    Ok(url)
}

/// Extend a validated base with percent-encoded path segments.
///
/// Each segment is pushed whole, so a tag carrying `/`, `#`, or spaces lands
/// as one escaped segment instead of rewriting the request target.
fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // An http(s) URL always has mutable path segments.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Read an error response into an Api error, keeping the body's message
async fn api_error(response: Response) -> GitHubError {
    let status = response.status();
    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();
    debug!("{status} from {url}");
    GitHubError::Api {
        status,
        message: body_message(status, &body),
    }
}

/// Human detail for a failed call: the body's `message` field when the body
/// is the API's JSON error shape, the raw text otherwise, the status reason
/// when there is no body at all.
fn body_message(status: StatusCode, body: &str) -> String {
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    }
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Content type for an uploaded asset, keyed off the display name's extension
fn content_type_for(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("deb") => "application/vnd.debian.binary-package",
        Some("rpm") => "application/x-rpm",
        Some("exe") => "application/x-msdownload",
        Some("dmg") => "application/x-apple-diskimage",
        Some("AppImage") => "application/x-executable",
        Some("zip") => "application/zip",
        Some("tar") | Some("gz") | Some("tgz") => "application/gzip",
        _ => "application/octet-stream",
    }
}
