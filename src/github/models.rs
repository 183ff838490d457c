//! GitHub release wire models.
//!
//! Only the fields this tool touches; the API returns far more.

use serde::{Deserialize, Serialize};

/// A release record as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Opaque numeric ID assigned by the backend
    pub id: u64,
    /// Tag the release is anchored to
    pub tag_name: String,
    /// Display name, if one was set
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text body, if one was set
    #[serde(default)]
    pub body: Option<String>,
    /// Whether the release is marked as a prerelease
    #[serde(default)]
    pub prerelease: bool,
}

/// An uploaded file attached to a release
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Opaque numeric ID assigned by the backend
    pub id: u64,
    /// Display name, unique within a release by this tool's policy
    pub name: String,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    /// Public download URL, once the backend has one
    #[serde(default)]
    pub browser_download_url: Option<String>,
}

/// Payload for the create-release call
#[derive(Debug, Clone, Serialize)]
pub struct NewRelease {
    /// Tag to anchor the release to
    pub tag_name: String,
    /// Display name
    pub name: String,
    /// Free-text body
    pub body: String,
    /// Prerelease flag; pinned to false for everything this tool creates
    pub prerelease: bool,
}

impl NewRelease {
    /// Release spec for a full (non-prerelease) release
    pub fn new(
        tag_name: impl Into<String>,
        name: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            tag_name: tag_name.into(),
            name: name.into(),
            body: body.into(),
            prerelease: false,
        }
    }
}
