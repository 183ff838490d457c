//! # release_maker
//!
//! Create, upload assets to, and delete GitHub releases from the command
//! line. Every command names its repository as `owner/repo` and anchors the
//! release to a tag; the bearer token comes from `GH_TOKEN` or
//! `GITHUB_TOKEN`.
//!
//! ## Usage
//!
//! ```bash
//! release_maker create acme/widgets v1.0 "Widgets v1" "first release"
//! release_maker upload acme/widgets v1.0 ./bundle.zip bundle.zip
//! release_maker delete acme/widgets v1.0
//! ```
//!
//! Uploading replaces any asset already carrying the same name, so a release
//! ends up with exactly one asset per display name. Endpoints default to
//! github.com and follow `GITHUB_API_URL` / `GITHUB_UPLOAD_URL` overrides
//! (GitHub Enterprise convention).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod github;
pub mod release;
pub mod repo;

// Re-export main types for public API
pub use cli::Args;
pub use error::{CliError, ReleaseError, Result};
pub use github::{GitHubClient, ReleaseApi};
pub use repo::RepoRef;
