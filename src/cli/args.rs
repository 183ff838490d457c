//! Command line argument parsing and validation.
//!
//! Structure comes from clap; content checks (non-empty fields) live in an
//! explicit [`Args::validate`] step so they run before any credential is
//! read or client is built.

use std::path::PathBuf;

use clap::builder::TypedValueParser as _;
use clap::{Parser, Subcommand};

use crate::error::CliError;

/// Manage GitHub releases from the command line
#[derive(Parser, Debug)]
#[command(
    name = "release_maker",
    version,
    about = "Create, upload assets to, and delete GitHub releases",
    long_about = "Create, upload assets to, and delete GitHub releases.

Reads the bearer token from GH_TOKEN or GITHUB_TOKEN.

Usage:
  release_maker create acme/widgets v1.0 \"Widgets v1\" \"first release\"
  release_maker upload acme/widgets v1.0 ./bundle.zip bundle.zip
  release_maker delete acme/widgets v1.0"
)]
pub struct Args {
    /// Per-request timeout for remote calls, in seconds
    #[arg(long, global = true, value_name = "SECONDS", default_value_t = 300)]
    pub timeout: u64,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// The three release operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a release for a tag
    Create {
        /// Target repository as owner/repo
        #[arg(value_name = "OWNER/REPO")]
        repo: String,
        /// Tag to anchor the release to
        #[arg(value_name = "TAG")]
        tag: String,
        /// Display name of the release
        #[arg(value_name = "NAME")]
        name: String,
        /// Free-text release body
        #[arg(value_name = "BODY")]
        body: String,
    },

    /// Upload an asset to an existing release, replacing any same-named one
    Upload {
        /// Target repository as owner/repo
        #[arg(value_name = "OWNER/REPO")]
        repo: String,
        /// Tag of the release to attach the asset to
        #[arg(value_name = "TAG")]
        tag: String,
        /// Local file to upload
        #[arg(
            value_name = "FILE",
            value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
        )]
        file: PathBuf,
        /// Display name the asset gets on the release
        #[arg(value_name = "ASSET_NAME")]
        asset_name: String,
    },

    /// Delete the release anchored to a tag
    Delete {
        /// Target repository as owner/repo
        #[arg(value_name = "OWNER/REPO")]
        repo: String,
        /// Tag of the release to delete
        #[arg(value_name = "TAG")]
        tag: String,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument content beyond what clap enforces structurally
    pub fn validate(&self) -> Result<(), CliError> {
        // The file path is checked as an OsStr: a non-UTF-8 path is still a
        // path the upload can read.
        if let Command::Upload { file, .. } = &self.command
            && file.as_os_str().is_empty()
        {
            return Err(CliError::InvalidArguments {
                reason: "file must not be empty".to_string(),
            });
        }

        for (label, value) in self.command.required_fields() {
            if value.is_empty() {
                return Err(CliError::InvalidArguments {
                    reason: format!("{label} must not be empty"),
                });
            }
        }
        Ok(())
    }
}

impl Command {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Create { .. } => "create",
            Command::Upload { .. } => "upload",
            Command::Delete { .. } => "delete",
        }
    }

    /// The owner/repo token, still unparsed
    pub fn repo(&self) -> &str {
        match self {
            Command::Create { repo, .. }
            | Command::Upload { repo, .. }
            | Command::Delete { repo, .. } => repo,
        }
    }

    /// Required string fields with labels for validation messages; the
    /// upload file path is checked separately as an `OsStr`
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Command::Create {
                repo,
                tag,
                name,
                body,
            } => vec![
                ("owner/repo", repo),
                ("tag", tag),
                ("release name", name),
                ("release body", body),
            ],
            Command::Upload {
                repo,
                tag,
                asset_name,
                ..
            } => vec![("owner/repo", repo), ("tag", tag), ("asset name", asset_name)],
            Command::Delete { repo, tag } => vec![("owner/repo", repo), ("tag", tag)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn parses_the_three_subcommands() {
        let args = parse(&[
            "release_maker",
            "create",
            "acme/widgets",
            "v1.0",
            "Widgets v1",
            "first release",
        ]);
        assert_eq!(args.command.name(), "create");
        assert_eq!(args.command.repo(), "acme/widgets");
        assert_eq!(args.timeout, 300);

        let args = parse(&[
            "release_maker",
            "upload",
            "acme/widgets",
            "v1.0",
            "./bundle.zip",
            "bundle.zip",
        ]);
        assert_eq!(args.command.name(), "upload");

        let args = parse(&["release_maker", "delete", "acme/widgets", "v1.0"]);
        assert_eq!(args.command.name(), "delete");
    }

    #[test]
    fn timeout_flag_overrides_the_default() {
        let args = parse(&[
            "release_maker",
            "delete",
            "acme/widgets",
            "v1.0",
            "--timeout",
            "30",
        ]);
        assert_eq!(args.timeout, 30);
    }

    #[test]
    fn missing_arguments_fail_structurally() {
        assert!(Args::try_parse_from(["release_maker"]).is_err());
        assert!(Args::try_parse_from(["release_maker", "publish"]).is_err());
        assert!(Args::try_parse_from(["release_maker", "create", "acme/widgets", "v1.0"]).is_err());
    }

    #[test]
    fn empty_fields_fail_validation() {
        let args = parse(&["release_maker", "create", "acme/widgets", "", "n", "b"]);
        let err = args.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid arguments: tag must not be empty");

        let args = parse(&["release_maker", "delete", "acme/widgets", "v1.0"]);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn empty_upload_file_fails_validation() {
        let args = parse(&[
            "release_maker",
            "upload",
            "acme/widgets",
            "v1.0",
            "",
            "bundle.zip",
        ]);
        let err = args.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid arguments: file must not be empty");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_upload_paths_pass_validation() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let path = OsString::from_vec(b"/tmp/bundle-\xff.zip".to_vec());
        let args = Args::try_parse_from([
            OsString::from("release_maker"),
            OsString::from("upload"),
            OsString::from("acme/widgets"),
            OsString::from("v1.0"),
            path,
            OsString::from("bundle.zip"),
        ])
        .unwrap();

        assert!(args.validate().is_ok());
    }
}
