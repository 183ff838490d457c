//! Repository references.

use std::fmt;
use std::str::FromStr;

use crate::error::CliError;

/// An `owner/name` pair identifying a hosted repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    owner: String,
    name: String,
}

impl RepoRef {
    /// Repository owner (user or organization)
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoRef {
    type Err = CliError;

    /// Parse an `owner/name` token: exactly one separator, both parts non-empty.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = input.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(CliError::InvalidRepo {
                input: input.to_string(),
            });
        }

        Ok(RepoRef {
            owner: parts[0].to_string(),
            name: parts[1].to_string(),
        })
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_owner_and_name() {
        let repo: RepoRef = "acme/widgets".parse().unwrap();
        assert_eq!(repo.owner(), "acme");
        assert_eq!(repo.name(), "widgets");
    }

    #[test]
    fn display_round_trips() {
        for input in ["acme/widgets", "a/b", "rust-lang/rust"] {
            let repo: RepoRef = input.parse().unwrap();
            assert_eq!(repo.to_string(), input);
        }
    }

    #[test]
    fn rejects_malformed_tokens() {
        for input in ["", "acme", "acme/", "/widgets", "a/b/c", "/", "//"] {
            let err = input.parse::<RepoRef>().unwrap_err();
            assert_eq!(
                err,
                CliError::InvalidRepo {
                    input: input.to_string()
                },
                "expected {input:?} to be rejected"
            );
        }
    }
}
