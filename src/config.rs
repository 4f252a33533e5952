// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Validated configuration for a pruning run.
//!
//! The CLI collects raw action inputs from flags or the environment variables
//! GitHub Actions provides. The types in this module hold those inputs after
//! trimming and validation, so that malformed input is rejected before any
//! request reaches GitHub.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{error::Error, pattern::MatchMode};

/// Default REST API root used when `GITHUB_API_URL` is not provided.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Owner and name of the repository being pruned.
///
/// # Examples
///
/// ```
/// use prerelease_pruner::RepositoryRef;
///
/// let repository: RepositoryRef = "octocat/hello-world".parse()?;
/// assert_eq!(repository.owner, "octocat");
/// assert_eq!(repository.name, "hello-world");
/// # Ok::<(), prerelease_pruner::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct RepositoryRef
{
    /// Account or organization owning the repository.
    pub owner: String,
    /// Repository name.
    pub name:  String,
}

impl FromStr for RepositoryRef
{
    type Err = Error;

    /// Parses the `owner/repo` form used by `GITHUB_REPOSITORY`.
    fn from_str(raw: &str,) -> Result<Self, Self::Err,>
    {
        let trimmed = raw.trim();
        let (owner, name,) = trimmed.split_once('/',).ok_or_else(|| {
            Error::config(format!("repository '{trimmed}' must use the owner/repo form"),)
        },)?;

        if owner.is_empty() || name.is_empty() || name.contains('/',) {
            return Err(Error::config(format!(
                "repository '{trimmed}' must use the owner/repo form"
            ),),);
        }

        Ok(Self {
            owner: owner.to_owned(),
            name:  name.to_owned(),
        },)
    }
}

impl fmt::Display for RepositoryRef
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Inputs consumed by the pruning pipeline.
///
/// The branch is kept raw; it is normalized by the pipeline as its first step
/// so a bad branch fails the run before anything is fetched.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct PruneConfig
{
    pub repository: RepositoryRef,
    pub branch:     String,
    pub mode:       MatchMode,
}

impl PruneConfig
{
    pub fn new(repository: RepositoryRef, branch: impl Into<String,>, mode: MatchMode,) -> Self
    {
        Self {
            repository,
            branch: branch.into(),
            mode,
        }
    }
}

/// Trims a required input and rejects it when blank.
///
/// # Errors
///
/// Returns [`Error::Config`] naming `input` when the value is missing or
/// contains only whitespace.
pub fn required_input<'a,>(input: &str, value: Option<&'a str,>,) -> Result<&'a str, Error,>
{
    value
        .map(str::trim,)
        .filter(|trimmed| !trimmed.is_empty(),)
        .ok_or_else(|| Error::config(format!("input required and not supplied: {input}"),),)
}
