// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Derivation of the match pattern used to select branch pre-releases.
//!
//! A raw branch identifier such as `refs/heads/release/1.2` is reduced to a
//! sanitized branch name containing only ASCII alphanumerics and hyphens
//! (`release-1-2`). Release names and tags produced by branch builds embed
//! that sanitized name, so the pattern is a plain substring test against
//! them.

use std::fmt;

use serde::Serialize;

use crate::error::Error;

const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Discipline used to turn a sanitized branch name into a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize,)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode
{
    /// Pattern is `-<branch>.`; the branch must appear as a segment bounded
    /// by a hyphen and a period, so `feature-1` never matches `feature-10`.
    Strict,
    /// Pattern is the bare branch name. Any release containing it matches,
    /// including releases of branches whose name merely contains it.
    #[default]
    Loose,
}

impl MatchMode
{
    /// Selects the mode from the `strict-match-mode` input.
    pub fn from_strict_flag(strict: bool,) -> Self
    {
        if strict { Self::Strict } else { Self::Loose }
    }
}

impl fmt::Display for MatchMode
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        match self {
            Self::Strict => f.write_str("strict",),
            Self::Loose => f.write_str("loose",),
        }
    }
}

/// Match pattern derived once per run from the branch identifier.
///
/// Invariants: the sanitized branch is non-empty, carries no `refs/heads/`
/// prefix and contains only `[A-Za-z0-9-]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct BranchPattern
{
    branch:  String,
    pattern: String,
    mode:    MatchMode,
}

impl BranchPattern
{
    /// Normalizes `raw_branch` and builds the pattern for `mode`.
    ///
    /// Surrounding whitespace is trimmed and a leading `refs/heads/` prefix is
    /// stripped. Every remaining character outside `[A-Za-z0-9-]` is replaced
    /// by a single hyphen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when nothing remains after normalization.
    ///
    /// # Examples
    ///
    /// ```
    /// use prerelease_pruner::{BranchPattern, MatchMode};
    ///
    /// let pattern = BranchPattern::from_branch("refs/heads/release/1.2", MatchMode::Strict,)?;
    /// assert_eq!(pattern.branch(), "release-1-2");
    /// assert_eq!(pattern.as_str(), "-release-1-2.");
    /// # Ok::<(), prerelease_pruner::Error>(())
    /// ```
    pub fn from_branch(raw_branch: &str, mode: MatchMode,) -> Result<Self, Error,>
    {
        let branch = sanitize_branch(raw_branch,);
        if branch.is_empty() {
            return Err(Error::config(format!(
                "branch name '{raw_branch}' is empty after normalization"
            ),),);
        }

        let pattern = match mode {
            MatchMode::Strict => format!("-{branch}."),
            MatchMode::Loose => branch.clone(),
        };

        Ok(Self {
            branch,
            pattern,
            mode,
        },)
    }

    /// Sanitized branch name, used for logging.
    pub fn branch(&self,) -> &str
    {
        &self.branch
    }

    /// The substring searched for in release names and tags.
    pub fn as_str(&self,) -> &str
    {
        &self.pattern
    }

    pub fn mode(&self,) -> MatchMode
    {
        self.mode
    }

    /// Case-sensitive substring test.
    pub fn is_found_in(&self, haystack: &str,) -> bool
    {
        haystack.contains(self.pattern.as_str(),)
    }
}

impl fmt::Display for BranchPattern
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(&self.pattern,)
    }
}

/// Strips the branch ref prefix and replaces disallowed characters.
///
/// Unlike slug derivation, runs of separators are not collapsed: each
/// character maps to exactly one output character so that the result lines
/// up with the names produced by the build tooling.
pub fn sanitize_branch(raw_branch: &str,) -> String
{
    let trimmed = raw_branch.trim();
    let without_prefix = trimmed.strip_prefix(BRANCH_REF_PREFIX,).unwrap_or(trimmed,);

    without_prefix
        .chars()
        .map(|candidate| {
            if candidate.is_ascii_alphanumeric() || candidate == '-' { candidate } else { '-' }
        },)
        .collect()
}
