// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Keep/delete classification of releases against a branch pattern.
//!
//! Classification looks at one release at a time and carries no state
//! between releases, so the resulting partition does not depend on the order
//! in which releases were fetched.

use std::fmt;

use serde::Serialize;

use crate::{BranchPattern, Release};

/// What happens to a release in this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "snake_case")]
pub enum Action
{
    Keep,
    Delete,
}

/// Release field(s) in which the pattern was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "snake_case")]
pub enum MatchedField
{
    Name,
    Tag,
    NameAndTag,
}

/// Why a release was kept or selected for deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "snake_case")]
pub enum Reason
{
    /// The release is a regular release and is never deleted.
    NotPrerelease,
    /// The release is a pre-release of some other branch.
    PatternAbsent,
    /// The release is a pre-release of this branch.
    Matched(MatchedField,),
}

impl Reason
{
    /// Action implied by the reason.
    pub fn action(self,) -> Action
    {
        match self {
            Self::NotPrerelease | Self::PatternAbsent => Action::Keep,
            Self::Matched(_,) => Action::Delete,
        }
    }
}

impl fmt::Display for Reason
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        match self {
            Self::NotPrerelease => f.write_str("not a pre-release",),
            Self::PatternAbsent => f.write_str("pre-release but pattern not present",),
            Self::Matched(MatchedField::Name,) => f.write_str("pattern found in name",),
            Self::Matched(MatchedField::Tag,) => f.write_str("pattern found in tag",),
            Self::Matched(MatchedField::NameAndTag,) => {
                f.write_str("pattern found in name and tag",)
            }
        }
    }
}

/// Classification of a single release. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Decision
{
    release: Release,
    action:  Action,
    reason:  Reason,
}

impl Decision
{
    pub fn release(&self,) -> &Release
    {
        &self.release
    }

    pub fn action(&self,) -> Action
    {
        self.action
    }

    pub fn reason(&self,) -> Reason
    {
        self.reason
    }
}

/// Classifies one release.
///
/// Regular releases are always kept. A pre-release is deleted when the
/// pattern occurs in its name or tag; an absent name counts as empty.
///
/// # Examples
///
/// ```
/// use prerelease_pruner::{Action, BranchPattern, MatchMode, Release, classify};
///
/// let pattern = BranchPattern::from_branch("foo", MatchMode::Strict,)?;
/// let release = Release {
///     id:         1,
///     name:       None,
///     tag:        "build-foo.1".to_owned(),
///     prerelease: true,
/// };
/// assert_eq!(classify(&release, &pattern,).action(), Action::Delete);
/// # Ok::<(), prerelease_pruner::Error>(())
/// ```
pub fn classify(release: &Release, pattern: &BranchPattern,) -> Decision
{
    let reason = if !release.prerelease {
        Reason::NotPrerelease
    } else {
        let in_name = pattern.is_found_in(release.name_or_empty(),);
        let in_tag = pattern.is_found_in(&release.tag,);
        match (in_name, in_tag,) {
            (true, true,) => Reason::Matched(MatchedField::NameAndTag,),
            (true, false,) => Reason::Matched(MatchedField::Name,),
            (false, true,) => Reason::Matched(MatchedField::Tag,),
            (false, false,) => Reason::PatternAbsent,
        }
    };

    Decision {
        release: release.clone(),
        action: reason.action(),
        reason,
    }
}

/// Total, disjoint keep/delete partition of one run's releases.
///
/// Decisions keep the order of the input, which is the sorter's order in the
/// pipeline.
#[derive(Debug, Clone, Default, Serialize,)]
pub struct Partition
{
    decisions: Vec<Decision,>,
}

impl Partition
{
    /// Classifies every release against `pattern`.
    pub fn classify_all(releases: &[Release], pattern: &BranchPattern,) -> Self
    {
        Self {
            decisions: releases.iter().map(|release| classify(release, pattern,),).collect(),
        }
    }

    pub fn decisions(&self,) -> &[Decision]
    {
        &self.decisions
    }

    /// Regular releases, kept unconditionally.
    pub fn kept_stable(&self,) -> impl Iterator<Item = &Decision,>
    {
        self.with_reason(|reason| reason == Reason::NotPrerelease,)
    }

    /// Pre-releases of other branches.
    pub fn kept_unmatched(&self,) -> impl Iterator<Item = &Decision,>
    {
        self.with_reason(|reason| reason == Reason::PatternAbsent,)
    }

    /// Pre-releases selected for deletion.
    pub fn to_delete(&self,) -> impl Iterator<Item = &Decision,>
    {
        self.decisions.iter().filter(|decision| decision.action == Action::Delete,)
    }

    pub fn kept(&self,) -> impl Iterator<Item = &Decision,>
    {
        self.decisions.iter().filter(|decision| decision.action == Action::Keep,)
    }

    /// Hands the delete set to the orchestrator, consuming the partition.
    pub fn into_deletions(self,) -> Vec<Release,>
    {
        self.decisions
            .into_iter()
            .filter(|decision| decision.action == Action::Delete,)
            .map(|decision| decision.release,)
            .collect()
    }

    fn with_reason(&self, accept: impl Fn(Reason,) -> bool,) -> impl Iterator<Item = &Decision,>
    {
        self.decisions.iter().filter(move |decision| accept(decision.reason,),)
    }
}
