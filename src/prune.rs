// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Sequential best-effort deletion of selected pre-releases.
///
/// Every release goes through two independent steps, deleting the release
/// object and then its tag reference. A failed step is recorded as a
/// [`DeletionWarning`] and never stops the remaining work.
use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::{Release, ReleaseHost};

/// Which deletion step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "snake_case")]
pub enum DeletionStep
{
    Release,
    Tag,
}

/// A failed deletion step. Logged and reported, never escalated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct DeletionWarning
{
    pub step:   DeletionStep,
    /// Failure detail reported by the host.
    pub detail: String,
}

impl fmt::Display for DeletionWarning
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        match self.step {
            DeletionStep::Release => write!(f, "release deletion failed: {}", self.detail),
            DeletionStep::Tag => write!(f, "tag deletion failed: {}", self.detail),
        }
    }
}

/// Result of processing one release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct DeletionOutcome
{
    pub release:         Release,
    pub release_deleted: bool,
    pub tag_deleted:     bool,
    pub warnings:        Vec<DeletionWarning,>,
}

impl DeletionOutcome
{
    /// Both the release and its tag are gone.
    pub fn is_complete(&self,) -> bool
    {
        self.release_deleted && self.tag_deleted
    }
}

/// Deletes each release and then its tag, one release at a time.
///
/// Releases are processed in the given order and every release is attempted
/// exactly once, whatever happened to the previous ones. The tag deletion is
/// attempted even when the release deletion failed.
///
/// # Example
///
/// ```no_run
/// use prerelease_pruner::{GitHubHost, delete_releases};
///
/// # async fn example(host: GitHubHost, releases: Vec<prerelease_pruner::Release,>,) {
/// let outcomes = delete_releases(&host, releases,).await;
/// let failed = outcomes.iter().filter(|outcome| !outcome.is_complete(),).count();
/// println!("{failed} releases were not fully removed");
/// # }
/// ```
pub async fn delete_releases<H,>(host: &H, releases: Vec<Release,>,) -> Vec<DeletionOutcome,>
where
    H: ReleaseHost + ?Sized,
{
    let mut outcomes = Vec::with_capacity(releases.len(),);

    for release in releases {
        outcomes.push(delete_release_and_tag(host, release,).await,);
    }

    outcomes
}

async fn delete_release_and_tag<H,>(host: &H, release: Release,) -> DeletionOutcome
where
    H: ReleaseHost + ?Sized,
{
    let name = release.display_name();
    let mut warnings = Vec::new();

    info!("Deleting release {} ({})...", name, release.id);
    let release_deleted = match host.delete_release(release.id,).await {
        Ok((),) => {
            info!("Finished deleting release {} ({}).", name, release.id);
            true
        }
        Err(error,) => {
            warn!("There was an error deleting the release {} ({}): {}", name, release.id, error);
            warnings.push(DeletionWarning {
                step:   DeletionStep::Release,
                detail: error.to_string(),
            },);
            false
        }
    };

    info!("Deleting tag {}...", release.tag);
    let tag_deleted = match host.delete_tag_ref(&release.tag,).await {
        Ok((),) => {
            info!("Finished deleting tag {}.", release.tag);
            true
        }
        Err(error,) => {
            warn!("There was an error deleting the tag {}: {}", release.tag, error);
            warnings.push(DeletionWarning {
                step:   DeletionStep::Tag,
                detail: error.to_string(),
            },);
            false
        }
    };

    DeletionOutcome {
        release,
        release_deleted,
        tag_deleted,
        warnings,
    }
}
