// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// End-to-end pruning pipeline.
///
/// Stages run strictly in sequence: normalize the branch, fetch every
/// release, sort, classify, report, delete, report. Only the first two stages
/// can fail the run.
use tracing::info;

use crate::{
    BranchPattern, Partition, PruneConfig, PruneReport, ReleaseHost, delete_releases,
    error::Error, report, sort_releases,
};

/// Prunes the pre-releases of `config.branch` from `host`.
///
/// # Errors
///
/// Returns [`Error::Config`] when the branch normalizes to nothing, before
/// any call reaches `host`. Returns [`Error::Fetch`] when the release list
/// cannot be retrieved; no deletion is attempted in that case. Failed
/// deletions are not errors: they are reported in the returned
/// [`PruneReport`].
///
/// # Example
///
/// ```no_run
/// use prerelease_pruner::{GitHubHost, MatchMode, PruneConfig, prune};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error,>,> {
/// let repository: prerelease_pruner::RepositoryRef = "octocat/hello-world".parse()?;
/// let host = GitHubHost::new("ghp_token", "https://api.github.com", repository,)?;
/// let config = PruneConfig::new(host.repository().clone(), "refs/heads/feature/x", MatchMode::Strict,);
/// let report = prune(&host, &config,).await?;
/// println!("{} releases deleted", report.totals.releases_deleted);
/// # Ok(())
/// # }
/// ```
pub async fn prune<H,>(host: &H, config: &PruneConfig,) -> Result<PruneReport, Error,>
where
    H: ReleaseHost + ?Sized,
{
    let pattern = BranchPattern::from_branch(&config.branch, config.mode,)?;

    info!("Checking for pre-releases in {}", config.repository);
    info!(
        "Gathering list of releases with '{}' in the name or tag to delete ({} match)...",
        pattern,
        pattern.mode()
    );

    let mut releases = host
        .list_releases()
        .await
        .map_err(|e| Error::fetch(e.to_string(),),)?;
    info!("Found {} releases", releases.len());

    sort_releases(&mut releases,);
    let partition = Partition::classify_all(&releases, &pattern,);

    report::log_partition(&partition, &pattern,);

    let outcomes = delete_releases(host, partition.clone().into_deletions(),).await;

    report::log_outcomes(&outcomes,);

    Ok(PruneReport::new(config.repository.clone(), pattern, &partition, outcomes,),)
}
