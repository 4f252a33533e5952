// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Release hosting operations consumed by the pruner.
///
/// [`ReleaseHost`] is the seam between the pipeline and GitHub. The
/// production implementation, [`GitHubHost`], talks to the REST API through
/// Octocrab; tests substitute an in-memory host.
use async_trait::async_trait;
use masterror::AppError;
use octocrab::{Octocrab, params::repos::Reference};
use tracing::debug;

use crate::{Release, RepositoryRef};

const RELEASES_PER_PAGE: u8 = 100;

/// Operations the pruner needs from the hosting service.
///
/// Each call is a single attempt; implementations must not retry.
#[async_trait]
pub trait ReleaseHost: Send + Sync
{
    /// Returns every release of the repository, across all pages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when any page cannot be retrieved. A partial list
    /// is never returned.
    async fn list_releases(&self,) -> Result<Vec<Release,>, AppError,>;

    /// Deletes the release object with the given id.
    async fn delete_release(&self, release_id: u64,) -> Result<(), AppError,>;

    /// Deletes the `tags/<tag>` git reference.
    async fn delete_tag_ref(&self, tag: &str,) -> Result<(), AppError,>;
}

/// [`ReleaseHost`] backed by the GitHub REST API.
#[derive(Clone,)]
pub struct GitHubHost
{
    octocrab:   Octocrab,
    repository: RepositoryRef,
}

impl GitHubHost
{
    /// Builds an authenticated client for `repository`.
    ///
    /// # Arguments
    ///
    /// * `token` - GitHub token used for every request
    /// * `api_url` - REST API root, e.g. `https://api.github.com`
    /// * `repository` - Repository whose releases are pruned
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the API URL is invalid or the client cannot
    /// be constructed. No request is made.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use prerelease_pruner::{GitHubHost, RepositoryRef};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error,>,> {
    /// let repository: RepositoryRef = "octocat/hello-world".parse()?;
    /// let host = GitHubHost::new("ghp_token", "https://api.github.com", repository,)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(token: &str, api_url: &str, repository: RepositoryRef,) -> Result<Self, AppError,>
    {
        let octocrab = Octocrab::builder()
            .personal_token(token,)
            .base_uri(api_url,)
            .map_err(|e| AppError::validation(format!("invalid GitHub API URL '{api_url}': {e}"),),)?
            .build()
            .map_err(|e| {
                AppError::unauthorized(format!("failed to initialize GitHub client: {e}"),)
            },)?;

        Ok(Self {
            octocrab,
            repository,
        },)
    }

    pub fn repository(&self,) -> &RepositoryRef
    {
        &self.repository
    }
}

#[async_trait]
impl ReleaseHost for GitHubHost
{
    async fn list_releases(&self,) -> Result<Vec<Release,>, AppError,>
    {
        let RepositoryRef {
            owner,
            name,
        } = &self.repository;

        let first_page = self
            .octocrab
            .repos(owner, name,)
            .releases()
            .list()
            .per_page(RELEASES_PER_PAGE,)
            .send()
            .await
            .map_err(|e| AppError::service(format!("failed to list releases: {e}"),),)?;

        let releases = self
            .octocrab
            .all_pages(first_page,)
            .await
            .map_err(|e| AppError::service(format!("failed to page through releases: {e}"),),)?;

        debug!("Fetched {} releases from {}", releases.len(), self.repository);

        Ok(releases.into_iter().map(Release::from,).collect(),)
    }

    async fn delete_release(&self, release_id: u64,) -> Result<(), AppError,>
    {
        let RepositoryRef {
            owner,
            name,
        } = &self.repository;

        self.octocrab
            .repos(owner, name,)
            .releases()
            .delete(release_id,)
            .await
            .map_err(|e| AppError::service(e.to_string(),),)
    }

    async fn delete_tag_ref(&self, tag: &str,) -> Result<(), AppError,>
    {
        let RepositoryRef {
            owner,
            name,
        } = &self.repository;

        self.octocrab
            .repos(owner, name,)
            .delete_ref(&Reference::Tag(tag.to_owned(),),)
            .await
            .map_err(|e| AppError::service(e.to_string(),),)
    }
}
