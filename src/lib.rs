//! Deletes branch-scoped GitHub pre-releases together with their tags.
//!
//! Builds of a feature branch typically publish pre-releases whose names or
//! tags embed the branch name. Once the branch is merged or abandoned those
//! pre-releases are clutter. The library derives a match pattern from the
//! branch name, fetches every release of the repository, selects the matching
//! pre-releases and deletes each release and its tag reference. Deletion is
//! best effort: a failed step is logged and reported, and the run carries on.
//!
//! The hosting service is reached through the [`ReleaseHost`] trait;
//! [`GitHubHost`] implements it on top of the GitHub REST API.

mod classify;
mod config;
mod error;
mod host;
mod pattern;
mod prune;
mod release;
pub mod report;
mod run;
mod sort;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use classify::{Action, Decision, MatchedField, Partition, Reason, classify};
pub use config::{DEFAULT_API_URL, PruneConfig, RepositoryRef, required_input};
pub use error::Error;
pub use host::{GitHubHost, ReleaseHost};
pub use pattern::{BranchPattern, MatchMode, sanitize_branch};
pub use prune::{DeletionOutcome, DeletionStep, DeletionWarning, delete_releases};
pub use release::Release;
pub use report::{DeletionTotals, PruneReport};
pub use run::prune;
pub use sort::sort_releases;
