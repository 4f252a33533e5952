// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Release entries as seen by the pruner.
///
/// Only the fields that drive selection and deletion are retained from the
/// GitHub API model.
use std::fmt;

use serde::{Deserialize, Serialize};

/// A GitHub release owned by the hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,)]
pub struct Release
{
    /// Release identifier, stable for the release's lifetime.
    pub id:         u64,
    /// Optional human-readable label.
    pub name:       Option<String,>,
    /// Tag the release points at.
    pub tag:        String,
    /// Whether the release is flagged as a pre-release.
    pub prerelease: bool,
}

impl Release
{
    /// Name shown in logs and used as the sort key.
    ///
    /// Falls back to the tag when the name is absent or empty.
    ///
    /// # Example
    ///
    /// ```
    /// use prerelease_pruner::Release;
    ///
    /// let release = Release {
    ///     id:         1,
    ///     name:       None,
    ///     tag:        "v1.0.0".to_owned(),
    ///     prerelease: false,
    /// };
    /// assert_eq!(release.display_name(), "v1.0.0");
    /// ```
    pub fn display_name(&self,) -> &str
    {
        match self.name.as_deref() {
            Some(name,) if !name.is_empty() => name,
            _ => &self.tag,
        }
    }

    /// Name used for matching; an absent name is the empty string.
    pub fn name_or_empty(&self,) -> &str
    {
        self.name.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for Release
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        let name = self.display_name();
        if name == self.tag {
            write!(f, "{name}")
        } else {
            write!(f, "{name} ({})", self.tag)
        }
    }
}

impl From<octocrab::models::repos::Release,> for Release
{
    fn from(release: octocrab::models::repos::Release,) -> Self
    {
        Self {
            id:         release.id.0,
            name:       release.name,
            tag:        release.tag_name,
            prerelease: release.prerelease,
        }
    }
}
