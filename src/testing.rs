// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// In-memory [`ReleaseHost`] that records every call for assertions.
use std::{collections::HashSet, sync::Mutex};

use async_trait::async_trait;
use masterror::AppError;

use crate::{Release, ReleaseHost};

#[derive(Debug, Clone, PartialEq, Eq,)]
pub(crate) enum HostCall
{
    ListReleases,
    DeleteRelease(u64,),
    DeleteTag(String,),
}

#[derive(Debug, Default,)]
pub(crate) struct FakeHost
{
    releases:         Vec<Release,>,
    fail_listing:     bool,
    failing_releases: HashSet<u64,>,
    failing_tags:     HashSet<String,>,
    calls:            Mutex<Vec<HostCall,>,>,
}

impl FakeHost
{
    pub(crate) fn with_releases(releases: Vec<Release,>,) -> Self
    {
        Self {
            releases,
            ..Self::default()
        }
    }

    pub(crate) fn failing_listing(mut self,) -> Self
    {
        self.fail_listing = true;
        self
    }

    pub(crate) fn failing_release(mut self, release_id: u64,) -> Self
    {
        self.failing_releases.insert(release_id,);
        self
    }

    pub(crate) fn failing_tag(mut self, tag: &str,) -> Self
    {
        self.failing_tags.insert(tag.to_owned(),);
        self
    }

    pub(crate) fn calls(&self,) -> Vec<HostCall,>
    {
        self.calls.lock().expect("calls lock poisoned",).clone()
    }

    pub(crate) fn delete_calls(&self,) -> usize
    {
        self.calls().iter().filter(|call| !matches!(call, HostCall::ListReleases),).count()
    }

    fn record(&self, call: HostCall,)
    {
        self.calls.lock().expect("calls lock poisoned",).push(call,);
    }
}

#[async_trait]
impl ReleaseHost for FakeHost
{
    async fn list_releases(&self,) -> Result<Vec<Release,>, AppError,>
    {
        self.record(HostCall::ListReleases,);
        if self.fail_listing {
            return Err(AppError::unauthorized("Bad credentials",),);
        }
        Ok(self.releases.clone(),)
    }

    async fn delete_release(&self, release_id: u64,) -> Result<(), AppError,>
    {
        self.record(HostCall::DeleteRelease(release_id,),);
        if self.failing_releases.contains(&release_id,) {
            return Err(AppError::service("Not Found",),);
        }
        Ok((),)
    }

    async fn delete_tag_ref(&self, tag: &str,) -> Result<(), AppError,>
    {
        self.record(HostCall::DeleteTag(tag.to_owned(),),);
        if self.failing_tags.contains(tag,) {
            return Err(AppError::service("Reference does not exist",),);
        }
        Ok((),)
    }
}
