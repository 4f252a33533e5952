// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Deterministic ordering of releases for reporting and deletion.
use crate::Release;

/// Sorts releases by [`Release::display_name`] in descending byte order.
///
/// The sort is stable: releases sharing a display name keep their relative
/// input order. Sorting an already sorted slice leaves it unchanged.
pub fn sort_releases(releases: &mut [Release],)
{
    releases.sort_by(|a, b| b.display_name().cmp(a.display_name(),),);
}
