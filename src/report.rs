// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Human-readable and machine-readable summaries of a pruning run.
//!
//! Nothing in this module influences which releases are deleted. The logging
//! helpers only read the partition and the deletion outcomes.

use std::io;

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    BranchPattern, DeletionOutcome, Partition, Release, RepositoryRef,
    error::Error,
    workflow::{Annotation, format_command},
};

/// Logs the three groups produced by classification.
pub fn log_partition(partition: &Partition, pattern: &BranchPattern,)
{
    let stable: Vec<&Release,> = partition.kept_stable().map(|d| d.release(),).collect();
    info!("Releases kept because they are not pre-releases ({}):", stable.len());
    for release in stable {
        info!("\t{}", release);
    }

    let unmatched: Vec<&Release,> = partition.kept_unmatched().map(|d| d.release(),).collect();
    info!(
        "Pre-releases kept because '{}' is not in the name or tag ({}):",
        pattern,
        unmatched.len()
    );
    for release in unmatched {
        info!("\t{}", release);
    }

    let selected: Vec<_,> = partition.to_delete().collect();
    info!(
        "Pre-releases of branch '{}' that will be removed ({}):",
        pattern.branch(),
        selected.len()
    );
    for decision in selected {
        info!("\t{} [{}]", decision.release(), decision.reason());
    }
}

/// Logs totals after the deletion phase.
pub fn log_outcomes(outcomes: &[DeletionOutcome],)
{
    let totals = DeletionTotals::from_outcomes(outcomes,);

    info!(
        "Deleted {} of {} releases and {} of {} tags.",
        totals.releases_deleted, totals.attempted, totals.tags_deleted, totals.attempted
    );

    if totals.failed_steps > 0 {
        warn!("{} deletion step(s) failed; see the warnings above.", totals.failed_steps);
    }
}

/// Writes one `::warning::` workflow command per failed deletion step.
///
/// # Errors
///
/// Propagates I/O errors from `writer`.
pub fn annotate_warnings<W: io::Write,>(
    writer: &mut W,
    outcomes: &[DeletionOutcome],
) -> io::Result<(),>
{
    for outcome in outcomes {
        for warning in &outcome.warnings {
            let message = format!(
                "{} ({}): {}",
                outcome.release.display_name(),
                outcome.release.id,
                warning
            );
            writeln!(writer, "{}", format_command(Annotation::Warning, &message,))?;
        }
    }
    Ok((),)
}

/// Counts derived from deletion outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize,)]
pub struct DeletionTotals
{
    pub attempted:        usize,
    pub releases_deleted: usize,
    pub tags_deleted:     usize,
    pub failed_steps:     usize,
}

impl DeletionTotals
{
    pub fn from_outcomes(outcomes: &[DeletionOutcome],) -> Self
    {
        outcomes.iter().fold(Self::default(), |mut totals, outcome| {
            totals.attempted += 1;
            totals.releases_deleted += usize::from(outcome.release_deleted,);
            totals.tags_deleted += usize::from(outcome.tag_deleted,);
            totals.failed_steps += outcome.warnings.len();
            totals
        },)
    }
}

/// Serializable record of one run.
#[derive(Debug, Clone, Serialize,)]
pub struct PruneReport
{
    pub repository:     RepositoryRef,
    pub pattern:        BranchPattern,
    pub kept_stable:    Vec<Release,>,
    pub kept_unmatched: Vec<Release,>,
    pub outcomes:       Vec<DeletionOutcome,>,
    pub totals:         DeletionTotals,
}

impl PruneReport
{
    /// Captures the kept groups of `partition` alongside deletion outcomes.
    pub fn new(
        repository: RepositoryRef,
        pattern: BranchPattern,
        partition: &Partition,
        outcomes: Vec<DeletionOutcome,>,
    ) -> Self
    {
        Self {
            repository,
            pattern,
            kept_stable: partition.kept_stable().map(|d| d.release().clone(),).collect(),
            kept_unmatched: partition.kept_unmatched().map(|d| d.release().clone(),).collect(),
            totals: DeletionTotals::from_outcomes(&outcomes,),
            outcomes,
        }
    }
}

/// Serializes `report` as compact JSON followed by a newline.
///
/// # Errors
///
/// Returns [`Error::Serialize`] when serialization or the write fails.
pub fn write_report<W: io::Write,>(writer: &mut W, report: &PruneReport,) -> Result<(), Error,>
{
    serde_json::to_writer(&mut *writer, report,)?;
    writer.write_all(b"\n",).map_err(serde_json::Error::io,)?;
    Ok((),)
}

#[cfg(test)]
mod tests
{
    use std::io::Cursor;

    use super::*;
    use crate::{DeletionStep, DeletionWarning, MatchMode};

    fn release(id: u64, tag: &str, prerelease: bool,) -> Release
    {
        Release {
            id,
            name: None,
            tag: tag.to_owned(),
            prerelease,
        }
    }

    fn outcome(id: u64, release_ok: bool, tag_ok: bool,) -> DeletionOutcome
    {
        let mut warnings = Vec::new();
        if !release_ok {
            warnings.push(DeletionWarning {
                step:   DeletionStep::Release,
                detail: "Not Found".to_owned(),
            },);
        }
        if !tag_ok {
            warnings.push(DeletionWarning {
                step:   DeletionStep::Tag,
                detail: "Reference does not exist".to_owned(),
            },);
        }
        DeletionOutcome {
            release: release(id, &format!("build-foo.{id}"), true,),
            release_deleted: release_ok,
            tag_deleted: tag_ok,
            warnings,
        }
    }

    #[test]
    fn totals_count_successes_and_failures()
    {
        let totals = DeletionTotals::from_outcomes(&[
            outcome(1, true, true,),
            outcome(2, false, true,),
            outcome(3, false, false,),
        ],);
        assert_eq!(totals, DeletionTotals {
            attempted:        3,
            releases_deleted: 1,
            tags_deleted:     2,
            failed_steps:     3,
        });
    }

    #[test]
    fn annotations_are_emitted_per_failed_step()
    {
        let mut buffer = Cursor::new(Vec::new(),);
        annotate_warnings(&mut buffer, &[outcome(1, true, true,), outcome(2, false, false,)],)
            .expect("write should succeed",);

        let output = String::from_utf8(buffer.into_inner(),).expect("invalid UTF-8",);
        assert_eq!(
            output,
            "::warning::build-foo.2 (2): release deletion failed: Not Found\n\
             ::warning::build-foo.2 (2): tag deletion failed: Reference does not exist\n"
        );
    }

    #[test]
    fn report_serializes_groups_and_totals()
    {
        let pattern = BranchPattern::from_branch("foo", MatchMode::Strict,).expect("valid branch",);
        let releases = vec![
            release(1, "v1", false,),
            release(2, "build-foo.1", true,),
            release(3, "build-bar.1", true,),
        ];
        let partition = Partition::classify_all(&releases, &pattern,);
        let repository: RepositoryRef = "octocat/demo".parse().expect("valid repository",);
        let report = PruneReport::new(repository, pattern, &partition, vec![outcome(2, true, true,)],);

        let mut buffer = Cursor::new(Vec::new(),);
        write_report(&mut buffer, &report,).expect("report should serialize",);
        let output = String::from_utf8(buffer.into_inner(),).expect("invalid UTF-8",);
        assert!(output.ends_with('\n'));

        let json: serde_json::Value = serde_json::from_str(&output,).expect("valid JSON",);
        assert_eq!(json["repository"]["owner"], "octocat");
        assert_eq!(json["pattern"]["pattern"], "-foo.");
        assert_eq!(json["pattern"]["mode"], "strict");
        assert_eq!(json["kept_stable"][0]["id"], 1);
        assert_eq!(json["kept_unmatched"][0]["id"], 3);
        assert_eq!(json["totals"]["releases_deleted"], 1);
    }
}
