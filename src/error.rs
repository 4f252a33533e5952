#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the pruner crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Only fatal conditions are modelled here. Failed deletions are recorded as
//! [`DeletionWarning`](crate::DeletionWarning) values and never become an
//! [`Error`].

/// Fatal error returned by the pruning pipeline and the CLI.
///
/// Every variant aborts the run. Variants are ordered by the pipeline stage
/// that produces them; [`Error::stage`] names that stage for diagnostics.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Returned when an input cannot be turned into a usable configuration.
    #[error("invalid configuration: {message}")]
    Config {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Returned when the GitHub client cannot be constructed.
    #[error("failed to initialize GitHub client: {message}")]
    Client {
        /// Underlying builder failure.
        message: String
    },
    /// Returned when the release list could not be retrieved completely.
    #[error("failed to retrieve releases: {message}")]
    Fetch {
        /// Transport or authentication failure reported by the host.
        message: String
    },
    /// Wraps serialization errors when writing the run report.
    #[error("failed to serialize report: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    }
}

impl Error {
    /// Constructs a configuration error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the invalid input.
    pub fn config<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Config {
            message: message.into()
        }
    }

    /// Constructs a fetch error from the provided displayable value.
    pub fn fetch<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Fetch {
            message: message.into()
        }
    }

    /// Constructs a client construction error.
    pub fn client<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Client {
            message: message.into()
        }
    }

    /// Names the pipeline stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Config { .. } => "configuration",
            Self::Client { .. } => "client setup",
            Self::Fetch { .. } => "release fetch",
            Self::Serialize { .. } => "report output"
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string is prefixed with the failing stage so CLI users
    /// can tell where the run stopped.
    pub fn to_display_string(&self) -> String {
        format!("{} failed: {self}", self.stage())
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

impl From<masterror::AppError> for Error {
    fn from(error: masterror::AppError) -> Self {
        Self::Fetch {
            message: error.to_string()
        }
    }
}
