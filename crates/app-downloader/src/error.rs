use std::{io, path::PathBuf};

use serde::Serialize;
use thiserror::Error;

pub const INVALID_URL_MESSAGE: &str = "Unsupported Instagram URL";

/// Why an import stopped.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("{}", INVALID_URL_MESSAGE)]
    InvalidUrl,

    #[error("Failed to create output directory {path:?}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    FetchFailed(String),

    #[error("{0}")]
    VideoDownloadFailed(String),
}

impl ImportError {
    /// The `error` tag of the JSON payload. `None` for failures outside the output protocol.
    #[must_use]
    pub const fn kind(&self) -> Option<&'static str> {
        match self {
            Self::InvalidUrl => Some("invalid_url"),
            Self::FetchFailed(_) => Some("fetch_failed"),
            Self::VideoDownloadFailed(_) => Some("video_download_failed"),
            Self::OutputDirectory { .. } => None,
        }
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::OutputDirectory { .. } => 1,
            Self::InvalidUrl => 2,
            Self::FetchFailed(_) => 3,
            Self::VideoDownloadFailed(_) => 4,
        }
    }

    #[must_use]
    pub fn report(&self) -> Option<ErrorReport> {
        self.kind().map(|error| ErrorReport {
            error,
            message: self.to_string(),
        })
    }
}

/// The error payload printed instead of an [`crate::ImportResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error: &'static str,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn protocol_errors_have_tags_and_codes() {
        let cases = [
            (ImportError::InvalidUrl, "invalid_url", 2),
            (ImportError::FetchFailed("nope".into()), "fetch_failed", 3),
            (
                ImportError::VideoDownloadFailed("nope".into()),
                "video_download_failed",
                4,
            ),
        ];

        for (err, kind, code) in cases {
            assert_eq!(err.kind(), Some(kind));
            assert_eq!(err.exit_code(), code);
            assert!(err.report().is_some());
        }
    }

    #[test]
    fn output_directory_failure_is_not_reported_as_json() {
        let err = ImportError::OutputDirectory {
            path: PathBuf::from("/root/forbidden"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };

        assert_eq!(err.kind(), None);
        assert_eq!(err.report(), None);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn report_carries_the_message() {
        let report = ImportError::FetchFailed("404 Not Found".into())
            .report()
            .expect("report");

        assert_eq!(
            report,
            ErrorReport {
                error: "fetch_failed",
                message: "404 Not Found".into(),
            }
        );

        let report = ImportError::InvalidUrl.report().expect("report");
        assert_eq!(report.message, INVALID_URL_MESSAGE);
    }
}
