//! Error types emitted by the food ratings CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the food ratings CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the session file failed.
    #[error("failed to open session at {path:?}: {source}")]
    OpenSession {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Session JSON could not be decoded.
    #[error("failed to parse session JSON at {path:?}: {source}")]
    ParseSession {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the session outcomes failed.
    #[error("failed to serialise session outcomes: {0}")]
    SerialiseOutcomes(#[source] serde_json::Error),
    /// Installing the log subscriber failed.
    #[error("failed to initialise logging: {0}")]
    InitLogging(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Writing the session output failed.
    #[error("failed to write session output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
