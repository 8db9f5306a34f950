//! Error types emitted by the Wayfarer CLI.
//!
//! Keep this error type reasonably small; every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wayfarer_analytics::ExportError;
use wayfarer_core::{CatalogError, PlanError};

/// Errors emitted by the Wayfarer CLI.
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
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        feature: &'static str,
        action: &'static str,
    },
    /// The time-of-day hour is outside `0..=23`.
    #[error("hour must be between 0 and 23, got {hour}")]
    InvalidHour { hour: u8 },
    /// A referenced input path does not exist.
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
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading a JSON input file failed.
    #[error("failed to read {field} file {path:?}: {source}")]
    ReadInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A JSON input file could not be decoded.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Loading exhibits or the venue layout failed.
    #[error("failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),
    /// The planner rejected the request.
    #[error("planning failed: {0}")]
    Plan(#[from] PlanError),
    /// Rendering the itinerary failed.
    #[error(transparent)]
    Export(#[from] ExportError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
