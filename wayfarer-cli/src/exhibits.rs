//! Exhibits command: list the most important exhibits of a catalog.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfarer_core::{PointOfInterest, popular_exhibits};

use crate::catalog::{CatalogBuilder, CatalogSource, DefaultCatalogBuilder};
use crate::{ARG_CATALOG, ARG_CATALOG_DB, ARG_LIMIT, CliError};

/// Exhibits listed when no limit is configured.
pub(crate) const DEFAULT_LIMIT: usize = 5;

/// CLI arguments for the `exhibits` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the most important exhibits as JSON")]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct ExhibitsArgs {
    /// JSON catalog file with `exhibits` and an optional `venue`.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Read-only SQLite catalog; takes precedence over --catalog.
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
    /// Number of exhibits to list.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

pub(crate) fn run_exhibits(args: ExhibitsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_exhibits_with(args, &DefaultCatalogBuilder, &mut stdout)
}

pub(crate) fn run_exhibits_with(
    args: ExhibitsArgs,
    builder: &dyn CatalogBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let exhibits = list_exhibits(merged, builder)?;
    let payload = serde_json::to_string_pretty(&exhibits).map_err(CliError::SerialiseOutput)?;
    writeln!(writer, "{payload}").map_err(CliError::WriteOutput)
}

pub(crate) fn list_exhibits(
    args: ExhibitsArgs,
    builder: &dyn CatalogBuilder,
) -> Result<Vec<PointOfInterest>, CliError> {
    let source = CatalogSource {
        catalog: args.catalog,
        catalog_db: args.catalog_db,
    };
    source.validate_sources()?;
    let catalog = builder.build(&source)?;
    Ok(popular_exhibits(
        catalog.as_ref(),
        args.limit.unwrap_or(DEFAULT_LIMIT),
    )?)
}
