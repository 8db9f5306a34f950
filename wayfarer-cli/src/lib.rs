//! Command-line interface for planning museum visits with Wayfarer.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod catalog;
mod error;
mod exhibits;
mod plan;

pub use error::CliError;

use exhibits::{ExhibitsArgs, run_exhibits};
use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_CATALOG_DB: &str = "catalog-db";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_ENHANCE: &str = "enhance";
pub(crate) const ARG_ANALYTICS: &str = "analytics";
pub(crate) const ARG_HOUR: &str = "hour";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ENV_PLAN_REQUEST: &str = "WAYFARER_CMDS_PLAN_REQUEST_PATH";

/// Run the Wayfarer CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
        Command::Exhibits(args) => run_exhibits(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    about = "Personalised walking itineraries for museums and memorial halls",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Plan an itinerary for one visitor request.
    Plan(PlanArgs),
    /// List the most important exhibits in the catalog.
    Exhibits(ExhibitsArgs),
}

#[cfg(test)]
mod tests;
