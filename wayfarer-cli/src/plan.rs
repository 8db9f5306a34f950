//! Plan command implementation for the Wayfarer CLI.

use std::fmt::Write as _;
use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfarer_analytics::{ExportError, ExportFormat, RouteReport, analyse, export};
use wayfarer_core::{CatalogProvider, Enhancer, Itinerary, Planner, RawPreferences};
use wayfarer_narrative::TemplateNarrator;
use wayfarer_optimizer::{RouteOptimizer, VisitPeriod, reorder_for_time_of_day};

use crate::catalog::{
    CatalogBuilder, CatalogSource, DefaultCatalogBuilder, load_json, require_existing,
};
use crate::{
    ARG_ANALYTICS, ARG_CATALOG, ARG_CATALOG_DB, ARG_ENHANCE, ARG_FORMAT, ARG_HOUR, ARG_OUTPUT,
    ARG_PLAN_REQUEST, CliError, ENV_PLAN_REQUEST,
};

/// Venue label used by the sharing text when the layout has no name.
pub(crate) const DEFAULT_VENUE_NAME: &str = "the venue";

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a walking itinerary for one visitor. The request is a \
                 JSON file of raw preferences (age_group, interests, \
                 available_time, physical_ability, group_type, \
                 visit_purpose); unknown values fall back to defaults. \
                 Exhibits come from --catalog-db, --catalog or the built-in \
                 sample data.",
    about = "Plan an itinerary for a visitor request"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing the visitor's preferences.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// JSON catalog file with `exhibits` and an optional `venue`.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Read-only SQLite catalog; takes precedence over --catalog.
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
    /// Output format: `json` (default) or `text`.
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
    /// Append narrative advice to the itinerary.
    #[arg(long = ARG_ENHANCE)]
    #[serde(default)]
    pub(crate) enhance: bool,
    /// Include statistics, accessibility and sharing text.
    #[arg(long = ARG_ANALYTICS)]
    #[serde(default)]
    pub(crate) analytics: bool,
    /// Hour of arrival (0-23) for a time-of-day visiting order.
    #[arg(long = ARG_HOUR, value_name = "hour", value_parser = clap::value_parser!(u8).range(0..=23))]
    #[serde(default)]
    pub(crate) hour: Option<u8>,
    /// Write the result to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Catalog inputs.
    pub(crate) source: CatalogSource,
    /// Rendering of the result.
    pub(crate) format: ExportFormat,
    /// Whether to run the narrative enhancer.
    pub(crate) enhance: bool,
    /// Whether to attach analytics.
    pub(crate) analytics: bool,
    /// Arrival hour for the time-of-day order.
    pub(crate) hour: Option<u8>,
    /// Output file; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        self.source.validate_sources()
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let format = match args.format.as_deref() {
            Some(name) => name.parse::<ExportFormat>()?,
            None => ExportFormat::default(),
        };
        if let Some(hour) = args.hour.filter(|&hour| hour > 23) {
            return Err(CliError::InvalidHour { hour });
        }
        Ok(Self {
            request_path,
            source: CatalogSource {
                catalog: args.catalog,
                catalog_db: args.catalog_db,
            },
            format,
            enhance: args.enhance,
            analytics: args.analytics,
            hour: args.hour,
            output: args.output,
        })
    }
}

/// Stops reordered for the visitor's arrival time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TimeOfDayOrder {
    /// Arrival hour.
    pub(crate) hour: u8,
    /// Stop ids in the suggested order.
    pub(crate) stops: Vec<String>,
}

impl TimeOfDayOrder {
    fn new(hour: u8, itinerary: &Itinerary) -> Self {
        let stops = reorder_for_time_of_day(itinerary.stops(), hour)
            .into_iter()
            .map(|poi| poi.id)
            .collect();
        Self { hour, stops }
    }
}

/// Everything the `plan` command prints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlanOutput {
    /// The planned (and possibly enhanced) itinerary.
    pub(crate) itinerary: Itinerary,
    /// Derived views, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) analytics: Option<RouteReport>,
    /// Time-of-day order, when an hour was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) time_of_day: Option<TimeOfDayOrder>,
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &DefaultCatalogBuilder, &mut stdout)
}

pub(crate) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn CatalogBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let output = execute_plan(&config, builder)?;
    let rendered = render(&output, config.format)?;
    match &config.output {
        Some(path) => {
            wayfarer_fs::write_utf8(path, &rendered).map_err(CliError::WriteOutput)?;
            info!("wrote itinerary to {path}");
            Ok(())
        }
        None => write_rendered(writer, &rendered),
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_plan(
    config: &PlanConfig,
    builder: &dyn CatalogBuilder,
) -> Result<PlanOutput, CliError> {
    let raw: RawPreferences = load_json(&config.request_path, ARG_PLAN_REQUEST)?;
    let visitor = raw.normalize();
    info!(
        "planning a {}-minute visit with {} interests",
        visitor.available_time,
        visitor.interests.len()
    );
    let catalog = builder.build(&config.source)?;
    let planned = RouteOptimizer::default().plan(catalog.as_ref(), &visitor)?;
    let itinerary = if config.enhance {
        TemplateNarrator::new().enhance(planned)
    } else {
        planned
    };
    let analytics = if config.analytics {
        let name = venue_name(catalog.as_ref())?;
        Some(analyse(&itinerary, &name))
    } else {
        None
    };
    let time_of_day = config
        .hour
        .map(|hour| TimeOfDayOrder::new(hour, &itinerary));
    Ok(PlanOutput {
        itinerary,
        analytics,
        time_of_day,
    })
}

fn venue_name(catalog: &dyn CatalogProvider) -> Result<String, CliError> {
    Ok(catalog
        .venue()?
        .and_then(|venue| venue.name)
        .unwrap_or_else(|| DEFAULT_VENUE_NAME.to_owned()))
}

fn render(output: &PlanOutput, format: ExportFormat) -> Result<String, CliError> {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(output).map_err(CliError::SerialiseOutput)
        }
        ExportFormat::Text => render_text(output),
    }
}

fn render_text(output: &PlanOutput) -> Result<String, CliError> {
    let mut text = export(&output.itinerary, ExportFormat::Text)?;
    if let Some(report) = &output.analytics {
        append_report(&mut text, report).map_err(ExportError::from)?;
    }
    if let Some(order) = &output.time_of_day {
        let period = VisitPeriod::from_hour(order.hour);
        write!(
            text,
            "\nSuggested order at {:02}:00 ({period}): {}",
            order.hour,
            order.stops.join(", ")
        )
        .map_err(ExportError::from)?;
    }
    Ok(text)
}

fn append_report(text: &mut String, report: &RouteReport) -> std::fmt::Result {
    let access = &report.accessibility;
    write!(
        text,
        "\nAccessibility: {}/100 ({})",
        access.score, access.level
    )?;
    for suggestion in &access.suggestions {
        write!(text, "\n  - {suggestion}")?;
    }
    let share = &report.sharing;
    write!(text, "\nShare: {}", share.title)?;
    write!(text, "\n  {}", share.description)?;
    write!(text, "\n  {}", share.hashtags.join(" "))
}

fn write_rendered(writer: &mut dyn Write, rendered: &str) -> Result<(), CliError> {
    writer
        .write_all(rendered.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
