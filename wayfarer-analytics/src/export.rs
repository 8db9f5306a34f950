//! Render an itinerary for handing to visitors.

use std::fmt::Write as _;
use std::str::FromStr;

use thiserror::Error;
use wayfarer_core::Itinerary;

const RULE_WIDTH: usize = 50;
const SECTION_WIDTH: usize = 30;

/// Output format accepted by [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    /// Pretty-printed JSON of the whole itinerary.
    #[default]
    Json,
    /// Plain text listing for printing.
    Text,
}

impl ExportFormat {
    /// Return the format name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(ExportError::UnknownFormat {
                format: s.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while exporting an itinerary.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested format name is not supported.
    #[error("unknown export format '{format}', expected 'json' or 'text'")]
    UnknownFormat {
        /// The rejected name.
        format: String,
    },
    /// JSON encoding failed.
    #[error("failed to encode itinerary as JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Writing the text listing failed.
    #[error("failed to format itinerary text")]
    Format(#[from] std::fmt::Error),
}

/// Render `itinerary` in `format`.
///
/// # Errors
/// Returns [`ExportError::Json`] if serialisation fails and
/// [`ExportError::Format`] if the text listing cannot be written.
///
/// # Examples
/// ```
/// use wayfarer_analytics::{ExportFormat, export};
/// use wayfarer_core::{Itinerary, RouteSummary};
///
/// let itinerary = Itinerary::new(Vec::new(), RouteSummary::default(), Vec::new());
/// let text = export(&itinerary, ExportFormat::Text)?;
/// assert!(text.contains("Exhibits: 0"));
/// # Ok::<(), wayfarer_analytics::ExportError>(())
/// ```
pub fn export(itinerary: &Itinerary, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(itinerary)?),
        ExportFormat::Text => Ok(render_text(itinerary)?),
    }
}

fn render_text(itinerary: &Itinerary) -> Result<String, std::fmt::Error> {
    let rule = "=".repeat(RULE_WIDTH);
    let section = "-".repeat(SECTION_WIDTH);
    let summary = itinerary.summary();
    let mut out = String::new();

    writeln!(out, "{rule}")?;
    writeln!(out, "Visit itinerary")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Exhibits: {}", summary.total_exhibits)?;
    writeln!(out, "Viewing time: {} min", summary.estimated_time)?;
    writeln!(
        out,
        "Walking: {:.2} m (about {} min)",
        summary.total_distance, summary.walking_minutes
    )?;
    writeln!(out, "Difficulty: {}", summary.difficulty)?;
    writeln!(out)?;

    if !itinerary.stops().is_empty() {
        writeln!(out, "Route:")?;
        writeln!(out, "{section}")?;
        for (position, stop) in itinerary.stops().iter().enumerate() {
            writeln!(out, "{}. {}", position.saturating_add(1), stop.name)?;
            if !stop.description.is_empty() {
                writeln!(out, "   {}", stop.description)?;
            }
            writeln!(out, "   Suggested stay: {} min", stop.visit_duration)?;
            writeln!(
                out,
                "   Importance: {}",
                "★".repeat(usize::from(stop.importance.get()))
            )?;
            writeln!(out)?;
        }
    }

    if !itinerary.recommendations().is_empty() {
        writeln!(out, "Recommendations:")?;
        writeln!(out, "{section}")?;
        for advice in itinerary.recommendations() {
            writeln!(out, "• {advice}")?;
        }
        writeln!(out)?;
    }

    write!(out, "{rule}")?;
    Ok(out)
}
