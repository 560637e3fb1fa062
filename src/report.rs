//! One complete run: analyze the inputs, explain conflicts, render the report.
//!
//! The binary gathers the inputs (go.mod, module graph text) and hands them
//! here together with the [`ModuleSource`] used for why queries. Problems
//! that do not stop the run are written to `err` as they happen.

use std::io::{self, Write};

use crate::analysis::{explain_conflicts, Analysis, AnalysisOptions};
use crate::export::{self, ExportData, ExportFormat, GraphSummary};
use crate::parser::{GoMod, ParseResult};
use crate::source::{ModuleSource, SourceResult};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The report was written
    Completed = 0,
    /// The module graph had a malformed line; only the manifest was reported
    MalformedGraph = 1,
    /// Conflicts were found and denied
    ConflictsDenied = 2,
}

impl RunStatus {
    /// Convert to the process exit status
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Settings for one run.
#[derive(Debug, Clone, Default)]
pub struct ReportSettings {
    /// Output format
    pub format: ExportFormat,
    /// Color the text report
    pub color: bool,
    /// Analysis settings
    pub analysis: AnalysisOptions,
    /// Skip the why query for each conflict
    pub skip_why: bool,
    /// End with [`RunStatus::ConflictsDenied`] when conflicts are found
    pub deny_conflicts: bool,
}

/// Runs the analysis over `graph_text` and writes the report to `out`.
///
/// An unreadable manifest or graph is reported to `err` and its section is
/// left out. A malformed graph line is reported after the manifest section
/// and ends the run with [`RunStatus::MalformedGraph`].
pub fn run_report<S, W, E>(
    settings: &ReportSettings,
    manifest: ParseResult<GoMod>,
    graph_text: SourceResult<String>,
    source: &S,
    out: &mut W,
    err: &mut E,
) -> io::Result<RunStatus>
where
    S: ModuleSource + ?Sized,
    W: Write,
    E: Write,
{
    let manifest = match manifest {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            writeln!(err, "Error reading go.mod: {}", e)?;
            None
        }
    };

    let analysis = match graph_text {
        Ok(text) => match Analysis::from_graph_output(&text, &settings.analysis) {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                let data = ExportData::new(manifest, None);
                export::export(settings.format, &data, settings.color, out)?;
                writeln!(err, "{}", e)?;
                return Ok(RunStatus::MalformedGraph);
            }
        },
        Err(e) => {
            writeln!(err, "{}", e)?;
            None
        }
    };

    let summary = match analysis {
        Some(analysis) => {
            let explanations = if settings.skip_why {
                Vec::new()
            } else {
                explain_conflicts(source, &analysis.conflicts)
            };
            for explanation in &explanations {
                if let Some(error) = &explanation.error {
                    writeln!(err, "why pkg {}: {}", explanation.package_name, error)?;
                }
            }
            Some(GraphSummary::new(&analysis, explanations))
        }
        None => None,
    };

    let data = ExportData::new(manifest, summary);
    export::export(settings.format, &data, settings.color, out)?;

    if settings.deny_conflicts && data.conflict_count() > 0 {
        return Ok(RunStatus::ConflictsDenied);
    }
    Ok(RunStatus::Completed)
}
