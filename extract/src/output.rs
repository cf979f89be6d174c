//! Output formatting for hierarchies and reports.

use ward_hierarchy_core::WardHierarchy;

use crate::error::Result;
use crate::report::ExtractionReport;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Markdown,
    Table,
}

/// Formats a hierarchy in the requested output format.
///
/// JSON output is pretty-printed with two-space indentation, the layout
/// front-ends load directly.
pub fn format_hierarchy(hierarchy: &WardHierarchy, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(hierarchy)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(hierarchy)?),
        OutputFormat::Markdown => Ok(hierarchy_to_markdown(hierarchy)),
        OutputFormat::Table => Ok(hierarchy_to_table(hierarchy)),
    }
}

/// Formats an extraction report in the requested output format.
pub fn format_report(report: &ExtractionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Markdown => Ok(report_to_markdown(report)),
        OutputFormat::Table => Ok(report_to_table(report)),
    }
}

fn hierarchy_to_markdown(hierarchy: &WardHierarchy) -> String {
    let mut out = String::new();

    out.push_str("# Ward Hierarchy\n\n");
    out.push_str(&format!("**Totals:** {}\n", hierarchy.stats()));

    for (state, lgas) in hierarchy.iter() {
        out.push_str(&format!("\n## {state}\n\n"));
        out.push_str("| LGA | Wards |\n");
        out.push_str("|-----|-------|\n");
        for (lga, wards) in lgas {
            out.push_str(&format!("| {lga} | {} |\n", wards.join(", ")));
        }
    }

    out
}

fn hierarchy_to_table(hierarchy: &WardHierarchy) -> String {
    let mut out = String::new();

    let max_state = hierarchy
        .iter()
        .map(|(state, _)| state.len())
        .max()
        .unwrap_or(5);
    let max_lga = hierarchy
        .iter()
        .flat_map(|(_, lgas)| lgas.keys())
        .map(String::len)
        .max()
        .unwrap_or(3);

    for (state, lgas) in hierarchy.iter() {
        for (lga, wards) in lgas {
            out.push_str(&format!(
                "{:<sw$}  {:<lw$}  {:>4} wards\n",
                state,
                lga,
                wards.len(),
                sw = max_state,
                lw = max_lga
            ));
        }
    }
    out.push_str(&format!("{}\n", hierarchy.stats()));
    out
}

fn report_to_markdown(report: &ExtractionReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Extraction Report: {}\n\n", report.source));
    out.push_str(&format!("- **Generated:** {}\n", report.generated_at));
    out.push_str(&format!("- **Totals:** {}\n", report.stats));
    out.push_str(&format!(
        "- **Coverage:** {:.2} ({} of {} lines)\n",
        report.coverage, report.recognized_lines, report.total_lines
    ));
    out.push_str(&format!("- **SHA-256:** `{}`\n", report.output_sha256));

    if !report.drop_counts.is_empty() {
        out.push_str("\n## Dropped Lines\n\n");
        out.push_str("| Reason | Count |\n");
        out.push_str("|--------|-------|\n");
        for (reason, count) in &report.drop_counts {
            out.push_str(&format!("| {reason} | {count} |\n"));
        }
    }

    if !report.warnings.is_empty() {
        out.push_str("\n## Warnings\n\n");
        for w in &report.warnings {
            out.push_str(&format!("- {w}\n"));
        }
    }

    if !report.validation_errors.is_empty() {
        out.push_str("\n## Validation Errors\n\n");
        for e in &report.validation_errors {
            out.push_str(&format!("- {e}\n"));
        }
    }

    out
}

fn report_to_table(report: &ExtractionReport) -> String {
    let status = if report.validation_errors.is_empty() {
        "OK"
    } else {
        "INVALID"
    };
    format!(
        "{:<24} {:<8} {:>3} states {:>5} LGAs {:>6} wards cov={:.2}\n",
        report.source,
        status,
        report.stats.states,
        report.stats.lgas,
        report.stats.wards,
        report.coverage,
    )
}
