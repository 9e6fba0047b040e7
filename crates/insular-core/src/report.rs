//! Report rendering (text, table, json)

use std::str::FromStr;

use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};
use serde::{Deserialize, Serialize};

use crate::aggregate::{ReportResult, TARGET_REGION};
use crate::window::QueryWindow;

const RULE: &str =
    "---------------------------------------------------------------------------------";

/// Output style of `insular analyze`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}' (expected text, table or json)")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Table => "table",
            Self::Json => "json",
        })
    }
}

/// Render in the requested format. `source` labels the data file.
pub fn render(
    format: OutputFormat,
    result: &ReportResult,
    window: &QueryWindow,
    source: &str,
) -> String {
    match format {
        OutputFormat::Text => render_text(result, window, source),
        OutputFormat::Table => render_table(result, window, source),
        OutputFormat::Json => render_json(result, window, source),
    }
}

pub fn render_text(result: &ReportResult, window: &QueryWindow, source: &str) -> String {
    let (start, end) = (window.year_start(), window.year_end());
    let mut lines = vec![
        RULE.to_string(),
        format!("Analyzing Insular Manuscripts Produced in {TARGET_REGION}: {start} - {end} CE"),
        format!("Data Source: {source} (User-provided)"),
        RULE.to_string(),
        "IMPORTANT: The accuracy of this analysis depends entirely on the completeness and"
            .to_string(),
        format!("accuracy of the pre-compiled data file at '{source}'."),
        String::new(),
    ];

    if result.total_matched() == 0 {
        lines.extend([
            format!(
                "No known extant manuscripts found in '{source}' matching the criteria for the \
                 period {start}-{end} CE produced in {TARGET_REGION}."
            ),
            "This could mean:".to_string(),
            "   - No such manuscripts are listed in the data file for this period and location."
                .to_string(),
            "   - The data file is incomplete or uses different notation for origin/dates."
                .to_string(),
            format!(
                "   - The script's internal filters for '{TARGET_REGION}' or date logic need \
                 adjustment for your data file."
            ),
        ]);
    } else {
        lines.extend([
            format!(
                "Total known extant manuscripts ({TARGET_REGION}, {start}-{end} CE): {}",
                result.total_matched()
            ),
            format!(
                "Number of these containing illustrations/illuminations: {}",
                result.illustrated_count()
            ),
            format!(
                "Percentage illustrated: {:.2}%",
                result.percentage_illustrated()
            ),
        ]);
    }
    lines.push(RULE.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_table(result: &ReportResult, window: &QueryWindow, source: &str) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new(format!("{TARGET_REGION}, {window} CE"))
                .fg(Color::Cyan)
                .add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Value").fg(Color::Cyan),
        ]);

    table.add_row(vec!["Data source", source]);
    table.add_row(vec![
        "Manuscripts matched".to_string(),
        result.total_matched().to_string(),
    ]);
    table.add_row(vec![
        "Illustrated".to_string(),
        result.illustrated_count().to_string(),
    ]);
    let pct = if result.total_matched() == 0 {
        Cell::new("n/a (no matches)").fg(Color::DarkGrey)
    } else {
        Cell::new(format!("{:.2}%", result.percentage_illustrated()))
    };
    table.add_row(vec![Cell::new("Percentage illustrated"), pct]);

    table.to_string()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    region: &'static str,
    window: &'a QueryWindow,
    source: &'a str,
    #[serde(flatten)]
    result: &'a ReportResult,
}

pub fn render_json(result: &ReportResult, window: &QueryWindow, source: &str) -> String {
    let report = JsonReport {
        region: TARGET_REGION,
        window,
        source,
        result,
    };
    // Plain structs of numbers and strings always serialize
    serde_json::to_string_pretty(&report).unwrap_or_default()
}
