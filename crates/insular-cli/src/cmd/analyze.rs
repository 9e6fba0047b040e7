//! `insular analyze` - illustrated share for a year or year range

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Args};

use insular_core::{
    LogDiagnostics, ManuscriptSource, OutputFormat, QueryWindow, SkipCounter, analyze, render,
};

use crate::config::Config;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("window").required(true).args(["year", "year_range"])))]
pub struct AnalyzeArgs {
    /// Analyze manuscripts for a specific year (700-1100), e.g. 850
    #[arg(long)]
    pub year: Option<i32>,

    /// Analyze manuscripts within a range of years, e.g. 700-799
    #[arg(long, value_name = "YYYY-YYYY")]
    pub year_range: Option<String>,

    /// Manuscript CSV (default: [data] path from config)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Output format: text, table or json
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Log every skipped row instead of only a summary
    #[arg(long)]
    pub show_skipped: bool,
}

impl AnalyzeArgs {
    /// Validated query window. Checked before the data file is opened.
    pub fn window(&self) -> Result<QueryWindow> {
        let window = match (self.year, self.year_range.as_deref()) {
            (Some(year), _) => QueryWindow::single(year)?,
            (None, Some(range)) => range.parse::<QueryWindow>()?,
            (None, None) => anyhow::bail!("either --year or --year-range is required"),
        };
        Ok(window)
    }
}

/// Run the report for an already validated `window`
pub fn run(args: AnalyzeArgs, window: QueryWindow, config: &Config) -> Result<()> {
    let path = args.data.unwrap_or_else(|| config.data.path.clone());
    let format = args.format.unwrap_or(config.report.format);
    let skip_level = if args.show_skipped || config.report.show_skipped {
        log::Level::Warn
    } else {
        log::Level::Debug
    };

    log::info!("Analyzing {} for {window} CE", path.display());
    let source = ManuscriptSource::open(&path)?;

    let mut counter = SkipCounter::new();
    let result = analyze(
        source,
        &window,
        (&mut counter, LogDiagnostics::new(skip_level)),
    )?;
    counter.counts().log();

    let out = render(format, &result, &window, &path.display().to_string());
    println!("{}", out.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insular_core::{InvalidQueryWindow, SourceError};

    fn args(year: Option<i32>, range: Option<&str>) -> AnalyzeArgs {
        AnalyzeArgs {
            year,
            year_range: range.map(str::to_string),
            data: None,
            format: None,
            show_skipped: false,
        }
    }

    #[test]
    fn single_year_window() {
        let w = args(Some(850), None).window().unwrap();
        assert_eq!(w, QueryWindow::single(850).unwrap());
    }

    #[test]
    fn range_window() {
        let w = args(None, Some("700-799")).window().unwrap();
        assert_eq!(w, QueryWindow::new(700, 799).unwrap());
    }

    #[test]
    fn malformed_range_window() {
        let err = args(None, Some("700--800")).window().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InvalidQueryWindow>(),
            Some(InvalidQueryWindow::BadFormat { .. })
        ));
    }

    #[test]
    fn out_of_domain_year() {
        let err = args(Some(1200), None).window().unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidQueryWindow>(),
            Some(&InvalidQueryWindow::OutOfRange { year: 1200 })
        );
    }

    #[test]
    fn missing_data_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut a = args(Some(800), None);
        a.data = Some(dir.path().join("missing.csv"));
        let window = a.window().unwrap();
        let err = run(a, window, &Config::default()).unwrap_err();
        let source_err = err.downcast_ref::<SourceError>().unwrap();
        assert!(source_err.is_not_found());
    }
}
