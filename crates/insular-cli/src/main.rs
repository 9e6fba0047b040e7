//! insular - illustrated share of Insular manuscripts by production year
//!
//! Reads a locally compiled CSV of manuscripts produced in Britain between
//! 700 and 1100 CE and reports how many fall in a year window and what
//! percentage of them are illustrated.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "insular")]
#[command(about = "Percentage of illustrated Insular manuscripts (Britain, 700-1100 CE)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./insular.toml or ~/.config/insular/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Count manuscripts in a year window and the share that are illustrated
    Analyze(cmd::analyze::AnalyzeArgs),
    /// List archives, libraries and databases for researching these manuscripts
    Sources,
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    insular_core::init_logging(false, cli.debug);

    match cli.command {
        Command::Analyze(args) => {
            // A bad window is reported even when the config is broken
            let window = args.window()?;
            let config = load_config(cli.config.as_deref())?;
            cmd::analyze::run(args, window, &config)
        }
        // Static text; needs neither config nor data
        Command::Sources => {
            cmd::sources::run();
            Ok(())
        }
        Command::Config => {
            let config = load_config(cli.config.as_deref())?;
            show_config(&config);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
}

fn show_config(config: &Config) {
    use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Setting").fg(Color::Cyan),
            Cell::new("Value").fg(Color::Cyan),
        ]);

    table.add_row(vec![
        "Data file",
        &config.data.path.display().to_string(),
    ]);
    table.add_row(vec!["Report format", &config.report.format.to_string()]);
    table.add_row(vec![
        "Show skipped rows",
        if config.report.show_skipped {
            "yes"
        } else {
            "no"
        },
    ]);
    table.add_row(vec!["Region", insular_core::TARGET_REGION]);
    table.add_row(vec![
        "Year domain",
        &format!("{}-{}", insular_core::MIN_YEAR, insular_core::MAX_YEAR),
    ]);

    eprintln!("\n{table}");
}
