use crate::config::toml_config::DashboardConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "edu-dashboard")]
#[command(about = "Slider, fruit charts and word counter demonstration")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render the page with the slider at the given position
    Slider {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Render the fruit charts for the given quantities
    Fruits {
        /// Quantity as NAME=N, repeatable
        #[arg(short, long = "qty")]
        quantities: Vec<String>,
    },
    /// Count the words of TEXT, or of stdin when omitted
    Words { text: Option<String> },
    /// Replay JSON-lines change events from FILE, or from stdin when omitted
    Session { file: Option<PathBuf> },
    /// Write the chart records for the given quantities as CSV
    Export {
        #[arg(short, long = "qty")]
        quantities: Vec<String>,

        #[arg(short, long)]
        output: PathBuf,
    },
}

impl CliConfig {
    /// Loads the TOML configuration when one was given, defaults otherwise.
    pub fn load_dashboard_config(&self) -> Result<DashboardConfig> {
        match &self.config {
            Some(path) => DashboardConfig::from_file(path),
            None => Ok(DashboardConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fruits_command() {
        let config = CliConfig::try_parse_from([
            "edu-dashboard",
            "--format",
            "json",
            "fruits",
            "--qty",
            "Apple=3",
            "-q",
            "Orange=5",
        ])
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        match config.command {
            Command::Fruits { quantities } => {
                assert_eq!(quantities, vec!["Apple=3", "Orange=5"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_slider_is_accepted_for_clamping() {
        let config = CliConfig::try_parse_from(["edu-dashboard", "slider", "-5"]).unwrap();
        assert!(matches!(config.command, Command::Slider { value: -5 }));
    }

    #[test]
    fn test_default_config_without_file() {
        let config = CliConfig::try_parse_from(["edu-dashboard", "words", "hi"]).unwrap();
        let dashboard = config.load_dashboard_config().unwrap();
        assert_eq!(dashboard.catalog.items.len(), 10);
    }
}
