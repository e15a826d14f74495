//! Command line configuration

use std::path::PathBuf;

use clap::{Args, Parser};

use tally::receipt::printer::DEFAULT_COLUMNS;

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Check out a fixture cart and print its receipt
#[derive(Debug, Parser)]
#[command(name = "tally", about = "Supermarket receipt engine", long_about = None)]
pub(crate) struct TallyConfig {
    /// Fixture set to check out (products, offers and cart)
    #[arg(short, long, env = "TALLY_FIXTURE", default_value = "default")]
    pub fixture: String,

    /// Directory holding the fixture sets
    #[arg(long, env = "TALLY_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Receipt width in characters
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Render the receipt as a table instead of till text
    #[arg(short, long)]
    pub table: bool,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults() -> TestResult {
        let config = TallyConfig::try_parse_from(["tally"])?;

        assert_eq!(config.fixture, "default");
        assert_eq!(config.fixtures_dir, PathBuf::from("./fixtures"));
        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert!(!config.table);

        Ok(())
    }

    #[test]
    fn parses_flags() -> TestResult {
        let config = TallyConfig::try_parse_from([
            "tally",
            "--fixture",
            "weekly",
            "--fixtures-dir",
            "/tmp/fixtures",
            "--columns",
            "32",
            "--table",
            "--log-format",
            "json",
        ])?;

        assert_eq!(config.fixture, "weekly");
        assert_eq!(config.fixtures_dir, PathBuf::from("/tmp/fixtures"));
        assert_eq!(config.columns, 32);
        assert!(config.table);
        assert!(matches!(config.logging.log_format, LogFormat::Json));

        Ok(())
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = TallyConfig::try_parse_from(["tally", "--log-format", "pretty"]);

        assert!(result.is_err());
    }
}
