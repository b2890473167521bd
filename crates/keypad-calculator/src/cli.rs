//! Command-line arguments and logging setup

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::EngineConfig;
use crate::error::{ShellError, ShellResult};

/// Keypad calculator in the terminal
#[derive(Parser, Debug)]
#[command(name = "keypad-calculator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Text shown after an arithmetic error (overrides the config file)
    #[arg(long, value_name = "TEXT")]
    pub error_marker: Option<String>,

    /// Significant digits for results, 1 to 17 (overrides the config file)
    #[arg(long, value_name = "N")]
    pub digits: Option<u8>,

    /// Write logs to this file; nothing is logged without it
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn", value_name = "FILTER")]
    pub log_level: String,
}

impl Cli {
    /// Builds the engine configuration: file first, then flag overrides
    pub fn engine_config(&self) -> ShellResult<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };
        if let Some(marker) = &self.error_marker {
            config.error_marker.clone_from(marker);
        }
        if let Some(digits) = self.digits {
            config.significant_digits = digits;
        }
        config.validate()?;
        Ok(config)
    }

    /// Installs a file-backed tracing subscriber when `--log-file` is given
    ///
    /// The terminal is owned by the UI, so logs never go to stdout or stderr.
    pub fn init_logging(&self) -> ShellResult<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.log_level)
                .map_err(|e| ShellError::logging(format!("{}: {e}", self.log_level)))?,
        };
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| ShellError::logging(e.to_string()))?;

        info!(path = %path.display(), "logging initialised");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["keypad-calculator"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert!(cli.config.is_none());
        assert!(cli.error_marker.is_none());
        assert!(cli.digits.is_none());
        assert!(cli.log_file.is_none());
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.engine_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_flag_overrides() {
        let cli = parse(&["--error-marker", "Oops", "--digits", "8"]);
        let config = cli.engine_config().unwrap();
        assert_eq!(config.error_marker, "Oops");
        assert_eq!(config.significant_digits, 8);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "error_marker: \"Nope\"\nsignificant_digits: 10").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let from_file = parse(&["--config", &path]).engine_config().unwrap();
        assert_eq!(from_file.error_marker, "Nope");
        assert_eq!(from_file.significant_digits, 10);

        let overridden = parse(&["-c", &path, "--digits", "12"])
            .engine_config()
            .unwrap();
        assert_eq!(overridden.error_marker, "Nope");
        assert_eq!(overridden.significant_digits, 12);
    }

    #[test]
    fn test_invalid_digits_rejected() {
        let cli = parse(&["--digits", "0"]);
        assert!(matches!(
            cli.engine_config(),
            Err(ShellError::InvalidConfig { .. })
        ));
        assert!(Cli::try_parse_from(["keypad-calculator", "--digits", "many"]).is_err());
    }

    #[test]
    fn test_numeric_marker_rejected() {
        let cli = parse(&["--error-marker", "0"]);
        assert!(cli.engine_config().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = parse(&["--config", "/nonexistent/keypad.yaml"]);
        assert!(matches!(cli.engine_config(), Err(ShellError::Io(_))));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["keypad-calculator", "--verbose"]).is_err());
    }

    #[test]
    fn test_logging_without_file_is_noop() {
        let cli = parse(&[]);
        assert!(cli.init_logging().is_ok());
    }
}
