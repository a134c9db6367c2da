//! Shared plumbing for the revue commands.

use super::config::Config;
use crate::Result;
use crate::reports::{ReportableReviews, generate_console, generate_csv, generate_json};
use crate::service::{ReviewService, ReviewsClient};
use camino::Utf8PathBuf;
use chrono::Utc;
use clap::Args;
use clap::ValueEnum;
use directories::BaseDirs;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Common arguments shared between the data-fetching commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Base URL of the review service API (overrides the config file)
    #[arg(long, value_name = "URL", env = "REVUE_BASE_URL")]
    pub base_url: Option<String>,

    /// Path to configuration file (default is `revue.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Directory where fetched collections are cached
    #[arg(long, value_name = "PATH")]
    pub cache_dir: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,

    /// Ignore cached data and fetch everything fresh
    #[arg(long)]
    pub ignore_cached: bool,

    /// Never contact the review service; work from the embedded sample data
    #[arg(long)]
    pub offline: bool,

    /// Output the review listing to a CSV file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Output the review listing to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,
}

pub struct Common<'a, H: super::Host> {
    pub service: ReviewService,
    host: &'a mut H,
    color: ColorMode,
    csv: Option<Utf8PathBuf>,
    json: Option<Utf8PathBuf>,
}

impl<'a, H: super::Host> Common<'a, H> {
    /// Create a new Common processor with logger, config, and service
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded or the service cannot
    /// be initialized
    pub fn new(host: &'a mut H, args: &CommonArgs) -> Result<Self> {
        Self::init_logging(args.log_level);

        let config = Config::load(args.config.as_ref())?;

        let base_url = args.base_url.clone().unwrap_or_else(|| config.base_url.clone());

        // Determine cache directory: use provided path or default cache directory for the platform
        let cache_dir = if let Some(cache_path) = &args.cache_dir {
            cache_path.as_std_path().to_path_buf()
        } else {
            BaseDirs::new()
                .into_app_err("could not determine cache directory")?
                .cache_dir()
                .join("revue")
        };

        let client = ReviewsClient::new(base_url)?;
        let service = ReviewService::new(
            client,
            &cache_dir,
            config.reviews_cache_ttl,
            config.properties_cache_ttl,
            config.channels_cache_ttl,
            Utc::now(),
            args.ignore_cached,
            args.offline,
        );

        Ok(Self {
            service,
            host,
            color: args.color,
            csv: args.csv.clone(),
            json: args.json.clone(),
        })
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        let level = match log_level {
            LogLevel::None => return,
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
            .init();
    }

    pub fn host(&mut self) -> &mut H {
        self.host
    }

    /// Warn on the error stream when a collection came from the sample
    /// dataset instead of the live service.
    pub fn warn_if_degraded(&mut self, degraded: bool) {
        if degraded {
            let _ = writeln!(self.host.error(), "warning: review service unreachable; showing sample data");
        }
    }

    /// Emit a review report to the requested outputs.
    ///
    /// File outputs suppress the console listing; with no `--csv` or
    /// `--json` the report goes to the console.
    pub fn report(&mut self, report: &ReportableReviews) -> Result<()> {
        let generating_files = self.csv.is_some() || self.json.is_some();

        if !generating_files {
            let mut console_output = String::new();
            generate_console(report, self.use_colors(), &mut console_output)?;
            let _ = write!(self.host.output(), "{console_output}");
        }

        if let Some(filename) = &self.csv {
            let mut csv_output = String::new();
            generate_csv(report, &mut csv_output)?;
            fs::write(filename, csv_output)?;
        }

        if let Some(filename) = &self.json {
            let mut json_output = String::new();
            generate_json(report, &mut json_output)?;
            fs::write(filename, json_output)?;
        }

        Ok(())
    }

    pub fn use_colors(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }
}
