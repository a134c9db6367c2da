//! Command-line interface and orchestration for revue
//!
//! This module implements the CLI commands and coordinates the other modules
//! to carry out complete workflows. It handles argument parsing,
//! configuration management, and orchestration of fetching, statistics, and
//! reporting.
//!
//! # Implementation Model
//!
//! The module is organized around the following commands:
//!
//! ## Commands
//!
//! - **dashboard**: Fetch the property portfolio and show roll-up review
//!   statistics for the whole portfolio and each property
//! - **properties**: List the properties in the portfolio
//! - **reviews**: List one property's reviews, filtered and sorted per the
//!   command line, with derived statistics and optional CSV/JSON reports
//! - **approve** / **reject**: Moderate a single review and refresh the
//!   affected property's cached data
//! - **channels**: List the channels reviews arrive through
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and values
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. Each data-fetching command follows a
//! similar pattern:
//!
//! 1. Parse arguments and load configuration
//! 2. Fetch the relevant collection through the service layer (cache-first,
//!    with sample-data fallback when the service is unreachable)
//! 3. Compute derived statistics
//! 4. Render to the console or to report files
//!
//! The `common` module provides shared functionality like logging setup,
//! color mode handling, service construction, and report emission.
//!
//! Configuration is managed through a TOML file holding the service base
//! URL and the cache TTLs.

mod channels;
mod common;
mod config;
mod dashboard;
mod host;
mod init;
mod moderate;
mod properties;
mod reviews;
mod run;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use channels::{ChannelsArgs, process_channels};
pub use dashboard::{DashboardArgs, process_dashboard};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use moderate::{ModerateArgs, Verdict, moderate_review};
pub use properties::{PropertiesArgs, process_properties};
pub use reviews::{ReviewsArgs, process_reviews};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
