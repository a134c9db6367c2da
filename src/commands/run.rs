//! Command dispatch logic for revue

use super::{
    ChannelsArgs, DashboardArgs, InitArgs, ModerateArgs, PropertiesArgs, ReviewsArgs, ValidateArgs, Verdict, init_config,
    moderate_review, process_channels, process_dashboard, process_properties, process_reviews, validate_config,
};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "revue", version, author, long_about = None)]
#[command(about = "Manage and analyze guest reviews across a property portfolio")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: RevueSubcommand,
}

#[derive(Subcommand, Debug)]
enum RevueSubcommand {
    /// Show portfolio-wide review statistics
    Dashboard(DashboardArgs),
    /// List properties in the portfolio
    Properties(PropertiesArgs),
    /// List a property's reviews with filtering and derived statistics
    Reviews(Box<ReviewsArgs>),
    /// Approve a review for public display
    Approve(ModerateArgs),
    /// Reject a review from public display
    Reject(ModerateArgs),
    /// List the channels reviews arrive through
    Channels(ChannelsArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    match &cli.command {
        RevueSubcommand::Dashboard(dashboard_args) => process_dashboard(host, dashboard_args).await,
        RevueSubcommand::Properties(properties_args) => process_properties(host, properties_args).await,
        RevueSubcommand::Reviews(reviews_args) => process_reviews(host, reviews_args).await,
        RevueSubcommand::Approve(moderate_args) => moderate_review(host, moderate_args, Verdict::Approve).await,
        RevueSubcommand::Reject(moderate_args) => moderate_review(host, moderate_args, Verdict::Reject).await,
        RevueSubcommand::Channels(channels_args) => process_channels(host, channels_args).await,
        RevueSubcommand::Init(init_args) => init_config(host, init_args),
        RevueSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
