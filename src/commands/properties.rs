use super::common::{Common, CommonArgs};
use super::host::Host;
use crate::Result;
use clap::Parser;
use core::fmt::Write as _;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    /// Include per-property review counts (fetches the full admin listing)
    #[arg(long)]
    pub detailed: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// List the property portfolio.
pub async fn process_properties<H: Host>(host: &mut H, args: &PropertiesArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;

    let fetched = if args.detailed {
        common.service.properties_admin().await?
    } else {
        common.service.properties().await?
    };
    common.warn_if_degraded(fetched.degraded);

    if !common.service.is_current(fetched.generation) {
        return Ok(());
    }

    let mut out = String::new();
    for property in &fetched.value {
        if args.detailed {
            writeln!(out, "{}  {} ({} reviews)", property.id, property.name, property.reviews.len())?;
        } else {
            writeln!(out, "{}  {}", property.id, property.name)?;
        }
    }

    if fetched.value.is_empty() {
        writeln!(out, "No properties found.")?;
    }

    let _ = write!(common.host().output(), "{out}");
    Ok(())
}
