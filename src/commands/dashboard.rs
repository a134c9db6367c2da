use super::common::{Common, CommonArgs};
use super::host::Host;
use crate::Result;
use crate::stats::{PortfolioStats, ReviewStats};
use clap::Parser;
use core::fmt::Write as _;
use owo_colors::OwoColorize;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Show the portfolio roll-up plus a per-property summary line.
pub async fn process_dashboard<H: Host>(host: &mut H, args: &DashboardArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;

    let fetched = common.service.properties_admin().await?;
    common.warn_if_degraded(fetched.degraded);

    if !common.service.is_current(fetched.generation) {
        return Ok(());
    }

    let properties = fetched.value;
    let portfolio = PortfolioStats::compute(&properties);
    let use_colors = common.use_colors();

    let mut out = String::new();
    if use_colors {
        writeln!(out, "{}", "Portfolio".bold())?;
    } else {
        writeln!(out, "Portfolio")?;
    }
    writeln!(out, "  Properties      : {}", portfolio.total_properties)?;
    writeln!(out, "  Total reviews   : {}", portfolio.total_reviews)?;
    writeln!(out, "  Pending reviews : {}", portfolio.pending_reviews)?;
    writeln!(out, "  Average rating  : {:.1}", portfolio.average_rating)?;
    writeln!(out)?;

    for property in &properties {
        let stats = ReviewStats::compute(&property.reviews);
        writeln!(
            out,
            "{} ({}): {} reviews, {} pending, avg {:.1}",
            property.name,
            property.id,
            property.reviews.len(),
            stats.pending_count,
            stats.average_approved_rating,
        )?;
    }

    let _ = write!(common.host().output(), "{out}");
    Ok(())
}
