use super::common::{Common, CommonArgs};
use super::host::Host;
use crate::Result;
use clap::Parser;
use core::fmt::Write as _;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ChannelsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// List the channels reviews can arrive through.
pub async fn process_channels<H: Host>(host: &mut H, args: &ChannelsArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;

    let fetched = common.service.channels().await?;
    common.warn_if_degraded(fetched.degraded);

    if !common.service.is_current(fetched.generation) {
        return Ok(());
    }

    let mut out = String::new();
    for channel in &fetched.value {
        writeln!(out, "{:>6}  {}", channel.id, channel.display_name)?;
    }

    let _ = write!(common.host().output(), "{out}");
    Ok(())
}
