use super::common::{Common, CommonArgs};
use super::host::Host;
use crate::Result;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ModerateArgs {
    /// Review to moderate
    #[arg(value_name = "REVIEW_ID")]
    pub review_id: String,

    /// Property the review belongs to (its cached data is refreshed)
    #[arg(long, short = 'p', value_name = "PROPERTY_ID")]
    pub property: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// The two moderation verdicts a manager can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approve,
    Reject,
}

/// Apply a moderation verdict to a review.
///
/// The request is sent exactly once; a failure leaves the review and all
/// cached data unchanged.
pub async fn moderate_review<H: Host>(host: &mut H, args: &ModerateArgs, verdict: Verdict) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;

    match verdict {
        Verdict::Approve => {
            common.service.approve(&args.review_id, &args.property).await?;
            let _ = writeln!(common.host().output(), "Approved review {}", args.review_id);
        }
        Verdict::Reject => {
            common.service.reject(&args.review_id, &args.property).await?;
            let _ = writeln!(common.host().output(), "Rejected review {}", args.review_id);
        }
    }

    Ok(())
}
