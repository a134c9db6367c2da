use super::common::{Common, CommonArgs};
use super::host::Host;
use crate::Result;
use crate::filter::{FilterPatch, Patch, ReviewFilter, SortBy, SortOrder};
use crate::model::ReviewStatus;
use crate::reports::ReportableReviews;
use clap::{Parser, ValueEnum};

/// Review status choices exposed on the command line, including the
/// "all" sentinel that removes the status constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    All,
    Pending,
    Published,
    Rejected,
}

impl StatusArg {
    fn to_selection(self) -> Option<ReviewStatus> {
        match self {
            Self::All => None,
            Self::Pending => Some(ReviewStatus::Pending),
            Self::Published => Some(ReviewStatus::Published),
            Self::Rejected => Some(ReviewStatus::Rejected),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    GuestToHost,
    HostToGuest,
}

impl TypeArg {
    fn as_str(self) -> &'static str {
        match self {
            Self::GuestToHost => "guest-to-host",
            Self::HostToGuest => "host-to-guest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortByArg {
    Rating,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrderArg {
    Asc,
    Desc,
}

#[derive(Parser, Debug)]
pub struct ReviewsArgs {
    /// Property whose reviews to list
    #[arg(value_name = "PROPERTY_ID")]
    pub property_id: String,

    /// Only show reviews from this channel ("all" removes the constraint)
    #[arg(long, value_name = "CHANNEL_ID", help_heading = "Filtering")]
    pub channel: Option<String>,

    /// Only show reviews with at least this rating
    #[arg(long, value_name = "RATING", help_heading = "Filtering")]
    pub min_rating: Option<f64>,

    /// Only show reviews with this moderation status
    #[arg(long, value_name = "STATUS", help_heading = "Filtering")]
    pub status: Option<StatusArg>,

    /// Only show reviews created on or after this date (ISO 8601)
    #[arg(long, value_name = "DATE", help_heading = "Filtering")]
    pub from: Option<String>,

    /// Only show reviews created on or before this date (ISO 8601)
    #[arg(long, value_name = "DATE", help_heading = "Filtering")]
    pub to: Option<String>,

    /// Only show reviews of this type
    #[arg(long = "type", value_name = "TYPE", help_heading = "Filtering")]
    pub review_type: Option<TypeArg>,

    /// Sort key for the listing
    #[arg(long, value_name = "KEY", help_heading = "Sorting")]
    pub sort_by: Option<SortByArg>,

    /// Sort direction for the listing
    #[arg(long, value_name = "ORDER", help_heading = "Sorting")]
    pub sort_order: Option<SortOrderArg>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ReviewsArgs {
    /// Build the effective filter: start from the listing defaults and merge
    /// in whatever the command line constrains.
    fn filter(&self) -> ReviewFilter {
        let patch = FilterPatch {
            channel_id: match self.channel.as_deref() {
                None => Patch::Keep,
                Some("all") => Patch::Clear,
                Some(id) => Patch::Set(id.to_string()),
            },
            rating_min: self.min_rating.map_or(Patch::Keep, Patch::Set),
            status: self.status.map_or(Patch::Keep, |s| Patch::select(s.to_selection())),
            start_date: self.from.clone().map_or(Patch::Keep, Patch::Set),
            end_date: self.to.clone().map_or(Patch::Keep, Patch::Set),
            review_type: self.review_type.map_or(Patch::Keep, |t| Patch::Set(t.as_str().to_string())),
            sort_by: match self.sort_by {
                None => Patch::Keep,
                Some(SortByArg::Rating) => Patch::Set(SortBy::Rating),
                Some(SortByArg::CreatedAt) => Patch::Set(SortBy::CreatedAt),
            },
            sort_order: match self.sort_order {
                None => Patch::Keep,
                Some(SortOrderArg::Asc) => Patch::Set(SortOrder::Asc),
                Some(SortOrderArg::Desc) => Patch::Set(SortOrder::Desc),
            },
        };

        ReviewFilter::listing_defaults().apply(&patch)
    }
}

/// List a property's reviews with their derived statistics.
pub async fn process_reviews<H: Host>(host: &mut H, args: &ReviewsArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;

    let filter = args.filter();
    let fetched = common.service.reviews(&args.property_id, &filter).await?;
    common.warn_if_degraded(fetched.degraded);

    // Rendering a superseded fetch would show stale filter state.
    if !common.service.is_current(fetched.generation) {
        return Ok(());
    }

    // The property record is decoration; the listing stands without it.
    let property_name = match common.service.property(&args.property_id).await {
        Ok(property) => Some(property.value.name),
        Err(_) => None,
    };

    let report = ReportableReviews::new(&args.property_id, property_name, fetched.value);
    common.report(&report)
}
