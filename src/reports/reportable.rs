use crate::model::Review;
use crate::stats::{ReviewStats, mean_approved_rating};

/// Everything the report generators need about one property's reviews.
#[derive(Debug, Clone)]
pub struct ReportableReviews {
    pub property_id: String,

    /// Display name, when the property record was available.
    pub property_name: Option<String>,

    pub stats: ReviewStats,

    /// The undiluted mean of published ratings, reported alongside the
    /// diluted `stats.average_approved_rating`.
    pub mean_approved_rating: f64,

    pub reviews: Vec<Review>,
}

impl ReportableReviews {
    /// Bundle a review collection with its derived statistics.
    #[must_use]
    pub fn new(property_id: &str, property_name: Option<String>, reviews: Vec<Review>) -> Self {
        Self {
            property_id: property_id.to_string(),
            property_name,
            stats: ReviewStats::compute(&reviews),
            mean_approved_rating: mean_approved_rating(&reviews),
            reviews,
        }
    }

    /// The name to display for this property.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.property_name.as_deref().unwrap_or(&self.property_id)
    }
}
