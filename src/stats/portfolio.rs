use super::ReviewStats;
use crate::model::Property;
use serde::Serialize;

/// Dashboard roll-up across a property portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PortfolioStats {
    pub total_properties: usize,

    pub total_reviews: usize,

    /// Reviews awaiting moderation across all properties.
    pub pending_reviews: usize,

    /// Mean over properties of each property's (diluted) average approved
    /// rating. Properties without reviews contribute zero.
    pub average_rating: f64,
}

impl PortfolioStats {
    /// Roll a property collection up into dashboard statistics.
    #[must_use]
    pub fn compute(properties: &[Property]) -> Self {
        if properties.is_empty() {
            return Self::default();
        }

        let mut total_reviews = 0;
        let mut pending_reviews = 0;
        let mut rating_sum = 0.0;

        for property in properties {
            let stats = ReviewStats::compute(&property.reviews);
            total_reviews += property.reviews.len();
            pending_reviews += stats.pending_count;
            rating_sum += stats.average_approved_rating;
        }

        Self {
            total_properties: properties.len(),
            total_reviews,
            pending_reviews,
            average_rating: rating_sum / properties.len() as f64,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::model::{Channel, Review, ReviewStatus};

    fn review(property_id: &str, rating: f64, status: ReviewStatus) -> Review {
        Review {
            id: "r".to_string(),
            property_id: property_id.to_string(),
            rating,
            status,
            review_type: None,
            channel: Channel {
                id: 2018,
                name: "Airbnb".to_string(),
                display_name: "Airbnb".to_string(),
            },
            created_at: "2024-01-15T00:00:00Z".to_string(),
            updated_at: None,
            content: String::new(),
            author_name: String::new(),
            source: None,
            source_review_id: None,
        }
    }

    fn property(id: &str, reviews: Vec<Review>) -> Property {
        Property {
            id: id.to_string(),
            name: format!("Property {id}"),
            listing_id: String::new(),
            external_listing_name: String::new(),
            internal_listing_name: String::new(),
            address: String::new(),
            city: String::new(),
            country: String::new(),
            price: String::new(),
            guests: String::new(),
            bedrooms: String::new(),
            bathrooms: String::new(),
            reviews,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn empty_portfolio_is_all_zeros() {
        assert_eq!(PortfolioStats::compute(&[]), PortfolioStats::default());
    }

    #[test]
    fn rolls_up_counts_and_ratings() {
        let properties = vec![
            property(
                "p1",
                vec![
                    review("p1", 4.0, ReviewStatus::Published),
                    review("p1", 2.0, ReviewStatus::Pending),
                ],
            ),
            // No reviews: contributes zero to the rating mean.
            property("p2", vec![]),
        ];

        let stats = PortfolioStats::compute(&properties);
        assert_eq!(stats.total_properties, 2);
        assert_eq!(stats.total_reviews, 2);
        assert_eq!(stats.pending_reviews, 1);
        // p1 diluted average is 4/2 = 2.0; mean over 2 properties is 1.0.
        assert!((stats.average_rating - 1.0).abs() < 1e-9);
    }
}
