use crate::model::{Review, ReviewStatus};
use serde::Serialize;

/// Display statistics derived from one review collection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ReviewStats {
    /// Number of reviews with status `published`.
    pub approved_count: usize,

    /// Number of reviews with status `pending`.
    pub pending_count: usize,

    /// Percentage of ALL reviews (any status) that are published.
    pub approval_rate_pct: f64,

    /// Sum of published ratings divided by the TOTAL review count.
    ///
    /// The divisor is deliberately the total count, not the approved count,
    /// so the value is diluted whenever any review is non-published. This
    /// reproduces the dashboard's established behavior; use
    /// [`mean_approved_rating`] for the undiluted statistic.
    pub average_approved_rating: f64,
}

impl ReviewStats {
    /// Reduce a review collection to its display statistics.
    ///
    /// An empty collection yields all zeros. Statuses other than
    /// `published` and `pending` count toward the denominators only.
    #[must_use]
    pub fn compute(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self::default();
        }

        let total = reviews.len();
        let mut approved_count = 0;
        let mut pending_count = 0;
        let mut approved_rating_sum = 0.0;

        for review in reviews {
            match review.status {
                ReviewStatus::Published => {
                    approved_count += 1;
                    approved_rating_sum += review.rating;
                }
                ReviewStatus::Pending => pending_count += 1,
                _ => {}
            }
        }

        Self {
            approved_count,
            pending_count,
            approval_rate_pct: approved_count as f64 / total as f64 * 100.0,
            average_approved_rating: approved_rating_sum / total as f64,
        }
    }
}

/// True mean of published ratings: sum divided by the APPROVED count.
///
/// Returns 0 when no review is published. This is the standard statistic the
/// diluted [`ReviewStats::average_approved_rating`] is not; reports show
/// both rather than silently switching.
#[must_use]
pub fn mean_approved_rating(reviews: &[Review]) -> f64 {
    let mut approved_count = 0;
    let mut approved_rating_sum = 0.0;

    for review in reviews {
        if review.status == ReviewStatus::Published {
            approved_count += 1;
            approved_rating_sum += review.rating;
        }
    }

    if approved_count == 0 {
        0.0
    } else {
        approved_rating_sum / approved_count as f64
    }
}
