use super::FilterPatch;
use crate::model::ReviewStatus;
use strum::Display;

/// Review-type values accepted by the service. The projection re-validates
/// against this list even when the value came from a typed source.
const ALLOWED_REVIEW_TYPES: [&str; 2] = ["guest-to-host", "host-to-guest"];

/// Sort key for review listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SortBy {
    #[strum(serialize = "rating")]
    Rating,

    #[strum(serialize = "createdAt")]
    CreatedAt,
}

/// Sort direction for review listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SortOrder {
    #[strum(serialize = "asc")]
    Asc,

    #[strum(serialize = "desc")]
    Desc,
}

/// The single authoritative representation of active review filtering and
/// sorting criteria.
///
/// Every field is optional; an absent field places no constraint on that
/// dimension. Date bounds stay ISO 8601 strings — the remote service owns
/// date-range filtering. `review_type` is carried loosely as a string (the
/// projection drops out-of-domain values) so that callers feeding us
/// unvalidated input cannot put a bad value on the wire.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewFilter {
    pub channel_id: Option<String>,
    pub rating_min: Option<f64>,
    pub status: Option<ReviewStatus>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub review_type: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

impl ReviewFilter {
    /// The filter a review-list view starts with: newest reviews first.
    #[must_use]
    pub fn listing_defaults() -> Self {
        Self {
            sort_by: Some(SortBy::CreatedAt),
            sort_order: Some(SortOrder::Desc),
            ..Self::default()
        }
    }

    /// Merge a partial update into a new filter.
    ///
    /// Fields the patch keeps are preserved, cleared fields are removed, set
    /// fields are overwritten. `self` is not mutated.
    #[must_use]
    pub fn apply(&self, patch: &FilterPatch) -> Self {
        Self {
            channel_id: patch.channel_id.resolve(self.channel_id.as_ref()),
            rating_min: patch.rating_min.resolve(self.rating_min.as_ref()),
            status: patch.status.resolve(self.status.as_ref()),
            start_date: patch.start_date.resolve(self.start_date.as_ref()),
            end_date: patch.end_date.resolve(self.end_date.as_ref()),
            review_type: patch.review_type.resolve(self.review_type.as_ref()),
            sort_by: patch.sort_by.resolve(self.sort_by.as_ref()),
            sort_order: patch.sort_order.resolve(self.sort_order.as_ref()),
        }
    }

    /// Project this filter into the ordered query-parameter list for a
    /// review fetch.
    ///
    /// Pairs appear in a fixed order and only when the corresponding field
    /// holds a value (empty strings count as absent). The date bounds map to
    /// the service's `from`/`to` names, out-of-domain statuses and review
    /// types are dropped entirely, and `propertyId` is always emitted last
    /// from the argument rather than the filter.
    #[must_use]
    pub fn to_query_params(&self, property_id: &str) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(channel_id) = &self.channel_id
            && !channel_id.is_empty()
        {
            params.push(("channelId", channel_id.clone()));
        }

        if let Some(rating_min) = self.rating_min {
            params.push(("ratingMin", rating_min.to_string()));
        }

        if let Some(status) = &self.status
            && !matches!(status, ReviewStatus::Other(_))
        {
            params.push(("status", status.as_str().to_string()));
        }

        if let Some(start_date) = &self.start_date
            && !start_date.is_empty()
        {
            params.push(("from", start_date.clone()));
        }

        if let Some(end_date) = &self.end_date
            && !end_date.is_empty()
        {
            params.push(("to", end_date.clone()));
        }

        if let Some(sort_by) = self.sort_by {
            params.push(("sortBy", sort_by.to_string()));
        }

        if let Some(sort_order) = self.sort_order {
            params.push(("sortOrder", sort_order.to_string()));
        }

        if let Some(review_type) = &self.review_type
            && ALLOWED_REVIEW_TYPES.contains(&review_type.as_str())
        {
            params.push(("reviewType", review_type.clone()));
        }

        params.push(("propertyId", property_id.to_string()));
        params
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::filter::Patch;

    #[test]
    fn apply_merges_disjoint_fields() {
        let current = ReviewFilter {
            sort_by: Some(SortBy::CreatedAt),
            ..ReviewFilter::default()
        };
        let patch = FilterPatch {
            status: Patch::Set(ReviewStatus::Published),
            ..FilterPatch::default()
        };

        let merged = current.apply(&patch);
        assert_eq!(merged.sort_by, Some(SortBy::CreatedAt));
        assert_eq!(merged.status, Some(ReviewStatus::Published));
    }

    #[test]
    fn apply_clear_removes_field() {
        let current = ReviewFilter {
            status: Some(ReviewStatus::Published),
            ..ReviewFilter::default()
        };
        let patch = FilterPatch {
            status: Patch::Clear,
            ..FilterPatch::default()
        };

        assert_eq!(current.apply(&patch), ReviewFilter::default());
    }

    #[test]
    fn apply_empty_patch_is_identity() {
        let filter = ReviewFilter {
            channel_id: Some("2018".to_string()),
            rating_min: Some(4.0),
            status: Some(ReviewStatus::Pending),
            start_date: Some("2024-01-01T00:00:00Z".to_string()),
            end_date: Some("2024-02-01T00:00:00Z".to_string()),
            review_type: Some("guest-to-host".to_string()),
            sort_by: Some(SortBy::Rating),
            sort_order: Some(SortOrder::Asc),
        };

        assert_eq!(filter.apply(&FilterPatch::default()), filter);
        assert_eq!(ReviewFilter::default().apply(&FilterPatch::default()), ReviewFilter::default());

        // The original is untouched.
        assert_eq!(filter.channel_id.as_deref(), Some("2018"));
    }

    #[test]
    fn query_params_preserve_order_and_omit_absent() {
        let filter = ReviewFilter {
            rating_min: Some(4.0),
            sort_order: Some(SortOrder::Asc),
            ..ReviewFilter::default()
        };

        let params = filter.to_query_params("p1");
        assert_eq!(
            params,
            vec![
                ("ratingMin", "4".to_string()),
                ("sortOrder", "asc".to_string()),
                ("propertyId", "p1".to_string()),
            ]
        );
    }

    #[test]
    fn query_params_full_filter_order() {
        let filter = ReviewFilter {
            channel_id: Some("2018".to_string()),
            rating_min: Some(3.0),
            status: Some(ReviewStatus::Published),
            start_date: Some("2024-01-01T00:00:00Z".to_string()),
            end_date: Some("2024-02-01T00:00:00Z".to_string()),
            review_type: Some("host-to-guest".to_string()),
            sort_by: Some(SortBy::Rating),
            sort_order: Some(SortOrder::Desc),
        };

        let keys: Vec<_> = filter.to_query_params("p9").into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["channelId", "ratingMin", "status", "from", "to", "sortBy", "sortOrder", "reviewType", "propertyId"]
        );
    }

    #[test]
    fn query_params_drop_invalid_review_type() {
        let filter = ReviewFilter {
            review_type: Some("invalid-value".to_string()),
            ..ReviewFilter::default()
        };

        let params = filter.to_query_params("p1");
        assert_eq!(params, vec![("propertyId", "p1".to_string())]);
    }

    #[test]
    fn query_params_drop_unknown_status() {
        let filter = ReviewFilter {
            status: Some(ReviewStatus::Other("approved".to_string())),
            ..ReviewFilter::default()
        };

        let params = filter.to_query_params("p1");
        assert_eq!(params, vec![("propertyId", "p1".to_string())]);
    }

    #[test]
    fn query_params_skip_empty_strings() {
        let filter = ReviewFilter {
            channel_id: Some(String::new()),
            start_date: Some(String::new()),
            ..ReviewFilter::default()
        };

        let params = filter.to_query_params("p1");
        assert_eq!(params, vec![("propertyId", "p1".to_string())]);
    }

    #[test]
    fn listing_defaults_sort_newest_first() {
        let filter = ReviewFilter::listing_defaults();
        assert_eq!(filter.sort_by, Some(SortBy::CreatedAt));
        assert_eq!(filter.sort_order, Some(SortOrder::Desc));
        assert!(filter.status.is_none());
    }
}
