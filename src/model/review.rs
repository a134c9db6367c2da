use super::Channel;
use serde::{Deserialize, Serialize};

/// Moderation state of a review.
///
/// Only `Published` counts as approved anywhere in the crate. Unknown wire
/// values are preserved in `Other` rather than rejected, so a malformed
/// status still counts toward totals without ever being treated as approved
/// or pending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReviewStatus {
    Pending,
    Published,
    Rejected,
    Other(String),
}

impl ReviewStatus {
    /// The wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Published => "published",
            Self::Rejected => "rejected",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ReviewStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => Self::Pending,
            "published" => Self::Published,
            "rejected" => Self::Rejected,
            _ => Self::Other(s),
        }
    }
}

impl From<ReviewStatus> for String {
    fn from(status: ReviewStatus) -> Self {
        match status {
            ReviewStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One guest-or-host review tied to a property and a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique within a property.
    pub id: String,

    pub property_id: String,

    /// Expected range 1-5, but out-of-range values propagate unchanged
    /// into aggregates.
    pub rating: f64,

    pub status: ReviewStatus,

    /// "guest-to-host" or "host-to-guest" as delivered by the service.
    #[serde(rename = "type", default)]
    pub review_type: Option<String>,

    /// The platform the review arrived through.
    pub channel: Channel,

    /// ISO 8601 timestamp, never parsed by this crate.
    pub created_at: String,

    #[serde(default)]
    pub updated_at: Option<String>,

    pub content: String,

    pub author_name: String,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub source_review_id: Option<String>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn status_from_known_strings() {
        assert_eq!(ReviewStatus::from("pending".to_string()), ReviewStatus::Pending);
        assert_eq!(ReviewStatus::from("published".to_string()), ReviewStatus::Published);
        assert_eq!(ReviewStatus::from("rejected".to_string()), ReviewStatus::Rejected);
    }

    #[test]
    fn status_preserves_unknown_strings() {
        let status = ReviewStatus::from("approved".to_string());
        assert_eq!(status, ReviewStatus::Other("approved".to_string()));
        assert_eq!(String::from(status), "approved");
    }

    #[test]
    fn deserialize_review_from_service_json() {
        let json = r#"{
            "id": "r1",
            "propertyId": "p1",
            "rating": 4.5,
            "status": "published",
            "type": "guest-to-host",
            "channel": { "id": 2018, "name": "Airbnb", "displayName": "Airbnb" },
            "createdAt": "2024-01-15T00:00:00Z",
            "updatedAt": "2024-01-15T00:00:00Z",
            "content": "Lovely stay.",
            "authorName": "Sarah Johnson",
            "authorAvatarUrl": "https://example.com/avatar.png"
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.id, "r1");
        assert_eq!(review.property_id, "p1");
        assert_eq!(review.status, ReviewStatus::Published);
        assert_eq!(review.review_type.as_deref(), Some("guest-to-host"));
        assert_eq!(review.channel.display_name, "Airbnb");
    }

    #[test]
    fn deserialize_review_with_unknown_status() {
        let json = r#"{
            "id": "r2",
            "propertyId": "p1",
            "rating": 5.0,
            "status": "approved",
            "channel": { "id": 2022, "name": "Google", "displayName": "Google" },
            "createdAt": "2024-01-10T00:00:00Z",
            "content": "Perfect.",
            "authorName": "Emily Rodriguez"
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.status, ReviewStatus::Other("approved".to_string()));
        assert!(review.review_type.is_none());
    }
}
