use super::Review;
use serde::{Deserialize, Serialize};

/// A rental property record, embedding its review collection.
///
/// The service returns many more fields than the dashboard needs; unknown
/// fields are ignored on deserialization, and most of the ones kept are
/// defaulted so that trimmed-down admin responses still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub listing_id: String,

    #[serde(default)]
    pub external_listing_name: String,

    #[serde(default)]
    pub internal_listing_name: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub country: String,

    /// Nightly price, kept as the display string the service sends.
    #[serde(default)]
    pub price: String,

    #[serde(default)]
    pub guests: String,

    #[serde(default)]
    pub bedrooms: String,

    #[serde(default)]
    pub bathrooms: String,

    #[serde(default)]
    pub reviews: Vec<Review>,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn deserialize_sparse_property() {
        let json = r#"{ "id": "p1", "name": "Shoreditch Heights 2B" }"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.id, "p1");
        assert!(property.reviews.is_empty());
        assert!(property.city.is_empty());
    }

    #[test]
    fn deserialize_property_with_reviews() {
        let json = r#"{
            "id": "p1",
            "name": "Shoreditch Heights 2B",
            "city": "London",
            "country": "United Kingdom",
            "price": "185",
            "reviews": [{
                "id": "r1",
                "propertyId": "p1",
                "rating": 5,
                "status": "published",
                "channel": { "id": 2018, "name": "Airbnb", "displayName": "Airbnb" },
                "createdAt": "2024-01-15T00:00:00Z",
                "content": "Great.",
                "authorName": "Sarah Johnson"
            }]
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.reviews.len(), 1);
        assert_eq!(property.reviews[0].rating, 5.0);
    }
}
