//! Embedded sample dataset for degraded "no backend" mode.
//!
//! When the review service cannot be reached, reads are served from this
//! dataset instead of failing, with the status and minimum-rating filters
//! applied locally. The other filter dimensions (channel, dates, sorting)
//! are the remote service's job and are not reimplemented here.

use crate::Result;
use crate::filter::ReviewFilter;
use crate::model::{Channel, Property, Review};
use ohno::IntoAppError;
use serde::Deserialize;

/// The embedded dataset, from `sample_data.json`.
const SAMPLE_JSON: &str = include_str!("sample_data.json");

#[derive(Debug, Deserialize)]
struct SampleData {
    properties: Vec<Property>,
    channels: Vec<Channel>,
}

fn load() -> Result<SampleData> {
    serde_json::from_str(SAMPLE_JSON).into_app_err("parsing embedded sample dataset")
}

/// The sample property list.
pub fn properties() -> Result<Vec<Property>> {
    Ok(load()?.properties)
}

/// One sample property by id, if it exists.
pub fn property(property_id: &str) -> Result<Option<Property>> {
    Ok(load()?.properties.into_iter().find(|p| p.id == property_id))
}

/// The sample channel catalog.
pub fn channels() -> Result<Vec<Channel>> {
    Ok(load()?.channels)
}

/// Sample reviews for a property, with status and minimum-rating filters
/// applied locally.
pub fn reviews_for_property(property_id: &str, filter: &ReviewFilter) -> Result<Vec<Review>> {
    let mut reviews: Vec<Review> = load()?
        .properties
        .into_iter()
        .flat_map(|p| p.reviews)
        .filter(|r| r.property_id == property_id)
        .collect();

    if let Some(status) = &filter.status {
        reviews.retain(|r| r.status == *status);
    }

    if let Some(rating_min) = filter.rating_min {
        reviews.retain(|r| r.rating >= rating_min);
    }

    Ok(reviews)
}
