//! Review service API client
//!
//! Minimal typed client for the remote review service: review listings with
//! filter queries, property records, moderation actions, and the channel
//! catalog.

use super::resilient_http::resilient_get;
use crate::Result;
use crate::filter::ReviewFilter;
use crate::model::{Channel, Property, Review};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

const LOG_TARGET: &str = "    client";

/// Timeout for individual HTTP requests. GETs are also bounded by the
/// resilience middleware; this covers the one-shot moderation PATCHes.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Envelope for `GET /reviews`.
#[derive(Debug, Deserialize)]
struct ReviewsEnvelope {
    reviews: Vec<Review>,
}

/// Envelope for `GET /properties` and `GET /properties/admin`.
#[derive(Debug, Deserialize)]
struct PropertiesEnvelope {
    properties: Vec<Property>,
}

/// Review service API client.
#[derive(Debug, Clone)]
pub struct ReviewsClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReviewsClient {
    /// Create a new client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("revue")
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        let full = format!("{}{path}", self.base_url);
        Url::parse(&full).into_app_err_with(|| format!("building request URL '{full}'"))
    }

    /// Fetch the reviews of a property matching the given filter.
    pub async fn reviews(&self, property_id: &str, filter: &ReviewFilter) -> Result<Vec<Review>> {
        let full = format!("{}/reviews", self.base_url);
        let url = Url::parse_with_params(&full, filter.to_query_params(property_id))
            .into_app_err_with(|| format!("building request URL '{full}'"))?;

        let envelope: ReviewsEnvelope = self.fetch_json(url).await?;
        Ok(envelope.reviews)
    }

    /// Fetch a single property record (with its embedded reviews).
    pub async fn property(&self, property_id: &str) -> Result<Property> {
        self.fetch_json(self.url(&format!("/properties/{property_id}"))?).await
    }

    /// Fetch the property list.
    pub async fn properties(&self) -> Result<Vec<Property>> {
        let envelope: PropertiesEnvelope = self.fetch_json(self.url("/properties")?).await?;
        Ok(envelope.properties)
    }

    /// Fetch the admin property list (properties with full review embeds).
    pub async fn properties_admin(&self) -> Result<Vec<Property>> {
        let envelope: PropertiesEnvelope = self.fetch_json(self.url("/properties/admin")?).await?;
        Ok(envelope.properties)
    }

    /// Fetch the channel catalog.
    pub async fn channels(&self) -> Result<Vec<Channel>> {
        self.fetch_json(self.url("/channels")?).await
    }

    /// Approve a review.
    ///
    /// Mutations are sent exactly once: a failed approve must surface to the
    /// operator rather than silently retry.
    pub async fn approve(&self, review_id: &str) -> Result<()> {
        self.mutate(&format!("/reviews/{review_id}/approve")).await
    }

    /// Reject a review. Sent exactly once, like [`Self::approve`].
    pub async fn reject(&self, review_id: &str) -> Result<()> {
        self.mutate(&format!("/reviews/{review_id}/reject")).await
    }

    /// Send a GET through the resilience middleware and decode the JSON body.
    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = resilient_get(&self.client, url.as_str()).await?;
        let response = check_status(response)?;

        log::debug!(target: LOG_TARGET, "GET {} succeeded", response.url());
        response.json().await.map_err(ohno::AppError::from)
    }

    async fn mutate(&self, path: &str) -> Result<()> {
        let response = self.client.patch(self.url(path)?).send().await?;
        let _ = check_status(response)?;
        Ok(())
    }
}

/// Turn a non-2xx response into an error carrying the status and URL.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(app_err!("review service returned {status} for {}", response.url()))
    }
}
