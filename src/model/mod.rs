//! Wire-format records for the review service
//!
//! These types mirror the JSON shapes the remote review service produces:
//! reviews (with their originating channel), rental properties (which embed
//! their review collections), and the channel catalog. Field names on the
//! wire are camelCase.
//!
//! The rest of the crate treats these records as immutable inputs: they are
//! fetched, cached, and reduced over, never modified. Ratings are carried as
//! raw `f64` values with no range validation, and timestamps stay as ISO 8601
//! strings since sorting and date-range filtering belong to the remote
//! service.

mod channel;
mod property;
mod review;

pub use channel::Channel;
pub use property::Property;
pub use review::{Review, ReviewStatus};
