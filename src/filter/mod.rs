//! Canonical review filtering and query projection
//!
//! A review-list view holds one [`ReviewFilter`] as its state. Every filter
//! field is optional, and absence always means "no constraint on that
//! dimension" — the UI convention of an `"all"` choice is translated into
//! absence at the boundary and never stored here.
//!
//! User interactions produce a [`FilterPatch`], a partial update where each
//! field independently keeps, clears, or overwrites the current value.
//! [`ReviewFilter::apply`] merges a patch into a new filter without mutating
//! the old one, and [`ReviewFilter::to_query_params`] projects a filter into
//! the ordered query-parameter list the review service expects. Both are
//! pure and never fail.

mod patch;
mod review_filter;

pub use patch::{FilterPatch, Patch};
pub use review_filter::{ReviewFilter, SortBy, SortOrder};
