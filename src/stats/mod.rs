//! Derived review and portfolio statistics
//!
//! This module reduces review collections into the numbers the dashboard
//! displays. Everything here is a pure function over borrowed data: no I/O,
//! no shared state, safe to call from any number of concurrent callers.
//!
//! # Implementation Model
//!
//! [`ReviewStats`] summarizes a single review collection: approved and
//! pending counts, the approval rate, and the average approved rating. The
//! average intentionally divides by the *total* review count rather than the
//! approved count, matching the behavior the service's operators already see
//! on their dashboard; the undiluted statistic is available separately as
//! [`mean_approved_rating`].
//!
//! [`PortfolioStats`] rolls property collections up into the numbers shown
//! on the top-level dashboard: property count, total and pending review
//! counts, and the mean of the per-property average ratings.

mod portfolio;
mod review_stats;

pub use portfolio::PortfolioStats;
pub use review_stats::{ReviewStats, mean_approved_rating};
