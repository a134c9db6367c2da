//! Multi-format report generation for review listings
//!
//! Three generators, each a `generate` function writing to a `fmt::Write`
//! sink over the same input: a [`ReportableReviews`] bundling a property,
//! its review collection, and the derived statistics.
//!
//! - **Console**: terminal output with ANSI colors and aligned columns
//! - **JSON**: machine-readable structured data
//! - **CSV**: spreadsheet-compatible rows with proper escaping

mod common;
mod console;
mod csv;
mod json;
mod reportable;

pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use json::generate as generate_json;
pub use reportable::ReportableReviews;
