#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for revue
//!
//! This library consolidates all functionality for the revue tool, which lets an
//! operator inspect rental properties, review statistics, and moderate guest
//! reviews fetched from a remote review service.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`model`]: Wire-format records for reviews, properties, and channels
//! - [`stats`]: Derived review and portfolio statistics
//! - [`filter`]: Canonical review filter, partial updates, and query projection
//! - [`service`]: Review service client, caching, and degraded-mode fallback
//! - [`reports`]: Report generation in multiple formats

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod filter;
#[cfg(not(any(debug_assertions, test)))]
mod filter;

#[cfg(any(debug_assertions, test))]
pub mod model;
#[cfg(not(any(debug_assertions, test)))]
mod model;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

#[cfg(any(debug_assertions, test))]
pub mod service;
#[cfg(not(any(debug_assertions, test)))]
mod service;

#[cfg(any(debug_assertions, test))]
pub mod stats;
#[cfg(not(any(debug_assertions, test)))]
mod stats;

pub use crate::commands::{Host, run};
