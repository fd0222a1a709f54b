//! # jamrank Core
//!
//! Core library for jamrank.
//!
//! This crate provides the data model the ranking pipeline works on:
//!
//! - [`Record`] - A read-only search result with typed, non-failing accessors
//! - [`RankConfig`] - Explicit ranking parameters (top-k, signal fields, heuristics)
//! - [`AvailabilityFilter`] - Optional pre-filter for playable/downloadable tracks
//! - [`TrackSummary`] - Typed view of the commonly displayed track fields
//!
//! ## Example
//!
//! ```rust
//! use jamrank_core::{Record, RankConfig};
//! use serde_json::json;
//!
//! let record = Record::from(json!({
//!     "name": "Rainy Window",
//!     "likes": 42,
//!     "position": 3,
//!     "releasedate": "2021-05-01"
//! }));
//!
//! assert_eq!(record.positive_number("likes"), Some(42.0));
//! assert_eq!(record.positive_integer("position"), Some(3));
//! assert_eq!(record.parsed_year("releasedate"), Some(2021));
//! assert_eq!(record.positive_number("listens"), None);
//!
//! let config = RankConfig::default().with_top_k(3);
//! config.validate().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod record;
pub mod track;

pub use config::{
    RankConfig, DEFAULT_DIRECT_SIGNAL_FIELDS, DEFAULT_POSITION_CAP, DEFAULT_RECENCY_YEAR_THRESHOLD,
    DEFAULT_TOP_K, RESERVED_SOURCE_TAGS,
};
pub use error::{Error, Result};
pub use filter::{AvailabilityFilter, Filter};
pub use record::Record;
pub use track::TrackSummary;
