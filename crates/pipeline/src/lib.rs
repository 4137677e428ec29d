//! Pipeline for filtering and ranking movies.
//!
//! This crate provides:
//! - Filter trait and implementations for the three user-driven filters
//! - FilterPipeline for composing filters
//! - Top-N selection by rating
//!
//! ## Architecture
//! The pipeline processes the dataset in stages, each narrowing the table:
//! 1. GenreFilter keeps movies mentioning a requested genre
//! 2. RuntimeFilter keeps movies under the length cap
//! 3. ReleaseYearFilter optionally keeps only modern releases
//! 4. `ranking::top_n` sorts survivors by rating and truncates
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::FilterPipeline;
//! use pipeline::filters::*;
//! use pipeline::ranking::top_n;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(GenreFilter::new(&["Drama".to_string()]))
//!     .add_filter(RuntimeFilter::from_input("120"))
//!     .add_filter(ReleaseYearFilter::new(false));
//!
//! let filtered = pipeline.apply(dataset.movies().to_vec(), dataset.schema())?;
//! let picks = top_n(filtered, 3);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod ranking;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use ranking::{DEFAULT_TOP_N, top_n};
