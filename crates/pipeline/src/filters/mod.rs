//! Filter implementations for the movie pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre;
pub mod release_year;
pub mod runtime;

// Re-export for convenience
pub use genre::GenreFilter;
pub use release_year::{MODERN_ERA_START, ReleaseYearFilter};
pub use runtime::{RuntimeFilter, parse_max_runtime};
