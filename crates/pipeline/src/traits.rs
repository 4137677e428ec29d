//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! independently testable filter stages to be chained over the dataset.

use anyhow::Result;
use data_loader::{MovieRecord, Schema};

/// Core trait for one filter stage.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters take ownership of the Vec<MovieRecord> and return the rows
///   they keep, in the order they received them
/// - The `Schema` tells a filter whether its column exists; a filter whose
///   column is absent returns its input unchanged
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership)
    /// * `schema` - Columns present in the dataset the movies came from
    ///
    /// # Returns
    /// * `Ok(Vec<MovieRecord>)` - The kept movies, a subset of the input
    /// * `Err` - If filtering fails
    fn apply(&self, movies: Vec<MovieRecord>, schema: &Schema) -> Result<Vec<MovieRecord>>;
}
