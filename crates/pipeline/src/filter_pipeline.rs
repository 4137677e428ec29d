//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! filter stages together using the builder pattern.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{MovieRecord, Schema};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new(&genres))
///     .add_filter(RuntimeFilter::from_input(&max_runtime))
///     .add_filter(ReleaseYearFilter::new(modern_only));
///
/// let filtered = pipeline.apply(dataset.movies().to_vec(), dataset.schema())?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the stages, in the order they run
    pub fn stage_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the movies.
    ///
    /// Each stage sees only the rows the previous stage kept. The first
    /// failing stage aborts the whole run.
    pub fn apply(&self, movies: Vec<MovieRecord>, schema: &Schema) -> Result<Vec<MovieRecord>> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, schema)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
