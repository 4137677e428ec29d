//! Optional filter for modern releases.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{Column, MovieRecord, Schema};

/// First year counted as "modern"
pub const MODERN_ERA_START: f64 = 2000.0;

/// Keeps only movies released in or after `MODERN_ERA_START` when enabled.
///
/// ## Algorithm
/// 1. If disabled, keep all movies
/// 2. Read the release year as a number; non-numeric years are dropped
/// 3. Keep years >= MODERN_ERA_START
pub struct ReleaseYearFilter {
    modern_only: bool,
}

impl ReleaseYearFilter {
    pub fn new(modern_only: bool) -> Self {
        Self { modern_only }
    }
}

impl Filter for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn apply(&self, movies: Vec<MovieRecord>, schema: &Schema) -> Result<Vec<MovieRecord>> {
        if !self.modern_only {
            return Ok(movies);
        }
        if !schema.has(Column::ReleasedYear) {
            tracing::debug!("No {} column, skipping year filter", Column::ReleasedYear);
            return Ok(movies);
        }

        let filtered = movies
            .into_iter()
            .filter(|movie| movie.year().is_some_and(|year| year >= MODERN_ERA_START))
            .collect();
        Ok(filtered)
    }
}
