//! Filter to cap movie length.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{Column, MovieRecord, Schema};

/// Keeps movies no longer than a maximum number of minutes.
///
/// With no maximum (the user typed something that is not a number) every
/// movie is kept. With a maximum, movies whose runtime is unknown are
/// dropped since they cannot be shown to fit.
pub struct RuntimeFilter {
    max_minutes: Option<f64>,
}

impl RuntimeFilter {
    /// Create a new RuntimeFilter.
    ///
    /// # Arguments
    /// * `max_minutes` - Inclusive upper bound, `None` for unbounded
    pub fn new(max_minutes: Option<f64>) -> Self {
        Self { max_minutes }
    }

    /// Build the filter straight from the user's answer
    pub fn from_input(raw: &str) -> Self {
        Self::new(parse_max_runtime(raw))
    }

    pub fn max_minutes(&self) -> Option<f64> {
        self.max_minutes
    }
}

/// Parse the user's maximum runtime answer.
///
/// Anything that is not a floating-point number means "no limit".
///
/// Example: " 120 " -> Some(120.0)
///          "abc" -> None
pub fn parse_max_runtime(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(max) => Some(max),
        Err(_) => {
            tracing::debug!("Unparsable max runtime {:?}, treating as unbounded", raw);
            None
        }
    }
}

impl Filter for RuntimeFilter {
    fn name(&self) -> &str {
        "RuntimeFilter"
    }

    fn apply(&self, movies: Vec<MovieRecord>, schema: &Schema) -> Result<Vec<MovieRecord>> {
        let Some(max_minutes) = self.max_minutes else {
            return Ok(movies);
        };
        if !schema.has(Column::Runtime) {
            tracing::debug!("No {} column, skipping runtime filter", Column::Runtime);
            return Ok(movies);
        }

        let filtered = movies
            .into_iter()
            .filter(|movie| {
                movie
                    .runtime
                    .is_some_and(|minutes| f64::from(minutes) <= max_minutes)
            })
            .collect();
        Ok(filtered)
    }
}
