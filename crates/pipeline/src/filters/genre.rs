//! Filter to keep only movies matching any of the requested genres.
//!
//! Genre cells hold free text such as "Action, Crime, Drama", so matching
//! is a whole-word, case-insensitive search rather than an exact compare.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{Column, MovieRecord, Schema};
use regex::{Regex, RegexBuilder};

/// Keeps movies whose genre text mentions at least one requested genre.
///
/// ## Algorithm
/// 1. Escape each requested genre so user input is matched literally
/// 2. Wrap it in word boundaries and compile case-insensitively
/// 3. Keep a movie if ANY pattern matches its genre cell
///
/// An empty request list keeps every movie. A requested genre whose pattern
/// cannot be compiled (absurdly long input) matches nothing.
pub struct GenreFilter {
    patterns: Vec<Regex>,
    requested: usize,
}

/// Compiled-size ceiling per genre pattern, well above the regex default
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

impl GenreFilter {
    /// Create a new GenreFilter.
    ///
    /// # Arguments
    /// * `genres` - Requested genres, already trimmed (e.g. ["Drama", "Sci-Fi"])
    pub fn new(genres: &[String]) -> Self {
        Self::with_size_limit(genres, PATTERN_SIZE_LIMIT)
    }

    /// Like `new`, with an explicit compiled-size limit per pattern
    pub fn with_size_limit(genres: &[String], size_limit: usize) -> Self {
        let patterns = genres
            .iter()
            .filter_map(|genre| {
                RegexBuilder::new(&format!(r"\b{}\b", regex::escape(genre)))
                    .case_insensitive(true)
                    .size_limit(size_limit)
                    .build()
                    .map_err(|err| {
                        tracing::warn!(
                            "Genre {:?} cannot be matched, ignoring it: {}",
                            genre.chars().take(40).collect::<String>(),
                            err
                        );
                    })
                    .ok()
            })
            .collect();

        Self {
            patterns,
            requested: genres.len(),
        }
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        match movie.genre.as_deref() {
            Some(genre) => self.patterns.iter().any(|pattern| pattern.is_match(genre)),
            None => false,
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, movies: Vec<MovieRecord>, schema: &Schema) -> Result<Vec<MovieRecord>> {
        if self.requested == 0 {
            return Ok(movies);
        }
        if !schema.has(Column::Genre) {
            tracing::debug!("No {} column, skipping genre filter", Column::Genre);
            return Ok(movies);
        }

        let filtered = movies
            .into_iter()
            .filter(|movie| self.matches(movie))
            .collect();
        Ok(filtered)
    }
}
