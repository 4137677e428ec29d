//! The three answers a session collects, and how each is interpreted.

use crate::prompt::InputProvider;
use anyhow::Result;
use pipeline::FilterPipeline;
use pipeline::filters::{GenreFilter, ReleaseYearFilter, RuntimeFilter};

pub const GENRE_QUESTION: &str =
    "What genre(s) are you in the mood for? (e.g., Action, Drama, Sci-Fi): ";
pub const RUNTIME_QUESTION: &str = "What's the max runtime (minutes)? (e.g., 90, 120): ";
pub const MODERN_QUESTION: &str = "Modern only (2000-present)? y/n: ";

/// What the user asked for
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preferences {
    /// Requested genres, trimmed, never empty strings
    pub genres: Vec<String>,
    /// Maximum runtime answer exactly as typed
    pub max_runtime: String,
    pub modern_only: bool,
}

impl Preferences {
    /// Ask the three questions in order and interpret the answers
    pub fn gather(input: &mut impl InputProvider) -> Result<Self> {
        let genres = parse_genres(&input.ask(GENRE_QUESTION)?);
        let max_runtime = input.ask(RUNTIME_QUESTION)?.trim().to_string();
        let modern_only = parse_modern_only(&input.ask(MODERN_QUESTION)?);

        Ok(Self {
            genres,
            max_runtime,
            modern_only,
        })
    }

    /// Filter stages for these preferences: genre, then runtime, then year
    pub fn build_pipeline(&self) -> FilterPipeline {
        FilterPipeline::new()
            .add_filter(GenreFilter::new(&self.genres))
            .add_filter(RuntimeFilter::from_input(&self.max_runtime))
            .add_filter(ReleaseYearFilter::new(self.modern_only))
    }
}

/// Split a comma-separated genre answer, dropping blank entries
///
/// Example: " Action, ,sci-fi " -> ["Action", "sci-fi"]
pub fn parse_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

/// Only a literal "y" (any case, surrounding spaces ignored) means yes.
/// Every other answer, "yes" included, means no.
pub fn parse_modern_only(raw: &str) -> bool {
    raw.trim().to_lowercase() == "y"
}
