//! # Recommendation Session
//!
//! This module coordinates one interactive run:
//! 1. Greet the user
//! 2. Ask for genres, max runtime and the modern-only switch
//! 3. Run the filter pipeline over the dataset
//! 4. Rank survivors by rating and keep the top N
//! 5. Print the picks (or the no-matches guidance) and say goodbye

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use data_loader::{Dataset, MovieRecord};
use pipeline::top_n;

use crate::display::write_picks;
use crate::preferences::Preferences;
use crate::prompt::InputProvider;

pub const GREETING: &str = "Hello! I heard you need help picking a movie tonight!\n\
I'm going to ask you some questions so that we can pick a perfect movie!\n";
pub const FAREWELL: &str = "\nHope you enjoy your movie!\nRemember to log it on Letterboxd!";

/// Outcome of one filter-then-rank run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recommendations {
    /// Movies that passed every filter, before the top-N cut
    pub matched: usize,
    /// At most `top_n` of those, highest rated first
    pub picks: Vec<MovieRecord>,
}

/// Runs the filter-then-rank flow over a loaded dataset
pub struct RecommendationSession<'a> {
    dataset: &'a Dataset,
    top_n: usize,
}

impl<'a> RecommendationSession<'a> {
    /// # Arguments
    /// * `dataset` - The loaded dataset, shared read-only
    /// * `top_n` - How many picks to show (3 for the interactive tool)
    pub fn new(dataset: &'a Dataset, top_n: usize) -> Self {
        Self { dataset, top_n }
    }

    /// Filter and rank the dataset for a set of preferences.
    ///
    /// # Returns
    /// How many movies survived the filters, and at most `top_n` of them
    /// sorted by rating (highest first)
    pub fn recommend(&self, preferences: &Preferences) -> Result<Recommendations> {
        let start_time = Instant::now();

        let pipeline = preferences.build_pipeline();
        let filtered = pipeline
            .apply(self.dataset.movies().to_vec(), self.dataset.schema())
            .context("Failed to apply filters")?;
        let matched = filtered.len();
        let picks = top_n(filtered, self.top_n);

        info!(
            "{} of {} movies matched, returning {} in {:?}",
            matched,
            self.dataset.len(),
            picks.len(),
            start_time.elapsed()
        );
        Ok(Recommendations { matched, picks })
    }

    /// Run a full interactive session.
    ///
    /// Questions go through `input`; everything else is written to `out`.
    /// Returns what was recommended.
    pub fn run<I, W>(&self, input: &mut I, out: &mut W) -> Result<Recommendations>
    where
        I: InputProvider,
        W: Write,
    {
        writeln!(out, "{}", GREETING)?;
        out.flush()?;

        let preferences = Preferences::gather(input)?;
        info!(
            "Preferences: genres={:?} max_runtime={:?} modern_only={}",
            preferences.genres, preferences.max_runtime, preferences.modern_only
        );

        let recommendations = self.recommend(&preferences)?;
        write_picks(
            out,
            recommendations.matched,
            &recommendations.picks,
            self.dataset.schema(),
        )?;
        writeln!(out, "{}", FAREWELL)?;
        out.flush()?;

        Ok(recommendations)
    }
}
