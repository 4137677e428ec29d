//! Top-N selection: the last stage of the pipeline.
//!
//! This is the only stage allowed to reorder rows.

use data_loader::MovieRecord;
use std::cmp::Ordering;

/// Default number of picks shown to the user
pub const DEFAULT_TOP_N: usize = 3;

/// Order two movies by rating, highest first, unrated movies last.
fn by_rating_desc(a: &MovieRecord, b: &MovieRecord) -> Ordering {
    match (a.rating, b.rating) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort by rating descending and keep the first `n` movies.
///
/// The sort is stable, so movies with equal ratings keep the order they had
/// in the dataset.
pub fn top_n(mut movies: Vec<MovieRecord>, n: usize) -> Vec<MovieRecord> {
    movies.sort_by(by_rating_desc);
    movies.truncate(n);
    movies
}
