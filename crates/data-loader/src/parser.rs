//! Parser for the IMDB top-movies CSV file.
//!
//! The file has a header row and many columns; only the ones named in
//! `Column` are read, the rest are ignored. Cells are parsed best-effort:
//! an empty or non-numeric cell becomes `None` rather than an error.

use crate::error::{DataLoadError, Result};
use crate::types::{MovieRecord, Schema};
use regex::Regex;
use serde::Deserialize;
use std::io::Read;
use std::sync::LazyLock;

static DIGIT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid digit run regex"));

/// Row shape as it comes out of the CSV reader.
///
/// Fields missing from the header deserialize to `None`; numeric fields
/// that fail to parse also deserialize to `None` through `invalid_option`.
#[derive(Debug, Deserialize)]
struct RawMovieRow {
    #[serde(rename = "Series_Title", default)]
    title: Option<String>,
    #[serde(rename = "Genre", default)]
    genre: Option<String>,
    #[serde(
        rename = "IMDB_Rating",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    rating: Option<f64>,
    #[serde(
        rename = "Meta_score",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    critic_score: Option<f64>,
    #[serde(rename = "Runtime", default)]
    runtime: Option<String>,
    #[serde(rename = "Director", default)]
    director: Option<String>,
    #[serde(rename = "Released_Year", default)]
    released_year: Option<String>,
}

impl From<RawMovieRow> for MovieRecord {
    fn from(row: RawMovieRow) -> Self {
        MovieRecord {
            title: row.title,
            genre: row.genre,
            rating: row.rating.filter(|rating| !rating.is_nan()),
            critic_score: row.critic_score.filter(|score| !score.is_nan()),
            runtime: row.runtime.as_deref().and_then(parse_runtime),
            director: row.director,
            released_year: row.released_year,
        }
    }
}

/// Normalize a runtime cell to whole minutes.
///
/// Takes the first run of digits in the text, so "142 min" -> Some(142).
/// Text without digits yields `None`. A digit run too large for a u32 also
/// yields `None`, so such a row loads with an unknown runtime.
///
/// Example: "142 min" -> Some(142)
///          "n/a" -> None
pub fn parse_runtime(raw: &str) -> Option<u32> {
    DIGIT_RUN_RE
        .find(raw)
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Parse a whole CSV document into its schema and movie rows.
///
/// Rows shorter than the header are kept, their trailing cells read as
/// empty. Fails if a row is longer than the header, the CSV is otherwise
/// malformed, or a required column is missing.
pub fn parse_movies<R: Read>(reader: R) -> Result<(Schema, Vec<MovieRecord>)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let schema = Schema::from_headers(headers.iter());
    if let Some(column) = schema.missing_required() {
        return Err(DataLoadError::MissingColumn {
            column: column.header(),
        });
    }

    let mut movies = Vec::new();
    let mut runtime_misses = 0usize;
    for record in csv_reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(DataLoadError::Malformed {
                line: record.position().map(|pos| pos.line()).unwrap_or(0),
                reason: format!(
                    "expected at most {} fields, found {}",
                    headers.len(),
                    record.len()
                ),
            });
        }
        let row: RawMovieRow = record.deserialize(Some(&headers))?;
        let had_runtime_text = row.runtime.as_deref().is_some_and(|s| !s.trim().is_empty());
        let movie = MovieRecord::from(row);
        if had_runtime_text && movie.runtime.is_none() {
            runtime_misses += 1;
        }
        movies.push(movie);
    }

    if runtime_misses > 0 {
        tracing::debug!("{} rows have a runtime with no extractable minutes", runtime_misses);
    }

    Ok((schema, movies))
}
