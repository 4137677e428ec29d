//! Core domain types for the movie dataset.
//!
//! A `Dataset` is a header-derived `Schema` plus the ordered list of
//! `MovieRecord`s read from the file. Both are immutable once loaded.

use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// Columns & Schema
// =============================================================================

/// Known columns of the IMDB top-movies table.
///
/// Variant order is the display order used when printing recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Title,
    Genre,
    Rating,
    CriticScore,
    Runtime,
    Director,
    ReleasedYear,
}

impl Column {
    /// Every known column, in display order
    pub const ALL: [Column; 7] = [
        Column::Title,
        Column::Genre,
        Column::Rating,
        Column::CriticScore,
        Column::Runtime,
        Column::Director,
        Column::ReleasedYear,
    ];

    /// Columns a dataset must carry for the pipeline to run at all
    pub const REQUIRED: [Column; 2] = [Column::Genre, Column::Rating];

    /// Header name as it appears in the CSV file
    pub fn header(self) -> &'static str {
        match self {
            Column::Title => "Series_Title",
            Column::Genre => "Genre",
            Column::Rating => "IMDB_Rating",
            Column::CriticScore => "Meta_score",
            Column::Runtime => "Runtime",
            Column::Director => "Director",
            Column::ReleasedYear => "Released_Year",
        }
    }

    /// Look up a column by its exact header name
    pub fn from_header(name: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|column| column.header() == name)
    }

    /// Whether values in this column are numbers (used for alignment)
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Column::Rating | Column::CriticScore | Column::Runtime | Column::ReleasedYear
        )
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Which known columns a dataset actually carries.
///
/// Filters ask the schema before touching a field: a stage whose column is
/// absent passes its input through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: BTreeSet<Column>,
}

impl Schema {
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    /// Schema with every known column present
    pub fn full() -> Self {
        Self::new(Column::ALL)
    }

    /// Build a schema from CSV header names; unknown headers are ignored
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(headers.into_iter().filter_map(Column::from_header))
    }

    pub fn has(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// First required column missing from this schema, if any
    pub fn missing_required(&self) -> Option<Column> {
        Column::REQUIRED.into_iter().find(|column| !self.has(*column))
    }

    /// Columns to print, in display order, limited to those present
    pub fn display_columns(&self) -> Vec<Column> {
        self.columns.iter().copied().collect()
    }
}

// =============================================================================
// Movie Records
// =============================================================================

/// One row of the dataset.
///
/// Every field is optional: empty or unparsable cells become `None` instead
/// of rejecting the row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieRecord {
    pub title: Option<String>,
    /// Raw genre list, e.g. "Action, Crime, Drama"
    pub genre: Option<String>,
    /// IMDB rating; the ranking key
    pub rating: Option<f64>,
    /// Metacritic score
    pub critic_score: Option<f64>,
    /// Minutes, normalized from text such as "142 min"
    pub runtime: Option<u32>,
    pub director: Option<String>,
    /// Release year exactly as written in the file (a few rows carry text
    /// here, so it is only interpreted numerically by `year()`)
    pub released_year: Option<String>,
}

impl MovieRecord {
    /// Release year as a number, `None` when the cell is not numeric
    pub fn year(&self) -> Option<f64> {
        self.released_year
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|year| year.is_finite())
    }

    /// Render a single column for display; `None` when the cell is empty
    pub fn display_value(&self, column: Column) -> Option<String> {
        match column {
            Column::Title => self.title.clone(),
            Column::Genre => self.genre.clone(),
            Column::Rating => self.rating.map(|rating| format!("{:.1}", rating)),
            Column::CriticScore => self.critic_score.map(|score| format!("{:.0}", score)),
            Column::Runtime => self.runtime.map(|minutes| minutes.to_string()),
            Column::Director => self.director.clone(),
            Column::ReleasedYear => self.released_year.clone(),
        }
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// The loaded, read-only table of movies.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub(crate) schema: Schema,
    pub(crate) movies: Vec<MovieRecord>,
}

impl Dataset {
    /// Assemble a dataset from already-parsed parts
    pub fn new(schema: Schema, movies: Vec<MovieRecord>) -> Self {
        Self { schema, movies }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// All movies in file order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
