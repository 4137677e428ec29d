//! Dataset loading.
//!
//! Opens the configured file, hands it to the CSV parser and wraps the
//! result in a `Dataset`. This runs once at startup; any failure here is
//! fatal to the session.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::Dataset;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

impl Dataset {
    /// Load the movie dataset from a CSV file
    ///
    /// Fails with `FileNotFound` when nothing exists at `path`, and with
    /// the parser's errors when the content is unusable.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DataLoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        tracing::info!("Loading movie dataset from {}", path.display());
        let file = File::open(path)?;
        let dataset = Self::from_reader(BufReader::new(file))?;

        tracing::info!(
            "Loaded {} movies ({} known columns)",
            dataset.len(),
            dataset.schema().display_columns().len()
        );
        Ok(dataset)
    }

    /// Parse a dataset from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let (schema, movies) = parser::parse_movies(reader)?;
        Ok(Dataset::new(schema, movies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Series_Title,Released_Year,Runtime,Genre,IMDB_Rating,Meta_score,Director
The Godfather,1972,175 min,\"Crime, Drama\",9.2,100,Francis Ford Coppola
Inception,2010,148 min,\"Action, Adventure, Sci-Fi\",8.8,74,Christopher Nolan
";

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = Dataset::load_from_file(file.path()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.movies()[1].title.as_deref(), Some("Inception"));
        assert_eq!(dataset.movies()[0].runtime, Some(175));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        let err = Dataset::load_from_file(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Dataset::load_from_file(dir.path()).is_err());
    }

    #[test]
    fn test_loading_is_deterministic() {
        let first = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        let second = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(first.schema(), second.schema());
        assert_eq!(first.movies(), second.movies());
    }
}
