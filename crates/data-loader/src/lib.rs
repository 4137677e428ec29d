//! # Data Loader Crate
//!
//! Loads the IMDB top-movies CSV into an immutable in-memory `Dataset`.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Column, Schema, Dataset)
//! - **parser**: Parse CSV rows into records, normalize runtimes
//! - **dataset**: Load a `Dataset` from a file or reader
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{Column, Dataset};
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_file(Path::new("data/imdb_top_1000.csv"))?;
//!
//! if dataset.schema().has(Column::Runtime) {
//!     println!("{} movies with runtimes", dataset.len());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod dataset;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::parse_runtime;
pub use types::{Column, Dataset, MovieRecord, Schema};
