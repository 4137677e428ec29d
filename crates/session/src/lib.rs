//! Session crate for the ReelPicks movie picker.
//!
//! This crate ties the dataset and the filter pipeline to a user: it asks
//! the questions, runs the pipeline and prints the picks.

pub mod display;
pub mod preferences;
pub mod prompt;
pub mod session;

pub use preferences::Preferences;
pub use prompt::{InputProvider, ScriptedInput, StdinInput};
pub use session::{RecommendationSession, Recommendations};
