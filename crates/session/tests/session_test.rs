//! End-to-end session tests.
//!
//! These drive a whole session through scripted answers against the CSV
//! fixture and check both the returned picks and the printed transcript.

use data_loader::{Dataset, MovieRecord};
use session::display::NO_MATCHES_MESSAGE;
use session::preferences::{GENRE_QUESTION, MODERN_QUESTION, RUNTIME_QUESTION};
use session::session::{FAREWELL, GREETING};
use session::{RecommendationSession, ScriptedInput};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_movies.csv")
}

fn load() -> Dataset {
    Dataset::load_from_file(&fixture_path()).unwrap()
}

fn run(dataset: &Dataset, answers: [&str; 3]) -> (Vec<MovieRecord>, String, ScriptedInput) {
    let session = RecommendationSession::new(dataset, 3);
    let mut input = ScriptedInput::new(answers);
    let mut out = Vec::new();

    let recommendations = session.run(&mut input, &mut out).unwrap();
    (recommendations.picks, String::from_utf8(out).unwrap(), input)
}

fn titles(movies: &[MovieRecord]) -> Vec<&str> {
    movies.iter().filter_map(|m| m.title.as_deref()).collect()
}

#[test]
fn test_fixture_loads_every_row() {
    let dataset = load();
    assert_eq!(dataset.len(), 9);

    let apollo = &dataset.movies()[5];
    assert_eq!(apollo.released_year.as_deref(), Some("PG"));
    assert_eq!(apollo.year(), None);
    assert_eq!(dataset.movies()[8].runtime, None);
}

#[test]
fn test_session_asks_three_questions_in_order() {
    let dataset = load();
    let (_, _, input) = run(&dataset, ["Drama", "120", "n"]);

    assert_eq!(
        input.questions(),
        &[
            GENRE_QUESTION.to_string(),
            RUNTIME_QUESTION.to_string(),
            MODERN_QUESTION.to_string()
        ]
    );
}

#[test]
fn test_drama_under_two_hours() {
    let dataset = load();
    let (picks, transcript, _) = run(&dataset, ["Drama", "120", "n"]);

    assert_eq!(titles(&picks), vec!["12 Angry Men", "Whiplash"]);
    assert!(transcript.starts_with(GREETING));
    assert!(transcript.contains("12 Angry Men"));
    assert!(transcript.contains("Sidney Lumet"));
    assert!(!transcript.contains("Shawshank"));
    assert!(transcript.trim_end().ends_with(FAREWELL.trim_start()));
}

#[test]
fn test_modern_only_with_unparsable_runtime() {
    let dataset = load();
    let (picks, _, _) = run(&dataset, ["", "abc", "y"]);

    // Apollo 13's year is not numeric, so it is dropped by the modern filter
    assert_eq!(titles(&picks), vec!["The Dark Knight", "Inception", "Spirited Away"]);
}

#[test]
fn test_multiple_genres_are_or_combined() {
    let dataset = load();
    let (picks, _, _) = run(&dataset, ["romance, sci-fi", "", "n"]);

    assert_eq!(titles(&picks), vec!["Inception", "Amélie"]);
}

#[test]
fn test_no_matches_is_not_an_error() {
    let dataset = load();
    let (picks, transcript, _) = run(&dataset, ["Western", "300", "n"]);

    assert!(picks.is_empty());
    assert!(transcript.contains(NO_MATCHES_MESSAGE));
    assert!(transcript.contains("Hope you enjoy your movie!"));
}

#[test]
fn test_anything_but_y_disables_modern_filter() {
    let dataset = load();
    let (with_yes, _, _) = run(&dataset, ["Drama", "", "yes"]);
    let (with_n, _, _) = run(&dataset, ["Drama", "", "n"]);

    assert_eq!(with_yes, with_n);
    assert_eq!(titles(&with_n)[0], "The Shawshank Redemption");
}

#[test]
fn test_same_inputs_same_results_across_loads() {
    let (first, first_out, _) = run(&load(), ["Adventure", "150", "y"]);
    let (second, second_out, _) = run(&load(), ["Adventure", "150", "y"]);

    assert_eq!(first, second);
    assert_eq!(first_out, second_out);
    assert_eq!(titles(&first), vec!["Inception", "Spirited Away"]);
}
