//! Integration tests for the pipeline.
//!
//! These tests verify that the filters and top-N selection work together
//! on a dataset parsed the same way the binary parses it.

use data_loader::{Dataset, MovieRecord};
use pipeline::filters::*;
use pipeline::{DEFAULT_TOP_N, FilterPipeline, top_n};

const MOVIES_CSV: &str = "\
Series_Title,Released_Year,Runtime,Genre,IMDB_Rating,Meta_score,Director
The Long Drama,1994,142 min,Drama,9.0,80,Frank Darabont
The Short Drama,1999,110 min,Drama,8.5,77,Someone Else
Old Timer,1995,100 min,\"Comedy, Drama\",8.0,,Billy Wilder
New Wave,2010,130 min,\"Action, Sci-Fi\",8.8,74,Christopher Nolan
Quiet Place,2018,90 min,\"Drama, Horror\",7.5,82,John Krasinski
";

fn load() -> Dataset {
    Dataset::from_reader(MOVIES_CSV.as_bytes()).unwrap()
}

fn run(dataset: &Dataset, genres: &[&str], max_runtime: &str, modern_only: bool) -> Vec<MovieRecord> {
    let genres: Vec<String> = genres.iter().map(|g| g.to_string()).collect();
    let pipeline = FilterPipeline::new()
        .add_filter(GenreFilter::new(&genres))
        .add_filter(RuntimeFilter::from_input(max_runtime))
        .add_filter(ReleaseYearFilter::new(modern_only));

    let filtered = pipeline
        .apply(dataset.movies().to_vec(), dataset.schema())
        .unwrap();
    top_n(filtered, DEFAULT_TOP_N)
}

fn titles(movies: &[MovieRecord]) -> Vec<&str> {
    movies.iter().filter_map(|m| m.title.as_deref()).collect()
}

#[test]
fn test_runtime_cap_beats_rating() {
    let dataset = load();
    let picks = run(&dataset, &["Drama"], "120", false);

    // The 9.0 film runs 142 minutes and is cut by the cap
    assert_eq!(titles(&picks), vec!["The Short Drama", "Old Timer", "Quiet Place"]);
}

#[test]
fn test_no_genres_bad_runtime_modern_only() {
    let dataset = load();
    let picks = run(&dataset, &[], "abc", true);

    assert_eq!(titles(&picks), vec!["New Wave", "Quiet Place"]);
}

#[test]
fn test_everything_filtered_out() {
    let dataset = load();
    let picks = run(&dataset, &["Western"], "200", false);

    assert!(picks.is_empty());
}

#[test]
fn test_top_n_bounded_by_survivors() {
    let dataset = load();
    let picks = run(&dataset, &["sci-fi"], "", false);

    assert_eq!(picks.len(), 1);
    assert!(picks.len() <= DEFAULT_TOP_N);
}

#[test]
fn test_identity_inputs_rank_whole_dataset() {
    let dataset = load();
    let picks = run(&dataset, &[], "not a number", false);

    assert_eq!(titles(&picks), vec!["The Long Drama", "New Wave", "The Short Drama"]);
    for pair in picks.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
    }
}

#[test]
fn test_repeated_runs_are_deterministic() {
    let first = run(&load(), &["Drama", "Action"], "140", true);
    let second = run(&load(), &["Drama", "Action"], "140", true);

    assert_eq!(first, second);
    assert_eq!(titles(&first), vec!["New Wave", "Quiet Place"]);
}
