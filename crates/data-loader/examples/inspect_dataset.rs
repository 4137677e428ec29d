use anyhow::{Context, Result};
use data_loader::{Column, Dataset};
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    let path = Path::new("data/imdb_top_1000.csv");

    println!("Loading movie dataset...\n");

    let start = Instant::now();
    let dataset = Dataset::load_from_file(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", dataset.len());

    for column in Column::ALL {
        let present = if dataset.schema().has(column) { "yes" } else { "no" };
        println!("{:<14} {}", column.header(), present);
    }

    let movies = dataset.movies();
    let missing_runtime = movies.iter().filter(|m| m.runtime.is_none()).count();
    let missing_rating = movies.iter().filter(|m| m.rating.is_none()).count();
    let non_numeric_year = movies.iter().filter(|m| m.year().is_none()).count();

    println!("\nRows without runtime: {}", missing_runtime);
    println!("Rows without rating: {}", missing_rating);
    println!("Rows with non-numeric year: {}", non_numeric_year);

    Ok(())
}
