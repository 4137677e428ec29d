//! Rendering recommendations as a plain text table.

use colored::Colorize;
use data_loader::{Column, MovieRecord, Schema};
use std::io::Write;

/// Shown in place of an empty cell
pub const MISSING_CELL: &str = "NaN";

pub const NO_MATCHES_MESSAGE: &str = "No matches found. Try different filters!";
pub const TOP_PICKS_HEADING: &str = "Top picks sorted by rating:";

/// Lay out movies as aligned table lines, header first.
///
/// Every column is padded to its widest cell. Numeric columns are
/// right-aligned, text columns left-aligned.
pub fn format_table(movies: &[MovieRecord], columns: &[Column]) -> Vec<String> {
    let rows: Vec<Vec<String>> = movies
        .iter()
        .map(|movie| {
            columns
                .iter()
                .map(|&column| {
                    movie
                        .display_value(column)
                        .unwrap_or_else(|| MISSING_CELL.to_string())
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(column.header().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(columns)
            .zip(&widths)
            .map(|((cell, column), &width)| {
                if column.is_numeric() {
                    format!("{:>width$}", cell, width = width)
                } else {
                    format!("{:<width$}", cell, width = width)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header = columns.iter().map(|c| c.header().to_string()).collect();
    std::iter::once(render(header))
        .chain(rows.into_iter().map(render))
        .collect()
}

/// Print the final picks, or the no-matches guidance when no movie passed
/// the filters.
///
/// `matched` is the number of movies that survived filtering, before the
/// top-N cut; `picks` is what is left after it.
pub fn write_picks<W: Write>(
    out: &mut W,
    matched: usize,
    picks: &[MovieRecord],
    schema: &Schema,
) -> std::io::Result<()> {
    if matched == 0 {
        writeln!(out, "\n{}", NO_MATCHES_MESSAGE)?;
        return Ok(());
    }

    writeln!(out, "\n{}", TOP_PICKS_HEADING.bold())?;
    let mut lines = format_table(picks, &schema.display_columns()).into_iter();
    if let Some(header) = lines.next() {
        writeln!(out, "{}", header.bold())?;
    }
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, rating: f64, runtime: Option<u32>) -> MovieRecord {
        MovieRecord {
            title: Some(title.to_string()),
            rating: Some(rating),
            runtime,
            ..Default::default()
        }
    }

    #[test]
    fn test_format_table_alignment() {
        let movies = vec![movie("Heat", 8.3, Some(170)), movie("Up", 8.2, None)];
        let columns = [Column::Title, Column::Rating, Column::Runtime];

        let lines = format_table(&movies, &columns);

        assert_eq!(
            lines,
            vec![
                "Series_Title  IMDB_Rating  Runtime",
                "Heat                  8.3      170",
                "Up                    8.2      NaN",
            ]
        );
    }

    #[test]
    fn test_format_table_only_header_when_empty() {
        let lines = format_table(&[], &[Column::Genre, Column::Rating]);
        assert_eq!(lines, vec!["Genre  IMDB_Rating"]);
    }

    #[test]
    fn test_write_picks_empty() {
        let mut out = Vec::new();
        write_picks(&mut out, 0, &[], &Schema::full()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("\n{}\n", NO_MATCHES_MESSAGE));
    }

    #[test]
    fn test_write_picks_limits_to_schema_columns() {
        let mut out = Vec::new();
        let schema = Schema::new([Column::Title, Column::Rating]);
        write_picks(&mut out, 1, &[movie("Heat", 8.3, Some(170))], &schema).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&format!("{:<12}  {:>11}", "Heat", "8.3")));
        assert!(!text.contains("170"));
    }

    #[test]
    fn test_write_picks_matches_cut_to_nothing() {
        let mut out = Vec::new();
        write_picks(&mut out, 2, &[], &Schema::full()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(NO_MATCHES_MESSAGE));
        assert!(text.contains(TOP_PICKS_HEADING));
    }
}
