//! The in-memory catalog and its six query operations.
//!
//! The catalog owns every parsed [`Movie`] in input order and never
//! mutates it afterwards. Queries that need a different order sort their
//! own working copy, so any two queries return the same results no matter
//! which ran first.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::Movie;

/// The full dataset plus its analytical queries.
#[derive(Debug, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Load a catalog from a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!(movies = catalog.len(), path = %path.display(), "catalog loaded");
        Ok(catalog)
    }

    /// Build a catalog from any buffered line source.
    ///
    /// The first line is the header and is discarded. Ingestion aborts on
    /// the first malformed record, reporting its line number and raw
    /// content.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut movies = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if idx == 0 || line.trim().is_empty() {
                continue;
            }
            let movie =
                parser::parse_record(&line).map_err(|source| CatalogError::MalformedRecord {
                    line: idx + 1,
                    raw: line.clone(),
                    source,
                })?;
            movies.push(movie);
        }
        Ok(Self { movies })
    }

    /// Build a catalog from already-constructed movies.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// All movies in input order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Movie count per release year, newest year first.
    pub fn movie_count_by_year(&self) -> Vec<(u16, usize)> {
        let mut counts: HashMap<u16, usize> = HashMap::new();
        for movie in &self.movies {
            *counts.entry(movie.released_year).or_default() += 1;
        }
        let mut entries: Vec<_> = counts.into_iter().collect();
        entries.sort_by(year_descending);
        entries
    }

    /// Movie count per genre, highest count first, ties by genre name.
    ///
    /// A movie with N genres contributes to N counters; duplicate genre
    /// entries within one movie each count.
    pub fn movie_count_by_genre(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for movie in &self.movies {
            for genre in &movie.genres {
                *counts.entry(genre.clone()).or_default() += 1;
            }
        }
        let mut entries: Vec<_> = counts.into_iter().collect();
        entries.sort_by(count_desc_then_name);
        entries
    }

    /// Number of movies each unordered pair of cast members shares.
    ///
    /// Keys hold the two names sorted lexicographically, smaller first,
    /// so the key is independent of slot order. Every slot pair counts
    /// once per movie; a name listed in two slots pairs with itself.
    pub fn co_star_counts(&self) -> HashMap<(String, String), usize> {
        let mut counts: HashMap<(String, String), usize> = HashMap::new();
        for movie in &self.movies {
            for (a, b) in unordered_pairs(&movie.cast) {
                let key = if a <= b {
                    (a.clone(), b.clone())
                } else {
                    (b.clone(), a.clone())
                };
                *counts.entry(key).or_default() += 1;
            }
        }
        counts
    }

    /// Titles of the `k` top movies by the chosen metric.
    ///
    /// `by` is `"runtime"` (runtime minutes) or `"overview"` (overview
    /// length in characters); higher ranks first, ties by title.
    pub fn top_movies(&self, k: usize, by: &str) -> Result<Vec<String>> {
        let comparator = match by {
            "runtime" => runtime_desc_then_title,
            "overview" => overview_len_desc_then_title,
            other => {
                return Err(CatalogError::InvalidArgument(format!(
                    "unknown movie metric {other:?} (expected \"runtime\" or \"overview\")"
                )));
            }
        };
        check_k(k, self.movies.len(), "movies")?;

        let mut ranked: Vec<&Movie> = self.movies.iter().collect();
        ranked.sort_by(comparator);
        Ok(ranked[..k].iter().map(|m| m.title.clone()).collect())
    }

    /// Names of the `k` cast members with the highest average metric.
    ///
    /// `by` is `"rating"` or `"gross"`. Movies whose metric is 0 (the
    /// "absent" sentinel) contribute nothing, so a name seen only in such
    /// movies never appears. Every cast slot of a contributing movie
    /// accumulates, repeats and empty slots included; ties break by name.
    pub fn top_stars(&self, k: usize, by: &str) -> Result<Vec<String>> {
        let metric: fn(&Movie) -> f64 = match by {
            "rating" => |m| f64::from(m.rating),
            "gross" => |m| m.gross_revenue as f64,
            other => {
                return Err(CatalogError::InvalidArgument(format!(
                    "unknown star metric {other:?} (expected \"rating\" or \"gross\")"
                )));
            }
        };

        let mut sums: HashMap<String, (f64, u32)> = HashMap::new();
        for movie in &self.movies {
            let value = metric(movie);
            if value == 0.0 {
                continue;
            }
            for name in &movie.cast {
                let entry = sums.entry(name.clone()).or_insert((0.0, 0));
                entry.0 += value;
                entry.1 += 1;
            }
        }
        check_k(k, sums.len(), "cast members")?;

        let mut averages: Vec<(String, f64)> = sums
            .into_iter()
            .map(|(name, (sum, count))| (name, sum / f64::from(count)))
            .collect();
        averages.sort_by(average_desc_then_name);
        Ok(averages.into_iter().take(k).map(|(name, _)| name).collect())
    }

    /// Titles of movies in `genre` with `rating >= min_rating` and
    /// `runtime <= max_runtime`, sorted ascending by title.
    ///
    /// Genre matching is exact membership in the movie's genre list, not
    /// a substring match.
    pub fn search_movies(&self, genre: &str, min_rating: f32, max_runtime: u32) -> Vec<String> {
        let mut titles: Vec<String> = self
            .movies
            .iter()
            .filter(|m| m.genres.iter().any(|g| g == genre))
            .filter(|m| m.rating >= min_rating)
            .filter(|m| m.runtime_minutes <= max_runtime)
            .map(|m| m.title.clone())
            .collect();
        titles.sort();
        titles
    }
}

/// All 2-combinations `(i, j)` with `i < j` of a sequence, in slot order.
fn unordered_pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| items[i + 1..].iter().map(move |b| (a, b)))
}

fn check_k(k: usize, available: usize, what: &str) -> Result<()> {
    if k > available {
        return Err(CatalogError::InvalidArgument(format!(
            "k = {k} exceeds the {available} available {what}"
        )));
    }
    Ok(())
}

// Tie-break comparators, one named function per query ordering.

fn year_descending(a: &(u16, usize), b: &(u16, usize)) -> Ordering {
    b.0.cmp(&a.0)
}

fn count_desc_then_name(a: &(String, usize), b: &(String, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

fn runtime_desc_then_title(a: &&Movie, b: &&Movie) -> Ordering {
    b.runtime_minutes
        .cmp(&a.runtime_minutes)
        .then_with(|| a.title.cmp(&b.title))
}

fn overview_len_desc_then_title(a: &&Movie, b: &&Movie) -> Ordering {
    let len_a = a.overview.chars().count();
    let len_b = b.overview.chars().count();
    len_b.cmp(&len_a).then_with(|| a.title.cmp(&b.title))
}

fn average_desc_then_name(a: &(String, f64), b: &(String, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}
