//! Record parser for the movie dataset.
//!
//! One record per line, 16 comma-delimited logical fields:
//!
//! `poster,title,year,certificate,runtime,genres,rating,overview,score,director,star1..star4,votes,gross`
//!
//! Commas inside double-quoted spans are field content, not delimiters, so
//! the splitter scans the line tracking quote state instead of splitting
//! blindly. Parsing is pure; the same line always yields the same result.

use std::str::FromStr;

use crate::error::RecordError;
use crate::types::{CAST_SLOTS, Movie};

/// Logical fields per record. Field 0 is the poster link, which the
/// catalog has no use for.
pub const FIELD_COUNT: usize = 16;

/// Parse one raw line into a [`Movie`].
///
/// Fails if the line splits into fewer than [`FIELD_COUNT`] fields, a
/// quoted span is left open, or a required numeric field is unparseable.
pub fn parse_record(line: &str) -> Result<Movie, RecordError> {
    let fields = split_fields(line)?;
    if fields.len() < FIELD_COUNT {
        return Err(RecordError::FieldCountMismatch {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    Ok(Movie {
        title: strip_quotes(&fields[1]).to_string(),
        released_year: parse_num(&fields[2], "released year")?,
        certificate: fields[3].clone(),
        runtime_minutes: parse_runtime(&fields[4])?,
        genres: split_genres(&fields[5]),
        rating: parse_num(&fields[6], "rating")?,
        overview: strip_quotes(&fields[7]).to_string(),
        meta_score: score_or_default(&fields[8])?,
        director: fields[9].clone(),
        cast: cast_slots(&fields),
        vote_count: parse_num(&fields[14], "votes")?,
        gross_revenue: gross_or_default(&fields[15])?,
    })
}

/// Split one record into logical fields.
///
/// A `"` toggles quote state (and stays part of the field); commas split
/// only outside quotes. A sentinel space is appended before scanning so a
/// record ending in a bare comma still yields its trailing empty field
/// (it then reads as `" "`, which the gross rule treats as absent).
fn split_fields(line: &str) -> Result<Vec<String>, RecordError> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars().chain(std::iter::once(' ')) {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    if in_quotes {
        return Err(RecordError::UnterminatedQuote);
    }
    fields.push(current);

    Ok(fields)
}

/// The four cast fields, verbatim and in slot order.
fn cast_slots(fields: &[String]) -> [String; CAST_SLOTS] {
    [
        fields[10].clone(),
        fields[11].clone(),
        fields[12].clone(),
        fields[13].clone(),
    ]
}

fn parse_num<T: FromStr>(value: &str, field: &'static str) -> Result<T, RecordError> {
    value.parse().map_err(|_| RecordError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Drop surrounding quote characters and whitespace, keeping interior
/// quotes and commas intact. Used for the title and overview fields.
fn strip_quotes(field: &str) -> &str {
    field.trim().trim_matches('"').trim()
}

/// Strip the `" min"` unit suffix before parsing the runtime.
fn parse_runtime(field: &str) -> Result<u32, RecordError> {
    let cleaned = field.replace(" min", "");
    parse_num(cleaned.trim(), "runtime")
}

/// Genres are a quoted comma-space separated list: `"Drama, Crime"`.
fn split_genres(field: &str) -> Vec<String> {
    let cleaned = field.replace('"', "");
    cleaned.trim().split(", ").map(str::to_string).collect()
}

/// Named default rule: an empty meta score field means "no score" and
/// maps to the 0 sentinel.
fn score_or_default(field: &str) -> Result<u32, RecordError> {
    if field.is_empty() {
        Ok(0)
    } else {
        parse_num(field, "meta score")
    }
}

/// Named default rule: a blank or empty gross field means "no data" and
/// maps to the 0 sentinel. Present values carry quotes and thousands
/// separators (`"28,341,469"`), which are stripped before parsing.
fn gross_or_default(field: &str) -> Result<u64, RecordError> {
    if field == " " || field.is_empty() {
        return Ok(0);
    }
    let cleaned = field.replace(',', "").replace('"', "");
    parse_num(cleaned.trim(), "gross")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "https://img/alpha.jpg,\"Alpha, the First\",1994,A,142 min,\"Drama, Crime\",9.3,\"Two imprisoned men, bonded over the years.\",80,Frank Darabont,Tim Robbins,Morgan Freeman,Bob Gunton,William Sadler,2343110,\"28,341,469\"";

    #[test]
    fn quoted_commas_are_field_content() {
        let fields = split_fields(LINE).unwrap();
        assert_eq!(fields.len(), FIELD_COUNT);
        assert_eq!(fields[1], "\"Alpha, the First\"");
        assert_eq!(fields[5], "\"Drama, Crime\"");
        assert_eq!(fields[15], "\"28,341,469\" ");
    }

    #[test]
    fn trailing_empty_field_is_preserved() {
        // A record with no gross ends in a bare comma
        let fields = split_fields("a,b,").unwrap();
        assert_eq!(fields, vec!["a", "b", " "]);
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        assert_eq!(
            split_fields("a,\"open quote,b"),
            Err(RecordError::UnterminatedQuote)
        );
    }

    #[test]
    fn full_record_parses() {
        let movie = parse_record(LINE).unwrap();
        assert_eq!(movie.title, "Alpha, the First");
        assert_eq!(movie.released_year, 1994);
        assert_eq!(movie.certificate, "A");
        assert_eq!(movie.runtime_minutes, 142);
        assert_eq!(movie.genres, vec!["Drama", "Crime"]);
        assert_eq!(movie.rating, 9.3);
        assert_eq!(movie.overview, "Two imprisoned men, bonded over the years.");
        assert_eq!(movie.meta_score, 80);
        assert_eq!(movie.director, "Frank Darabont");
        assert_eq!(movie.cast[0], "Tim Robbins");
        assert_eq!(movie.cast[3], "William Sadler");
        assert_eq!(movie.vote_count, 2343110);
        assert_eq!(movie.gross_revenue, 28341469);
    }

    #[test]
    fn missing_score_and_gross_default_to_zero() {
        let line = "poster,Beta,2001,UA,100 min,Drama,7.5,Plot.,,Someone,A,B,C,D,500,";
        let movie = parse_record(line).unwrap();
        assert_eq!(movie.meta_score, 0);
        assert_eq!(movie.gross_revenue, 0);
    }

    #[test]
    fn short_record_is_rejected() {
        let err = parse_record("poster,Beta,2001,UA,100 min").unwrap_err();
        assert_eq!(
            err,
            RecordError::FieldCountMismatch {
                expected: FIELD_COUNT,
                found: 5
            }
        );
    }

    #[test]
    fn bad_year_propagates() {
        let line = "poster,Beta,20o1,UA,100 min,Drama,7.5,Plot.,55,Someone,A,B,C,D,500,";
        let err = parse_record(line).unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidNumber {
                field: "released year",
                value: "20o1".to_string()
            }
        );
    }

    #[test]
    fn empty_cast_slots_are_kept() {
        let line = "poster,Beta,2001,UA,100 min,Drama,7.5,Plot.,55,Someone,A,,C,,500,";
        let movie = parse_record(line).unwrap();
        assert_eq!(movie.cast, ["A", "", "C", ""].map(String::from));
    }

    #[test]
    fn score_default_rule() {
        assert_eq!(score_or_default(""), Ok(0));
        assert_eq!(score_or_default("76"), Ok(76));
        assert!(score_or_default("n/a").is_err());
    }

    #[test]
    fn gross_default_rule() {
        assert_eq!(gross_or_default(" "), Ok(0));
        assert_eq!(gross_or_default(""), Ok(0));
        assert_eq!(gross_or_default("\"4,360,000\" "), Ok(4360000));
        assert_eq!(gross_or_default("12000"), Ok(12000));
    }
}
