//! # Query Engine
//!
//! Pure functions that turn a record collection and a [`FilterState`] into the
//! ordered result list. Nothing here allocates records or fails: results borrow
//! from the input slice and every well-typed input produces an answer.
//!
//! ## Filtering
//!
//! A record is kept when every active clause matches (AND across clauses, OR
//! inside a clause):
//!
//! - **text**: case-insensitive substring of title, author, career, any keyword
//!   or the abstract
//! - **career**: record career equals the label of a selected career
//! - **year range**: each bound independently, inclusive
//! - **modality**: record type equals the label of a selected modality; only
//!   when the selection is a non-empty strict subset of all modalities
//! - **area / subarea**: record area (subarea) equals the selected label
//! - **tutor**: record has a tutor containing the name, case-insensitively
//!
//! Selections are codes and records carry labels; the translation happens in the
//! clause functions below and nowhere else.
//!
//! ## Sorting
//!
//! Stable, see [`SortKey`]. Records whose year does not parse sort after every
//! record with a valid year, and never satisfy an active year bound.

use crate::filters::FilterState;
use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Number of "related" records shown next to the results.
pub const RELATED_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Filter order while searching, newest first otherwise.
    #[default]
    Relevance,
    DateDesc,
    DateAsc,
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Relevance,
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::Title,
    ];

    pub fn code(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::DateDesc => "date_desc",
            SortKey::DateAsc => "date_asc",
            SortKey::Title => "title",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "Most relevant",
            SortKey::DateDesc => "Newest",
            SortKey::DateAsc => "Oldest",
            SortKey::Title => "By title",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort '{0}' (expected relevance, date_desc, date_asc or title)")]
pub struct UnknownSort(pub String);

impl FromStr for SortKey {
    type Err = UnknownSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or_else(|| UnknownSort(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Filters and sorts. Equivalent to `sort_records(filter_records(..), ..)`.
pub fn query<'a>(records: &'a [Record], filters: &FilterState, sort: SortKey) -> Vec<&'a Record> {
    sort_records(filter_records(records, filters), filters, sort)
}

/// Records passing every active clause, in input order.
pub fn filter_records<'a>(records: &'a [Record], filters: &FilterState) -> Vec<&'a Record> {
    let matched: Vec<&Record> = records.iter().filter(|r| matches(r, filters)).collect();
    debug!(
        total = records.len(),
        matched = matched.len(),
        "filtered records"
    );
    matched
}

/// The low-cost recommendation list: the head of the unsorted filter result.
pub fn related<'a>(filtered: &[&'a Record]) -> Vec<&'a Record> {
    filtered.iter().take(RELATED_COUNT).copied().collect()
}

pub fn matches(record: &Record, filters: &FilterState) -> bool {
    matches_text(record, &filters.search_term)
        && matches_career(record, filters)
        && matches_years(record, filters.year_from, filters.year_to)
        && matches_modality(record, filters)
        && matches_area(record, filters)
        && matches_tutor(record, &filters.tutor_name)
}

fn matches_text(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&term);

    contains(&record.title)
        || contains(&record.author)
        || contains(&record.career)
        || record
            .keywords
            .as_ref()
            .is_some_and(|kws| kws.iter().any(|k| contains(k)))
        || record.summary.as_deref().is_some_and(contains)
}

fn matches_career(record: &Record, filters: &FilterState) -> bool {
    filters.selected_careers.is_empty()
        || filters
            .selected_careers
            .iter()
            .any(|career| record.career == career.label())
}

fn matches_years(record: &Record, from: Option<u32>, to: Option<u32>) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    let Some(year) = record.year_value() else {
        return false;
    };
    from.is_none_or(|from| year >= from) && to.is_none_or(|to| year <= to)
}

fn matches_modality(record: &Record, filters: &FilterState) -> bool {
    !filters.modality_filter_active()
        || filters
            .selected_modalities
            .iter()
            .any(|modality| record.kind == modality.label())
}

fn matches_area(record: &Record, filters: &FilterState) -> bool {
    let area_ok = filters
        .selected_area()
        .is_none_or(|area| record.area.as_deref() == Some(area.label()));
    let subarea_ok = filters
        .selected_subarea()
        .is_none_or(|sub| record.subarea.as_deref() == Some(sub.label()));
    area_ok && subarea_ok
}

fn matches_tutor(record: &Record, name: &str) -> bool {
    if name.is_empty() {
        return true;
    }
    let name = name.to_lowercase();
    record
        .tutor
        .as_deref()
        .is_some_and(|tutor| tutor.to_lowercase().contains(&name))
}

/// Orders an already filtered list. The sort is stable: ties keep input order.
pub fn sort_records<'a>(
    mut records: Vec<&'a Record>,
    filters: &FilterState,
    sort: SortKey,
) -> Vec<&'a Record> {
    match sort {
        SortKey::DateDesc => records.sort_by(|a, b| newest_first(a, b)),
        SortKey::DateAsc => records.sort_by(|a, b| oldest_first(a, b)),
        SortKey::Title => records.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortKey::Relevance => {
            // No scoring: while searching, filter order stands in for relevance
            if filters.search_term.is_empty() {
                records.sort_by(|a, b| newest_first(a, b));
            }
        }
    }
    records
}

fn newest_first(a: &Record, b: &Record) -> Ordering {
    match (a.year_value(), b.year_value()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (x, y) => missing_last(x, y),
    }
}

fn oldest_first(a: &Record, b: &Record) -> Ordering {
    match (a.year_value(), b.year_value()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (x, y) => missing_last(x, y),
    }
}

fn missing_last(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Human ordering for titles: punctuation and spaces sort before digits,
/// digits before letters, accents and case are ignored. Ties are broken with
/// accented letters after plain ones, then lowercase before uppercase.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn collation_key(s: &str) -> Vec<(u8, char)> {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(strip_accent)
        .map(|c| (char_class(c), c))
        .collect()
}

fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

fn strip_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
