use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Facet filter: either everything, or records whose facet equals the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

/// A record that can be matched by free-text query and a single facet.
pub trait Searchable {
    type Facet: PartialEq;

    /// Fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn facet(&self) -> &Self::Facet;
}

/// Case-insensitive substring test over the record's search fields.
///
/// An empty query matches every record.
#[must_use]
pub fn matches_query<R: Searchable + ?Sized>(record: &R, query: &str) -> bool {
    let needle = query.to_lowercase();
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filters records by query and facet, preserving source order.
#[must_use]
pub fn filter_records<'a, R: Searchable>(
    records: &'a [R],
    query: &str,
    filter: &Filter<R::Facet>,
) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| filter.admits(record.facet()) && matches_query(*record, query))
        .collect()
}
