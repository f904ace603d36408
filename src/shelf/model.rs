use crate::error::ShelfError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Availability of a single book.
///
/// Closed set on purpose: the persisted form only ever contains these two
/// strings, and anything else is rejected when the record is parsed rather
/// than deep inside the catalog logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookStatus {
    #[default]
    Available,
    CheckedOut,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "available"),
            BookStatus::CheckedOut => write!(f, "checked-out"),
        }
    }
}

impl FromStr for BookStatus {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(BookStatus::Available),
            "checked-out" | "checked_out" => Ok(BookStatus::CheckedOut),
            other => Err(ShelfError::UnknownStatus(other.to_string())),
        }
    }
}

/// The fields a catalog search can match on.
///
/// An explicit enum instead of a free field-name string: the set is known at
/// compile time and each variant maps to exactly one accessor. Unknown names
/// are a user-input error the CLI reports; they cannot reach the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

impl FromStr for SearchField {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "year" => Ok(SearchField::Year),
            other => Err(ShelfError::UnknownField(other.to_string())),
        }
    }
}

/// One catalog entry. The serde form is the on-disk record: a flat object
/// with keys `id, title, author, year, status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    // Older catalog files stored the year as a quoted string; accept both
    // and normalize to a number.
    #[serde(deserialize_with = "year_lenient")]
    pub year: i32,
    pub status: BookStatus,
}

impl Book {
    /// Create a new book with a fresh id and the default `available` status.
    /// Title, author and year are taken as given; there is nothing to
    /// validate on them.
    pub fn new(title: String, author: String, year: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author,
            year,
            status: BookStatus::default(),
        }
    }

    /// The stringified value of `field`, as used for search comparison.
    pub fn field_value(&self, field: SearchField) -> String {
        match field {
            SearchField::Title => self.title.clone(),
            SearchField::Author => self.author.clone(),
            SearchField::Year => self.year.to_string(),
        }
    }
}

fn year_lenient<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    struct YearVisitor;

    impl de::Visitor<'_> for YearVisitor {
        type Value = i32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a publication year as a number or numeric string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::custom(format!("year out of range: {v}")))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::custom(format!("year out of range: {v}")))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
            v.trim()
                .parse::<i32>()
                .map_err(|_| E::custom(format!("year is not numeric: {v:?}")))
        }
    }

    deserializer.deserialize_any(YearVisitor)
}
