use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

pub(crate) const LISTING_STATUS: &str = "listing_status";

/// A single normalized request parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// The accumulated request parameters for one search session.
///
/// Always contains the `listing_status` entry it was seeded with; no later
/// insert can replace or remove that entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    pub(crate) fn seeded(listing_status: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(LISTING_STATUS.to_owned(), ParamValue::from(listing_status));
        Self { entries }
    }

    /// Merges one entry. The seeded `listing_status` key is never touched.
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        if key == LISTING_STATUS {
            return;
        }
        self.entries.insert(key, value.into());
    }

    /// Drops every caller-set entry, keeping only the seeded status.
    pub(crate) fn reset(&mut self) {
        self.entries.retain(|key, _| key == LISTING_STATUS);
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Key/value pairs in wire form, ordered by key.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect()
    }
}

/// Inclusive bounds accepted by the `price` and `beds` setters: either a
/// single value or a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Single(i64),
    Range(i64, i64),
}

impl From<i64> for Span {
    fn from(value: i64) -> Self {
        Self::Single(value)
    }
}

impl From<RangeInclusive<i64>> for Span {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self::Range(*range.start(), *range.end())
    }
}

/// Sort field for returned listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    Age,
    Price,
}

impl OrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Price => "price",
        }
    }
}

impl FromStr for OrderBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "age" => Ok(Self::Age),
            "price" => Ok(Self::Price),
            other => Err(Error::invalid(
                "order_by",
                format!("unrecognized sort field `{other}`"),
            )),
        }
    }
}

/// Sort direction for returned listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    Ascending,
    Descending,
}

impl Ordering {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl FromStr for Ordering {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            other => Err(Error::invalid(
                "ordering",
                format!("unrecognized sort direction `{other}`"),
            )),
        }
    }
}

/// Furnishing state of a rental property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Furnished {
    Furnished,
    Unfurnished,
    PartFurnished,
}

impl Furnished {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Furnished => "furnished",
            Self::Unfurnished => "unfurnished",
            Self::PartFurnished => "part-furnished",
        }
    }
}

impl FromStr for Furnished {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "furnished" => Ok(Self::Furnished),
            "unfurnished" => Ok(Self::Unfurnished),
            "part-furnished" => Ok(Self::PartFurnished),
            other => Err(Error::invalid(
                "furnished",
                format!("unrecognized furnishing state `{other}`"),
            )),
        }
    }
}

/// Property type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Houses,
    Flats,
}

impl PropertyType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Houses => "houses",
            Self::Flats => "flats",
        }
    }
}

impl FromStr for PropertyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "houses" => Ok(Self::Houses),
            "flats" => Ok(Self::Flats),
            other => Err(Error::invalid(
                "property_type",
                format!("unrecognized property type `{other}`"),
            )),
        }
    }
}
