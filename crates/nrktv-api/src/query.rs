//! Query string serialization.
//!
//! Options are flat, ordered `key -> scalar` mappings. Only truthy values
//! reach the query string: empty strings, zero, `NaN`, `false` and unset
//! values are dropped. Values are written as-is, without percent-encoding.

use std::fmt;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Text value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
}

impl QueryValue {
    /// Returns `true` if the value is sent.
    ///
    /// Excluded: `""`, `0`, `0.0`, `NaN`, `false`. Negative numbers are kept.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Int(n) => *n != 0,
            Self::Float(f) => !f.is_nan() && *f != 0.0,
            Self::Bool(b) => *b,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            // `f64` display already omits a zero fraction (1.0 -> "1").
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(String::from(value))
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered set of query parameters.
///
/// Keys keep insertion order; setting the same key twice appends a second
/// entry rather than replacing the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pairs: Vec<(String, Option<QueryValue>)>,
}

impl QueryOptions {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push(key, Some(value.into()));
        self
    }

    /// Appends a parameter that may be unset.
    #[must_use]
    pub fn with_opt<V: Into<QueryValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.push(key, value.map(Into::into));
        self
    }

    /// Appends a parameter in place.
    pub fn push(&mut self, key: impl Into<String>, value: Option<QueryValue>) {
        self.pairs.push((key.into(), value));
    }

    /// Iterates over all entries, including unset ones, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&QueryValue>)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Returns the number of entries, including unset ones.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Conversion of a typed options struct into query parameters.
pub trait ToQueryOptions {
    /// Returns the parameters in wire order.
    fn to_query_options(&self) -> QueryOptions;
}

impl ToQueryOptions for QueryOptions {
    fn to_query_options(&self) -> QueryOptions {
        self.clone()
    }
}

/// Serializes options into a query string (without the leading `?`).
///
/// `None` yields an empty string.
#[must_use]
pub fn serialize_query(options: Option<&QueryOptions>) -> String {
    let Some(options) = options else {
        return String::new();
    };

    let mut query = String::new();
    for (key, value) in options.iter() {
        let Some(value) = value.filter(|v| v.is_truthy()) else {
            continue;
        };
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(key);
        query.push('=');
        query.push_str(&value.to_string());
    }
    query
}
