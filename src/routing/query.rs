//! Query string parsing.

use std::collections::BTreeMap;

use serde::Serialize;

/// Parameters parsed from the query string of a request URI.
///
/// A name may appear more than once; every value is kept in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    /// Parse an `application/x-www-form-urlencoded` query string (without the `?`).
    pub fn parse(query: &str) -> Self {
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Last value given for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `name`, in order of appearance.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (k, v) in iter {
            values.entry(k.into()).or_default().push(v.into());
        }
        Self { values }
    }
}

/// Split a request URI into its bare path and parsed query parameters.
///
/// Everything from the first `?` onward is the query string.
pub fn split_uri(uri: &str) -> (&str, QueryParams) {
    match uri.split_once('?') {
        Some((path, query)) => (path, QueryParams::parse(query)),
        None => (uri, QueryParams::default()),
    }
}
