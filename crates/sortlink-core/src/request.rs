//! Per-request snapshot consumed by link rendering: the current path and the
//! decoded query pairs. Framework integrations build one of these from their
//! own request type; rendering itself never touches ambient state.

use crate::config::SortConfig;
use crate::types::Direction;
use std::str::FromStr;

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    path: String,
    query: Vec<(String, String)>,
}

impl RequestContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Builder: append query pairs.
    pub fn with_query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Decode a raw query string (the part after `?`) into pairs. Repeated
    /// keys are kept as repeated pairs.
    pub fn from_query_str(path: impl Into<String>, raw_query: &str) -> Self {
        let query = url::form_urlencoded::parse(raw_query.as_bytes())
            .into_owned()
            .collect();
        Self {
            path: path.into(),
            query,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    // Last occurrence wins for repeated keys, as in typical query parsers.
    fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The `sort` parameter of the current request, if any.
    pub fn sort(&self) -> Option<&str> {
        self.param("sort")
    }

    /// The `direction` parameter; values other than `asc`/`desc` count as
    /// absent.
    pub fn direction(&self) -> Option<Direction> {
        self.param("direction")
            .and_then(|v| Direction::from_str(v).ok())
    }

    /// Whether the request is currently sorted by the given raw key with a
    /// usable direction.
    pub fn is_sorted_by(&self, sort_param: &str) -> bool {
        self.sort() == Some(sort_param) && self.direction().is_some()
    }

    /// Query pairs that survive a sort change: everything except the sort
    /// pair itself, the direction, the configured reset parameters, and
    /// pairs with an empty value.
    pub fn persisted(&self, config: &SortConfig) -> Vec<(String, String)> {
        self.query
            .iter()
            .filter(|(k, v)| {
                !v.is_empty()
                    && k != "sort"
                    && k != "direction"
                    && !config.reset_parameters.iter().any(|r| r == k)
            })
            .cloned()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
