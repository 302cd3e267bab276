use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        &[Direction::Asc, Direction::Desc]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    /// The direction a click on an already-sorted column switches to.
    pub fn toggled(self) -> Direction {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Asc
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = crate::error::SortlinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(crate::error::SortlinkError::InvalidDirection(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// A column reference as it appears in templates and in the `sort` query
/// parameter: either a plain column name or `relation{sep}column` for a
/// column reached through a relation.
///
/// The raw form is what travels in the URL; the column (last segment) is
/// what drives icon selection and derived titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    raw: String,
    relation: Option<String>,
    column: String,
}

impl SortKey {
    /// Parse a raw key against the configured relation separator.
    ///
    /// A key containing the separator must split into exactly two segments;
    /// any other count is an error.
    pub fn parse(raw: &str, separator: &str) -> crate::error::Result<SortKey> {
        if !separator.is_empty() && raw.contains(separator) {
            let segments: Vec<&str> = raw.split(separator).collect();
            if segments.len() != 2 {
                return Err(crate::error::SortlinkError::InvalidSortKey(raw.to_string()));
            }
            return Ok(SortKey {
                raw: raw.to_string(),
                relation: Some(segments[0].to_string()),
                column: segments[1].to_string(),
            });
        }

        Ok(SortKey {
            raw: raw.to_string(),
            relation: None,
            column: raw.to_string(),
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn relation(&self) -> Option<&str> {
        self.relation.as_deref()
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// An empty key renders as plain text instead of an anchor.
    pub fn is_sortable(&self) -> bool {
        !self.raw.is_empty()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
