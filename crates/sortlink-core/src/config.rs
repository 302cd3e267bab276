use crate::error::Result;
use crate::types::Direction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// IconSet
// ---------------------------------------------------------------------------

/// A named group of columns sharing a base icon class, e.g. an "alpha" set
/// for text columns and a "numeric" set for counts and amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconSet {
    pub class: String,
    #[serde(default)]
    pub columns: Vec<String>,
}

// ---------------------------------------------------------------------------
// TitleFormat
// ---------------------------------------------------------------------------

/// How derived (and optionally caller-supplied) titles are formatted before
/// rendering. Underscores and hyphens become spaces first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleFormat {
    None,
    Titleize,
    Sentence,
    Uppercase,
}

impl Default for TitleFormat {
    fn default() -> Self {
        TitleFormat::Titleize
    }
}

impl TitleFormat {
    pub fn apply(self, title: &str) -> String {
        match self {
            TitleFormat::None => title.to_string(),
            TitleFormat::Titleize => spaced(title)
                .split_whitespace()
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            TitleFormat::Sentence => capitalize(spaced(title).trim()),
            TitleFormat::Uppercase => spaced(title).to_uppercase(),
        }
    }
}

fn spaced(s: &str) -> String {
    s.replace(['_', '-'], " ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// SortConfig (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortConfig {
    /// Separator between relation and column in a sort key.
    #[serde(default = "default_relation_separator")]
    pub relation_separator: String,

    /// Direction a link requests for a column that is not currently sorted.
    #[serde(default)]
    pub default_direction: Direction,

    /// Appended to the active icon class when sorted ascending.
    #[serde(default = "default_asc_suffix")]
    pub asc_suffix: String,

    /// Appended to the active icon class when sorted descending.
    #[serde(default = "default_desc_suffix")]
    pub desc_suffix: String,

    /// Icon class for columns that are sortable but not currently sorted.
    #[serde(default = "default_sortable_icon")]
    pub sortable_icon: String,

    /// Base icon class for the active column when no icon set claims it.
    #[serde(default = "default_icon_set_class")]
    pub default_icon_set: String,

    /// Named icon sets. Sets are consulted in name order and the last set
    /// claiming a column wins.
    #[serde(default)]
    pub icon_sets: BTreeMap<String, IconSet>,

    #[serde(default = "default_enable_icons")]
    pub enable_icons: bool,

    /// Inserted between the anchor text and the icon element.
    #[serde(default)]
    pub icon_text_separator: String,

    /// Place the icon inside the anchor (clickable) instead of after it.
    #[serde(default)]
    pub clickable_icon: bool,

    /// Class always placed on generated anchors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_class: Option<String>,

    /// Class added when the anchor's column is the current sort column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_anchor_class: Option<String>,

    /// When set, an active anchor also gets `{prefix}{asc|desc suffix}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction_anchor_class_prefix: Option<String>,

    /// Class for the `<span>` fallback used by non-sortable headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_span_class: Option<String>,

    /// Apply `title_format` to caller-supplied titles too. Titles derived
    /// from column names are always formatted.
    #[serde(default = "default_format_titles")]
    pub format_titles: bool,

    #[serde(default)]
    pub title_format: TitleFormat,

    /// Query parameters dropped when the sort changes (typically the
    /// paginator's page number).
    #[serde(default = "default_reset_parameters")]
    pub reset_parameters: Vec<String>,
}

fn default_relation_separator() -> String {
    ".".to_string()
}

fn default_asc_suffix() -> String {
    "-asc".to_string()
}

fn default_desc_suffix() -> String {
    "-desc".to_string()
}

fn default_sortable_icon() -> String {
    "fa fa-sort".to_string()
}

fn default_icon_set_class() -> String {
    "fa fa-sort".to_string()
}

fn default_enable_icons() -> bool {
    true
}

fn default_format_titles() -> bool {
    true
}

fn default_reset_parameters() -> Vec<String> {
    vec!["page".to_string()]
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            relation_separator: default_relation_separator(),
            default_direction: Direction::default(),
            asc_suffix: default_asc_suffix(),
            desc_suffix: default_desc_suffix(),
            sortable_icon: default_sortable_icon(),
            default_icon_set: default_icon_set_class(),
            icon_sets: BTreeMap::new(),
            enable_icons: default_enable_icons(),
            icon_text_separator: String::new(),
            clickable_icon: false,
            anchor_class: None,
            active_anchor_class: None,
            direction_anchor_class_prefix: None,
            plain_span_class: None,
            format_titles: default_format_titles(),
            title_format: TitleFormat::default(),
            reset_parameters: default_reset_parameters(),
        }
    }
}

impl SortConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: SortConfig = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Suffix applied to icon and anchor classes for the given direction.
    pub fn direction_suffix(&self, direction: Direction) -> &str {
        match direction {
            Direction::Asc => &self.asc_suffix,
            Direction::Desc => &self.desc_suffix,
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.relation_separator.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "relation_separator must not be empty".to_string(),
            });
        }

        for (name, set) in &self.icon_sets {
            if set.class.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("icon set '{}' has an empty class", name),
                });
            }
            if set.columns.is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("icon set '{}' lists no columns", name),
                });
            }
        }

        // A column claimed by several sets resolves to the later set.
        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
        for (name, set) in &self.icon_sets {
            for column in &set.columns {
                if let Some(previous) = seen.insert(column.as_str(), name.as_str()) {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Warning,
                        message: format!(
                            "column '{}' appears in icon sets '{}' and '{}' ('{}' wins)",
                            column, previous, name, name
                        ),
                    });
                }
            }
        }

        for param in &self.reset_parameters {
            if param == "sort" || param == "direction" {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "'{}' in reset_parameters is redundant: it is always rewritten",
                        param
                    ),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
