use crate::config::SortConfig;
use crate::types::Direction;

/// Base icon class for a column that is currently sorted. Icon sets are
/// consulted in name order; the last set claiming the column wins.
pub fn select(column: &str, config: &SortConfig) -> String {
    let mut icon = config.default_icon_set.as_str();
    for set in config.icon_sets.values() {
        if set.columns.iter().any(|c| c == column) {
            icon = &set.class;
        }
    }
    icon.to_string()
}

/// Icon class reflecting the column's sort state: the neutral sortable icon
/// when unsorted, the set's class plus a direction suffix when sorted.
pub fn for_state(column: &str, current: Option<Direction>, config: &SortConfig) -> String {
    match current {
        Some(direction) => format!(
            "{}{}",
            select(column, config),
            config.direction_suffix(direction)
        ),
        None => config.sortable_icon.clone(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
